//! Cargador del archivo JSON de vehículos
//!
//! Lee el seed inicial del catálogo: un array de documentos planos que
//! se insertan sin re-validación al arrancar el proceso.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

use anyhow::Context;

use crate::dto::vehicle_dto::VehicleDocument;
use crate::models::vehicle::Vehicle;

/// VehicleJsonFile carga vehículos desde un archivo JSON
pub struct VehicleJsonFile {
    path: String,
}

impl VehicleJsonFile {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }

    /// Cargar los vehículos, indexados por id
    pub fn load(&self) -> anyhow::Result<HashMap<i32, Vehicle>> {
        let file = File::open(&self.path)
            .with_context(|| format!("no se pudo abrir el archivo de vehículos '{}'", self.path))?;

        let documents: Vec<VehicleDocument> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("JSON inválido en '{}'", self.path))?;

        Ok(documents
            .into_iter()
            .map(|doc| (doc.id, Vehicle::from(doc)))
            .collect())
    }
}
