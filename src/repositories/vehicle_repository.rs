//! Repositorio en memoria de vehículos
//!
//! VehicleMap es el dueño único de los registros: un HashMap clave = id
//! detrás de un RwLock compartido. Las lecturas copian snapshots; las
//! mutaciones serializan en el write lock. La unicidad del identificador
//! se aplica aquí, en el propio insert.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::{AppError, AppResult};

const VEHICLE_NOT_FOUND: &str = "Vehículo no encontrado";

/// Repositorio en memoria de vehículos; clonable y compartido entre requests
#[derive(Clone)]
pub struct VehicleMap {
    db: Arc<RwLock<HashMap<i32, Vehicle>>>,
}

impl VehicleMap {
    /// Construir el repositorio sobre un mapa ya cargado (seed del loader,
    /// sin re-validación)
    pub fn new(db: HashMap<i32, Vehicle>) -> Self {
        Self {
            db: Arc::new(RwLock::new(db)),
        }
    }

    /// Repositorio vacío
    pub fn empty() -> Self {
        Self::new(HashMap::new())
    }

    /// Snapshot de todos los vehículos; nunca falla
    pub async fn find_all(&self) -> HashMap<i32, Vehicle> {
        self.db.read().await.clone()
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<Vehicle> {
        self.db
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(VEHICLE_NOT_FOUND.to_string()))
    }

    /// Guardar un vehículo nuevo; el identificador debe ser inédito
    pub async fn insert(&self, vehicle: Vehicle) -> AppResult<Vehicle> {
        let mut db = self.db.write().await;
        if db.contains_key(&vehicle.id) {
            return Err(AppError::Conflict(
                "Identificador del vehículo ya existente".to_string(),
            ));
        }
        db.insert(vehicle.id, vehicle.clone());
        Ok(vehicle)
    }

    /// Guardar un lote completo o nada: los identificadores se verifican
    /// contra el mapa y dentro del propio lote antes de escribir, bajo un
    /// único write lock
    pub async fn insert_all(&self, vehicles: Vec<Vehicle>) -> AppResult<Vec<Vehicle>> {
        let mut db = self.db.write().await;

        let mut batch_ids = HashSet::new();
        for vehicle in &vehicles {
            if db.contains_key(&vehicle.id) || !batch_ids.insert(vehicle.id) {
                return Err(AppError::Conflict(
                    "Algún vehículo tiene un identificador ya existente".to_string(),
                ));
            }
        }

        for vehicle in &vehicles {
            db.insert(vehicle.id, vehicle.clone());
        }
        Ok(vehicles)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.db
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(VEHICLE_NOT_FOUND.to_string()))
    }

    /// Recorrido lineal con predicado; devuelve una copia de los que matchean
    pub async fn scan<F>(&self, predicate: F) -> HashMap<i32, Vehicle>
    where
        F: Fn(&Vehicle) -> bool,
    {
        self.db
            .read()
            .await
            .iter()
            .filter(|(_, vehicle)| predicate(vehicle))
            .map(|(id, vehicle)| (*id, vehicle.clone()))
            .collect()
    }

    /// Leer el registro, aplicar el mutador sobre una copia y reescribirla
    pub async fn replace_with<F>(&self, id: i32, mutator: F) -> AppResult<Vehicle>
    where
        F: FnOnce(&mut Vehicle),
    {
        let mut db = self.db.write().await;
        let mut updated = db
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(VEHICLE_NOT_FOUND.to_string()))?;
        mutator(&mut updated);
        db.insert(id, updated.clone());
        Ok(updated)
    }
}
