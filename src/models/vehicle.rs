//! Modelo de dominio de Vehicle
//!
//! Este módulo contiene el struct Vehicle tal como lo guarda el
//! repositorio en memoria, con sus dimensiones anidadas.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Dimensiones físicas del vehículo, en metros
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

/// Vehicle es el registro que posee el repositorio; la clave del
/// catálogo es `id`, asignado por el cliente (no autogenerado)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub registration: String,
    pub color: String,
    pub fabrication_year: i32,
    pub capacity: i32,
    pub max_speed: f64,
    pub fuel_type: String,
    pub transmission: String,
    pub weight: f64,
    pub dimensions: Dimensions,
}

lazy_static! {
    /// Tipos de combustible admitidos por la API (comparación case-insensitive)
    pub static ref ACCEPTED_FUEL_TYPES: HashSet<&'static str> =
        ["gasoline", "diesel", "biodiesel", "gas", "electric", "hybrid"]
            .into_iter()
            .collect();
}

/// Verificar si un tipo de combustible pertenece al conjunto admitido
pub fn is_accepted_fuel(fuel: &str) -> bool {
    !fuel.trim().is_empty() && ACCEPTED_FUEL_TYPES.contains(fuel.to_lowercase().as_str())
}
