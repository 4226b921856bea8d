//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum: la configuración y el repositorio en
//! memoria de vehículos.

use crate::config::environment::EnvironmentConfig;
use crate::repositories::vehicle_repository::VehicleMap;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub store: VehicleMap,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, store: VehicleMap) -> Self {
        Self { config, store }
    }
}
