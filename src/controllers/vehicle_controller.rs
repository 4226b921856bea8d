//! Controlador de vehículos
//!
//! Única capa con reglas de negocio: completitud en las altas, traducción
//! de filtros crudos a predicados tipados, promedios por marca y mapeo de
//! resultados vacíos a Not Found.

use std::collections::HashMap;

use crate::dto::vehicle_dto::{CreateVehicleRequest, VehicleResponse};
use crate::models::vehicle::{is_accepted_fuel, Vehicle};
use crate::repositories::vehicle_repository::VehicleMap;
use crate::utils::errors::{validation_error, AppError, AppResult};
use crate::utils::validation::validate_positive;

const NO_MATCH_FOR_CRITERIA: &str = "No se encontraron vehículos con esos criterios";
const NO_MATCH_FOR_BRAND: &str = "No se encontraron vehículos de esa marca";

pub struct VehicleController {
    repository: VehicleMap,
}

impl VehicleController {
    pub fn new(repository: VehicleMap) -> Self {
        Self { repository }
    }

    /// Listar todo el catálogo; nunca falla
    pub async fn find_all(&self) -> Vec<VehicleResponse> {
        Self::sorted_responses(self.repository.find_all().await)
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<VehicleResponse> {
        Ok(self.repository.find_by_id(id).await?.into())
    }

    /// Alta individual: completitud primero, unicidad la aplica el repositorio
    pub async fn create(&self, request: CreateVehicleRequest) -> AppResult<VehicleResponse> {
        let vehicle = request.into_vehicle()?;
        let stored = self.repository.insert(vehicle).await?;
        Ok(stored.into())
    }

    /// Alta en lote, todo o nada: los candidatos se validan completos antes
    /// de tocar el repositorio y el commit del lote es atómico
    pub async fn create_batch(
        &self,
        requests: Vec<CreateVehicleRequest>,
    ) -> AppResult<Vec<VehicleResponse>> {
        let mut vehicles = Vec::with_capacity(requests.len());
        for request in requests {
            vehicles.push(request.into_vehicle()?);
        }

        let stored = self.repository.insert_all(vehicles).await?;
        Ok(stored.into_iter().map(Into::into).collect())
    }

    /// Filtrar por color exacto (case-insensitive) y año de fabricación;
    /// el año llega como texto y debe ser numérico
    pub async fn find_by_color_and_year(
        &self,
        color: &str,
        year: &str,
    ) -> AppResult<Vec<VehicleResponse>> {
        let year: i32 = year.parse().map_err(|_| {
            AppError::BadRequest("Año mal formado, se esperaba un número".to_string())
        })?;

        let matches = self
            .repository
            .scan(|v| v.color.eq_ignore_ascii_case(color) && v.fabrication_year == year)
            .await;
        Self::non_empty(matches, NO_MATCH_FOR_CRITERIA)
    }

    /// Filtrar por marca (case-insensitive) y rango inclusivo de años
    pub async fn find_by_brand_and_year_range(
        &self,
        brand: &str,
        start_year: i32,
        end_year: i32,
    ) -> AppResult<Vec<VehicleResponse>> {
        let matches = self
            .repository
            .scan(|v| {
                v.brand.eq_ignore_ascii_case(brand)
                    && v.fabrication_year >= start_year
                    && v.fabrication_year <= end_year
            })
            .await;
        Self::non_empty(matches, NO_MATCH_FOR_CRITERIA)
    }

    /// Promedio de velocidad máxima sobre los vehículos de una marca.
    /// El caso "no hay vehículos" se decide por el conjunto vacío, no por
    /// la suma: una flota con velocidades en cero promedia 0.0
    pub async fn average_max_speed_by_brand(&self, brand: &str) -> AppResult<f64> {
        let matches = self
            .repository
            .scan(|v| v.brand.eq_ignore_ascii_case(brand))
            .await;
        if matches.is_empty() {
            return Err(AppError::NotFound(NO_MATCH_FOR_BRAND.to_string()));
        }

        let total: f64 = matches.values().map(|v| v.max_speed).sum();
        Ok(total / matches.len() as f64)
    }

    /// Promedio de capacidad de pasajeros sobre los vehículos de una marca
    pub async fn average_capacity_by_brand(&self, brand: &str) -> AppResult<f64> {
        let matches = self
            .repository
            .scan(|v| v.brand.eq_ignore_ascii_case(brand))
            .await;
        if matches.is_empty() {
            return Err(AppError::NotFound(NO_MATCH_FOR_BRAND.to_string()));
        }

        let total: i64 = matches.values().map(|v| v.capacity as i64).sum();
        Ok(total as f64 / matches.len() as f64)
    }

    pub async fn update_max_speed(&self, id: i32, new_speed: f64) -> AppResult<VehicleResponse> {
        if validate_positive(new_speed).is_err() {
            return Err(validation_error(
                "maxSpeed",
                "Velocidad mal formada o fuera de rango",
            ));
        }

        let updated = self
            .repository
            .replace_with(id, |v| v.max_speed = new_speed)
            .await?;
        Ok(updated.into())
    }

    pub async fn update_fuel_type(&self, id: i32, new_fuel: &str) -> AppResult<VehicleResponse> {
        // existencia primero: un id desconocido es Not Found aunque el
        // combustible también sea inválido
        self.repository.find_by_id(id).await?;

        if !is_accepted_fuel(new_fuel) {
            return Err(validation_error(
                "fuelType",
                "Tipo de combustible mal formado o no admitido",
            ));
        }

        let fuel = new_fuel.to_string();
        let updated = self
            .repository
            .replace_with(id, move |v| v.fuel_type = fuel)
            .await?;
        Ok(updated.into())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.delete(id).await
    }

    pub async fn find_by_fuel_type(&self, fuel: &str) -> AppResult<Vec<VehicleResponse>> {
        let matches = self
            .repository
            .scan(|v| v.fuel_type.eq_ignore_ascii_case(fuel))
            .await;
        Self::non_empty(
            matches,
            "No se encontraron vehículos con ese tipo de combustible",
        )
    }

    pub async fn find_by_transmission(&self, kind: &str) -> AppResult<Vec<VehicleResponse>> {
        let matches = self
            .repository
            .scan(|v| v.transmission.eq_ignore_ascii_case(kind))
            .await;
        Self::non_empty(
            matches,
            "No se encontraron vehículos con ese tipo de transmisión",
        )
    }

    /// Filtrar por longitud y ancho simultáneos, rangos inclusivos;
    /// un mínimo mayor que su máximo se rechaza de entrada
    pub async fn find_by_dimensions(
        &self,
        min_length: f64,
        max_length: f64,
        min_width: f64,
        max_width: f64,
    ) -> AppResult<Vec<VehicleResponse>> {
        Self::check_range_order(min_length, max_length, "length")?;
        Self::check_range_order(min_width, max_width, "width")?;

        let matches = self
            .repository
            .scan(|v| {
                v.dimensions.length >= min_length
                    && v.dimensions.length <= max_length
                    && v.dimensions.width >= min_width
                    && v.dimensions.width <= max_width
            })
            .await;
        Self::non_empty(matches, "No se encontraron vehículos con esas dimensiones")
    }

    /// Filtrar por rango inclusivo de peso
    pub async fn find_by_weight(
        &self,
        min_weight: f64,
        max_weight: f64,
    ) -> AppResult<Vec<VehicleResponse>> {
        Self::check_range_order(min_weight, max_weight, "weight")?;

        let matches = self
            .repository
            .scan(|v| v.weight >= min_weight && v.weight <= max_weight)
            .await;
        Self::non_empty(matches, "No se encontraron vehículos en ese rango de peso")
    }

    fn check_range_order(min: f64, max: f64, field: &str) -> AppResult<()> {
        if min > max {
            return Err(AppError::BadRequest(format!(
                "Rango de '{}' inválido: el mínimo supera al máximo",
                field
            )));
        }
        Ok(())
    }

    fn non_empty(
        matches: HashMap<i32, Vehicle>,
        message: &str,
    ) -> AppResult<Vec<VehicleResponse>> {
        if matches.is_empty() {
            return Err(AppError::NotFound(message.to_string()));
        }
        Ok(Self::sorted_responses(matches))
    }

    fn sorted_responses(vehicles: HashMap<i32, Vehicle>) -> Vec<VehicleResponse> {
        let mut vehicles: Vec<Vehicle> = vehicles.into_values().collect();
        vehicles.sort_by_key(|v| v.id);
        vehicles.into_iter().map(Into::into).collect()
    }
}
