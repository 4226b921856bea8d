//! DTOs de la API de vehículos
//!
//! Requests y responses en JSON (camelCase). El request de creación usa
//! `Option` en cada campo como marcador explícito de presencia: un campo
//! ausente se distingue de un cero legítimo al validar la completitud.

use serde::{Deserialize, Serialize};
use validator::{ValidationError, ValidationErrors};

use crate::models::vehicle::{Dimensions, Vehicle};
use crate::utils::validation::{validate_non_zero, validate_not_empty, validate_positive};

/// Respuesta genérica de la API
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

/// Request para crear un vehículo (individual o en lote)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    pub id: Option<i32>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub registration: Option<String>,
    pub color: Option<String>,
    pub fabrication_year: Option<i32>,
    pub capacity: Option<i32>,
    pub max_speed: Option<f64>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub length: Option<f64>,
    pub width: Option<f64>,
}

impl CreateVehicleRequest {
    /// Validar la completitud de los 14 campos obligatorios y convertir
    /// al modelo de dominio. Acumula un error por cada campo ausente o
    /// mal formado; el repositorio no se toca si algo falla.
    pub fn into_vehicle(self) -> Result<Vehicle, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for (field, value) in [
            ("brand", &self.brand),
            ("model", &self.model),
            ("registration", &self.registration),
            ("color", &self.color),
            ("fuelType", &self.fuel_type),
            ("transmission", &self.transmission),
        ] {
            match value {
                None => errors.add(field, ValidationError::new("required")),
                Some(text) => {
                    if let Err(e) = validate_not_empty(text) {
                        errors.add(field, e);
                    }
                }
            }
        }

        for (field, value) in [
            ("maxSpeed", self.max_speed),
            ("weight", self.weight),
            ("height", self.height),
            ("length", self.length),
            ("width", self.width),
        ] {
            match value {
                None => errors.add(field, ValidationError::new("required")),
                Some(number) => {
                    if let Err(e) = validate_non_zero(number) {
                        errors.add(field, e);
                    }
                }
            }
        }

        match self.id {
            None => errors.add("id", ValidationError::new("required")),
            Some(id) => {
                if let Err(e) = validate_positive(id) {
                    errors.add("id", e);
                }
            }
        }
        match self.fabrication_year {
            None => errors.add("fabricationYear", ValidationError::new("required")),
            Some(year) => {
                if let Err(e) = validate_non_zero(year) {
                    errors.add("fabricationYear", e);
                }
            }
        }
        match self.capacity {
            None => errors.add("capacity", ValidationError::new("required")),
            Some(capacity) => {
                if let Err(e) = validate_positive(capacity) {
                    errors.add("capacity", e);
                }
            }
        }

        match (
            self.id,
            self.brand,
            self.model,
            self.registration,
            self.color,
            self.fabrication_year,
            self.capacity,
            self.max_speed,
            self.fuel_type,
            self.transmission,
            self.weight,
            self.height,
            self.length,
            self.width,
        ) {
            (
                Some(id),
                Some(brand),
                Some(model),
                Some(registration),
                Some(color),
                Some(fabrication_year),
                Some(capacity),
                Some(max_speed),
                Some(fuel_type),
                Some(transmission),
                Some(weight),
                Some(height),
                Some(length),
                Some(width),
            ) if errors.is_empty() => Ok(Vehicle {
                id,
                brand,
                model,
                registration,
                color,
                fabrication_year,
                capacity,
                max_speed,
                fuel_type,
                transmission,
                weight,
                dimensions: Dimensions {
                    height,
                    length,
                    width,
                },
            }),
            _ => Err(errors),
        }
    }
}

/// Documento plano de vehículo tal como viene en el archivo seed;
/// se inserta sin re-validación
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDocument {
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
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

impl From<VehicleDocument> for Vehicle {
    fn from(doc: VehicleDocument) -> Self {
        Self {
            id: doc.id,
            brand: doc.brand,
            model: doc.model,
            registration: doc.registration,
            color: doc.color,
            fabrication_year: doc.fabrication_year,
            capacity: doc.capacity,
            max_speed: doc.max_speed,
            fuel_type: doc.fuel_type,
            transmission: doc.transmission,
            weight: doc.weight,
            dimensions: Dimensions {
                height: doc.height,
                length: doc.length,
                width: doc.width,
            },
        }
    }
}

/// Request para actualizar la velocidad máxima
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaxSpeedRequest {
    pub max_speed: Option<f64>,
}

/// Request para actualizar el tipo de combustible
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFuelTypeRequest {
    pub fuel_type: Option<String>,
}

/// Response de vehículo para la API (plano, dimensiones desanidadas)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
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
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            brand: vehicle.brand,
            model: vehicle.model,
            registration: vehicle.registration,
            color: vehicle.color,
            fabrication_year: vehicle.fabrication_year,
            capacity: vehicle.capacity,
            max_speed: vehicle.max_speed,
            fuel_type: vehicle.fuel_type,
            transmission: vehicle.transmission,
            weight: vehicle.weight,
            height: vehicle.dimensions.height,
            length: vehicle.dimensions.length,
            width: vehicle.dimensions.width,
        }
    }
}
