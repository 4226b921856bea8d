//! Rutas HTTP del catálogo de vehículos
//!
//! Handlers finos: decodifican parámetros y body, delegan en el
//! controlador y serializan la respuesta. El mapeo de errores a status
//! codes vive en AppError.

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use http::StatusCode;
use serde::Deserialize;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{
    ApiResponse, CreateVehicleRequest, UpdateFuelTypeRequest, UpdateMaxSpeedRequest,
    VehicleResponse,
};
use crate::state::AppState;
use crate::utils::errors::{validation_error, AppError};

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/", post(create_vehicle))
        .route("/batch", post(create_vehicles_batch))
        .route("/:id", get(get_vehicle))
        .route("/:id", delete(delete_vehicle))
        .route("/:id/max-speed", put(update_max_speed))
        .route("/:id/fuel-type", put(update_fuel_type))
        .route("/color/:color/year/:year", get(find_by_color_and_year))
        .route(
            "/brand/:brand/between/:start_year/:end_year",
            get(find_by_brand_and_year_range),
        )
        .route("/average-speed/brand/:brand", get(average_speed_by_brand))
        .route(
            "/average-capacity/brand/:brand",
            get(average_capacity_by_brand),
        )
        .route("/fuel-type/:fuel", get(find_by_fuel_type))
        .route("/transmission/:kind", get(find_by_transmission))
        .route("/dimensions", get(find_by_dimensions))
        .route("/weight", get(find_by_weight))
}

/// Query params del filtro por dimensiones: rangos "min-max" en texto
#[derive(Debug, Deserialize)]
pub struct DimensionsQuery {
    pub length: Option<String>,
    pub width: Option<String>,
}

/// Query params del filtro por peso
#[derive(Debug, Deserialize)]
pub struct WeightQuery {
    pub min: Option<String>,
    pub max: Option<String>,
}

async fn list_vehicles(State(state): State<AppState>) -> Json<Vec<VehicleResponse>> {
    let controller = VehicleController::new(state.store.clone());
    Json(controller.find_all().await)
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<VehicleResponse>>), AppError> {
    let controller = VehicleController::new(state.store.clone());
    let vehicle = controller.create(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            vehicle,
            "Vehículo creado exitosamente".to_string(),
        )),
    ))
}

async fn create_vehicles_batch(
    State(state): State<AppState>,
    Json(requests): Json<Vec<CreateVehicleRequest>>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<VehicleResponse>>>), AppError> {
    let controller = VehicleController::new(state.store.clone());
    let vehicles = controller.create_batch(requests).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            vehicles,
            "Vehículos creados exitosamente".to_string(),
        )),
    ))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    Ok(Json(controller.find_by_id(id).await?))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let controller = VehicleController::new(state.store.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn update_max_speed(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateMaxSpeedRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let new_speed = request
        .max_speed
        .ok_or_else(|| validation_error("maxSpeed", "campo requerido"))?;

    let controller = VehicleController::new(state.store.clone());
    let vehicle = controller.update_max_speed(id, new_speed).await?;
    Ok(Json(ApiResponse::success_with_message(
        vehicle,
        "Velocidad del vehículo actualizada exitosamente".to_string(),
    )))
}

async fn update_fuel_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateFuelTypeRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let new_fuel = request
        .fuel_type
        .ok_or_else(|| validation_error("fuelType", "campo requerido"))?;

    let controller = VehicleController::new(state.store.clone());
    let vehicle = controller.update_fuel_type(id, &new_fuel).await?;
    Ok(Json(ApiResponse::success_with_message(
        vehicle,
        "Tipo de combustible del vehículo actualizado exitosamente".to_string(),
    )))
}

async fn find_by_color_and_year(
    State(state): State<AppState>,
    Path((color, year)): Path<(String, String)>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    Ok(Json(controller.find_by_color_and_year(&color, &year).await?))
}

async fn find_by_brand_and_year_range(
    State(state): State<AppState>,
    Path((brand, start_year, end_year)): Path<(String, i32, i32)>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    Ok(Json(
        controller
            .find_by_brand_and_year_range(&brand, start_year, end_year)
            .await?,
    ))
}

async fn average_speed_by_brand(
    State(state): State<AppState>,
    Path(brand): Path<String>,
) -> Result<Json<f64>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    Ok(Json(controller.average_max_speed_by_brand(&brand).await?))
}

async fn average_capacity_by_brand(
    State(state): State<AppState>,
    Path(brand): Path<String>,
) -> Result<Json<f64>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    Ok(Json(controller.average_capacity_by_brand(&brand).await?))
}

async fn find_by_fuel_type(
    State(state): State<AppState>,
    Path(fuel): Path<String>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    Ok(Json(controller.find_by_fuel_type(&fuel).await?))
}

async fn find_by_transmission(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    Ok(Json(controller.find_by_transmission(&kind).await?))
}

async fn find_by_dimensions(
    State(state): State<AppState>,
    Query(query): Query<DimensionsQuery>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let length = query
        .length
        .ok_or_else(|| AppError::BadRequest("Parámetro 'length' es requerido".to_string()))?;
    let width = query
        .width
        .ok_or_else(|| AppError::BadRequest("Parámetro 'width' es requerido".to_string()))?;

    let (min_length, max_length) = parse_range(&length, "length")?;
    let (min_width, max_width) = parse_range(&width, "width")?;

    let controller = VehicleController::new(state.store.clone());
    Ok(Json(
        controller
            .find_by_dimensions(min_length, max_length, min_width, max_width)
            .await?,
    ))
}

async fn find_by_weight(
    State(state): State<AppState>,
    Query(query): Query<WeightQuery>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let min = query
        .min
        .ok_or_else(|| AppError::BadRequest("Parámetros 'min' y 'max' son requeridos".to_string()))?;
    let max = query
        .max
        .ok_or_else(|| AppError::BadRequest("Parámetros 'min' y 'max' son requeridos".to_string()))?;

    let min_weight: f64 = min
        .parse()
        .map_err(|_| AppError::BadRequest("Peso mínimo inválido".to_string()))?;
    let max_weight: f64 = max
        .parse()
        .map_err(|_| AppError::BadRequest("Peso máximo inválido".to_string()))?;

    let controller = VehicleController::new(state.store.clone());
    Ok(Json(controller.find_by_weight(min_weight, max_weight).await?))
}

/// Partir un rango "min-max" en sus dos extremos numéricos
fn parse_range(raw: &str, field: &str) -> Result<(f64, f64), AppError> {
    let parts: Vec<&str> = raw.split('-').collect();
    if parts.len() != 2 {
        return Err(AppError::BadRequest(format!(
            "Rango de '{}' mal formado, se esperaba min-max",
            field
        )));
    }

    let min: f64 = parts[0].trim().parse().map_err(|_| {
        AppError::BadRequest(format!("Mínimo de '{}' inválido", field))
    })?;
    let max: f64 = parts[1].trim().parse().map_err(|_| {
        AppError::BadRequest(format!("Máximo de '{}' inválido", field))
    })?;

    Ok((min, max))
}
