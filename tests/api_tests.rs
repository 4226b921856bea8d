//! Tests de integración de la API de vehículos
//!
//! Levantan el router real con un repositorio sembrado en memoria y
//! ejercitan los endpoints vía tower::ServiceExt, sin abrir sockets.

use axum::body::Body;
use axum::Router;
use http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use vehicle_catalog::config::environment::EnvironmentConfig;
use vehicle_catalog::create_app;
use vehicle_catalog::models::vehicle::{Dimensions, Vehicle};
use vehicle_catalog::repositories::vehicle_repository::VehicleMap;
use vehicle_catalog::state::AppState;

fn vehicle(id: i32) -> Vehicle {
    Vehicle {
        id,
        brand: "Ford".to_string(),
        model: "Fiesta".to_string(),
        registration: format!("REG-{}", id),
        color: "red".to_string(),
        fabrication_year: 2020,
        capacity: 5,
        max_speed: 180.0,
        fuel_type: "gasoline".to_string(),
        transmission: "manual".to_string(),
        weight: 1100.0,
        dimensions: Dimensions {
            height: 1.5,
            length: 4.2,
            width: 1.8,
        },
    }
}

fn create_body(id: i32) -> Value {
    json!({
        "id": id,
        "brand": "Ford",
        "model": "Fiesta",
        "registration": format!("REG-{}", id),
        "color": "red",
        "fabricationYear": 2020,
        "capacity": 5,
        "maxSpeed": 180.0,
        "fuelType": "gasoline",
        "transmission": "manual",
        "weight": 1100.0,
        "height": 1.5,
        "length": 4.2,
        "width": 1.8
    })
}

fn app_with(vehicles: Vec<Vehicle>) -> Router {
    let store = VehicleMap::new(vehicles.into_iter().map(|v| (v.id, v)).collect());
    create_app(AppState::new(EnvironmentConfig::default(), store))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

#[tokio::test]
async fn test_health() {
    let app = app_with(vec![]);
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_all_returns_catalog() {
    let app = app_with(vec![vehicle(1), vehicle(2)]);
    let (status, body) = get(&app, "/api/vehicle").await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["id"], 1);
    assert_eq!(list[1]["id"], 2);
}

#[tokio::test]
async fn test_create_and_get_round_trip() {
    let app = app_with(vec![]);

    let (status, body) = send(&app, Method::POST, "/api/vehicle", Some(create_body(7))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], 7);

    let (status, body) = get(&app, "/api/vehicle/7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["brand"], "Ford");
    assert_eq!(body["fabricationYear"], 2020);
    assert_eq!(body["maxSpeed"], 180.0);
    assert_eq!(body["length"], 4.2);
}

#[tokio::test]
async fn test_create_duplicate_id_is_conflict() {
    let app = app_with(vec![vehicle(1)]);

    let mut body = create_body(1);
    body["brand"] = json!("Fiat");
    let (status, _) = send(&app, Method::POST, "/api/vehicle", Some(body)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    // el registro original queda intacto
    let (_, body) = get(&app, "/api/vehicle/1").await;
    assert_eq!(body["brand"], "Ford");
}

#[tokio::test]
async fn test_create_with_missing_field_is_rejected() {
    let app = app_with(vec![]);

    let mut body = create_body(1);
    body.as_object_mut().unwrap().remove("maxSpeed");
    let (status, body) = send(&app, Method::POST, "/api/vehicle", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    // sin inserción parcial
    let (_, body) = get(&app, "/api/vehicle").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_batch_commits_all() {
    let app = app_with(vec![]);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/vehicle/batch",
        Some(json!([create_body(1), create_body(2)])),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = get(&app, "/api/vehicle").await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_batch_is_atomic_on_invalid_candidate() {
    let app = app_with(vec![]);

    let mut invalid = create_body(2);
    invalid["capacity"] = json!(0);
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/vehicle/batch",
        Some(json!([create_body(1), invalid])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // ni siquiera el candidato válido quedó persistido
    let (_, body) = get(&app, "/api/vehicle").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_batch_is_atomic_on_duplicate_id() {
    let app = app_with(vec![vehicle(2)]);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/vehicle/batch",
        Some(json!([create_body(10), create_body(2)])),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = get(&app, "/api/vehicle/10").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_missing_vehicle_is_not_found() {
    let app = app_with(vec![]);
    let (status, body) = get(&app, "/api/vehicle/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_delete_is_no_content_then_not_found() {
    let app = app_with(vec![vehicle(1)]);

    let (status, body) = send(&app, Method::DELETE, "/api/vehicle/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::DELETE, "/api/vehicle/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_filter_by_color_and_year() {
    let mut blue = vehicle(2);
    blue.color = "blue".to_string();
    let mut old = vehicle(3);
    old.fabrication_year = 1999;
    let app = app_with(vec![vehicle(1), blue, old]);

    // el color se compara case-insensitive
    let (status, body) = get(&app, "/api/vehicle/color/RED/year/2020").await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], 1);
}

#[tokio::test]
async fn test_filter_by_color_and_year_empty_store_is_not_found() {
    let app = app_with(vec![]);
    let (status, _) = get(&app, "/api/vehicle/color/red/year/2020").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_filter_by_color_and_non_numeric_year_is_bad_request() {
    let app = app_with(vec![vehicle(1)]);
    let (status, body) = get(&app, "/api/vehicle/color/red/year/abc").await;
    // distinto del 404 por resultado vacío
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_filter_by_brand_and_year_range_is_inclusive() {
    let mut first = vehicle(1);
    first.fabrication_year = 2018;
    let mut second = vehicle(2);
    second.fabrication_year = 2021;
    let mut outside = vehicle(3);
    outside.fabrication_year = 2022;
    let app = app_with(vec![first, second, outside]);

    let (status, body) = get(&app, "/api/vehicle/brand/ford/between/2018/2021").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);

    let (status, _) = get(&app, "/api/vehicle/brand/peugeot/between/2018/2021").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_average_speed_by_brand() {
    let mut slow = vehicle(1);
    slow.max_speed = 100.0;
    let mut fast = vehicle(2);
    fast.max_speed = 200.0;
    let mut other = vehicle(3);
    other.brand = "Fiat".to_string();
    other.max_speed = 90.0;
    let app = app_with(vec![slow, fast, other]);

    let (status, body) = get(&app, "/api/vehicle/average-speed/brand/ford").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_f64().unwrap(), 150.0);

    let (status, _) = get(&app, "/api/vehicle/average-speed/brand/peugeot").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_average_capacity_by_brand() {
    let mut small = vehicle(1);
    small.capacity = 4;
    let mut big = vehicle(2);
    big.capacity = 7;
    let app = app_with(vec![small, big]);

    let (status, body) = get(&app, "/api/vehicle/average-capacity/brand/Ford").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_f64().unwrap(), 5.5);
}

#[tokio::test]
async fn test_filter_by_fuel_type_is_case_insensitive() {
    let mut diesel = vehicle(2);
    diesel.fuel_type = "diesel".to_string();
    let app = app_with(vec![vehicle(1), diesel]);

    let (status, body) = get(&app, "/api/vehicle/fuel-type/DIESEL").await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], 2);

    let (status, _) = get(&app, "/api/vehicle/fuel-type/electric").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_filter_by_transmission() {
    let mut automatic = vehicle(2);
    automatic.transmission = "automatic".to_string();
    let app = app_with(vec![vehicle(1), automatic]);

    let (status, body) = get(&app, "/api/vehicle/transmission/Automatic").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = get(&app, "/api/vehicle/transmission/cvt").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_filter_by_weight_includes_both_bounds() {
    let mut light = vehicle(1);
    light.weight = 10.0;
    let mut heavy = vehicle(2);
    heavy.weight = 20.0;
    let mut heavier = vehicle(3);
    heavier.weight = 20.5;
    let app = app_with(vec![light, heavy, heavier]);

    let (status, body) = get(&app, "/api/vehicle/weight?min=10&max=20").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_filter_by_weight_rejects_bad_parameters() {
    let app = app_with(vec![vehicle(1)]);

    let (status, _) = get(&app, "/api/vehicle/weight?min=10").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/api/vehicle/weight?min=abc&max=20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // mínimo mayor que el máximo: falla rápido
    let (status, _) = get(&app, "/api/vehicle/weight?min=20&max=10").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_filter_by_dimensions() {
    let mut compact = vehicle(1);
    compact.dimensions = Dimensions {
        height: 1.5,
        length: 4.0,
        width: 1.7,
    };
    let mut truck = vehicle(2);
    truck.dimensions = Dimensions {
        height: 2.4,
        length: 5.9,
        width: 2.0,
    };
    let app = app_with(vec![compact, truck]);

    let (status, body) = get(&app, "/api/vehicle/dimensions?length=3.5-4.5&width=1.5-1.8").await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], 1);

    let (status, _) = get(&app, "/api/vehicle/dimensions?length=9.0-9.5&width=1.5-1.8").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_filter_by_dimensions_rejects_malformed_range() {
    let app = app_with(vec![vehicle(1)]);

    let (status, _) = get(&app, "/api/vehicle/dimensions?length=4.5&width=1.5-1.8").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/api/vehicle/dimensions?length=3.5-4.5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_max_speed() {
    let app = app_with(vec![vehicle(1)]);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/vehicle/1/max-speed",
        Some(json!({ "maxSpeed": 220.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["maxSpeed"], 220.0);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/vehicle/9/max-speed",
        Some(json!({ "maxSpeed": 220.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_max_speed_rejects_non_positive_value() {
    let app = app_with(vec![vehicle(1)]);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/vehicle/1/max-speed",
        Some(json!({ "maxSpeed": -5.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // el registro queda como estaba
    let (_, body) = get(&app, "/api/vehicle/1").await;
    assert_eq!(body["maxSpeed"], 180.0);
}

#[tokio::test]
async fn test_update_fuel_type() {
    let app = app_with(vec![vehicle(1)]);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/vehicle/1/fuel-type",
        Some(json!({ "fuelType": "electric" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["fuelType"], "electric");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/vehicle/1/fuel-type",
        Some(json!({ "fuelType": "plutonium" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/vehicle/9/fuel-type",
        Some(json!({ "fuelType": "diesel" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
