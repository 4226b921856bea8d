use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use vehicle_catalog::config::environment::EnvironmentConfig;
use vehicle_catalog::create_app;
use vehicle_catalog::loader::vehicle_json::VehicleJsonFile;
use vehicle_catalog::repositories::vehicle_repository::VehicleMap;
use vehicle_catalog::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging
    let level = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🚗 Vehicle Catalog API");
    info!("======================");

    // Seed inicial del catálogo desde el archivo JSON
    let seed = match VehicleJsonFile::new(&config.vehicles_file).load() {
        Ok(seed) => {
            info!(
                "✅ {} vehículos cargados desde {}",
                seed.len(),
                config.vehicles_file
            );
            seed
        }
        Err(e) => {
            error!("❌ Error cargando el seed de vehículos: {:#}", e);
            return Err(e);
        }
    };

    let addr: SocketAddr = config.server_addr().parse()?;
    let app = create_app(AppState::new(config, VehicleMap::new(seed)));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Health check");
    info!("🚗 Endpoints - Vehicle:");
    info!("   GET    /api/vehicle - Listar catálogo");
    info!("   POST   /api/vehicle - Crear vehículo");
    info!("   POST   /api/vehicle/batch - Crear vehículos en lote");
    info!("   GET    /api/vehicle/:id - Obtener vehículo");
    info!("   DELETE /api/vehicle/:id - Eliminar vehículo");
    info!("   PUT    /api/vehicle/:id/max-speed - Actualizar velocidad máxima");
    info!("   PUT    /api/vehicle/:id/fuel-type - Actualizar combustible");
    info!("   GET    /api/vehicle/color/:color/year/:year - Filtrar por color y año");
    info!("   GET    /api/vehicle/brand/:brand/between/:start/:end - Filtrar por marca y rango de años");
    info!("   GET    /api/vehicle/average-speed/brand/:brand - Velocidad promedio por marca");
    info!("   GET    /api/vehicle/average-capacity/brand/:brand - Capacidad promedio por marca");
    info!("   GET    /api/vehicle/fuel-type/:fuel - Filtrar por combustible");
    info!("   GET    /api/vehicle/transmission/:kind - Filtrar por transmisión");
    info!("   GET    /api/vehicle/dimensions?length=min-max&width=min-max - Filtrar por dimensiones");
    info!("   GET    /api/vehicle/weight?min=&max= - Filtrar por peso");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
