use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use internship_match::config::Settings;
use internship_match::routes::{self, AppState};
use internship_match::services::build_store;
use internship_match::{Catalog, Matcher};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(settings: &Settings) {
    // RUST_LOG takes precedence over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match settings.logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.json().init(),
    }
}

fn startup_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    error!("{}: {}", context, err);
    std::io::Error::new(std::io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_logging(&settings);
    info!("Starting internship matching service...");

    let catalog = match &settings.catalog.path {
        Some(path) => Catalog::from_json_file(path)
            .map_err(|e| startup_error("Failed to load catalog", e))?,
        None => {
            info!("Using built-in reference catalog");
            Catalog::reference().clone()
        }
    };

    let weights = settings.scoring_weights();
    if (weights.sum() - 1.0).abs() > 1e-6 {
        tracing::warn!("Scoring weights sum to {:.3}, not 1.0", weights.sum());
    }

    let matcher = Matcher::new(weights, settings.matching_limits());
    info!("Matcher initialized with weights: {:?}", weights);

    let store = build_store(&settings.storage)
        .await
        .map_err(|e| startup_error("Failed to initialize session store", e))?;

    let app_state = AppState::new(Arc::new(catalog), matcher, store);

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
