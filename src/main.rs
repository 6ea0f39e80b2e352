use actix_cors::Cors;
use actix_web::{http::header, middleware::NormalizePath, web, App, HttpServer};
use catalogue_backend::{
    constants::{LIMITER_BUCKET_TTL, LIMITER_EVICTION_INTERVAL, START_TIME},
    graceful_shutdown::run_until_shutdown,
    handlers::home::not_found,
    routes::configure_routes,
    settings::AppConfig,
    AppState,
};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if config.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![header::RETRY_AFTER])
        .max_age(3600);

    if origins.iter().any(|o| o == "*") {
        return cors.allow_any_origin();
    }

    origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = match AppConfig::new() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config);
    tracing::info!("Loaded configuration: {:?}", config);
    once_cell::sync::Lazy::force(&START_TIME);

    let app_state = web::Data::new(AppState::new(&config));
    app_state
        .submission_limiter
        .spawn_eviction(LIMITER_EVICTION_INTERVAL, LIMITER_BUCKET_TTL);

    let server_addr = format!("{}:{}", config.host, config.port);
    let origins = config.cors_origins();

    tracing::info!(
        "🚀 Starting {} v{} on {} ({} storage)",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr,
        config.storage_backend
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(cors(&origins))
            .wrap(TracingLogger::default())
            .wrap(NormalizePath::trim())
            .configure(configure_routes)
            .default_service(web::to(not_found))
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .run();

    run_until_shutdown(server).await
}
