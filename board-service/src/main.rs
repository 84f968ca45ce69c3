/// Board Service - authenticated message board backend
use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use board_service::{
    config::Config, db, error::BoardError, handlers, middleware::BearerAuth, telemetry, AppState,
};

#[actix_web::main]
async fn main() -> Result<(), BoardError> {
    telemetry::init_tracing();

    let config = Config::from_env()?;

    let pool = db::init_pool(&config.database_url)
        .await
        .map_err(|e| BoardError::StartServer(format!("db: {e}")))?;

    // Embedded migrations, idempotent at startup
    db::MIGRATOR
        .run(&pool)
        .await
        .map_err(|e| BoardError::StartServer(format!("migrations: {e}")))?;

    let state = AppState::new(pool);

    tracing::info!(host = %config.host, port = config.port, "starting board-service");

    let bind_addr = (config.host.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(TracingLogger::default())
            .wrap(NormalizePath::trim())
            .route("/health", web::get().to(health_check))
            .route("/readiness", web::get().to(readiness_check))
            .service(
                web::scope("/api")
                    .route("/hello", web::get().to(handlers::hello::hello))
                    .route("/register", web::post().to(handlers::auth::register))
                    .route("/login", web::post().to(handlers::auth::login))
                    .service(
                        web::scope("")
                            .wrap(BearerAuth)
                            .route("/profile", web::get().to(handlers::members::profile))
                            .route("/messages", web::get().to(handlers::messages::list_messages))
                            .route(
                                "/messages",
                                web::post().to(handlers::messages::create_message),
                            ),
                    ),
            )
    })
    .bind(bind_addr)
    .map_err(|e| BoardError::StartServer(format!("bind: {e}")))?
    .run()
    .await
    .map_err(|e| BoardError::StartServer(format!("serve: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Readiness check endpoint
async fn readiness_check() -> &'static str {
    "READY"
}
