use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;
use tracing_subscriber::EnvFilter;

use cs_api::{create_app, AppState};
use cs_infra::database::{DatabasePool, MySqlCompanyRepository, MySqlUserRepository};
use cs_shared::{config::LogFormat, AppConfig, LoggingConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging);

    info!("Starting company service in {} mode", config.environment);
    if config.auth.jwt.uses_default_secret() {
        tracing::warn!(
            event = "default_jwt_secret",
            "JWT secret is the built-in default; set JWT_SECRET before exposing this server"
        );
    }

    let database = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;
    if config.database.run_migrations {
        database
            .run_migrations()
            .await
            .context("failed to run database migrations")?;
    }
    info!("Database ready: {}", database.get_statistics());

    let company_repository = Arc::new(MySqlCompanyRepository::new(database.get_pool().clone()));
    let user_repository = Arc::new(MySqlUserRepository::new(database.get_pool().clone()));

    let app_state = AppState::new(company_repository, user_repository, &config.auth)
        .context("failed to initialise services")?
        .with_database(database.clone());
    let app_state = web::Data::new(app_state);

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let cors_config = config.cors.clone();
    let max_payload_size = config.server.max_payload_size;

    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), &cors_config, max_payload_size)
    })
    .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let result = server.bind(&bind_address)?.run().await;

    info!("Server stopped, closing database pool");
    database.close().await;

    result.map_err(Into::into)
}

/// `RUST_LOG` wins over the configured level
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(logging.source_location)
        .with_line_number(logging.source_location);

    match logging.format {
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
    }
}
