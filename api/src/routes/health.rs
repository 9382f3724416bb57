//! Liveness and readiness endpoints

use actix_web::{web, HttpResponse};
use cs_core::repositories::{CompanyRepository, UserRepository};

use crate::app::AppState;

/// Handler for GET /ping
pub async fn ping() -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain").body("pong")
}

/// Handler for GET /health
///
/// Reports 503 when the database does not answer.
pub async fn health_check<C, U>(state: web::Data<AppState<C, U>>) -> HttpResponse
where
    C: CompanyRepository + 'static,
    U: UserRepository + 'static,
{
    let database = match &state.database {
        Some(pool) => match pool.health_check().await {
            Ok(true) => "healthy",
            Ok(false) | Err(_) => "unhealthy",
        },
        None => "not_configured",
    };
    let healthy = database != "unhealthy";

    let body = serde_json::json!({
        "status": if healthy { "healthy" } else { "unhealthy" },
        "service": "company-service",
        "version": env!("CARGO_PKG_VERSION"),
        "database": database,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    if healthy {
        HttpResponse::Ok().json(body)
    } else {
        log::warn!("Health check failed: database unreachable");
        HttpResponse::ServiceUnavailable().json(body)
    }
}
