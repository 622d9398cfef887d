//! Health check endpoint.

use actix_web::HttpResponse;
use blog_core::domain::timestamp;
use blog_shared::dto::HealthResponse;

/// Health check endpoint - returns server status.
///
/// GET /api/health
pub async fn health_check() -> HttpResponse {
    let response = HealthResponse {
        success: true,
        message: "Blog API v1.0 is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: timestamp::format(&timestamp::now()),
    };

    HttpResponse::Ok().json(response)
}
