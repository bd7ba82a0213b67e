use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::warn;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    content: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Pings every content source
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let content_status = match data.content_provider.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            warn!("Content source not ready: {}", e);
            "unhealthy"
        }
    };

    if content_status == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            content: content_status,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            content: content_status,
        })
    }
}
