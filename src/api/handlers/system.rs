// src/api/handlers/system.rs
use actix_web::{web, HttpResponse, Responder};
use log::error;

use crate::api::types::{LogListResponse, ServiceStatus};
use crate::generators::WordCatalog;
use crate::logging::{LogFilter, Logger};

/// Get service status
#[utoipa::path(
    get,
    path = "/system/status",
    tag = "System",
    responses(
        (status = 200, description = "Current service status", body = ServiceStatus)
    )
)]
pub async fn get_status() -> impl Responder {
    HttpResponse::Ok().json(ServiceStatus {
        success: true,
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: crate::started_at().elapsed().as_secs(),
        catalog_words: WordCatalog::global().all_words().len(),
    })
}

/// Get service logs
#[utoipa::path(
    get,
    path = "/system/logs",
    tag = "System",
    params(
        ("level" = Option<String>, Query, description = "Minimum log level (debug, info, warning, error)"),
        ("component" = Option<String>, Query, description = "Filter by component name"),
        ("search_term" = Option<String>, Query, description = "Filter by message content"),
        ("limit" = Option<usize>, Query, description = "Maximum number of entries to return"),
        ("offset" = Option<usize>, Query, description = "Number of entries to skip")
    ),
    responses(
        (status = 200, description = "Matching log entries", body = LogListResponse),
        (status = 500, description = "Log store unavailable", body = LogListResponse)
    )
)]
pub async fn get_logs(filter: web::Query<LogFilter>) -> impl Responder {
    let logger = match Logger::default_location() {
        Ok(logger) => logger,
        Err(e) => {
            error!("failed to open service log: {}", e);
            return HttpResponse::InternalServerError().json(LogListResponse {
                success: false,
                logs: Vec::new(),
                error: Some(format!("Failed to open service log: {}", e)),
            });
        }
    };

    match logger.get_logs(&filter) {
        Ok(logs) => HttpResponse::Ok().json(LogListResponse {
            success: true,
            logs,
            error: None,
        }),
        Err(e) => {
            error!("failed to read service logs: {}", e);
            HttpResponse::InternalServerError().json(LogListResponse {
                success: false,
                logs: Vec::new(),
                error: Some(format!("Failed to read service logs: {}", e)),
            })
        }
    }
}
