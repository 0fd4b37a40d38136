// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use log::warn;

use crate::api::types::{CatalogResponse, GenerateRequest, GenerateResponse};
use crate::generators::{PasswordComposer, WordCatalog};
use crate::logging::{LogLevel, Logger};
use crate::models::{DEFAULT_REQUESTED_LENGTH, MAX_REQUESTED_LENGTH, MIN_REQUESTED_LENGTH};

/// Generate a password
///
/// Composes a human-readable password of approximately the requested length.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated password", body = GenerateResponse),
        (status = 400, description = "Requested length out of policy", body = GenerateResponse),
        (status = 500, description = "Server error", body = GenerateResponse)
    )
)]
pub async fn generate_password(generation_req: web::Json<GenerateRequest>) -> impl Responder {
    let length = generation_req.length.unwrap_or(DEFAULT_REQUESTED_LENGTH);

    if !crate::models::length_in_policy(length) {
        return HttpResponse::BadRequest().json(GenerateResponse::err(format!(
            "Password length must be between {} and {} characters",
            MIN_REQUESTED_LENGTH, MAX_REQUESTED_LENGTH
        )));
    }

    let password = PasswordComposer::new().generate_password(length);

    record(
        LogLevel::Info,
        &format!("generated password of length {} (requested {})", password.len(), length),
    );

    HttpResponse::Ok().json(GenerateResponse::ok(password))
}

/// Word catalog statistics
///
/// Reports the total word count and the per-length distribution of the
/// catalog backing the composer.
#[utoipa::path(
    get,
    path = "/generator/catalog",
    tag = "Generator",
    responses(
        (status = 200, description = "Catalog distribution", body = CatalogResponse)
    )
)]
pub async fn catalog_stats() -> impl Responder {
    HttpResponse::Ok().json(CatalogResponse {
        success: true,
        catalog: Some(WordCatalog::global().stats()),
        error: None,
    })
}

fn record(level: LogLevel, message: &str) {
    match Logger::default_location() {
        Ok(logger) => {
            if let Err(e) = logger.log(level, "generator", message) {
                warn!("failed to write service log: {}", e);
            }
        }
        Err(e) => warn!("failed to open service log: {}", e),
    }
}
