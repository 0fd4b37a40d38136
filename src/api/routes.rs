// src/api/routes.rs
use actix_web::web;

use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Password generator
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::generator::generate_password))
            .route("/catalog", web::get().to(handlers::generator::catalog_stats)),
    );

    // System status and logs
    cfg.service(
        web::scope("/system")
            .route("/status", web::get().to(handlers::system::get_status))
            .route("/logs", web::get().to(handlers::system::get_logs)),
    );
}
