// src/api/mod.rs
use actix_cors::Cors;
use actix_web::{App, HttpServer};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

// This holds our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::catalog_stats,

        // System endpoints
        crate::api::handlers::system::get_status,
        crate::api::handlers::system::get_logs
    ),
    components(
        schemas(
            crate::api::types::GenerateRequest,
            crate::api::types::GenerateResponse,
            crate::api::types::CatalogResponse,
            crate::api::types::ServiceStatus,
            crate::api::types::LogListResponse,
            crate::models::CatalogStats,
            crate::logging::LogEntry,
            crate::logging::LogLevel,
            crate::logging::LogFilter
        )
    ),
    tags(
        (name = "Generator", description = "Password generation endpoints"),
        (name = "System", description = "Service status and log endpoints")
    ),
    info(
        title = "PassGen API",
        version = "0.1.0",
        description = "Human-readable password generator API",
        license(name = "MIT")
    )
)]
struct ApiDoc;

pub async fn start_server(port: u16) -> std::io::Result<()> {
    log::info!("Starting PassGen API server on port {}", port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            // Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            // Regular API routes
            .configure(routes::configure_routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

pub mod handlers;
pub mod routes;
pub mod types;
