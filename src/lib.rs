//! Commgear
//!
//! REST JSON backend for tracking a military unit's communication equipment:
//! personnel accounts, radios and other tools, and the units they are
//! assigned to.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let upload_limit = DefaultBodyLimit::max(state.config.storage.max_upload_bytes);
    let uploads = ServeDir::new(state.services.photos.dir());

    let api = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/login", post(api::auth::login))
        .route("/me", post(api::auth::me))
        .route("/me/password", put(api::auth::change_password))
        // Tools
        .route("/tools", get(api::tools::list_tools))
        .route("/tools", post(api::tools::create_tool).layer(upload_limit.clone()))
        .route("/tools/unassigned", get(api::tools::list_unassigned_tools))
        .route("/tools/assign", post(api::tools::assign_tools))
        .route("/tools/:id", get(api::tools::get_tool))
        .route("/tools/:id", put(api::tools::update_tool).layer(upload_limit))
        // Units
        .route("/units", get(api::units::list_units))
        .route("/units", post(api::units::create_unit))
        .route("/units/:unit", delete(api::units::delete_unit))
        .route("/units/:unit/tools", get(api::units::list_unit_tools))
        // Soldiers
        .route("/soldiers", get(api::soldiers::list_soldiers))
        .route("/soldiers", post(api::soldiers::create_soldier))
        .route("/soldiers/:id", put(api::soldiers::update_soldier))
        .route("/soldiers/:id", delete(api::soldiers::delete_soldier))
        // Analytics
        .route("/analytics/tools-by-unit", get(api::analytics::tools_by_unit))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api", api)
        .nest_service(services::photos::UPLOADS_URL_PREFIX, uploads)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
