//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{analytics, auth, health, soldiers, tools, units};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Commgear API",
        version = "1.0.0",
        description = "Unit communication equipment tracking REST API"
    ),
    servers(
        (url = "/api", description = "API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::me,
        auth::change_password,
        // Tools
        tools::list_tools,
        tools::list_unassigned_tools,
        tools::get_tool,
        tools::create_tool,
        tools::update_tool,
        tools::assign_tools,
        // Units
        units::list_units,
        units::create_unit,
        units::delete_unit,
        units::list_unit_tools,
        // Soldiers
        soldiers::list_soldiers,
        soldiers::create_soldier,
        soldiers::update_soldier,
        soldiers::delete_soldier,
        // Analytics
        analytics::tools_by_unit,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::ProfileRequest,
            auth::ChangePasswordRequest,
            crate::services::auth::LoginResponse,
            // Tools
            crate::models::tool::Tool,
            crate::models::tool::ToolStatus,
            crate::models::tool::ToolUpload,
            crate::models::tool::AssignTools,
            crate::models::tool::UnitToolCount,
            tools::AssignResponse,
            // Units
            crate::models::unit::Unit,
            crate::models::unit::CreateUnit,
            // Soldiers
            crate::models::soldier::Soldier,
            crate::models::soldier::SoldierRole,
            crate::models::soldier::CreateSoldier,
            crate::models::soldier::UpdateSoldier,
            // Health
            health::HealthResponse,
            // Common
            super::MessageResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Login and own profile"),
        (name = "tools", description = "Communication equipment inventory"),
        (name = "units", description = "Organizational units"),
        (name = "soldiers", description = "Personnel accounts"),
        (name = "analytics", description = "Aggregated figures")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
