//! Unit endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        tool::Tool,
        unit::{CreateUnit, Unit},
    },
};

use super::{parse_id, ApiJson, MessageResponse};

/// List all units
#[utoipa::path(
    get,
    path = "/units",
    tag = "units",
    responses(
        (status = 200, description = "All units", body = Vec<Unit>)
    )
)]
pub async fn list_units(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Unit>>> {
    let units = state.services.units.list().await?;
    Ok(Json(units))
}

/// Create a unit
#[utoipa::path(
    post,
    path = "/units",
    tag = "units",
    request_body = CreateUnit,
    responses(
        (status = 201, description = "Unit created", body = Unit),
        (status = 400, description = "Empty or duplicate name", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_unit(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<CreateUnit>,
) -> AppResult<(StatusCode, Json<Unit>)> {
    let unit = state.services.units.create(&data.name).await?;
    Ok((StatusCode::CREATED, Json(unit)))
}

/// Delete a unit; tools and soldiers naming it are not modified
#[utoipa::path(
    delete,
    path = "/units/{id}",
    tag = "units",
    params(("id" = String, Path, description = "Unit ID")),
    responses(
        (status = 200, description = "Unit deleted", body = MessageResponse),
        (status = 404, description = "Unit not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_unit(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id, "Unit")?;
    state.services.units.delete(id).await?;
    Ok(Json(MessageResponse::new("Unit deleted")))
}

/// List tools assigned to a unit
#[utoipa::path(
    get,
    path = "/units/{unit_name}/tools",
    tag = "units",
    params(("unit_name" = String, Path, description = "Unit name")),
    responses(
        (status = 200, description = "Tools held by the unit", body = Vec<Tool>)
    )
)]
pub async fn list_unit_tools(
    State(state): State<crate::AppState>,
    Path(unit_name): Path<String>,
) -> AppResult<Json<Vec<Tool>>> {
    let tools = state.services.tools.list_by_unit(&unit_name).await?;
    Ok(Json(tools))
}
