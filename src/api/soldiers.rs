//! Soldier administration endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::soldier::{CreateSoldier, Soldier, UpdateSoldier},
};

use super::{parse_id, ApiJson, MessageResponse};

/// List all soldiers
#[utoipa::path(
    get,
    path = "/soldiers",
    tag = "soldiers",
    responses(
        (status = 200, description = "All soldiers, without passwords", body = Vec<Soldier>)
    )
)]
pub async fn list_soldiers(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Soldier>>> {
    let soldiers = state.services.soldiers.list().await?;
    Ok(Json(soldiers))
}

/// Create a soldier
#[utoipa::path(
    post,
    path = "/soldiers",
    tag = "soldiers",
    request_body = CreateSoldier,
    responses(
        (status = 201, description = "Soldier created", body = Soldier),
        (status = 400, description = "Missing field or login already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_soldier(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<CreateSoldier>,
) -> AppResult<(StatusCode, Json<Soldier>)> {
    let soldier = state.services.soldiers.create(data).await?;
    Ok((StatusCode::CREATED, Json(soldier)))
}

/// Update a soldier (not the password)
#[utoipa::path(
    put,
    path = "/soldiers/{id}",
    tag = "soldiers",
    params(("id" = String, Path, description = "Soldier ID")),
    request_body = UpdateSoldier,
    responses(
        (status = 200, description = "Soldier updated", body = Soldier),
        (status = 400, description = "Login already used by another soldier", body = crate::error::ErrorResponse),
        (status = 404, description = "Soldier not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_soldier(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    ApiJson(data): ApiJson<UpdateSoldier>,
) -> AppResult<Json<Soldier>> {
    let id = parse_id(&id, "Soldier")?;
    let soldier = state.services.soldiers.update(id, data).await?;
    Ok(Json(soldier))
}

/// Delete a soldier
#[utoipa::path(
    delete,
    path = "/soldiers/{id}",
    tag = "soldiers",
    params(("id" = String, Path, description = "Soldier ID")),
    responses(
        (status = 200, description = "Soldier deleted", body = MessageResponse),
        (status = 404, description = "Soldier not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_soldier(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id, "Soldier")?;
    state.services.soldiers.delete(id).await?;
    Ok(Json(MessageResponse::new("Soldier deleted")))
}
