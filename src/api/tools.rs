//! Tool inventory endpoints

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::tool::{AssignTools, Tool, ToolForm, ToolSpecs, ToolUpload, UploadedPhoto},
};

use super::{parse_id, ApiJson, ApiMultipart};

/// Bulk assignment result
#[derive(Serialize, ToSchema)]
pub struct AssignResponse {
    pub message: String,
    /// Number of tools actually updated
    pub updated: u64,
}

/// List all tools
#[utoipa::path(
    get,
    path = "/tools",
    tag = "tools",
    responses(
        (status = 200, description = "All tools", body = Vec<Tool>)
    )
)]
pub async fn list_tools(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Tool>>> {
    let tools = state.services.tools.list().await?;
    Ok(Json(tools))
}

/// List tools not assigned to any unit
#[utoipa::path(
    get,
    path = "/tools/unassigned",
    tag = "tools",
    responses(
        (status = 200, description = "Tools with no unit", body = Vec<Tool>)
    )
)]
pub async fn list_unassigned_tools(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Tool>>> {
    let tools = state.services.tools.list_unassigned().await?;
    Ok(Json(tools))
}

/// Get tool by ID
#[utoipa::path(
    get,
    path = "/tools/{id}",
    tag = "tools",
    params(("id" = String, Path, description = "Tool ID")),
    responses(
        (status = 200, description = "Tool details", body = Tool),
        (status = 404, description = "Tool not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_tool(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Tool>> {
    let id = parse_id(&id, "Tool")?;
    let tool = state.services.tools.get_by_id(id).await?;
    Ok(Json(tool))
}

/// Create a tool with an optional photo
#[utoipa::path(
    post,
    path = "/tools",
    tag = "tools",
    request_body(content = ToolUpload, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Tool created", body = Tool),
        (status = 400, description = "Missing name, bad specs or duplicate serial number", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_tool(
    State(state): State<crate::AppState>,
    ApiMultipart(multipart): ApiMultipart,
) -> AppResult<(StatusCode, Json<Tool>)> {
    let form = read_tool_form(multipart).await?;
    let tool = state.services.tools.create(form).await?;
    Ok((StatusCode::CREATED, Json(tool)))
}

/// Update a tool, replacing the photo only when one is sent
#[utoipa::path(
    put,
    path = "/tools/{id}",
    tag = "tools",
    params(("id" = String, Path, description = "Tool ID")),
    request_body(content = ToolUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Tool updated", body = Tool),
        (status = 404, description = "Tool not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_tool(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    ApiMultipart(multipart): ApiMultipart,
) -> AppResult<Json<Tool>> {
    let id = parse_id(&id, "Tool")?;
    let form = read_tool_form(multipart).await?;
    let tool = state.services.tools.update(id, form).await?;
    Ok(Json(tool))
}

/// Assign tools to a unit
#[utoipa::path(
    post,
    path = "/tools/assign",
    tag = "tools",
    request_body = AssignTools,
    responses(
        (status = 200, description = "Tools assigned", body = AssignResponse),
        (status = 400, description = "Missing unit name or malformed tool id", body = crate::error::ErrorResponse)
    )
)]
pub async fn assign_tools(
    State(state): State<crate::AppState>,
    ApiJson(request): ApiJson<AssignTools>,
) -> AppResult<Json<AssignResponse>> {
    let updated = state.services.tools.assign(&request).await?;
    Ok(Json(AssignResponse {
        message: "Tools assigned".to_string(),
        updated,
    }))
}

/// Collect the tool form fields. Unknown fields are ignored; a file part
/// with no name or no content counts as "no photo".
async fn read_tool_form(mut multipart: Multipart) -> AppResult<ToolForm> {
    let mut form = ToolForm::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        if name == "photo" {
            let file_name = field.file_name().unwrap_or_default().to_owned();
            let data = field.bytes().await?;
            if !file_name.is_empty() && !data.is_empty() {
                form.photo = Some(UploadedPhoto {
                    file_name,
                    data: data.to_vec(),
                });
            }
            continue;
        }

        let value = field.text().await?;
        match name.as_str() {
            "name" => form.name = Some(value),
            "type" => form.tool_type = Some(value),
            "serial_number" => form.serial_number = Some(value),
            "status" => {
                if !value.trim().is_empty() {
                    form.status = Some(value.parse().map_err(AppError::BadRequest)?);
                }
            }
            "assigned_to" => form.assigned_to = Some(value),
            "specs" => form.specs = Some(ToolSpecs::from_form_value(&value)?),
            _ => tracing::debug!(field = %name, "Ignoring unknown tool form field"),
        }
    }

    Ok(form)
}
