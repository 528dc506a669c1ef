//! Authentication and profile endpoints

use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::soldier::Soldier, services::auth::LoginResponse};

use super::{ApiJson, MessageResponse};

/// Login request
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

/// Profile lookup request
#[derive(Deserialize, ToSchema)]
pub struct ProfileRequest {
    pub login: String,
}

/// Password change request
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub login: String,
    pub old_password: String,
    pub new_password: String,
}

/// Check login and password
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = LoginResponse),
        (status = 400, description = "Wrong password", body = crate::error::ErrorResponse),
        (status = 404, description = "Unknown login", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let response = state
        .services
        .auth
        .login(&request.login, &request.password)
        .await?;
    Ok(Json(response))
}

/// Get own profile
#[utoipa::path(
    post,
    path = "/me",
    tag = "auth",
    request_body = ProfileRequest,
    responses(
        (status = 200, description = "Soldier profile", body = Soldier),
        (status = 404, description = "Unknown login", body = crate::error::ErrorResponse)
    )
)]
pub async fn me(
    State(state): State<crate::AppState>,
    ApiJson(request): ApiJson<ProfileRequest>,
) -> AppResult<Json<Soldier>> {
    let soldier = state.services.auth.profile(&request.login).await?;
    Ok(Json(soldier))
}

/// Change own password
#[utoipa::path(
    put,
    path = "/me/password",
    tag = "auth",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password updated", body = MessageResponse),
        (status = 400, description = "Wrong old password", body = crate::error::ErrorResponse),
        (status = 404, description = "Unknown login", body = crate::error::ErrorResponse)
    )
)]
pub async fn change_password(
    State(state): State<crate::AppState>,
    ApiJson(request): ApiJson<ChangePasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .auth
        .change_password(&request.login, &request.old_password, &request.new_password)
        .await?;
    Ok(Json(MessageResponse::new("Password updated")))
}
