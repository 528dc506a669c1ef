//! Analytics endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::tool::UnitToolCount};

/// Tool counts per unit, for the unit bar chart
#[utoipa::path(
    get,
    path = "/analytics/tools-by-unit",
    tag = "analytics",
    responses(
        (status = 200, description = "Tool count of every unit holding at least one tool", body = Vec<UnitToolCount>)
    )
)]
pub async fn tools_by_unit(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<UnitToolCount>>> {
    let stats = state.services.analytics.tools_by_unit().await?;
    Ok(Json(stats))
}
