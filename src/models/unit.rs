//! Unit (organizational subdivision) model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Unit record
///
/// Tools and soldiers refer to a unit by name only, so removing or renaming a
/// unit leaves their `assigned_to` / `unit` values untouched.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Unit {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
}

/// Create unit request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUnit {
    #[serde(default)]
    pub name: String,
}
