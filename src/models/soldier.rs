//! Soldier (personnel account) model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Soldier role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SoldierRole {
    Admin,
    Operator,
}

impl SoldierRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoldierRole::Admin => "admin",
            SoldierRole::Operator => "operator",
        }
    }
}

impl std::fmt::Display for SoldierRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SoldierRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(SoldierRole::Admin),
            "operator" => Ok(SoldierRole::Operator),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Internal row structure for database queries
#[derive(Debug, Clone, FromRow)]
pub struct SoldierRow {
    id: Uuid,
    login: String,
    password: String,
    role: String,
    full_name: Option<String>,
    rank: Option<String>,
    position: Option<String>,
    unit: Option<String>,
}

impl From<SoldierRow> for Soldier {
    fn from(row: SoldierRow) -> Self {
        Soldier {
            id: row.id,
            login: row.login,
            password: row.password,
            // The column carries a CHECK constraint on both values
            role: row.role.parse().unwrap_or(SoldierRole::Operator),
            full_name: row.full_name,
            rank: row.rank,
            position: row.position,
            unit: row.unit,
        }
    }
}

/// Full soldier record
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Soldier {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub login: String,
    /// Argon2 hash, never serialized
    #[serde(skip_serializing)]
    pub password: String,
    pub role: SoldierRole,
    pub full_name: Option<String>,
    pub rank: Option<String>,
    pub position: Option<String>,
    /// Unit name, free text
    pub unit: Option<String>,
}

/// Create soldier request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSoldier {
    #[validate(length(min = 1, message = "Login is required"))]
    pub login: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub role: SoldierRole,
    pub full_name: Option<String>,
    pub rank: Option<String>,
    pub position: Option<String>,
    pub unit: Option<String>,
}

/// Update soldier request, the password is not changed here
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateSoldier {
    #[validate(length(min = 1, message = "Login cannot be empty"))]
    pub login: Option<String>,
    pub role: Option<SoldierRole>,
    pub full_name: Option<String>,
    pub rank: Option<String>,
    pub position: Option<String>,
    pub unit: Option<String>,
}
