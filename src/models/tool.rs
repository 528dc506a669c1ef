//! Tool (communication equipment) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::{types::Json, FromRow};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Tool status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ToolStatus {
    #[default]
    #[serde(alias = "На складі")]
    InStorage,
    #[serde(alias = "На завданні")]
    OnAssignment,
    #[serde(alias = "В ремонті")]
    InRepair,
}

impl ToolStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolStatus::InStorage => "in-storage",
            ToolStatus::OnAssignment => "on-assignment",
            ToolStatus::InRepair => "in-repair",
        }
    }
}

impl std::fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ToolStatus {
    type Err = String;

    /// Accepts the API values and the labels found in legacy records
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "in-storage" | "На складі" => Ok(ToolStatus::InStorage),
            "on-assignment" | "На завданні" => Ok(ToolStatus::OnAssignment),
            "in-repair" | "В ремонті" => Ok(ToolStatus::InRepair),
            other => Err(format!("Invalid tool status: {}", other)),
        }
    }
}

/// Technical characteristics of a radio
///
/// Known fields are typed; any other key sent by a client is kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolSpecs {
    /// Frequency range, e.g. "136-174 MHz"
    #[serde(default)]
    pub frequency: Option<String>,
    /// Output power, e.g. "5W"
    #[serde(default)]
    pub power: Option<String>,
    /// Any JSON number; the client form sends whatever the number input holds
    #[serde(default)]
    pub channels: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ToolSpecs {
    /// Parse the JSON-encoded `specs` form field
    pub fn from_form_value(raw: &str) -> AppResult<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
            .map_err(|e| AppError::BadRequest(format!("Invalid specs JSON: {}", e)))
    }
}

/// Internal row structure for database queries
#[derive(Debug, Clone, FromRow)]
pub struct ToolRow {
    id: Uuid,
    name: String,
    tool_type: Option<String>,
    serial_number: Option<String>,
    status: String,
    assigned_to: Option<String>,
    specs: Json<ToolSpecs>,
    last_update: DateTime<Utc>,
    photo_path: Option<String>,
}

impl From<ToolRow> for Tool {
    fn from(row: ToolRow) -> Self {
        Tool {
            id: row.id,
            name: row.name,
            tool_type: row.tool_type,
            serial_number: row.serial_number,
            status: row.status.parse().unwrap_or_default(),
            assigned_to: row.assigned_to,
            specs: row.specs.0,
            last_update: row.last_update,
            photo_path: row.photo_path,
        }
    }
}

/// Tool record
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Tool {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    /// Kind of device, e.g. "portable"
    #[serde(rename = "type")]
    pub tool_type: Option<String>,
    pub serial_number: Option<String>,
    pub status: ToolStatus,
    /// Name of the unit holding the tool, null when in storage
    pub assigned_to: Option<String>,
    #[schema(value_type = Object)]
    pub specs: ToolSpecs,
    pub last_update: DateTime<Utc>,
    /// Public URL path of the photo, e.g. `/uploads/SN-1-1700000000000.jpg`
    pub photo_path: Option<String>,
}

/// Tool fields received from the multipart create/update forms
#[derive(Debug, Default)]
pub struct ToolForm {
    pub name: Option<String>,
    pub tool_type: Option<String>,
    pub serial_number: Option<String>,
    pub status: Option<ToolStatus>,
    pub assigned_to: Option<String>,
    pub specs: Option<ToolSpecs>,
    pub photo: Option<UploadedPhoto>,
}

/// Photo file received with a tool form
#[derive(Debug)]
pub struct UploadedPhoto {
    pub file_name: String,
    pub data: Vec<u8>,
}

/// Values written by a create or update
#[derive(Debug)]
pub struct ToolWrite {
    pub name: Option<String>,
    pub tool_type: Option<String>,
    pub serial_number: Option<String>,
    pub status: Option<ToolStatus>,
    pub assigned_to: Option<String>,
    pub specs: Option<ToolSpecs>,
    pub photo_path: Option<String>,
}

/// Multipart form accepted by `POST /tools` and `PUT /tools/{id}`
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct ToolUpload {
    pub name: String,
    pub r#type: Option<String>,
    pub serial_number: Option<String>,
    pub status: Option<ToolStatus>,
    /// Unit name, empty for none
    pub assigned_to: Option<String>,
    /// JSON object: frequency, power, channels, weight_kg and free keys
    pub specs: Option<String>,
    #[schema(format = Binary)]
    pub photo: Option<String>,
}

/// Bulk assignment request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignTools {
    pub unit_name: String,
    #[serde(default)]
    pub tool_ids: Vec<String>,
}

/// Number of tools held by one unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnitToolCount {
    pub unit_name: String,
    pub count: i64,
}
