//! Tools repository for database operations

use chrono::Utc;
use sqlx::{types::Json, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::tool::{Tool, ToolRow, ToolStatus, ToolWrite, UnitToolCount},
};

const SERIAL_TAKEN: &str = "A tool with this serial number already exists";

#[derive(Clone)]
pub struct ToolsRepository {
    pool: Pool<Postgres>,
}

impl ToolsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all tools
    pub async fn list(&self) -> AppResult<Vec<Tool>> {
        let rows = sqlx::query_as::<_, ToolRow>("SELECT * FROM tools ORDER BY name, id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Tool::from).collect())
    }

    /// Tools not held by any unit (`assigned_to` null or empty)
    pub async fn list_unassigned(&self) -> AppResult<Vec<Tool>> {
        let rows = sqlx::query_as::<_, ToolRow>(
            "SELECT * FROM tools WHERE assigned_to IS NULL OR assigned_to = '' ORDER BY name, id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Tool::from).collect())
    }

    /// Tools whose `assigned_to` equals the given unit name
    pub async fn list_by_unit(&self, unit_name: &str) -> AppResult<Vec<Tool>> {
        let rows = sqlx::query_as::<_, ToolRow>(
            "SELECT * FROM tools WHERE assigned_to = $1 ORDER BY name, id",
        )
        .bind(unit_name)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Tool::from).collect())
    }

    /// Get tool by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Tool> {
        sqlx::query_as::<_, ToolRow>("SELECT * FROM tools WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Tool::from)
            .ok_or_else(|| AppError::NotFound("Tool not found".to_string()))
    }

    /// Create a tool, `name` must already be checked by the caller
    pub async fn create(&self, data: &ToolWrite) -> AppResult<Tool> {
        let specs = data.specs.clone().unwrap_or_default();

        let row = sqlx::query_as::<_, ToolRow>(
            r#"
            INSERT INTO tools (name, tool_type, serial_number, status, assigned_to, specs, last_update, photo_path)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(data.name.as_deref().unwrap_or_default())
        .bind(&data.tool_type)
        .bind(&data.serial_number)
        .bind(data.status.unwrap_or_default().as_str())
        .bind(&data.assigned_to)
        .bind(Json(specs))
        .bind(Utc::now())
        .bind(&data.photo_path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::on_unique_violation(e, SERIAL_TAKEN))?;

        Ok(row.into())
    }

    /// Update a tool
    ///
    /// `assigned_to` is always written; the other fields only when provided.
    pub async fn update(&self, id: Uuid, data: &ToolWrite) -> AppResult<Tool> {
        let row = sqlx::query_as::<_, ToolRow>(
            r#"
            UPDATE tools SET
                name = COALESCE($2, name),
                tool_type = COALESCE($3, tool_type),
                serial_number = COALESCE($4, serial_number),
                status = COALESCE($5, status),
                assigned_to = $6,
                specs = COALESCE($7, specs),
                photo_path = COALESCE($8, photo_path),
                last_update = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.tool_type)
        .bind(&data.serial_number)
        .bind(data.status.map(|s| s.as_str()))
        .bind(&data.assigned_to)
        .bind(data.specs.clone().map(Json))
        .bind(&data.photo_path)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::on_unique_violation(e, SERIAL_TAKEN))?
        .ok_or_else(|| AppError::NotFound("Tool not found".to_string()))?;

        Ok(row.into())
    }

    /// Assign tools to a unit in a single statement, returns the number of rows touched
    pub async fn assign(&self, unit_name: &str, ids: &[Uuid]) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE tools
            SET assigned_to = $1, status = $2, last_update = $3
            WHERE id = ANY($4)
            "#,
        )
        .bind(unit_name)
        .bind(ToolStatus::OnAssignment.as_str())
        .bind(Utc::now())
        .bind(ids)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Tool counts per holding unit, tools without a unit excluded
    pub async fn count_by_unit(&self) -> AppResult<Vec<UnitToolCount>> {
        let rows = sqlx::query_as::<_, UnitToolCount>(
            r#"
            SELECT assigned_to AS unit_name, COUNT(*)::bigint AS count
            FROM tools
            WHERE assigned_to IS NOT NULL AND assigned_to <> ''
            GROUP BY assigned_to
            ORDER BY assigned_to
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
