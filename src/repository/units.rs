//! Units repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::unit::Unit,
};

#[derive(Clone)]
pub struct UnitsRepository {
    pool: Pool<Postgres>,
}

impl UnitsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all units
    pub async fn list(&self) -> AppResult<Vec<Unit>> {
        let rows = sqlx::query_as::<_, Unit>("SELECT * FROM units ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Create a unit, a duplicate name is reported as a conflict
    pub async fn create(&self, name: &str) -> AppResult<Unit> {
        sqlx::query_as::<_, Unit>("INSERT INTO units (name) VALUES ($1) RETURNING *")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::on_unique_violation(e, "A unit with this name already exists"))
    }

    /// Delete a unit without touching tools or soldiers that name it
    pub async fn delete(&self, id: Uuid) -> AppResult<Unit> {
        sqlx::query_as::<_, Unit>("DELETE FROM units WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Unit not found".to_string()))
    }
}
