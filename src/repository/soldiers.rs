//! Soldiers repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::soldier::{CreateSoldier, Soldier, SoldierRow, UpdateSoldier},
};

const LOGIN_TAKEN: &str = "A soldier with this login already exists";

#[derive(Clone)]
pub struct SoldiersRepository {
    pool: Pool<Postgres>,
}

impl SoldiersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all soldiers
    pub async fn list(&self) -> AppResult<Vec<Soldier>> {
        let rows = sqlx::query_as::<_, SoldierRow>("SELECT * FROM soldiers ORDER BY login")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Soldier::from).collect())
    }

    /// Get soldier by login
    pub async fn get_by_login(&self, login: &str) -> AppResult<Option<Soldier>> {
        let row = sqlx::query_as::<_, SoldierRow>("SELECT * FROM soldiers WHERE login = $1")
            .bind(login)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Soldier::from))
    }

    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM soldiers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Create a new soldier, `password_hash` is stored as given
    pub async fn create(&self, data: &CreateSoldier, password_hash: &str) -> AppResult<Soldier> {
        let row = sqlx::query_as::<_, SoldierRow>(
            r#"
            INSERT INTO soldiers (login, password, role, full_name, rank, position, unit)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&data.login)
        .bind(password_hash)
        .bind(data.role.as_str())
        .bind(&data.full_name)
        .bind(&data.rank)
        .bind(&data.position)
        .bind(&data.unit)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::on_unique_violation(e, LOGIN_TAKEN))?;

        Ok(row.into())
    }

    /// Update the provided fields of a soldier
    pub async fn update(&self, id: Uuid, data: &UpdateSoldier) -> AppResult<Soldier> {
        let row = sqlx::query_as::<_, SoldierRow>(
            r#"
            UPDATE soldiers SET
                login = COALESCE($2, login),
                role = COALESCE($3, role),
                full_name = COALESCE($4, full_name),
                rank = COALESCE($5, rank),
                position = COALESCE($6, position),
                unit = COALESCE($7, unit)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.login)
        .bind(data.role.map(|r| r.as_str()))
        .bind(&data.full_name)
        .bind(&data.rank)
        .bind(&data.position)
        .bind(&data.unit)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::on_unique_violation(e, LOGIN_TAKEN))?
        .ok_or_else(|| AppError::NotFound("Soldier not found".to_string()))?;

        Ok(row.into())
    }

    /// Replace the stored password hash
    pub async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<()> {
        let result = sqlx::query("UPDATE soldiers SET password = $1 WHERE id = $2")
            .bind(password_hash)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Soldier not found".to_string()));
        }
        Ok(())
    }

    /// Delete a soldier; tools and units are left untouched
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM soldiers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Soldier not found".to_string()));
        }
        Ok(())
    }
}
