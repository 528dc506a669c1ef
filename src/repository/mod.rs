//! Repository layer for database operations

pub mod soldiers;
pub mod tools;
pub mod units;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub soldiers: soldiers::SoldiersRepository,
    pub tools: tools::ToolsRepository,
    pub units: units::UnitsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            soldiers: soldiers::SoldiersRepository::new(pool.clone()),
            tools: tools::ToolsRepository::new(pool.clone()),
            units: units::UnitsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Round trip to the database, used by the readiness check
    pub async fn ping(&self) -> crate::error::AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
