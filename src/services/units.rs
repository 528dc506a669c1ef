//! Unit service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::unit::Unit,
    repository::Repository,
};

#[derive(Clone)]
pub struct UnitsService {
    repository: Repository,
}

impl UnitsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Unit>> {
        self.repository.units.list().await
    }

    pub async fn create(&self, name: &str) -> AppResult<Unit> {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Unit name is required".to_string()));
        }

        let unit = self.repository.units.create(name).await?;
        tracing::info!(id = %unit.id, name = %unit.name, "Unit created");
        Ok(unit)
    }

    /// Delete a unit. Tools and soldiers still naming it keep the name.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let unit = self.repository.units.delete(id).await?;
        tracing::info!(%id, name = %unit.name, "Unit deleted");
        Ok(())
    }
}
