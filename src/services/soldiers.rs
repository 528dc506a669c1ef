//! Soldier administration service

use uuid::Uuid;
use validator::Validate;

use crate::{
    config::BootstrapConfig,
    error::AppResult,
    models::soldier::{CreateSoldier, Soldier, SoldierRole, UpdateSoldier},
    repository::Repository,
};

use super::auth::hash_password;

#[derive(Clone)]
pub struct SoldiersService {
    repository: Repository,
}

impl SoldiersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Soldier>> {
        self.repository.soldiers.list().await
    }

    /// Create a soldier; the password is stored hashed
    pub async fn create(&self, data: CreateSoldier) -> AppResult<Soldier> {
        data.validate()?;

        let hash = hash_password(&data.password)?;
        let soldier = self.repository.soldiers.create(&data, &hash).await?;

        tracing::info!(login = %soldier.login, role = %soldier.role, "Soldier created");
        Ok(soldier)
    }

    /// Update personnel fields, never the password
    pub async fn update(&self, id: Uuid, data: UpdateSoldier) -> AppResult<Soldier> {
        data.validate()?;
        self.repository.soldiers.update(id, &data).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.soldiers.delete(id).await?;
        tracing::info!(%id, "Soldier deleted");
        Ok(())
    }

    /// Create the configured administrator when no soldier exists yet.
    /// Returns whether an account was created.
    pub async fn bootstrap_admin(&self, config: &BootstrapConfig) -> AppResult<bool> {
        let (Some(login), Some(password)) = (&config.admin_login, &config.admin_password) else {
            return Ok(false);
        };

        if self.repository.soldiers.count().await? > 0 {
            return Ok(false);
        }

        self.create(CreateSoldier {
            login: login.clone(),
            password: password.clone(),
            role: SoldierRole::Admin,
            full_name: config.admin_full_name.clone(),
            rank: None,
            position: None,
            unit: None,
        })
        .await?;

        tracing::warn!(login = %login, "Created bootstrap administrator, change its password");
        Ok(true)
    }
}
