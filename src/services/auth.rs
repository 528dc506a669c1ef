//! Login and self-service profile operations

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::soldier::{Soldier, SoldierRole},
    repository::Repository,
};

/// What the client keeps after a successful login
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub login: String,
    pub role: SoldierRole,
    pub full_name: Option<String>,
}

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
}

impl AuthService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Check credentials. Unknown login is `NotFound`, a wrong password `Authentication`.
    pub async fn login(&self, login: &str, password: &str) -> AppResult<LoginResponse> {
        let soldier = self.find(login).await?;

        if !verify_password(&soldier.password, password)? {
            tracing::debug!(login, "Rejected login with wrong password");
            return Err(AppError::Authentication("Wrong password".to_string()));
        }

        Ok(LoginResponse {
            login: soldier.login,
            role: soldier.role,
            full_name: soldier.full_name,
        })
    }

    /// Soldier record of the given login
    pub async fn profile(&self, login: &str) -> AppResult<Soldier> {
        self.find(login).await
    }

    /// Replace the password after re-checking the old one
    pub async fn change_password(
        &self,
        login: &str,
        old_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let soldier = self.find(login).await?;

        if !verify_password(&soldier.password, old_password)? {
            return Err(AppError::Authentication("Wrong old password".to_string()));
        }

        let hash = hash_password(new_password)?;
        self.repository.soldiers.update_password(soldier.id, &hash).await?;

        tracing::info!(login, "Password changed");
        Ok(())
    }

    async fn find(&self, login: &str) -> AppResult<Soldier> {
        self.repository
            .soldiers
            .get_by_login(login)
            .await?
            .ok_or_else(|| AppError::NotFound("Soldier not found".to_string()))
    }
}

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored Argon2 hash
pub fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
