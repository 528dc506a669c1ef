//! Business logic services

pub mod analytics;
pub mod auth;
pub mod photos;
pub mod soldiers;
pub mod tools;
pub mod units;

use crate::{config::StorageConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub repository: Repository,
    pub analytics: analytics::AnalyticsService,
    pub auth: auth::AuthService,
    pub soldiers: soldiers::SoldiersService,
    pub tools: tools::ToolsService,
    pub units: units::UnitsService,
    pub photos: photos::PhotoStorage,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, storage_config: &StorageConfig) -> Self {
        let photos = photos::PhotoStorage::new(&storage_config.upload_dir);
        Self {
            analytics: analytics::AnalyticsService::new(repository.clone()),
            auth: auth::AuthService::new(repository.clone()),
            soldiers: soldiers::SoldiersService::new(repository.clone()),
            tools: tools::ToolsService::new(repository.clone(), photos.clone()),
            units: units::UnitsService::new(repository.clone()),
            photos,
            repository,
        }
    }
}
