//! Analytics service

use crate::{error::AppResult, models::tool::UnitToolCount, repository::Repository};

#[derive(Clone)]
pub struct AnalyticsService {
    repository: Repository,
}

impl AnalyticsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Number of tools per holding unit, sorted by unit name
    pub async fn tools_by_unit(&self) -> AppResult<Vec<UnitToolCount>> {
        self.repository.tools.count_by_unit().await
    }
}
