//! Tool inventory service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::tool::{AssignTools, Tool, ToolForm, ToolWrite},
    repository::Repository,
};

use super::photos::PhotoStorage;

#[derive(Clone)]
pub struct ToolsService {
    repository: Repository,
    photos: PhotoStorage,
}

impl ToolsService {
    pub fn new(repository: Repository, photos: PhotoStorage) -> Self {
        Self { repository, photos }
    }

    pub async fn list(&self) -> AppResult<Vec<Tool>> {
        self.repository.tools.list().await
    }

    pub async fn list_unassigned(&self) -> AppResult<Vec<Tool>> {
        self.repository.tools.list_unassigned().await
    }

    pub async fn list_by_unit(&self, unit_name: &str) -> AppResult<Vec<Tool>> {
        self.repository.tools.list_by_unit(unit_name).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Tool> {
        self.repository.tools.get_by_id(id).await
    }

    /// Create a tool. The photo, if any, is written before the record and
    /// stays on disk if the insert fails.
    pub async fn create(&self, form: ToolForm) -> AppResult<Tool> {
        if form.name.as_deref().map_or(true, |n| n.trim().is_empty()) {
            return Err(AppError::Validation("Tool name is required".to_string()));
        }

        let write = self.prepare_write(form).await?;
        let tool = self.repository.tools.create(&write).await?;

        tracing::info!(id = %tool.id, serial = ?tool.serial_number, "Tool created");
        Ok(tool)
    }

    /// Update a tool; the photo path changes only when a new photo is sent
    pub async fn update(&self, id: Uuid, form: ToolForm) -> AppResult<Tool> {
        if form.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(AppError::Validation("Tool name cannot be empty".to_string()));
        }

        let write = self.prepare_write(form).await?;
        self.repository.tools.update(id, &write).await
    }

    /// Hand tools over to a unit. The unit name is not checked against
    /// existing units.
    pub async fn assign(&self, request: &AssignTools) -> AppResult<u64> {
        let unit_name = request.unit_name.trim();
        if unit_name.is_empty() {
            return Err(AppError::Validation("Unit name is required".to_string()));
        }

        let ids = parse_tool_ids(&request.tool_ids)?;
        if ids.is_empty() {
            return Ok(0);
        }

        let updated = self.repository.tools.assign(unit_name, &ids).await?;
        tracing::info!(unit = unit_name, requested = ids.len(), updated, "Tools assigned");
        Ok(updated)
    }

    async fn prepare_write(&self, form: ToolForm) -> AppResult<ToolWrite> {
        let serial_number = non_empty(form.serial_number);

        let photo_path = match form.photo {
            Some(photo) => Some(
                self.photos
                    .save(serial_number.as_deref(), &photo.file_name, &photo.data)
                    .await?,
            ),
            None => None,
        };

        Ok(ToolWrite {
            name: form.name,
            tool_type: form.tool_type,
            serial_number,
            status: form.status,
            assigned_to: non_empty(form.assigned_to),
            specs: form.specs,
            photo_path,
        })
    }
}

/// Parse client ids; a malformed id rejects the whole request
fn parse_tool_ids(raw: &[String]) -> AppResult<Vec<Uuid>> {
    raw.iter()
        .map(|id| {
            Uuid::parse_str(id.trim())
                .map_err(|_| AppError::BadRequest(format!("Invalid tool id: {}", id)))
        })
        .collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
