//! Tool photo storage on local disk

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::AppResult;

/// URL prefix under which the upload directory is served
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

#[derive(Clone)]
pub struct PhotoStorage {
    dir: PathBuf,
}

impl PhotoStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the upload directory if missing
    pub async fn ensure_dir(&self) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Write a photo and return its public path (`/uploads/{file}`)
    pub async fn save(
        &self,
        serial_number: Option<&str>,
        original_name: &str,
        data: &[u8],
    ) -> AppResult<String> {
        let file_name = photo_file_name(serial_number, original_name, Utc::now().timestamp_millis());
        tokio::fs::write(self.dir.join(&file_name), data).await?;

        tracing::debug!(file = %file_name, bytes = data.len(), "Stored tool photo");
        Ok(format!("{}/{}", UPLOADS_URL_PREFIX, file_name))
    }
}

/// `{serial}-{timestamp_ms}{.ext}`, with `file` standing in for a missing serial
pub fn photo_file_name(serial_number: Option<&str>, original_name: &str, timestamp_ms: i64) -> String {
    let serial: String = match serial_number.map(str::trim) {
        Some(serial) if !serial.is_empty() => serial
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect(),
        _ => "file".to_string(),
    };

    let extension = Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();

    format!("{}-{}{}", serial, timestamp_ms, extension)
}
