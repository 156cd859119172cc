use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

use crate::domain::errors::LoadError;
use crate::domain::lap::LapRecord;
use crate::domain::ports::RecordSource;
use crate::infrastructure::sources::payload::decode_records;

/// Reads the lap record document from a local JSON file.
pub struct FileRecordSource {
    path: PathBuf,
}

impl FileRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for FileRecordSource {
    async fn fetch(&self) -> Result<Vec<LapRecord>, LoadError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| LoadError::Io {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        let records = decode_records(&bytes)?;
        info!("Read {} entries from {:?}", records.len(), self.path);
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
