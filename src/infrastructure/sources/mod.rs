pub mod file_source;
pub mod http_source;
pub mod payload;
pub mod static_source;

pub use file_source::FileRecordSource;
pub use http_source::HttpRecordSource;
pub use static_source::StaticRecordSource;

use std::path::PathBuf;

use url::Url;

use crate::domain::ports::RecordSource;
use crate::infrastructure::core::HttpSettings;

/// Location of the lap record document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Http(Url),
}

impl DataSource {
    /// `http://` and `https://` locations are fetched over HTTP, anything
    /// else is a file path.
    pub fn parse(location: &str) -> anyhow::Result<Self> {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            let url = Url::parse(trimmed)
                .map_err(|e| anyhow::anyhow!("Invalid data source URL '{}': {}", trimmed, e))?;
            Ok(DataSource::Http(url))
        } else if trimmed.is_empty() {
            anyhow::bail!("Data source location is empty")
        } else {
            Ok(DataSource::File(PathBuf::from(trimmed)))
        }
    }

    pub fn into_source(self, http: HttpSettings) -> Box<dyn RecordSource> {
        match self {
            DataSource::File(path) => Box::new(FileRecordSource::new(path)),
            DataSource::Http(url) => Box::new(HttpRecordSource::new(url, http)),
        }
    }
}
