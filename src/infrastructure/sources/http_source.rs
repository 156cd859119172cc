use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use tracing::info;
use url::Url;

use crate::domain::errors::LoadError;
use crate::domain::lap::LapRecord;
use crate::domain::ports::RecordSource;
use crate::infrastructure::core::{HttpClientFactory, HttpSettings};
use crate::infrastructure::sources::payload::decode_records;

/// Fetches the lap record document with a single GET.
pub struct HttpRecordSource {
    client: ClientWithMiddleware,
    url: Url,
}

impl HttpRecordSource {
    pub fn new(url: Url, settings: HttpSettings) -> Self {
        Self {
            client: HttpClientFactory::create_client(settings),
            url,
        }
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch(&self) -> Result<Vec<LapRecord>, LoadError> {
        let transport = |reason: String| LoadError::Transport {
            url: self.url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus {
                url: self.url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| transport(e.to_string()))?;
        let records = decode_records(&body)?;
        info!("Fetched {} entries from {}", records.len(), self.url);
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}
