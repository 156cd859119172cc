use crate::domain::errors::LoadError;
use crate::domain::lap::LapRecord;
use async_trait::async_trait;

/// Where the lap record collection comes from.
///
/// A fetch yields the whole collection or fails; there are no partial loads.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<LapRecord>, LoadError>;

    /// Human-readable location, used in log lines.
    fn describe(&self) -> String;
}
