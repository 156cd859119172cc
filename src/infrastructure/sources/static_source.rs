use async_trait::async_trait;

use crate::domain::errors::LoadError;
use crate::domain::lap::LapRecord;
use crate::domain::ports::RecordSource;

/// In-memory collection, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticRecordSource {
    records: Vec<LapRecord>,
}

impl StaticRecordSource {
    pub fn new(records: Vec<LapRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RecordSource for StaticRecordSource {
    async fn fetch(&self) -> Result<Vec<LapRecord>, LoadError> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory records", self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_returns_a_copy() {
        let source = StaticRecordSource::new(vec![LapRecord {
            car: Some("Clio RS".to_string()),
            ..Default::default()
        }]);

        let first = tokio_test::block_on(source.fetch()).unwrap();
        let second = tokio_test::block_on(source.fetch()).unwrap();
        assert_eq!(first, second);
        assert_eq!(source.describe(), "1 in-memory records");
    }
}
