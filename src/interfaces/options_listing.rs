use std::io::Write;

use anyhow::Result;

use crate::application::session::Session;
use crate::domain::lap::LapField;

/// Writes the distinct values of `field`, one per line, to `out`.
///
/// A session whose load failed writes its failure message to `err` instead
/// and returns `false`.
pub fn write_options<W: Write, E: Write>(
    session: &Session,
    field: LapField,
    out: &mut W,
    err: &mut E,
) -> Result<bool> {
    if let Some(message) = session.failure() {
        writeln!(err, "Error: {}", message)?;
        return Ok(false);
    }

    for value in session.options(field) {
        writeln!(out, "{}", value)?;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::LoadError;
    use crate::domain::lap::LapRecord;
    use crate::domain::ports::RecordSource;
    use async_trait::async_trait;

    struct ObjectPayloadSource;

    #[async_trait]
    impl RecordSource for ObjectPayloadSource {
        async fn fetch(&self) -> Result<Vec<LapRecord>, LoadError> {
            Err(LoadError::NotAnArray { found: "object" })
        }

        fn describe(&self) -> String {
            "bad.json".to_string()
        }
    }

    fn track(name: &str) -> LapRecord {
        LapRecord {
            track: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_lists_distinct_values() {
        let mut session = Session::default();
        session.accept(&[track("Spa"), track("Monza"), track("Spa")]);

        let mut out = Vec::new();
        let mut err = Vec::new();
        let ok = write_options(&session, LapField::Track, &mut out, &mut err).unwrap();

        assert!(ok);
        assert_eq!(String::from_utf8(out).unwrap(), "Monza\nSpa\n");
        assert!(err.is_empty());
    }

    #[tokio::test]
    async fn test_failed_load_reports_one_message() {
        let mut session = Session::default();
        assert!(session.load(&ObjectPayloadSource).await.is_err());

        let mut out = Vec::new();
        let mut err = Vec::new();
        let ok = write_options(&session, LapField::Track, &mut out, &mut err).unwrap();

        assert!(!ok);
        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Error: Failed to load data: Data format error: expected a JSON array, got object\n"
        );
    }
}
