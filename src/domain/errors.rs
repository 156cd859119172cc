use thiserror::Error;

/// Errors raised while loading the lap record collection.
///
/// Any of these is fatal for the session: the collection is either loaded
/// whole or not at all.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("HTTP error {status}: unable to load data from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Invalid JSON document: {reason}")]
    InvalidJson { reason: String },

    #[error("Data format error: expected a JSON array, got {found}")]
    NotAnArray { found: &'static str },
}

/// Errors related to naming lap record fields.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Unknown field: {name}")]
    UnknownField { name: String },

    #[error("Field {name} cannot be used as a filter")]
    NotFilterable { name: String },

    #[error("Invalid filter expression '{expr}': expected field=value")]
    InvalidExpression { expr: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_formatting() {
        let error = LoadError::HttpStatus {
            url: "https://example.com/data.json".to_string(),
            status: 404,
        };

        let msg = error.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("data.json"));
    }

    #[test]
    fn test_not_an_array_formatting() {
        let error = LoadError::NotAnArray { found: "object" };
        assert_eq!(
            error.to_string(),
            "Data format error: expected a JSON array, got object"
        );
    }

    #[test]
    fn test_field_error_formatting() {
        let error = FieldError::NotFilterable {
            name: "time".to_string(),
        };
        assert!(error.to_string().contains("time"));
    }
}
