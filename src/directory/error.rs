use thiserror::Error;

/// Why the partner list could not be loaded.
///
/// The `Display` text is what the directory shows after "Failed to load partners."
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Network response was not ok ({status} {status_text})")]
    Status { status: u16, status_text: String },
    #[error("Malformed partner data: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

impl From<gloo_net::Error> for LoadError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => LoadError::Parse(e.to_string()),
            other => LoadError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reads_like_a_sentence() {
        let err = LoadError::Status {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Network response was not ok (404 Not Found)");
    }

    #[test]
    fn json_errors_become_parse_failures() {
        let err: LoadError = serde_json::from_str::<Vec<u32>>("{").unwrap_err().into();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
