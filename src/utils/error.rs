use crate::domain::model::Operation;
use std::path::PathBuf;
use thiserror::Error;

pub const EXIT_CHECK_FAILED: i32 = 1;
pub const EXIT_CONFIG: i32 = 2;
pub const EXIT_REMOTE: i32 = 3;
pub const EXIT_INPUT: i32 = 4;

#[derive(Error, Debug)]
pub enum DoiError {
    #[error("missing configuration settings to properly initialize DOI client: {}", .missing.join(", "))]
    MissingConfig { missing: Vec<String> },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {reason} (value: '{value}')")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid argument '{field}': {reason} (value: '{value}')")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("cannot read metadata {}: {source}", .path.display())]
    MetadataFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{operation}: request to {url} failed with {message}")]
    RequestFailed {
        operation: Operation,
        url: String,
        message: String,
    },

    #[error("{operation}: unexpected DataCite MDS response code {status} (expected {expected}) from {url}: {body}")]
    UnexpectedStatus {
        operation: Operation,
        url: String,
        expected: u16,
        status: u16,
        body: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DoiError {
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            DoiError::MissingConfig { .. }
                | DoiError::ConfigError { .. }
                | DoiError::InvalidConfigValue { .. }
        )
    }

    /// Caller-supplied input (arguments, local files) was unusable.
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            DoiError::InvalidArgument { .. } | DoiError::MetadataFile { .. } | DoiError::IoError(_)
        )
    }

    /// Process exit code: 2 configuration, 3 transport or MDS failure, 4 local input.
    pub fn exit_code(&self) -> i32 {
        if self.is_config() {
            EXIT_CONFIG
        } else if self.is_input() {
            EXIT_INPUT
        } else {
            EXIT_REMOTE
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, DoiError::RequestFailed { .. })
    }

    /// HTTP status observed from MDS, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            DoiError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Operator hint for the well-known MDS failure responses.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            DoiError::MissingConfig { .. } => Some(
                "set doi.registration.datacite.username, password and serviceUrl",
            ),
            DoiError::RequestFailed { .. } => {
                Some("check network connectivity and the configured serviceUrl")
            }
            DoiError::UnexpectedStatus {
                operation, status, ..
            } => match (*status, *operation) {
                (400, Operation::RegisterMetadata) => {
                    Some("metadata rejected: invalid XML or wrong DOI prefix")
                }
                (400, op) if op.is_url_binding() => Some(
                    "request body must be exactly two lines (doi, url); check domain and DOI prefix",
                ),
                (401, _) => Some("no login: check username and password"),
                (403, Operation::CheckDoi) => {
                    Some("login problem or the dataset belongs to another party")
                }
                (403, _) => Some("login problem or quota exceeded"),
                (404, _) => Some("DOI is unknown to DataCite (registration may still be pending)"),
                (412, op) if op.is_url_binding() => Some("metadata must be uploaded first"),
                (415, _) => Some("content type header missing or wrong"),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Failure to send a request or to receive its response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(error_chain(&err))
    }
}

/// Joins an error with its `source()` chain, e.g.
/// `error sending request: client error (Connect): Connection refused`.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        // some layers already print their cause
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

pub type Result<T> = std::result::Result<T, DoiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn unexpected(operation: Operation, status: u16) -> DoiError {
        DoiError::UnexpectedStatus {
            operation,
            url: "http://mds.example.org/doi/10.5072/x-1".to_string(),
            expected: operation.expected_status(),
            status,
            body: "error body".to_string(),
        }
    }

    #[test]
    fn test_missing_config_message_lists_keys() {
        let err = DoiError::MissingConfig {
            missing: vec!["a.username".to_string(), "a.password".to_string()],
        };
        let message = err.to_string();

        assert!(message.starts_with("missing configuration settings"));
        assert!(message.contains("a.username, a.password"));
        assert!(err.is_config());
    }

    #[test]
    fn test_unexpected_status_message_embeds_status_and_body() {
        let err = unexpected(Operation::RegisterMetadata, 400);
        let message = err.to_string();

        assert!(message.contains("unexpected DataCite MDS response code 400"));
        assert!(message.contains("error body"));
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_recovery_suggestion_depends_on_operation() {
        assert_eq!(
            unexpected(Operation::RegisterMetadata, 400).recovery_suggestion(),
            Some("metadata rejected: invalid XML or wrong DOI prefix")
        );
        assert_eq!(
            unexpected(Operation::RegisterUrl, 412).recovery_suggestion(),
            Some("metadata must be uploaded first")
        );
        assert_eq!(
            unexpected(Operation::DeleteMetadata, 412).recovery_suggestion(),
            None
        );
        assert!(unexpected(Operation::UpdateUrl, 401)
            .recovery_suggestion()
            .is_some());
    }

    #[derive(Debug)]
    struct Layer {
        text: &'static str,
        cause: Option<Box<Layer>>,
    }

    impl std::fmt::Display for Layer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.text)
        }
    }

    impl std::error::Error for Layer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            self.cause.as_deref().map(|c| c as &(dyn std::error::Error + 'static))
        }
    }

    #[test]
    fn test_error_chain_includes_causes() {
        let err = Layer {
            text: "error sending request for url (http://127.0.0.1:1/metadata)",
            cause: Some(Box::new(Layer {
                text: "client error (Connect)",
                cause: Some(Box::new(Layer {
                    text: "Connection refused (os error 111)",
                    cause: None,
                })),
            })),
        };

        assert_eq!(
            error_chain(&err),
            "error sending request for url (http://127.0.0.1:1/metadata): client error (Connect): Connection refused (os error 111)"
        );
    }

    #[test]
    fn test_error_chain_skips_repeated_cause() {
        let err = Layer {
            text: "tcp connect error: Connection refused",
            cause: Some(Box::new(Layer {
                text: "Connection refused",
                cause: None,
            })),
        };

        assert_eq!(error_chain(&err), "tcp connect error: Connection refused");
    }

    #[tokio::test]
    async fn test_reqwest_error_keeps_connect_cause() {
        let err = reqwest::Client::new()
            .get("http://127.0.0.1:1/doi/10.5072/x-1")
            .send()
            .await
            .unwrap_err();

        let top_level = err.to_string();
        let message = TransportError::from(err).message;

        assert!(message.starts_with(&top_level));
        assert!(message.len() > top_level.len());
        assert!(message.to_lowercase().contains("refused"), "{}", message);
    }

    #[test]
    fn test_exit_codes() {
        let missing = DoiError::MissingConfig {
            missing: vec!["doi.registration.datacite.password".to_string()],
        };
        let bad_doi = DoiError::InvalidArgument {
            field: "doi".to_string(),
            value: "notadoi".to_string(),
            reason: "DOI must look like 10.<registrant>/<suffix>".to_string(),
        };
        let unreadable = DoiError::MetadataFile {
            path: PathBuf::from("/nonexistent.xml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        };
        let refused = DoiError::RequestFailed {
            operation: Operation::DeleteMetadata,
            url: "http://127.0.0.1:1/metadata/10.5072/x-1".to_string(),
            message: "connection refused".to_string(),
        };

        assert_eq!(missing.exit_code(), EXIT_CONFIG);
        assert_eq!(bad_doi.exit_code(), EXIT_INPUT);
        assert_eq!(unreadable.exit_code(), EXIT_INPUT);
        assert_eq!(refused.exit_code(), EXIT_REMOTE);
        assert_eq!(unexpected(Operation::CheckDoi, 401).exit_code(), EXIT_REMOTE);
        assert!(unreadable.to_string().contains("/nonexistent.xml"));
    }

    #[test]
    fn test_transport_error_display() {
        let err = DoiError::RequestFailed {
            operation: Operation::CheckDoi,
            url: "http://192.0.2.1/doi/10.5072/x-1".to_string(),
            message: TransportError::new("connection refused").to_string(),
        };

        assert!(err.is_transport());
        assert_eq!(
            err.to_string(),
            "check doi: request to http://192.0.2.1/doi/10.5072/x-1 failed with connection refused"
        );
    }
}
