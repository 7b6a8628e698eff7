use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Unable to connect to the server. Please try again.")]
    Backend {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Unexpected response from the server")]
    Decode {
        message: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Missing prerequisite: {0}")]
    MissingPrerequisite(String),
    #[error("Session storage error")]
    Storage {
        message: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("Configuration error")]
    ConfigurationError {
        message: String,
        #[source]
        source: figment::Error,
    },
}

impl AppError {
    pub fn backend(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Backend {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Backend failure with no underlying transport error, e.g. an
    /// unexpected status code on an endpoint that returns no body.
    pub fn backend_message(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
            source: None,
        }
    }

    pub fn decode(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            message: message.into(),
            source,
        }
    }

    pub fn storage(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Storage {
            message: message.into(),
            source,
        }
    }

    /// Whether the caller may retry by reloading; credential and validation
    /// failures are terminal until the user changes input.
    pub fn is_transient(&self) -> bool {
        matches!(self, AppError::Backend { .. } | AppError::Storage { .. })
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.status().map(|s| s.as_u16() == 404).unwrap_or(false) {
            return AppError::NotFound("Resource not found".to_string());
        }
        AppError::backend("Request failed", e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::decode("Failed to decode response body", e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::storage("Session storage I/O failed", e)
    }
}

impl From<figment::Error> for AppError {
    fn from(e: figment::Error) -> Self {
        AppError::ConfigurationError {
            message: "Failed to read configuration".to_string(),
            source: e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_credentials_message_matches_login_screen() {
        assert_eq!(AppError::InvalidCredentials.to_string(), "Invalid credentials");
    }

    #[test]
    fn backend_errors_are_transient() {
        let err = AppError::backend_message("fetch failed");
        assert!(err.is_transient());
        assert!(!AppError::InvalidCredentials.is_transient());
    }

    #[test]
    fn io_errors_convert_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Storage { .. }));
    }
}
