use crate::constants;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("No repository selected. Set TIMELINE_REPO or pass --repo.")]
    MissingRepository,
    #[error("Usage error: {0}")]
    Usage(String),
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
}

/// JSON representation of an error for structured output
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonError {
    pub error_type: String,
    pub message: String,
    pub context: Option<String>,
}

impl Error {
    /// Builds an error for a non-success HTTP response.
    #[must_use]
    pub fn http_status(status: u16, body: String) -> Self {
        Self::HttpStatus {
            status,
            body: if body.is_empty() {
                constants::EMPTY_RESPONSE.to_string()
            } else {
                body
            },
        }
    }

    /// A user-facing hint for this error, if one applies
    #[must_use]
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::MissingRepository => Some(constants::ERR_MISSING_REPO),
            Self::Io(io_err) => match io_err.kind() {
                std::io::ErrorKind::NotFound => Some(constants::ERR_FILE_NOT_FOUND),
                std::io::ErrorKind::PermissionDenied => Some(constants::ERR_PERMISSION),
                _ => None,
            },
            Self::Network(req_err) => {
                if req_err.is_connect() {
                    Some(constants::ERR_CONNECTION)
                } else if req_err.is_timeout() {
                    Some(constants::ERR_TIMEOUT)
                } else if req_err.is_decode() {
                    Some(constants::ERR_JSON)
                } else {
                    None
                }
            }
            Self::HttpStatus { status, .. } => match status {
                404 => Some(constants::ERR_NOT_FOUND),
                500..=599 => Some(constants::ERR_SERVER_ERROR),
                _ => None,
            },
            Self::Json(_) => Some(constants::ERR_JSON),
            Self::Toml(_) => Some(constants::ERR_CONFIG_SYNTAX),
            Self::Yaml(_) | Self::Config(_) | Self::Usage(_) => None,
        }
    }

    /// Convert error to JSON representation for structured output
    #[must_use]
    pub fn to_json(&self) -> JsonError {
        let error_type = match self {
            Self::Io(_) => "FileSystem",
            Self::Network(_) => "Network",
            Self::Yaml(_) => "YAMLSerialization",
            Self::Json(_) => "JSONParsing",
            Self::Toml(_) => "TOMLParsing",
            Self::Config(_) | Self::MissingRepository => "Configuration",
            Self::Usage(_) => "Usage",
            Self::HttpStatus { .. } => "HttpError",
        };
        let message = match self {
            Self::Config(msg) | Self::Usage(msg) => msg.clone(),
            other => other.to_string(),
        };

        JsonError {
            error_type: error_type.to_string(),
            message,
            context: self.hint().map(str::to_string),
        }
    }
}
