use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("{message}")]
    Input { message: String },

    #[error("HTTP {status} for url ({url})")]
    HttpStatus { status: reqwest::StatusCode, url: String },

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{message}")]
    Structure { message: String },

    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{0}")]
    Cli(clap::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Structure,
    Parse,
    Io,
    Config,
}

impl ViewerError {
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
        }
    }

    pub fn structure(message: impl Into<String>) -> Self {
        Self::Structure {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Input { .. } | Self::Cli(_) => ErrorCategory::Input,
            Self::HttpStatus { .. } | Self::Request(_) => ErrorCategory::Network,
            Self::Structure { .. } => ErrorCategory::Structure,
            Self::Parse(_) => ErrorCategory::Parse,
            Self::Io(_) | Self::Csv(_) => ErrorCategory::Io,
            Self::InvalidConfigValue { .. } => ErrorCategory::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;
