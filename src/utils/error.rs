use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Request for `{entity}` to {url} returned {status}: {reason}")]
    HttpStatusError {
        entity: String,
        url: String,
        status: u16,
        reason: String,
    },

    #[error("No data available for `{entity}`")]
    UnavailableData { entity: String },

    #[error("Operation not supported for this input shape (`{entity}`): {message}")]
    UnsupportedShape { entity: String, message: String },

    #[error("You must provide a list of team members")]
    NoParticipants,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Storage,
    Configuration,
    Data,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl RecommendError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) | Self::HttpStatusError { .. } => ErrorCategory::Network,
            Self::IoError(_) => ErrorCategory::Storage,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::SerializationError(_)
            | Self::UnavailableData { .. }
            | Self::UnsupportedShape { .. } => ErrorCategory::Data,
            Self::NoParticipants => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ApiError(_) | Self::HttpStatusError { .. } | Self::UnavailableData { .. } => {
                ErrorSeverity::Medium
            }
            Self::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check your network connection and that the source URLs are reachable"
            }
            ErrorCategory::Storage => "Check that the paths exist and are readable/writable",
            ErrorCategory::Configuration => "Review the command-line flags or the TOML config file",
            ErrorCategory::Data => {
                "Make sure each source is a JSON array of objects keyed by the rearrange key"
            }
            ErrorCategory::Input => "Pass names with --list 'a b,c d' or answer the prompt",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(_) | Self::HttpStatusError { .. } => {
                format!("Could not download the reference data: {}", self)
            }
            Self::UnsupportedShape { entity, .. } => {
                format!("The `{}` data is not in a supported shape", entity)
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecommendError>;
