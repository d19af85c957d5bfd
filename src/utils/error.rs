use thiserror::Error;

#[derive(Error, Debug)]
pub enum VenueError {
    #[error("External lookup failed ({endpoint}): {source}")]
    ExternalLookupFailure {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

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

    #[error("Invalid capacity bracket '{value}': {reason}")]
    InvalidCapacityBracket { value: String, reason: String },

    #[error("Unknown search mode '{value}'")]
    InvalidSearchMode { value: String },

    #[error("Venue {id} not found")]
    VenueNotFound { id: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl VenueError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            VenueError::ExternalLookupFailure { .. } | VenueError::ApiError(_) => {
                ErrorCategory::Network
            }
            VenueError::ConfigError { .. }
            | VenueError::ConfigValidationError { .. }
            | VenueError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            VenueError::InvalidCapacityBracket { .. }
            | VenueError::InvalidSearchMode { .. }
            | VenueError::VenueNotFound { .. } => ErrorCategory::Input,
            VenueError::IoError(_) | VenueError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 查詢失敗會降級為空結果
            ErrorCategory::Network => ErrorSeverity::Low,
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            VenueError::ExternalLookupFailure { endpoint, .. } => format!(
                "Check that {} is reachable, or search by name or type instead",
                endpoint
            ),
            VenueError::ApiError(_) => "Check network connectivity and retry".to_string(),
            VenueError::IoError(_) => "Check that the file exists and is readable".to_string(),
            VenueError::SerializationError(_) => "Check the JSON data format".to_string(),
            VenueError::ConfigError { .. } | VenueError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax".to_string()
            }
            VenueError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
            VenueError::InvalidCapacityBracket { .. } => {
                "Use a bracket like '100-300' or '500+'".to_string()
            }
            VenueError::InvalidSearchMode { .. } => {
                "Use one of: location, name, type, date".to_string()
            }
            VenueError::VenueNotFound { .. } => {
                "Run without --details to list available venue ids".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            VenueError::ExternalLookupFailure { .. } | VenueError::ApiError(_) => {
                "Location lookup is currently unavailable".to_string()
            }
            VenueError::InvalidCapacityBracket { value, .. } => {
                format!("'{}' is not a valid capacity range", value)
            }
            VenueError::InvalidSearchMode { value } => {
                format!("'{}' is not a search mode", value)
            }
            VenueError::VenueNotFound { id } => format!("No venue with id {}", id),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, VenueError>;
