use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardGenError {
    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

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

    #[error("Invalid network profile '{network}': {reason}")]
    ProfileError { network: String, reason: String },

    #[error("Rendering error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Output,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CardGenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CardGenError::ConfigError { .. }
            | CardGenError::ConfigValidationError { .. }
            | CardGenError::InvalidConfigValueError { .. }
            | CardGenError::ProfileError { .. } => ErrorCategory::Configuration,
            CardGenError::IoError(_) => ErrorCategory::Output,
            CardGenError::CsvError(_)
            | CardGenError::SerializationError(_)
            | CardGenError::RenderError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CardGenError::ConfigError { .. } | CardGenError::ConfigValidationError { .. } => {
                "Check the config file exists and is valid TOML"
            }
            CardGenError::InvalidConfigValueError { .. } => {
                "Fix the highlighted value or drop it to fall back to the default"
            }
            CardGenError::ProfileError { .. } => {
                "Prefixes must be digits only and shorter than the card length; \
                 length must be 12-19 and cvv_length 3 or 4"
            }
            CardGenError::IoError(_) => "Make sure stdout is writable (e.g. the pipe is still open)",
            CardGenError::CsvError(_)
            | CardGenError::SerializationError(_)
            | CardGenError::RenderError { .. } => {
                "Retry with another output format and report the problem"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Output => format!("Could not write the generated cards: {}", self),
            ErrorCategory::Internal => format!("Internal error while rendering cards: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, CardGenError>;
