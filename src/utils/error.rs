use thiserror::Error;

#[derive(Error, Debug)]
pub enum CountError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Output error: {message}")]
    OutputError { message: String },

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
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Output,
}

impl CountError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CountError::InvalidArgument { .. } => ErrorCategory::Input,
            CountError::ConfigError { .. }
            | CountError::ConfigValidationError { .. }
            | CountError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CountError::IoError(_) => ErrorCategory::Io,
            CountError::SerializationError(_)
            | CountError::CsvError(_)
            | CountError::OutputError { .. } => ErrorCategory::Output,
        }
    }

    /// Process exit status for the binary.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::Io | ErrorCategory::Output => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CountError::InvalidArgument { message } => {
                format!("The input could not be read as text: {}", message)
            }
            CountError::IoError(e) => match e.kind() {
                std::io::ErrorKind::NotFound => format!("File not found: {}", e),
                std::io::ErrorKind::PermissionDenied => format!("Permission denied: {}", e),
                _ => format!("File system error: {}", e),
            },
            CountError::SerializationError(_)
            | CountError::CsvError(_)
            | CountError::OutputError { .. } => format!("Could not render the result: {}", self),
            CountError::ConfigError { .. }
            | CountError::ConfigValidationError { .. }
            | CountError::InvalidConfigValueError { .. } => {
                format!("Invalid configuration: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Make sure the input is UTF-8 encoded text",
            ErrorCategory::Configuration => {
                "Check the command line flags and the TOML config file (see --help)"
            }
            ErrorCategory::Io => "Check that the path exists and is readable/writable",
            ErrorCategory::Output => "Try a different --format or output path",
        }
    }
}

pub type Result<T> = std::result::Result<T, CountError>;
