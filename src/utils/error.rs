use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Batch processing error: {message}")]
    ProcessingError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

impl PricingError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } | Self::ProcessingError { .. } => ErrorCategory::Input,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } | Self::TomlError(_) => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) | Self::SerializationError(_) | Self::CsvError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => {
                "Use a positive area, a complexity level between 1 and 5 and a positive total"
            }
            Self::ProcessingError { .. } => "Fix the reported row in the input file and retry",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Check the [rates] section of the configuration file"
            }
            Self::TomlError(_) => "Make sure the configuration file is valid TOML",
            Self::IoError(_) => "Check that the file exists and is readable/writable",
            Self::SerializationError(_) | Self::CsvError(_) => {
                "Check the input data format (CSV columns: area,complexity_level,referral_applies,apply_discount)"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PricingError>;
