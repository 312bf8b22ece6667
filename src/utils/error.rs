use thiserror::Error;

#[derive(Error, Debug)]
pub enum HabitabilityError {
    #[error("Failed to load model artifact '{path}': {reason}")]
    ModelLoadError { path: String, reason: String },

    #[error("Failed to load catalog '{path}': {reason}")]
    CatalogLoadError { path: String, reason: String },

    #[error("Inference failed: {message}")]
    InferenceError { message: String },

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Model,
    Catalog,
    Inference,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl HabitabilityError {
    pub fn model_load(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ModelLoadError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn catalog_load(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CatalogLoadError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn inference(message: impl Into<String>) -> Self {
        Self::InferenceError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ModelLoadError { .. } => ErrorCategory::Model,
            Self::CatalogLoadError { .. } | Self::CsvError(_) | Self::ZipError(_) => {
                ErrorCategory::Catalog
            }
            Self::InferenceError { .. } => ErrorCategory::Inference,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Io,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// 決定 CLI 退出碼：Critical 代表程式無法繼續 (模型載入失敗)
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Model => ErrorSeverity::Critical,
            ErrorCategory::Catalog | ErrorCategory::Inference => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ModelLoadError { path, .. } => {
                format!("The habitability model at '{}' could not be loaded", path)
            }
            Self::CatalogLoadError { path, reason } => {
                format!("The planet catalog '{}' is unusable: {}", path, reason)
            }
            Self::InferenceError { message } => {
                format!("The model rejected the input: {}", message)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting for {}: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Model => {
                "Check that --model points to a valid JSON model artifact (format_version 1)"
            }
            ErrorCategory::Catalog => {
                "Check that the catalog is a CSV (or zipped CSV) containing the configured columns"
            }
            ErrorCategory::Inference => "Provide four finite feature values in the expected order",
            ErrorCategory::Io => "Check file paths and permissions",
            ErrorCategory::Configuration => "Review the command-line flags and the TOML config",
        }
    }
}

pub type Result<T> = std::result::Result<T, HabitabilityError>;
