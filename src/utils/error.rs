use crate::config::Messages;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Required field is empty: {field}")]
    MissingField { field: String },

    #[error("Area {value} is outside the allowed range {min}..={max}")]
    AreaOutOfRange { value: f64, min: f64, max: f64 },

    #[error("Invalid value for {field}: {value}")]
    InvalidChoice { field: String, value: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed prediction response: {message}")]
    MalformedResponse { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 表單輸入未通過檢查，請求不會送出
    Validation,
    /// 無法連線或無法解析回應
    Transport,
    Configuration,
}

impl FormError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FormError::MissingField { .. }
            | FormError::AreaOutOfRange { .. }
            | FormError::InvalidChoice { .. } => ErrorCategory::Validation,
            FormError::ApiError(_)
            | FormError::SerializationError(_)
            | FormError::MalformedResponse { .. } => ErrorCategory::Transport,
            FormError::IoError(_)
            | FormError::ConfigError { .. }
            | FormError::ConfigValidationError { .. }
            | FormError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }

    /// 給終端使用者看的訊息（不含技術細節），文字取自設定的 `Messages`
    pub fn user_friendly_message(&self, messages: &Messages) -> String {
        match self {
            FormError::AreaOutOfRange { min, max, .. } => area_range_message(*min, *max),
            _ => match self.category() {
                ErrorCategory::Validation => messages.missing_fields.clone(),
                ErrorCategory::Transport => messages.connection_failed.clone(),
                ErrorCategory::Configuration => self.to_string(),
            },
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => "Check the form values and submit again",
            ErrorCategory::Transport => "Verify the prediction endpoint is reachable",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
        }
    }
}

pub fn area_range_message(min: f64, max: f64) -> String {
    format!("Area must be between {} and {} sq ft", min, max)
}

pub type Result<T> = std::result::Result<T, FormError>;
