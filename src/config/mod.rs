#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{area_range_message, FormError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/predict";
pub const DEFAULT_AREA_MIN: f64 = 1650.0;
pub const DEFAULT_AREA_MAX: f64 = 16200.0;

/// Accepted area in square feet, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaRange {
    pub min: f64,
    pub max: f64,
}

impl Default for AreaRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_AREA_MIN,
            max: DEFAULT_AREA_MAX,
        }
    }
}

impl AreaRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn message(&self) -> String {
        area_range_message(self.min, self.max)
    }
}

/// User-facing texts. Every displayed message gets the `ERROR_PREFIX`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub missing_fields: String,
    pub generic_failure: String,
    pub connection_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            missing_fields: "Please fill all required fields correctly".to_string(),
            generic_failure: "An error occurred during prediction".to_string(),
            connection_failed:
                "Failed to connect to server. Make sure the prediction service is running"
                    .to_string(),
        }
    }
}

pub const ERROR_PREFIX: &str = "❌ ";

/// Resolved settings handed to the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub endpoint: String,
    pub area_range: AreaRange,
    pub messages: Messages,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            area_range: AreaRange::default(),
            messages: Messages::default(),
        }
    }
}

impl Settings {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl ConfigProvider for Settings {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn area_range(&self) -> AreaRange {
        self.area_range
    }

    fn messages(&self) -> &Messages {
        &self.messages
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("service.endpoint", &self.endpoint)?;

        let range = self.area_range;
        validate_range("validation.area_min", range.min, 0.0, f64::MAX)?;
        if !range.min.is_finite() || !range.max.is_finite() || range.min >= range.max {
            return Err(FormError::InvalidConfigValueError {
                field: "validation.area_min".to_string(),
                value: format!("{}..{}", range.min, range.max),
                reason: "area_min must be below area_max".to_string(),
            });
        }

        validate_non_empty_string("messages.missing_fields", &self.messages.missing_fields)?;
        validate_non_empty_string("messages.generic_failure", &self.messages.generic_failure)?;
        validate_non_empty_string(
            "messages.connection_failed",
            &self.messages.connection_failed,
        )?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;
