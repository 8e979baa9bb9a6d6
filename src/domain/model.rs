use crate::utils::error::{FormError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw field values as the page reports them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub area: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub stories: String,
    pub parking: String,
    pub mainroad: bool,
    pub guestroom: bool,
    pub basement: bool,
    pub hotwaterheating: bool,
    pub airconditioning: bool,
    pub prefarea: bool,
    pub furnishingstatus: String,
}

/// Checkbox state on the wire: always the literal "yes" or "no".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl From<bool> for YesNo {
    fn from(checked: bool) -> Self {
        if checked {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FurnishingStatus {
    Furnished,
    SemiFurnished,
    Unfurnished,
}

impl FurnishingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FurnishingStatus::Furnished => "furnished",
            FurnishingStatus::SemiFurnished => "semi-furnished",
            FurnishingStatus::Unfurnished => "unfurnished",
        }
    }
}

impl fmt::Display for FurnishingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FurnishingStatus {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "furnished" => Ok(FurnishingStatus::Furnished),
            "semi-furnished" => Ok(FurnishingStatus::SemiFurnished),
            "unfurnished" => Ok(FurnishingStatus::Unfurnished),
            _ => Err(FormError::InvalidChoice {
                field: "furnishingstatus".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// The payload sent to the prediction endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub area: f64,
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub stories: f64,
    pub parking: f64,
    pub mainroad: YesNo,
    pub guestroom: YesNo,
    pub basement: YesNo,
    pub hotwaterheating: YesNo,
    pub airconditioning: YesNo,
    pub prefarea: YesNo,
    pub furnishingstatus: FurnishingStatus,
}

/// Normalized feature values echoed back by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturesUsed {
    pub area: f64,
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub stories: f64,
    pub parking: f64,
    #[serde(default, deserialize_with = "flag")]
    pub mainroad: bool,
    #[serde(default, deserialize_with = "flag")]
    pub guestroom: bool,
    #[serde(default, deserialize_with = "flag")]
    pub basement: bool,
    #[serde(default, deserialize_with = "flag")]
    pub hotwaterheating: bool,
    #[serde(default, deserialize_with = "flag")]
    pub airconditioning: bool,
    #[serde(default, deserialize_with = "flag")]
    pub prefarea: bool,
    pub furnishingstatus: String,
}

// 後端可能回傳 true/false，也可能原樣回傳 "yes"/"no"
fn flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "yes" | "true" => Ok(true),
            "no" | "false" | "" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected yes/no, got {:?}",
                other
            ))),
        },
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub success: bool,
    pub formatted_price: Option<String>,
    pub predicted_price: Option<f64>,
    pub features_used: Option<FeaturesUsed>,
    pub error: Option<String>,
}

/// What a response means for the display.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    Estimate {
        formatted_price: String,
        features: FeaturesUsed,
    },
    Rejected {
        error: Option<String>,
    },
}

impl PredictionResponse {
    /// A success flag without a price or features cannot be rendered and is
    /// reported as a malformed response.
    pub fn into_outcome(self) -> Result<PredictionOutcome> {
        if !self.success {
            let error = self.error.filter(|e| !e.trim().is_empty());
            return Ok(PredictionOutcome::Rejected { error });
        }

        let formatted_price = self.formatted_price.ok_or_else(|| FormError::MalformedResponse {
            message: "success response without formatted_price".to_string(),
        })?;
        let features = self.features_used.ok_or_else(|| FormError::MalformedResponse {
            message: "success response without features_used".to_string(),
        })?;

        Ok(PredictionOutcome::Estimate {
            formatted_price,
            features,
        })
    }
}
