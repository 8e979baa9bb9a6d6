use crate::config::{
    AreaRange, Messages, Settings, DEFAULT_AREA_MAX, DEFAULT_AREA_MIN, DEFAULT_ENDPOINT,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{FormError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub messages: Messages,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub area_min: Option<f64>,
    pub area_max: Option<f64>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            area_min: Some(DEFAULT_AREA_MIN),
            area_max: Some(DEFAULT_AREA_MAX),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FormError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FormError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PREDICT_ENDPOINT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FormError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn into_settings(self) -> Settings {
        let area_range = self.area_range();
        Settings {
            endpoint: self.service.endpoint,
            area_range,
            messages: self.messages,
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn endpoint(&self) -> &str {
        &self.service.endpoint
    }

    fn area_range(&self) -> AreaRange {
        AreaRange {
            min: self.validation.area_min.unwrap_or(DEFAULT_AREA_MIN),
            max: self.validation.area_max.unwrap_or(DEFAULT_AREA_MAX),
        }
    }

    fn messages(&self) -> &Messages {
        &self.messages
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_settings().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[service]
endpoint = "https://api.example.com/predict"

[validation]
area_min = 1000
area_max = 20000.5

[messages]
missing_fields = "Fill everything in"
generic_failure = "Prediction failed"
connection_failed = "Service unreachable"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.endpoint(), "https://api.example.com/predict");
        assert_eq!(
            config.area_range(),
            AreaRange {
                min: 1000.0,
                max: 20000.5
            }
        );
        assert_eq!(config.messages().connection_failed, "Service unreachable");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.area_range(), AreaRange::default());
        assert_eq!(config.messages(), &Messages::default());
    }

    #[test]
    fn test_partial_messages_keep_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
[messages]
generic_failure = "Something went wrong"
"#,
        )
        .unwrap();

        assert_eq!(config.messages().generic_failure, "Something went wrong");
        assert_eq!(
            config.messages().missing_fields,
            Messages::default().missing_fields
        );
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("HPF_TEST_ENDPOINT", "https://test.api.com/predict");

        let toml_content = r#"
[service]
endpoint = "${HPF_TEST_ENDPOINT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.endpoint(), "https://test.api.com/predict");

        std::env::remove_var("HPF_TEST_ENDPOINT");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[service]
endpoint = "invalid-url"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_reports_parse_error() {
        let result = TomlConfig::from_toml_str("[service\nendpoint = 1");
        assert!(matches!(
            result,
            Err(FormError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[service]
endpoint = "http://127.0.0.1:5000/predict"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.endpoint(), "http://127.0.0.1:5000/predict");
    }
}
