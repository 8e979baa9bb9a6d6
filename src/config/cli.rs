use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::domain::model::FormValues;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "house-price-form")]
#[command(about = "Fill the house price form and request an estimate")]
pub struct CliConfig {
    /// Prediction endpoint; overrides the config file
    #[arg(long)]
    pub endpoint: Option<String>,

    /// TOML file with [service], [validation] and [messages] sections
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, default_value = "")]
    pub area: String,

    #[arg(long, default_value = "")]
    pub bedrooms: String,

    #[arg(long, default_value = "")]
    pub bathrooms: String,

    #[arg(long, default_value = "")]
    pub stories: String,

    #[arg(long, default_value = "")]
    pub parking: String,

    #[arg(long)]
    pub mainroad: bool,

    #[arg(long)]
    pub guestroom: bool,

    #[arg(long)]
    pub basement: bool,

    #[arg(long)]
    pub hotwaterheating: bool,

    #[arg(long)]
    pub airconditioning: bool,

    #[arg(long)]
    pub prefarea: bool,

    /// furnished, semi-furnished or unfurnished
    #[arg(long = "furnishing", default_value = "")]
    pub furnishingstatus: String,
}

impl CliConfig {
    /// 合併設定：預設值 < 設定檔 < 命令列參數
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_settings(),
            None => Settings::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            settings.endpoint = endpoint.clone();
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn form_values(&self) -> FormValues {
        FormValues {
            area: self.area.clone(),
            bedrooms: self.bedrooms.clone(),
            bathrooms: self.bathrooms.clone(),
            stories: self.stories.clone(),
            parking: self.parking.clone(),
            mainroad: self.mainroad,
            guestroom: self.guestroom,
            basement: self.basement,
            hotwaterheating: self.hotwaterheating,
            airconditioning: self.airconditioning,
            prefarea: self.prefarea,
            furnishingstatus: self.furnishingstatus.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ENDPOINT;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_form_arguments() {
        let config = CliConfig::parse_from([
            "house-price-form",
            "--area",
            "7420",
            "--bedrooms",
            "4",
            "--bathrooms",
            "2",
            "--stories",
            "3",
            "--parking",
            "2",
            "--mainroad",
            "--prefarea",
            "--furnishing",
            "semi-furnished",
        ]);

        let values = config.form_values();
        assert_eq!(values.area, "7420");
        assert!(values.mainroad);
        assert!(values.prefarea);
        assert!(!values.basement);
        assert_eq!(values.furnishingstatus, "semi-furnished");
        assert_eq!(config.settings().unwrap().endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_endpoint_flag_overrides_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[service]\nendpoint = \"http://file.example.com/predict\"\n")
            .unwrap();

        let from_file = CliConfig::parse_from([
            "house-price-form",
            "--config",
            temp_file.path().to_str().unwrap(),
        ]);
        assert_eq!(
            from_file.settings().unwrap().endpoint,
            "http://file.example.com/predict"
        );

        let overridden = CliConfig::parse_from([
            "house-price-form",
            "--config",
            temp_file.path().to_str().unwrap(),
            "--endpoint",
            "https://flag.example.com/predict",
        ]);
        assert_eq!(
            overridden.settings().unwrap().endpoint,
            "https://flag.example.com/predict"
        );
    }

    #[test]
    fn test_invalid_endpoint_fails_settings() {
        let config = CliConfig::parse_from(["house-price-form", "--endpoint", "not a url"]);
        assert!(config.settings().is_err());
    }
}
