pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{http::HttpPredictionService, page::MemoryPage};
pub use config::{toml_config::TomlConfig, Settings};
pub use core::controller::{FormController, SubmitOutcome};
pub use utils::error::{FormError, Result};
