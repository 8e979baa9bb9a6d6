pub mod controller;
pub mod form;
pub mod page;
pub mod render;
pub mod view;

pub use crate::domain::model::{FormValues, PredictionRequest, PredictionResponse};
pub use crate::domain::ports::{ConfigProvider, Page, PredictionService};
pub use crate::utils::error::Result;
