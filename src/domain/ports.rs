use crate::config::{AreaRange, Messages};
use crate::domain::model::{PredictionRequest, PredictionResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The host document, addressed by element id.
pub trait Page {
    /// Current value of an input; `None` when the page has no such element.
    fn value(&self, id: &str) -> Option<String>;
    fn set_value(&mut self, id: &str, value: &str);
    fn is_checked(&self, id: &str) -> bool;
    fn set_text(&mut self, id: &str, text: &str);
    fn set_hidden(&mut self, id: &str, hidden: bool);
    /// Replace the children of a list element.
    fn set_items(&mut self, id: &str, items: &[String]);
    /// Restore every input to its default value.
    fn reset_inputs(&mut self);
}

#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn area_range(&self) -> AreaRange;
    fn messages(&self) -> &Messages;
}
