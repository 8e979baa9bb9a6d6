use crate::domain::model::{PredictionRequest, PredictionResponse};
use crate::domain::ports::{ConfigProvider, PredictionService};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// POSTs the payload as JSON and parses the JSON body, whatever the status.
pub struct HttpPredictionService {
    client: Client,
    endpoint: String,
}

impl HttpPredictionService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Uses the endpoint the configuration resolved.
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.endpoint())
    }
}

#[async_trait]
impl PredictionService for HttpPredictionService {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        tracing::debug!("Making prediction request to: {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        // 狀態碼不決定成功與否，以回應內容的 success 欄位為準
        tracing::debug!("Prediction response status: {}", response.status());
        let body = response.bytes().await?;
        let parsed: PredictionResponse = serde_json::from_slice(&body)?;

        Ok(parsed)
    }
}
