use crate::model::ProviderError;
use crate::scraper::payload::SearchPayload;
use serde_json::Value;

/// One outbound search call. Returns the provider's raw offers.
#[async_trait::async_trait]
pub trait FlightProvider: Send + Sync {
    async fn search(&self, payload: &SearchPayload) -> Result<Vec<Value>, ProviderError>;
}
