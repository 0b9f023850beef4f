// In-memory provider for exercising the search pipeline without the network
use crate::model::ProviderError;
use crate::scraper::payload::SearchPayload;
use crate::scraper::traits::FlightProvider;
use serde_json::Value;
use std::sync::Mutex;

pub struct StubProvider {
    offers: Option<Vec<Value>>,
    pub payloads: Mutex<Vec<SearchPayload>>,
}

impl StubProvider {
    pub fn with_offers(offers: Vec<Value>) -> Self {
        Self {
            offers: Some(offers),
            payloads: Mutex::new(Vec::new()),
        }
    }

    /// A provider whose every call times out.
    pub fn failing() -> Self {
        Self {
            offers: None,
            payloads: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl FlightProvider for StubProvider {
    async fn search(&self, payload: &SearchPayload) -> Result<Vec<Value>, ProviderError> {
        self.payloads.lock().unwrap().push(payload.clone());
        self.offers.clone().ok_or(ProviderError::Timeout)
    }
}
