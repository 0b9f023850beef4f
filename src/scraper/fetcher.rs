use crate::config::ProviderConfig;
use crate::model::ProviderError;
use crate::scraper::payload::SearchPayload;
use crate::scraper::traits::FlightProvider;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, ORIGIN, REFERER};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

pub struct CostamarClient {
    client: Client,
    endpoint: String,
}

impl CostamarClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
        headers.insert(ORIGIN, header_value(&config.origin)?);
        headers.insert(REFERER, header_value(&config.referer)?);

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ProviderError::HttpError(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

fn header_value(value: &str) -> Result<HeaderValue, ProviderError> {
    HeaderValue::from_str(value).map_err(|e| ProviderError::HttpError(e.to_string()))
}

#[async_trait::async_trait]
impl FlightProvider for CostamarClient {
    async fn search(&self, payload: &SearchPayload) -> Result<Vec<Value>, ProviderError> {
        debug!("POST {} terminal={}", self.endpoint, payload.terminal_id);

        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout
                } else {
                    ProviderError::HttpError(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(ProviderError::InvalidResponse(response.status().as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::DecodeError(e.to_string()))?;

        Ok(offers_from_body(body))
    }
}

/// The offers live under `data`; any other shape means no offers.
pub fn offers_from_body(body: Value) -> Vec<Value> {
    match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(offers)) => offers,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
