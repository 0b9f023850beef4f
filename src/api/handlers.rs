use crate::api::cities::iata_for_city;
use crate::api::error::ApiError;
use crate::api::AppState;
use crate::model::{FlightRecord, SearchRequest};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

pub const NO_FLIGHTS: &str = "No se encontraron vuelos";

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuoteBody {
    pub origen: String,
    pub destino: String,
    pub fecha_ida: String,
    /// Number or numeric string; absent means one adult.
    pub adultos: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vuelos: Option<Vec<FlightRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QuoteResponse {
    pub fn found(flights: Vec<FlightRecord>) -> Self {
        Self {
            success: true,
            vuelos: Some(flights),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            vuelos: None,
            error: Some(message.into()),
        }
    }
}

pub async fn quote(
    State(state): State<AppState>,
    body: Result<Json<QuoteBody>, JsonRejection>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let adults = passenger_count(body.adultos.as_ref())?;
    let (Some(origin), Some(destination)) =
        (iata_for_city(&body.origen), iata_for_city(&body.destino))
    else {
        return Err(ApiError::CityNotFound);
    };

    let request = SearchRequest::new(origin, destination, &body.fecha_ida, None, adults, 0, 0)?;
    info!("🔍 Quote: {} → {} ({} passengers)", origin, destination, adults);

    let flights = state.search.search(&request, state.top).await;
    if flights.is_empty() {
        return Ok(Json(QuoteResponse::failure(NO_FLIGHTS)));
    }

    info!("✅ {} flights found", flights.len());
    Ok(Json(QuoteResponse::found(flights)))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}

fn passenger_count(value: Option<&Value>) -> Result<u32, ApiError> {
    let Some(value) = value else {
        return Ok(1);
    };
    let invalid = || ApiError::InvalidPassengers(value.to_string());
    match value {
        Value::Null => Ok(1),
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(invalid),
        Value::String(s) => s.trim().parse().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}
