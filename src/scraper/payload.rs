// Request body for the provider's flight-search endpoint
use crate::model::SearchRequest;
use chrono::NaiveDate;
use rand::seq::IndexedRandom;
use serde::Serialize;

/// UTC hour the provider expects its date-range timestamps to carry.
/// Mirrors the provider contract (`T05:00:00.000Z`), not noon.
const PROVIDER_DATE_HOUR_UTC: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum FlightType {
    #[serde(rename = "OW")]
    OneWay,
    #[serde(rename = "RT")]
    RoundTrip,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryLeg {
    pub origin: String,
    pub destination: String,
    /// `YYYYMMDD`
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Passengers {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPayload {
    pub flight_type: FlightType,
    pub terminal_id: String,
    pub itinerary: Vec<ItineraryLeg>,
    pub start_date: String,
    pub end_date: String,
    pub passengers: Passengers,
    pub has_validation_token: bool,
}

/// Draws the terminal identity for one request.
pub fn pick_terminal(pool: &[String]) -> Option<&str> {
    pool.choose(&mut rand::rng()).map(String::as_str)
}

pub fn build_payload(req: &SearchRequest, terminal_id: &str) -> SearchPayload {
    let outbound = ItineraryLeg {
        origin: req.origin.clone(),
        destination: req.destination.clone(),
        date: req.depart_compact(),
    };

    let (flight_type, itinerary) = match req.return_compact() {
        Some(return_date) => {
            let inbound = ItineraryLeg {
                origin: req.destination.clone(),
                destination: req.origin.clone(),
                date: return_date,
            };
            (FlightType::RoundTrip, vec![outbound, inbound])
        }
        None => (FlightType::OneWay, vec![outbound]),
    };

    let start_date = provider_timestamp(req.depart_date);
    let end_date = req
        .return_date
        .map(provider_timestamp)
        .unwrap_or_else(|| start_date.clone());

    SearchPayload {
        flight_type,
        terminal_id: terminal_id.to_string(),
        itinerary,
        start_date,
        end_date,
        passengers: Passengers {
            adults: req.adults,
            children: req.children,
            infants: req.infants,
        },
        has_validation_token: false,
    }
}

/// `2026-02-20` → `2026-02-20T05:00:00.000Z`
fn provider_timestamp(date: NaiveDate) -> String {
    format!(
        "{}T{:02}:00:00.000Z",
        date.format("%Y-%m-%d"),
        PROVIDER_DATE_HOUR_UTC
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn round_trip_has_mirrored_return_leg() {
        let req = SearchRequest::new("LIM", "CUZ", "20260220", Some("20260223"), 1, 0, 0).unwrap();
        let payload = build_payload(&req, "0100140692");

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "flightType": "RT",
                "terminalId": "0100140692",
                "itinerary": [
                    {"origin": "LIM", "destination": "CUZ", "date": "20260220"},
                    {"origin": "CUZ", "destination": "LIM", "date": "20260223"}
                ],
                "startDate": "2026-02-20T05:00:00.000Z",
                "endDate": "2026-02-23T05:00:00.000Z",
                "passengers": {"adults": 1, "children": 0, "infants": 0},
                "hasValidationToken": false
            })
        );
    }

    #[test]
    fn one_way_has_single_leg() {
        let req = SearchRequest::new("LIM", "CUZ", "20260218", None, 2, 1, 1).unwrap();
        let payload = build_payload(&req, "0536830376");

        assert_eq!(payload.flight_type, FlightType::OneWay);
        assert_eq!(payload.itinerary.len(), 1);
        assert_eq!(payload.end_date, payload.start_date);
        assert_eq!(payload.passengers.infants, 1);
        assert_eq!(serde_json::to_value(payload.flight_type).unwrap(), json!("OW"));
    }

    #[test]
    fn terminal_is_drawn_from_pool() {
        let pool = vec!["A".to_string(), "B".to_string()];
        for _ in 0..20 {
            let picked = pick_terminal(&pool).unwrap();
            assert!(picked == "A" || picked == "B");
        }
        assert_eq!(pick_terminal(&[]), None);
    }
}
