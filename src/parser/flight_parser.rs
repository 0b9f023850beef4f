// Costamar-specific offer extraction
use crate::model::{FlightRecord, SearchRequest};
use crate::normalizer::normalize_amount;
use crate::parser::raw_offer::{RawBaggage, RawFlight, RawFlightOffer, RawPricing};
use crate::utils::{airport_display_name, format_date};
use serde_json::Value;

pub const NOT_AVAILABLE: &str = "N/A";
pub const UNSPECIFIED: &str = "No especificado";
pub const NOT_INCLUDED: &str = "No incluido";
pub const PERSONAL_ITEM_INCLUDED: &str = "Incluido (bolso/mochila)";
pub const PRICE_ON_REQUEST: &str = "Consultar";
pub const ONE_WAY: &str = "Solo ida";
pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_FARE_CLASS: &str = "Economy";

/// Character offsets of `HH:MM` in timestamps like `2026-02-20T06:15:00`.
const TIME_OF_DAY: std::ops::Range<usize> = 11..16;

pub trait Parser {
    fn parse(&self, offers: &[Value], ctx: &SearchRequest) -> Vec<FlightRecord>;
}

pub struct CostamarParser;

impl CostamarParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for CostamarParser {
    fn parse(&self, offers: &[Value], ctx: &SearchRequest) -> Vec<FlightRecord> {
        offers
            .iter()
            .map(|value| extract(&RawFlightOffer::from_value(value), ctx))
            .collect()
    }
}

/// Builds the display record for one offer. Missing or malformed data
/// degrades field by field to its sentinel.
pub fn extract(offer: &RawFlightOffer, ctx: &SearchRequest) -> FlightRecord {
    let (price, currency) = extract_price(offer.pricing.as_ref());
    let depart = ctx.depart_compact();
    let ret = ctx.return_compact();

    let mut record = FlightRecord {
        origin: ctx.origin.clone(),
        origin_name: airport_display_name(&ctx.origin),
        destination: ctx.destination.clone(),
        destination_name: airport_display_name(&ctx.destination),
        depart_date_display: format_date(&depart),
        depart_date: depart,
        return_date_display: ret.as_deref().map_or_else(|| ONE_WAY.to_string(), format_date),
        return_date: ret.unwrap_or_default(),
        adults: ctx.adults,
        children: ctx.children,
        infants: ctx.infants,
        passengers_total: ctx.passengers_total(),
        airline: NOT_AVAILABLE.to_string(),
        flight_number: NOT_AVAILABLE.to_string(),
        departure_time: NOT_AVAILABLE.to_string(),
        arrival_time: NOT_AVAILABLE.to_string(),
        duration: NOT_AVAILABLE.to_string(),
        stops: 0,
        stops_label: stops_label(0),
        checked_baggage: UNSPECIFIED.to_string(),
        carry_on_baggage: UNSPECIFIED.to_string(),
        personal_item: personal_item(),
        fare_class: DEFAULT_FARE_CLASS.to_string(),
        price_display: price_display(price, &currency),
        price,
        currency,
    };

    if let Some(flight) = offer.display_flight() {
        apply_flight(&mut record, flight);
    }

    record
}

fn apply_flight(record: &mut FlightRecord, flight: &RawFlight) {
    if let Some(airline) = &flight.marketing_airline {
        record.airline = non_empty(airline.name.as_deref()).unwrap_or(NOT_AVAILABLE).to_string();
        let code = airline.code.as_deref().unwrap_or("");
        record.flight_number = match flight_number(flight) {
            Some(number) => format!("{}{}", code, number),
            None => NOT_AVAILABLE.to_string(),
        };
    }

    record.departure_time = time_of_day(flight.departure_date_time.as_deref());
    record.arrival_time = time_of_day(flight.arrival_date_time.as_deref());
    record.duration = format_duration(flight.elapsed_time.as_deref());
    record.checked_baggage = checked_baggage(flight.baggage.as_ref());
    record.carry_on_baggage = carry_on_baggage(flight.hand_baggage.as_ref());

    if let Some(brand) = flight
        .branded_fare
        .as_ref()
        .and_then(|fare| non_empty(fare.brand_name.as_deref()))
    {
        record.fare_class = brand.to_string();
    }

    record.stops = flight.segments.len().saturating_sub(1);
    record.stops_label = stops_label(record.stops);
}

/// Top-level flight number, falling back to the first segment's.
fn flight_number(flight: &RawFlight) -> Option<String> {
    scalar_text(flight.flight_number.as_ref()).or_else(|| {
        flight
            .segments
            .first()
            .and_then(|segment| scalar_text(segment.flight_number.as_ref()))
    })
}

fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}

/// First present amount wins: `totalAmount`, `total`, `grandTotal`, then
/// `base + taxes`. Non-positive results mean "price unavailable".
pub fn extract_price(pricing: Option<&RawPricing>) -> (f64, String) {
    let Some(pricing) = pricing else {
        return (0.0, DEFAULT_CURRENCY.to_string());
    };

    let amount = match pricing
        .total_amount
        .as_ref()
        .or(pricing.total.as_ref())
        .or(pricing.grand_total.as_ref())
    {
        Some(value) => normalize_amount(value),
        None => match (&pricing.base, &pricing.taxes) {
            (Some(base), Some(taxes)) => normalize_amount(base) + normalize_amount(taxes),
            _ => 0.0,
        },
    };
    let amount = if amount.is_finite() && amount > 0.0 { amount } else { 0.0 };

    let currency = non_empty(pricing.currency.as_deref())
        .or_else(|| non_empty(pricing.currency_code.as_deref()))
        .unwrap_or(DEFAULT_CURRENCY)
        .to_string();

    (amount, currency)
}

pub fn price_display(price: f64, currency: &str) -> String {
    if price > 0.0 {
        format!("${:.2} {}", price, currency)
    } else {
        PRICE_ON_REQUEST.to_string()
    }
}

/// Slices `HH:MM` out of the provider timestamp. Only timestamps longer
/// than the slice end are accepted.
pub fn time_of_day(timestamp: Option<&str>) -> String {
    match timestamp {
        Some(ts) if ts.chars().count() > TIME_OF_DAY.end => ts
            .chars()
            .skip(TIME_OF_DAY.start)
            .take(TIME_OF_DAY.len())
            .collect(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// `"0145"` → `"1h 45m"`.
pub fn format_duration(elapsed: Option<&str>) -> String {
    let parse = |text: &str| -> Option<String> {
        let hours = text.get(0..2)?;
        let minutes = text.get(2..4)?;
        if !hours.chars().chain(minutes.chars()).all(|c| c.is_ascii_digit()) {
            return None;
        }
        Some(format!("{}h {}m", hours.parse::<u32>().ok()?, minutes.parse::<u32>().ok()?))
    };
    elapsed
        .and_then(parse)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn stops_label(stops: usize) -> String {
    match stops {
        0 => "Directo".to_string(),
        1 => "1 escala".to_string(),
        n => format!("{} escalas", n),
    }
}

#[derive(Debug, PartialEq)]
enum BaggageAllowance {
    Unspecified,
    Pieces(u64),
    Included,
    NotIncluded,
}

fn baggage_allowance(block: Option<&RawBaggage>) -> BaggageAllowance {
    let Some(block) = block else {
        return BaggageAllowance::Unspecified;
    };

    let pieces = piece_count(block.pieces.as_ref());
    if pieces > 0 {
        return BaggageAllowance::Pieces(pieces);
    }

    let description = block.description.as_deref().unwrap_or("").to_uppercase();
    if description.contains("INCLUDED") || description.contains("INCLUIDO") {
        BaggageAllowance::Included
    } else {
        BaggageAllowance::NotIncluded
    }
}

fn piece_count(pieces: Option<&Value>) -> u64 {
    match pieces {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 1.0).map(|f| f as u64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

pub fn checked_baggage(block: Option<&RawBaggage>) -> String {
    match baggage_allowance(block) {
        BaggageAllowance::Unspecified => UNSPECIFIED.to_string(),
        BaggageAllowance::Pieces(n) => format!("{} maleta(s) 23kg", n),
        BaggageAllowance::Included => "1 maleta 23kg".to_string(),
        BaggageAllowance::NotIncluded => NOT_INCLUDED.to_string(),
    }
}

pub fn carry_on_baggage(block: Option<&RawBaggage>) -> String {
    match baggage_allowance(block) {
        BaggageAllowance::Unspecified => UNSPECIFIED.to_string(),
        BaggageAllowance::Pieces(n) => format!("{} pieza(s)", n),
        BaggageAllowance::Included => "1 pieza".to_string(),
        BaggageAllowance::NotIncluded => NOT_INCLUDED.to_string(),
    }
}

/// Every fare carries a personal item, whatever the carry-on allowance.
pub fn personal_item() -> String {
    PERSONAL_ITEM_INCLUDED.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn ctx() -> SearchRequest {
        SearchRequest::new("LIM", "CUZ", "20260220", Some("20260223"), 1, 0, 0).unwrap()
    }

    fn extract_json(value: Value) -> FlightRecord {
        extract(&RawFlightOffer::from_value(&value), &ctx())
    }

    fn full_offer() -> Value {
        json!({
            "pricing": {"totalAmount": "1,234.56", "currency": "PEN"},
            "itinerary": [{
                "flights": [{
                    "marketingAirline": {"name": "LATAM Airlines", "code": "LA"},
                    "flightNumber": "2021",
                    "departureDateTime": "2026-02-20T06:15:00",
                    "arrivalDateTime": "2026-02-20T07:40:00",
                    "elapsedTime": "0125",
                    "baggage": {"pieces": 1},
                    "handBaggage": {"pieces": "1"},
                    "brandedFare": {"brandName": "LIGHT"},
                    "segments": [{"flightNumber": "2021"}]
                }]
            }]
        })
    }

    #[test]
    fn extracts_complete_offer() {
        let record = extract_json(full_offer());

        assert_eq!(record.origin_name, "Lima (LIM)");
        assert_eq!(record.destination_name, "Cusco (CUZ)");
        assert_eq!(record.depart_date_display, "20 Febrero 2026");
        assert_eq!(record.return_date, "20260223");
        assert_eq!(record.return_date_display, "23 Febrero 2026");
        assert_eq!(record.airline, "LATAM Airlines");
        assert_eq!(record.flight_number, "LA2021");
        assert_eq!(record.departure_time, "06:15");
        assert_eq!(record.arrival_time, "07:40");
        assert_eq!(record.duration, "1h 25m");
        assert_eq!(record.stops_label, "Directo");
        assert_eq!(record.checked_baggage, "1 maleta(s) 23kg");
        assert_eq!(record.carry_on_baggage, "1 pieza(s)");
        assert_eq!(record.personal_item, PERSONAL_ITEM_INCLUDED);
        assert_eq!(record.fare_class, "LIGHT");
        assert_eq!(record.price, 1234.56);
        assert_eq!(record.currency, "PEN");
        assert_eq!(record.price_display, "$1234.56 PEN");
    }

    #[test]
    fn empty_offer_uses_sentinels() {
        let record = extract_json(json!({}));

        assert_eq!(record.price, 0.0);
        assert_eq!(record.currency, "USD");
        assert_eq!(record.price_display, "Consultar");
        assert_eq!(record.airline, "N/A");
        assert_eq!(record.flight_number, "N/A");
        assert_eq!(record.departure_time, "N/A");
        assert_eq!(record.duration, "N/A");
        assert_eq!(record.stops, 0);
        assert_eq!(record.stops_label, "Directo");
        assert_eq!(record.checked_baggage, UNSPECIFIED);
        assert_eq!(record.carry_on_baggage, UNSPECIFIED);
        assert_eq!(record.personal_item, PERSONAL_ITEM_INCLUDED);
        assert_eq!(record.fare_class, "Economy");
    }

    #[test]
    fn one_way_context_has_no_return() {
        let ctx = SearchRequest::new("LIM", "CUZ", "20260218", None, 2, 1, 0).unwrap();
        let record = extract(&RawFlightOffer::default(), &ctx);
        assert_eq!(record.return_date, "");
        assert_eq!(record.return_date_display, "Solo ida");
        assert_eq!(record.passengers_total, 3);
    }

    #[test]
    fn malformed_blocks_do_not_abort_extraction() {
        let record = extract_json(json!({
            "pricing": ["oops"],
            "itinerary": [{"flights": [{
                "marketingAirline": "LA",
                "departureDateTime": 1234,
                "elapsedTime": "1h",
                "segments": {"count": 2}
            }]}]
        }));
        assert_eq!(record.price_display, "Consultar");
        assert_eq!(record.airline, "N/A");
        assert_eq!(record.departure_time, "N/A");
        assert_eq!(record.duration, "N/A");
        assert_eq!(record.stops, 0);
    }

    #[test]
    fn only_first_leg_and_flight_are_displayed() {
        let record = extract_json(json!({
            "itinerary": [
                {"flights": [
                    {"marketingAirline": {"name": "Sky", "code": "H2"}, "flightNumber": 5301},
                    {"marketingAirline": {"name": "Other", "code": "XX"}}
                ]},
                {"flights": [{"marketingAirline": {"name": "Return", "code": "RR"}}]}
            ]
        }));
        assert_eq!(record.airline, "Sky");
        assert_eq!(record.flight_number, "H25301");
    }

    #[test]
    fn flight_number_falls_back_to_first_segment() {
        let record = extract_json(json!({
            "itinerary": [{"flights": [{
                "marketingAirline": {"name": "JetSMART", "code": "JA"},
                "segments": [{"flightNumber": "7001"}, {"flightNumber": "7002"}]
            }]}]
        }));
        assert_eq!(record.flight_number, "JA7001");
        assert_eq!(record.stops_label, "1 escala");
    }

    #[test_case(json!({"totalAmount": 150, "total": "99"}), 150.0; "total amount first")]
    #[test_case(json!({"total": "95.00", "grandTotal": 80}), 95.0; "then total")]
    #[test_case(json!({"grandTotal": "1.234,56"}), 1234.56; "then grand total")]
    #[test_case(json!({"base": "100.50", "taxes": 20}), 120.5; "then base plus taxes")]
    #[test_case(json!({"base": 100}), 0.0; "base without taxes")]
    #[test_case(json!({"totalAmount": null, "total": 70}), 70.0; "null is absent")]
    #[test_case(json!({"totalAmount": "garbage", "total": 70}), 0.0; "present but unparseable wins")]
    #[test_case(json!({"totalAmount": -5}), 0.0; "negative is unavailable")]
    #[test_case(json!({"base": 1.7e308, "taxes": 1.7e308}), 0.0; "overflowing sum is unavailable")]
    fn price_precedence(pricing: Value, expected: f64) {
        let record = extract_json(json!({ "pricing": pricing }));
        assert!((record.price - expected).abs() < 1e-9);
    }

    #[test]
    fn currency_defaults_to_usd() {
        let record = extract_json(json!({"pricing": {"total": 10, "currency": ""}}));
        assert_eq!(record.currency, "USD");
        let record = extract_json(json!({"pricing": {"total": 10, "currencyCode": "PEN"}}));
        assert_eq!(record.currency, "PEN");
        assert_eq!(record.price_display, "$10.00 PEN");
    }

    #[test_case(1, "Directo")]
    #[test_case(2, "1 escala")]
    #[test_case(4, "3 escalas")]
    fn stop_label_from_segment_count(count: usize, expected: &str) {
        let segments: Vec<Value> = (0..count).map(|_| json!({})).collect();
        let record = extract_json(json!({"itinerary": [{"flights": [{"segments": segments}]}]}));
        assert_eq!(record.stops_label, expected);
        assert_eq!(record.stops, count - 1);
    }

    #[test_case(Some("2026-02-20T06:15:00"), "06:15"; "provider timestamp")]
    #[test_case(Some("2026-02-20T06:15:00.000Z"), "06:15"; "with millis")]
    #[test_case(Some("2026-02-20T06:15"), "N/A"; "exactly slice length")]
    #[test_case(Some(""), "N/A"; "empty")]
    #[test_case(None, "N/A"; "absent")]
    fn time_of_day_slices_fixed_offsets(input: Option<&str>, expected: &str) {
        assert_eq!(time_of_day(input), expected);
    }

    #[test_case(Some("0145"), "1h 45m")]
    #[test_case(Some("1230"), "12h 30m")]
    #[test_case(Some("45"), "N/A")]
    #[test_case(Some("ab45"), "N/A")]
    #[test_case(None, "N/A")]
    fn duration_from_elapsed_time(input: Option<&str>, expected: &str) {
        assert_eq!(format_duration(input), expected);
    }

    #[test_case(json!({"pieces": 2}), "2 maleta(s) 23kg", "2 pieza(s)"; "numeric pieces")]
    #[test_case(json!({"pieces": "0", "description": "1PC included"}), "1 maleta 23kg", "1 pieza"; "included description")]
    #[test_case(json!({"description": "Incluido en tarifa"}), "1 maleta 23kg", "1 pieza"; "spanish description")]
    #[test_case(json!({"pieces": 0}), "No incluido", "No incluido"; "zero pieces")]
    #[test_case(json!({}), "No incluido", "No incluido"; "empty block")]
    fn baggage_rules(block: Value, checked: &str, carry_on: &str) {
        let record = extract_json(json!({"itinerary": [{"flights": [{
            "baggage": block.clone(),
            "handBaggage": block
        }]}]}));
        assert_eq!(record.checked_baggage, checked);
        assert_eq!(record.carry_on_baggage, carry_on);
    }

    #[test]
    fn missing_carry_on_block_is_unspecified_not_excluded() {
        let record = extract_json(json!({"itinerary": [{"flights": [{
            "baggage": {"pieces": 0}
        }]}]}));
        assert_eq!(record.checked_baggage, "No incluido");
        assert_eq!(record.carry_on_baggage, "No especificado");
        assert_eq!(record.personal_item, PERSONAL_ITEM_INCLUDED);
    }

    #[test]
    fn parser_maps_every_offer() {
        let offers = vec![full_offer(), json!(null), json!({"pricing": {"total": 5}})];
        let records = CostamarParser::new().parse(&offers, &ctx());
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].price_display, "Consultar");
        assert_eq!(records[2].price, 5.0);
    }
}
