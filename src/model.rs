// Core structs: SearchRequest, FlightRecord and the error types
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// Date layout used by search requests and by the provider itinerary legs.
pub const COMPACT_DATE_FORMAT: &str = "%Y%m%d";

/// Validated parameters of a single flight search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub origin: String,
    pub destination: String,
    pub depart_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl SearchRequest {
    /// Builds a request from raw inputs. Dates must be 8-digit `YYYYMMDD`
    /// calendar dates and at least one adult must travel.
    pub fn new(
        origin: &str,
        destination: &str,
        depart_date: &str,
        return_date: Option<&str>,
        adults: u32,
        children: u32,
        infants: u32,
    ) -> Result<Self, RequestError> {
        if adults == 0 {
            return Err(RequestError::NoAdults);
        }

        let return_date = match return_date.map(str::trim).filter(|d| !d.is_empty()) {
            Some(date) => Some(parse_compact_date(date)?),
            None => None,
        };

        Ok(Self {
            origin: parse_iata(origin)?,
            destination: parse_iata(destination)?,
            depart_date: parse_compact_date(depart_date)?,
            return_date,
            adults,
            children,
            infants,
        })
    }

    pub fn is_round_trip(&self) -> bool {
        self.return_date.is_some()
    }

    pub fn passengers_total(&self) -> u32 {
        self.adults + self.children + self.infants
    }

    pub fn depart_compact(&self) -> String {
        self.depart_date.format(COMPACT_DATE_FORMAT).to_string()
    }

    pub fn return_compact(&self) -> Option<String> {
        self.return_date
            .map(|d| d.format(COMPACT_DATE_FORMAT).to_string())
    }
}

fn parse_iata(code: &str) -> Result<String, RequestError> {
    let code = code.trim();
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(RequestError::InvalidAirport(code.to_string()))
    }
}

fn parse_compact_date(date: &str) -> Result<NaiveDate, RequestError> {
    let date = date.trim();
    if date.len() != 8 || !date.chars().all(|c| c.is_ascii_digit()) {
        return Err(RequestError::InvalidDate(date.to_string()));
    }
    NaiveDate::parse_from_str(date, COMPACT_DATE_FORMAT)
        .map_err(|_| RequestError::InvalidDate(date.to_string()))
}

/// Normalized, display-ready flight offer. Serialized with the Spanish keys
/// the booking front-end and the CSV export expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightRecord {
    #[serde(rename = "origen")]
    pub origin: String,
    #[serde(rename = "origen_nombre")]
    pub origin_name: String,
    #[serde(rename = "destino")]
    pub destination: String,
    #[serde(rename = "destino_nombre")]
    pub destination_name: String,
    #[serde(rename = "fecha_ida")]
    pub depart_date: String,
    #[serde(rename = "fecha_ida_formato")]
    pub depart_date_display: String,
    #[serde(rename = "fecha_vuelta")]
    pub return_date: String,
    #[serde(rename = "fecha_vuelta_formato")]
    pub return_date_display: String,
    #[serde(rename = "adultos")]
    pub adults: u32,
    #[serde(rename = "ninos")]
    pub children: u32,
    #[serde(rename = "infantes")]
    pub infants: u32,
    #[serde(rename = "pasajeros_total")]
    pub passengers_total: u32,
    #[serde(rename = "aerolinea")]
    pub airline: String,
    #[serde(rename = "numero_vuelo")]
    pub flight_number: String,
    #[serde(rename = "hora_salida")]
    pub departure_time: String,
    #[serde(rename = "hora_llegada")]
    pub arrival_time: String,
    #[serde(rename = "duracion")]
    pub duration: String,
    #[serde(rename = "escalas")]
    pub stops: usize,
    #[serde(rename = "escalas_texto")]
    pub stops_label: String,
    #[serde(rename = "equipaje_bodega")]
    pub checked_baggage: String,
    #[serde(rename = "equipaje_mano")]
    pub carry_on_baggage: String,
    pub personal_item: String,
    #[serde(rename = "clase")]
    pub fare_class: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "moneda")]
    pub currency: String,
    #[serde(rename = "precio_formato")]
    pub price_display: String,
}

impl FlightRecord {
    /// A zero price means the provider gave no usable amount.
    pub fn is_priced(&self) -> bool {
        self.price > 0.0
    }
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("request timed out")]
    Timeout,
    #[error("provider responded with status {0}")]
    InvalidResponse(u16),
    #[error("could not decode provider response: {0}")]
    DecodeError(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum RequestError {
    #[error("invalid airport code: '{0}'")]
    InvalidAirport(String),
    #[error("invalid date '{0}', expected YYYYMMDD")]
    InvalidDate(String),
    #[error("at least one adult passenger is required")]
    NoAdults,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
