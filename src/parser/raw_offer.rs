// Typed view over one provider offer. Every field is optional and a field
// of the wrong shape reads as absent instead of failing the whole offer.
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawFlightOffer {
    #[serde(deserialize_with = "lenient")]
    pub pricing: Option<RawPricing>,
    #[serde(deserialize_with = "lenient_vec")]
    pub itinerary: Vec<RawLeg>,
}

impl RawFlightOffer {
    /// Reads an offer out of the provider's `data` array. Anything that is
    /// not a JSON object becomes an empty offer.
    pub fn from_value(value: &Value) -> Self {
        RawFlightOffer::deserialize(value).unwrap_or_default()
    }

    /// First flight of the first leg, the one shown for the whole itinerary.
    pub fn display_flight(&self) -> Option<&RawFlight> {
        self.itinerary.first()?.flights.first()
    }
}

/// Amounts stay as raw JSON because the provider mixes numbers and
/// locale-formatted strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawPricing {
    pub total_amount: Option<Value>,
    pub total: Option<Value>,
    pub grand_total: Option<Value>,
    pub base: Option<Value>,
    pub taxes: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub currency: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub currency_code: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawLeg {
    #[serde(deserialize_with = "lenient_vec")]
    pub flights: Vec<RawFlight>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawFlight {
    #[serde(deserialize_with = "lenient")]
    pub marketing_airline: Option<RawAirline>,
    pub flight_number: Option<Value>,
    #[serde(deserialize_with = "lenient_vec")]
    pub segments: Vec<RawSegment>,
    #[serde(deserialize_with = "lenient")]
    pub departure_date_time: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub arrival_date_time: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub elapsed_time: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub baggage: Option<RawBaggage>,
    #[serde(deserialize_with = "lenient")]
    pub hand_baggage: Option<RawBaggage>,
    #[serde(deserialize_with = "lenient")]
    pub branded_fare: Option<RawBrandedFare>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawAirline {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub code: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSegment {
    pub flight_number: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawBaggage {
    pub pieces: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawBrandedFare {
    #[serde(deserialize_with = "lenient")]
    pub brand_name: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Keeps the element count of an array even when individual entries are
/// malformed, since segment counts drive the stop count.
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect()),
        _ => Ok(Vec::new()),
    }
}
