// City names accepted by the quote endpoint

const CITY_CODES: [(&str, &str); 11] = [
    ("lima", "LIM"),
    ("cusco", "CUZ"),
    ("cuzco", "CUZ"),
    ("arequipa", "AQP"),
    ("iquitos", "IQT"),
    ("piura", "PIU"),
    ("trujillo", "TRU"),
    ("chiclayo", "CIX"),
    ("tacna", "TCQ"),
    ("puno", "JUL"),
    ("juliaca", "JUL"),
];

/// Resolves free text like `"Lima, Peru"` to its IATA code. Only the part
/// before the first comma is considered.
pub fn iata_for_city(input: &str) -> Option<&'static str> {
    let city = input.split(',').next().unwrap_or("").trim().to_lowercase();
    CITY_CODES
        .iter()
        .find(|(name, _)| *name == city)
        .map(|(_, code)| *code)
}
