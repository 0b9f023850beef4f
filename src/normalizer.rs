// Price normalization for the heterogeneous amounts found in provider payloads
use serde_json::Value;

const CURRENCY_SYMBOLS: [char; 4] = ['$', '€', '£', '¥'];

/// Converts a raw pricing value into a float. Null, non-numeric JSON
/// and unparseable strings all yield `0.0`; this never fails.
pub fn normalize_amount(value: &Value) -> f64 {
    let amount = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_amount_str(s),
        _ => 0.0,
    };
    if amount.is_finite() { amount } else { 0.0 }
}

/// Parses a locale-formatted amount such as `"1,234.56"`, `"1.234,56"`
/// or `"$ 1,234"`.
pub fn parse_amount_str(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .trim_start_matches("S/.")
        .trim_start_matches("S/")
        .chars()
        .filter(|c| !c.is_whitespace() && !CURRENCY_SYMBOLS.contains(c))
        .collect();

    disambiguate_separators(&cleaned)
        .parse::<f64>()
        .unwrap_or(0.0)
}

fn disambiguate_separators(s: &str) -> String {
    let commas = s.matches(',').count();
    let has_dot = s.contains('.');

    if commas > 0 && has_dot {
        // Whichever separator comes last is the decimal point.
        let last_comma = s.rfind(',').unwrap_or(0);
        let last_dot = s.rfind('.').unwrap_or(0);
        if last_dot > last_comma {
            s.replace(',', "")
        } else {
            s.replace('.', "").replace(',', ".")
        }
    } else if commas > 1 {
        s.replace(',', "")
    } else if commas == 1 {
        let decimals = s.rsplit(',').next().unwrap_or("");
        if decimals.len() == 3 {
            s.replace(',', "")
        } else {
            s.replace(',', ".")
        }
    } else {
        s.to_string()
    }
}
