// Display helpers shared by the extractor and the console report

const MONTHS: [(&str, &str); 12] = [
    ("01", "Enero"),
    ("02", "Febrero"),
    ("03", "Marzo"),
    ("04", "Abril"),
    ("05", "Mayo"),
    ("06", "Junio"),
    ("07", "Julio"),
    ("08", "Agosto"),
    ("09", "Septiembre"),
    ("10", "Octubre"),
    ("11", "Noviembre"),
    ("12", "Diciembre"),
];

const AIRPORTS: [(&str, &str); 18] = [
    ("LIM", "Lima"),
    ("CUZ", "Cusco"),
    ("MIA", "Miami"),
    ("CUN", "Cancún"),
    ("BOG", "Bogotá"),
    ("SCL", "Santiago"),
    ("MEX", "México DF"),
    ("MAD", "Madrid"),
    ("JFK", "New York"),
    ("LAX", "Los Angeles"),
    ("AQP", "Arequipa"),
    ("PIU", "Piura"),
    ("TRU", "Trujillo"),
    ("IQT", "Iquitos"),
    ("CIX", "Chiclayo"),
    ("TCQ", "Tacna"),
    ("PEM", "Puerto Maldonado"),
    ("JUL", "Juliaca"),
];

fn month_name(month: &str) -> Option<&'static str> {
    MONTHS
        .iter()
        .find(|(num, _)| *num == month)
        .map(|(_, name)| *name)
}

/// `"20260201"` → `"01 Febrero 2026"`.
pub fn format_date(compact: &str) -> String {
    match split_compact(compact) {
        Some((year, month, day)) => {
            format!("{} {} {}", day, month_name(month).unwrap_or(month), year)
        }
        None => "N/A".to_string(),
    }
}

/// `"20260220"` → `"20-Feb-26"`.
pub fn short_date(compact: &str) -> String {
    match split_compact(compact) {
        Some((year, month, day)) => {
            let abbrev: String = month_name(month).unwrap_or("").chars().take(3).collect();
            format!("{}-{}-{}", day, abbrev, year.get(2..).unwrap_or(year))
        }
        None => "N/A".to_string(),
    }
}

fn split_compact(compact: &str) -> Option<(&str, &str, &str)> {
    Some((compact.get(..4)?, compact.get(4..6)?, compact.get(6..8)?))
}

/// `"LIM"` → `"Lima (LIM)"`; unknown codes fall back to the code itself.
pub fn airport_display_name(code: &str) -> String {
    let name = AIRPORTS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or(code);
    format!("{} ({})", name, code)
}

pub fn passenger_summary(adults: u32, children: u32, infants: u32) -> String {
    let parts: Vec<String> = [
        (adults, "adulto", "adultos"),
        (children, "niño", "niños"),
        (infants, "infante", "infantes"),
    ]
    .iter()
    .filter(|(count, _, _)| *count > 0)
    .map(|(count, one, many)| format!("{} {}", count, if *count > 1 { many } else { one }))
    .collect();
    parts.join(", ")
}

/// Truncates to at most `max` characters without splitting a code point.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
