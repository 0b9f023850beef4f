// Console rendering of a search and its ranked offers
use crate::model::{FlightRecord, SearchRequest};
use crate::utils::{airport_display_name, format_date, passenger_summary, short_date, truncate_chars};

const RULE_WIDE: usize = 75;
const RULE_TABLE: usize = 71;

fn rule(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

pub fn render_search_header(req: &SearchRequest) -> String {
    let return_line = match req.return_compact() {
        Some(date) => format_date(&date),
        None => "Solo ida".to_string(),
    };

    let mut out = String::new();
    out.push_str(&format!("\n{}\n", rule('═', RULE_WIDE)));
    out.push_str("🔍 BÚSQUEDA DE VUELOS\n");
    out.push_str(&format!("{}\n", rule('═', RULE_WIDE)));
    out.push_str(&format!(
        "   📍 RUTA:      {} → {}\n",
        airport_display_name(&req.origin),
        airport_display_name(&req.destination)
    ));
    out.push_str(&format!("   📅 IDA:       {}\n", format_date(&req.depart_compact())));
    out.push_str(&format!("   📅 VUELTA:    {}\n", return_line));
    out.push_str(&format!(
        "   👥 PASAJEROS: {}\n",
        passenger_summary(req.adults, req.children, req.infants)
    ));
    out.push_str(&rule('═', RULE_WIDE));
    out
}

fn table_price(record: &FlightRecord) -> String {
    if record.is_priced() {
        format!("${:.2}", record.price)
    } else {
        "Consultar".to_string()
    }
}

pub fn render_results(req: &SearchRequest, records: &[FlightRecord]) -> String {
    if records.is_empty() {
        return "\n   ❌ No se encontraron vuelos para esta ruta/fecha".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!("\n   💰 TOP {} OFERTAS MÁS BARATAS:\n", records.len()));
    out.push_str(&format!("   {}\n", rule('─', RULE_TABLE)));
    out.push_str(&format!(
        "   {:<2} {:<15} {:<12} {:<13} {:<9} {:<9} {:<14} {:<10}\n",
        "#", "AEROLÍNEA", "FECHA", "HORARIO", "DURACIÓN", "ESCALAS", "EQUIPAJE", "PRECIO"
    ));
    out.push_str(&format!("   {}\n", rule('─', RULE_TABLE)));

    for (i, record) in records.iter().enumerate() {
        out.push_str(&format!(
            "   {:<2} {:<15} {:<12} {:<13} {:<9} {:<9} {:<14} {:<10}\n",
            i + 1,
            truncate_chars(&record.airline, 14),
            short_date(&record.depart_date),
            format!("{}→{}", record.departure_time, record.arrival_time),
            record.duration,
            record.stops_label,
            truncate_chars(&record.checked_baggage, 12),
            table_price(record)
        ));
    }
    out.push_str(&format!("   {}\n", rule('─', RULE_TABLE)));

    if records[0].is_priced() {
        let trip = if req.is_round_trip() { "ida y vuelta" } else { "ida" };
        out.push_str(&format!(
            "\n   💡 Precio mostrado: Total por {} ({})\n",
            passenger_summary(req.adults, req.children, req.infants),
            trip
        ));
    }

    out.push_str("\n   📦 DETALLES DE EQUIPAJE:\n");
    out.push_str(&format!("   {}\n", rule('─', RULE_TABLE)));
    for (i, record) in records.iter().enumerate() {
        out.push_str(&format!("\n   #{} {} - {}\n", i + 1, record.airline, table_price(record)));
        out.push_str(&format!("      ✈️  Equipaje facturado: {}\n", record.checked_baggage));
        out.push_str(&format!("      🎒 Equipaje de mano:    {}\n", record.carry_on_baggage));
        out.push_str(&format!("      👜 Bolso/mochila:       {}\n", record.personal_item));
    }
    out.push_str(&format!("   {}", rule('─', RULE_TABLE)));
    out
}
