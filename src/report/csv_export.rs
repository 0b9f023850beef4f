// CSV export of ranked offers
use crate::model::{ExportError, FlightRecord};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const CSV_COLUMNS: [&str; 18] = [
    "origen",
    "destino",
    "fecha_ida_formato",
    "fecha_vuelta_formato",
    "adultos",
    "ninos",
    "infantes",
    "aerolinea",
    "hora_salida",
    "hora_llegada",
    "duracion",
    "escalas_texto",
    "equipaje_bodega",
    "equipaje_mano",
    "personal_item",
    "clase",
    "precio",
    "moneda",
];

fn row(record: &FlightRecord) -> [String; 18] {
    [
        record.origin.clone(),
        record.destination.clone(),
        record.depart_date_display.clone(),
        record.return_date_display.clone(),
        record.adults.to_string(),
        record.children.to_string(),
        record.infants.to_string(),
        record.airline.clone(),
        record.departure_time.clone(),
        record.arrival_time.clone(),
        record.duration.clone(),
        record.stops_label.clone(),
        record.checked_baggage.clone(),
        record.carry_on_baggage.clone(),
        record.personal_item.clone(),
        record.fare_class.clone(),
        format!("{:.2}", record.price),
        record.currency.clone(),
    ]
}

pub fn write_csv<W: Write>(records: &[FlightRecord], writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_COLUMNS)?;
    for record in records {
        wtr.write_record(&row(record))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `records` to `path`. Nothing is written for an empty list.
pub fn export_csv(records: &[FlightRecord], path: &Path) -> Result<Option<PathBuf>, ExportError> {
    if records.is_empty() {
        warn!("No flights to export");
        return Ok(None);
    }

    let file = File::create(path)?;
    write_csv(records, file)?;
    info!("Saved {} flights to {}", records.len(), path.display());
    Ok(Some(path.to_path_buf()))
}
