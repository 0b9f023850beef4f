pub mod console;
pub mod csv_export;

pub use console::{render_results, render_search_header};
pub use csv_export::export_csv;
