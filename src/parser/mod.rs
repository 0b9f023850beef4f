pub mod flight_parser;
pub mod raw_offer;

pub use flight_parser::{CostamarParser, Parser};
