// Analyzer module: ranking and price figures over extracted flights.

pub mod ranking;

pub use ranking::{rank_by_price, summarize};
