pub mod fetcher;
pub mod payload;
pub mod traits;

#[cfg(test)]
pub mod stub;

pub use fetcher::CostamarClient;
pub use traits::FlightProvider;
