// Valuation models
pub mod dcf;

pub use dcf::{compute, DcfEngine, ShareCountPolicy, MAX_FORECAST_YEARS};
