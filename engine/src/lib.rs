// Engine library root

pub mod config;
pub mod error;
pub mod services;
pub mod valuation;

pub use error::EngineError;
pub use valuation::{DcfEngine, ShareCountPolicy};
