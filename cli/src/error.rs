use engine::error::{status_error_kind, RATE_RELATIONSHIP_KIND};
use engine::EngineError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Shown whenever the discount rate does not exceed the terminal growth rate.
pub const RATE_RELATIONSHIP_MESSAGE: &str =
    "The discount rate must be higher than the terminal growth rate (otherwise the terminal value denominator is zero or negative).";

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Engine rejected the request: {}", .0.message())]
    Remote(#[from] tonic::Status),

    #[error("Could not reach the engine: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("Configuration error: {0:#}")]
    Config(#[from] anyhow::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    fn is_rate_relationship(&self) -> bool {
        match self {
            CliError::Engine(EngineError::InvalidRateRelationship { .. }) => true,
            CliError::Remote(status) => status_error_kind(status) == Some(RATE_RELATIONSHIP_KIND),
            _ => false,
        }
    }

    /// Message for the terminal.
    pub fn user_message(&self) -> String {
        if self.is_rate_relationship() {
            RATE_RELATIONSHIP_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}
