use crate::valuation::MAX_FORECAST_YEARS;
use thiserror::Error;
use tonic::metadata::{MetadataMap, MetadataValue};

/// Status metadata key naming which input check failed.
pub const ERROR_KIND_METADATA_KEY: &str = "x-valuation-error";

pub const RATE_RELATIONSHIP_KIND: &str = "invalid-rate-relationship";
pub const FORECAST_HORIZON_KIND: &str = "invalid-forecast-horizon";
pub const SHARE_COUNT_KIND: &str = "invalid-share-count";

#[derive(Error, Debug)]
pub enum EngineError {
    #[error(
        "Discount rate ({discount_rate}) must be higher than the terminal growth rate ({terminal_growth}); \
         otherwise the terminal value denominator is not positive"
    )]
    InvalidRateRelationship {
        discount_rate: f64,
        terminal_growth: f64,
    },

    #[error("Forecast horizon must be between 1 and {max} years, got {0}", max = MAX_FORECAST_YEARS)]
    InvalidForecastHorizon(u32),

    #[error("Shares outstanding must be greater than zero, got {0}")]
    InvalidShareCount(f64),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl EngineError {
    /// Kind tag for errors caused by the caller's inputs, which they can fix and retry.
    pub fn input_error_kind(&self) -> Option<&'static str> {
        match self {
            EngineError::InvalidRateRelationship { .. } => Some(RATE_RELATIONSHIP_KIND),
            EngineError::InvalidForecastHorizon(_) => Some(FORECAST_HORIZON_KIND),
            EngineError::InvalidShareCount(_) => Some(SHARE_COUNT_KIND),
            _ => None,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        self.input_error_kind().is_some()
    }
}

/// Reads the input-error kind a `Status` produced from an `EngineError` carries.
pub fn status_error_kind(status: &tonic::Status) -> Option<&str> {
    status
        .metadata()
        .get(ERROR_KIND_METADATA_KEY)
        .and_then(|value| value.to_str().ok())
}

impl From<EngineError> for tonic::Status {
    fn from(err: EngineError) -> Self {
        if let Some(kind) = err.input_error_kind() {
            tracing::warn!(kind, "Rejecting valuation inputs: {}", err);
            let mut metadata = MetadataMap::new();
            metadata.insert(ERROR_KIND_METADATA_KEY, MetadataValue::from_static(kind));
            return tonic::Status::with_metadata(tonic::Code::InvalidArgument, err.to_string(), metadata);
        }

        tracing::error!("Mapping EngineError to tonic::Status: {:?}", err);
        match err {
            EngineError::ConfigError(msg) => tonic::Status::failed_precondition(format!("Configuration error: {}", msg)),
            EngineError::IoError { source } => tonic::Status::internal(format!("I/O error: {}", source)),
            other => tonic::Status::internal(other.to_string()),
        }
    }
}
