// gRPC surface of the engine.
// build.rs generates the server and client for `valuation.ValuationEngine` into OUT_DIR.
pub mod proto;
pub mod valuation_service;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/valuation.ValuationEngine.rs"));
}

pub use generated::valuation_engine_client::ValuationEngineClient;
pub use generated::valuation_engine_server::{ValuationEngine, ValuationEngineServer};
pub use proto::{DcfRequest, DcfResponse, DefaultInputsRequest};
