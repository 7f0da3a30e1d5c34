// Handler for the CalculateDcf RPC
use tonic::{Response, Status};
use uuid::Uuid;

use super::helpers::{to_dcf_inputs, to_grpc_response};
use crate::services::{DcfRequest, DcfResponse};
use crate::valuation::DcfEngine;

pub fn handle_calculate_dcf(req_payload: DcfRequest, engine: &DcfEngine) -> Result<Response<DcfResponse>, Status> {
    let valuation_id = Uuid::new_v4().to_string();
    let inputs = to_dcf_inputs(&req_payload);
    tracing::debug!(%valuation_id, ?inputs, "Handling CalculateDcfRequest in dedicated handler");

    let result = match engine.compute(&inputs) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(%valuation_id, error = %e, "Valuation rejected (handler)");
            return Err(e.into());
        }
    };

    tracing::info!(
        %valuation_id,
        stock_price = result.stock_price,
        total_enterprise_value = result.total_enterprise_value,
        "Valuation complete"
    );
    Ok(Response::new(to_grpc_response(valuation_id, result)))
}
