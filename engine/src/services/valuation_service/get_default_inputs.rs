// Handler for the GetDefaultInputs RPC
use tonic::{Response, Status};

use super::helpers::to_grpc_request;
use crate::services::DcfRequest;
use shared::models::DcfInputs;

pub fn handle_get_default_inputs() -> Result<Response<DcfRequest>, Status> {
    Ok(Response::new(to_grpc_request(&DcfInputs::default())))
}
