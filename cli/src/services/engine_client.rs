// gRPC client for the ValuationEngine service
use crate::error::Result;
use engine::services::valuation_service::helpers::{from_grpc_response, to_dcf_inputs, to_grpc_request};
use engine::services::{DefaultInputsRequest, ValuationEngineClient};
use shared::models::{DcfInputs, DcfResult};
use tonic::transport::Channel;

/// A result computed by a remote engine, tagged with the id it logged under.
#[derive(Debug, Clone)]
pub struct RemoteValuation {
    pub valuation_id: String,
    pub result: DcfResult,
}

pub struct EngineClient {
    client: ValuationEngineClient<Channel>,
    endpoint: String,
}

impl EngineClient {
    pub async fn connect(endpoint: String) -> Result<Self> {
        tracing::debug!(%endpoint, "Connecting to valuation engine");
        let client = ValuationEngineClient::connect(endpoint.clone()).await?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn calculate(&mut self, inputs: &DcfInputs) -> Result<RemoteValuation> {
        let request = tonic::Request::new(to_grpc_request(inputs));
        let mut response = self.client.calculate_dcf(request).await?.into_inner();
        let valuation_id = std::mem::take(&mut response.valuation_id);
        tracing::info!(%valuation_id, endpoint = %self.endpoint, "Received valuation from engine");
        Ok(RemoteValuation {
            valuation_id,
            result: from_grpc_response(response),
        })
    }

    pub async fn default_inputs(&mut self) -> Result<DcfInputs> {
        let response = self.client.get_default_inputs(DefaultInputsRequest {}).await?.into_inner();
        Ok(to_dcf_inputs(&response))
    }
}
