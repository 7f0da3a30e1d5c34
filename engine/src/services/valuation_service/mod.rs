// engine/src/services/valuation_service/mod.rs
// MyValuationEngine implements the generated ValuationEngine trait and
// dispatches each RPC to its handler module.
use super::{DcfRequest, DcfResponse, DefaultInputsRequest, ValuationEngine};
use crate::valuation::DcfEngine;
use tonic::{Request, Response, Status};

pub mod calculate_dcf;
pub mod get_default_inputs;
pub mod helpers;

pub struct MyValuationEngine {
    engine: DcfEngine,
}

impl MyValuationEngine {
    pub fn new(engine: DcfEngine) -> Self {
        MyValuationEngine { engine }
    }
}

#[tonic::async_trait]
impl ValuationEngine for MyValuationEngine {
    async fn calculate_dcf(&self, request: Request<DcfRequest>) -> Result<Response<DcfResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(
            forecast_years = req_payload.forecast_years,
            discount_rate = req_payload.discount_rate,
            terminal_growth = req_payload.terminal_growth,
            "Received CalculateDcfRequest in main service, dispatching to handler."
        );
        calculate_dcf::handle_calculate_dcf(req_payload, &self.engine)
    }

    async fn get_default_inputs(&self, _request: Request<DefaultInputsRequest>) -> Result<Response<DcfRequest>, Status> {
        tracing::info!("Received GetDefaultInputsRequest");
        get_default_inputs::handle_get_default_inputs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::valuation::ShareCountPolicy;
    use approx::assert_relative_eq;
    use shared::models::DcfInputs;

    fn create_test_engine() -> MyValuationEngine {
        MyValuationEngine::new(DcfEngine::default())
    }

    fn default_request() -> DcfRequest {
        helpers::to_grpc_request(&DcfInputs::default())
    }

    #[tokio::test]
    async fn test_calculate_dcf_success() {
        let engine = create_test_engine();
        let response = engine.calculate_dcf(Request::new(default_request())).await.unwrap().into_inner();
        assert_eq!(response.future_cash_flows.len(), 5);
        assert_eq!(response.present_values.len(), 5);
        assert_eq!(response.future_cash_flows[0], 105.0);
        assert_relative_eq!(response.stock_price, 1713.1332399786613, max_relative = 1e-9);
        assert!(uuid::Uuid::parse_str(&response.valuation_id).is_ok());
    }

    #[tokio::test]
    async fn test_calculate_dcf_ids_are_unique() {
        let engine = create_test_engine();
        let first = engine.calculate_dcf(Request::new(default_request())).await.unwrap().into_inner();
        let second = engine.calculate_dcf(Request::new(default_request())).await.unwrap().into_inner();
        assert_ne!(first.valuation_id, second.valuation_id);
        assert_eq!(first.stock_price, second.stock_price);
    }

    #[tokio::test]
    async fn test_calculate_dcf_invalid_rates() {
        let engine = create_test_engine();
        let request = DcfRequest {
            discount_rate: 0.01,
            terminal_growth: 0.02,
            ..default_request()
        };
        let status = engine.calculate_dcf(Request::new(request)).await.unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert!(status.message().contains("terminal growth rate"));
    }

    #[tokio::test]
    async fn test_calculate_dcf_zero_years() {
        let engine = create_test_engine();
        let request = DcfRequest { forecast_years: 0, ..default_request() };
        let status = engine.calculate_dcf(Request::new(request)).await.unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert!(status.message().contains("Forecast horizon"));
    }

    #[tokio::test]
    async fn test_calculate_dcf_rejects_oversized_horizon() {
        let engine = create_test_engine();
        for forecast_years in [crate::valuation::MAX_FORECAST_YEARS + 1, u32::MAX] {
            let request = DcfRequest { forecast_years, ..default_request() };
            let status = engine.calculate_dcf(Request::new(request)).await.unwrap_err();
            assert_eq!(status.code(), tonic::Code::InvalidArgument);
            assert_eq!(
                crate::error::status_error_kind(&status),
                Some(crate::error::FORECAST_HORIZON_KIND)
            );
        }
    }

    #[tokio::test]
    async fn test_calculate_dcf_zero_shares_by_policy() {
        let request = DcfRequest { shares_outstanding: 0.0, ..default_request() };

        let strict = create_test_engine();
        let status = strict.calculate_dcf(Request::new(request.clone())).await.unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);

        let permissive = MyValuationEngine::new(DcfEngine::new(ShareCountPolicy::Permissive));
        let response = permissive.calculate_dcf(Request::new(request)).await.unwrap().into_inner();
        assert!(response.stock_price.is_infinite());
    }

    #[tokio::test]
    async fn test_get_default_inputs() {
        let engine = create_test_engine();
        let response = engine
            .get_default_inputs(Request::new(DefaultInputsRequest {}))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(helpers::to_dcf_inputs(&response), DcfInputs::default());
    }

    #[test]
    fn test_response_round_trips_to_domain_result() {
        let result = crate::valuation::compute(&DcfInputs::default()).unwrap();
        let response = helpers::to_grpc_response("id".to_string(), result.clone());
        assert_eq!(helpers::from_grpc_response(response), result);
    }
}
