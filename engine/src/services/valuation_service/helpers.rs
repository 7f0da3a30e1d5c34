// Conversions between wire messages and shared domain models
use crate::services::{DcfRequest, DcfResponse};
use shared::models::{DcfInputs, DcfResult};

pub fn to_dcf_inputs(request: &DcfRequest) -> DcfInputs {
    DcfInputs {
        current_fcf: request.current_fcf,
        growth_rate: request.growth_rate,
        forecast_years: request.forecast_years,
        discount_rate: request.discount_rate,
        terminal_growth: request.terminal_growth,
        shares_outstanding: request.shares_outstanding,
    }
}

pub fn to_grpc_request(inputs: &DcfInputs) -> DcfRequest {
    DcfRequest {
        current_fcf: inputs.current_fcf,
        growth_rate: inputs.growth_rate,
        forecast_years: inputs.forecast_years,
        discount_rate: inputs.discount_rate,
        terminal_growth: inputs.terminal_growth,
        shares_outstanding: inputs.shares_outstanding,
    }
}

pub fn to_grpc_response(valuation_id: String, result: DcfResult) -> DcfResponse {
    DcfResponse {
        valuation_id,
        future_cash_flows: result.future_cash_flows,
        present_values: result.present_values,
        sum_pv_explicit: result.sum_pv_explicit,
        terminal_value: result.terminal_value,
        terminal_value_pv: result.terminal_value_pv,
        total_enterprise_value: result.total_enterprise_value,
        stock_price: result.stock_price,
    }
}

pub fn from_grpc_response(response: DcfResponse) -> DcfResult {
    DcfResult {
        future_cash_flows: response.future_cash_flows,
        present_values: response.present_values,
        sum_pv_explicit: response.sum_pv_explicit,
        terminal_value: response.terminal_value,
        terminal_value_pv: response.terminal_value_pv,
        total_enterprise_value: response.total_enterprise_value,
        stock_price: response.stock_price,
    }
}
