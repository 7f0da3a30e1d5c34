// Wire messages for the valuation.ValuationEngine service.
// Field tags are part of the wire contract; never renumber them.

/// Valuation inputs, rates as fractions.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DcfRequest {
    #[prost(double, tag = "1")]
    pub current_fcf: f64,
    #[prost(double, tag = "2")]
    pub growth_rate: f64,
    #[prost(uint32, tag = "3")]
    pub forecast_years: u32,
    #[prost(double, tag = "4")]
    pub discount_rate: f64,
    #[prost(double, tag = "5")]
    pub terminal_growth: f64,
    #[prost(double, tag = "6")]
    pub shares_outstanding: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DcfResponse {
    #[prost(string, tag = "1")]
    pub valuation_id: String,
    #[prost(double, repeated, tag = "2")]
    pub future_cash_flows: Vec<f64>,
    #[prost(double, repeated, tag = "3")]
    pub present_values: Vec<f64>,
    #[prost(double, tag = "4")]
    pub sum_pv_explicit: f64,
    #[prost(double, tag = "5")]
    pub terminal_value: f64,
    #[prost(double, tag = "6")]
    pub terminal_value_pv: f64,
    #[prost(double, tag = "7")]
    pub total_enterprise_value: f64,
    #[prost(double, tag = "8")]
    pub stock_price: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DefaultInputsRequest {}
