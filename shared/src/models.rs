use serde::{Deserialize, Serialize};

/// Inputs for one discounted cash flow valuation.
///
/// Rates are fractions (0.05 means 5%). Converting percentages entered by a
/// user is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DcfInputs {
    /// Current free cash flow, in the monetary unit used for the whole report.
    pub current_fcf: f64,
    /// Near-term annual growth rate applied during the forecast horizon.
    pub growth_rate: f64,
    /// Number of explicit forecast years.
    pub forecast_years: u32,
    /// Discount rate (required return).
    pub discount_rate: f64,
    /// Perpetual growth rate after the forecast horizon.
    pub terminal_growth: f64,
    /// Share count, in the unit that makes `stock_price` come out per share.
    pub shares_outstanding: f64,
}

impl Default for DcfInputs {
    fn default() -> Self {
        // Form defaults of the reference calculator
        DcfInputs {
            current_fcf: 100.0,
            growth_rate: 0.05,
            forecast_years: 5,
            discount_rate: 0.08,
            terminal_growth: 0.01,
            shares_outstanding: 1.0,
        }
    }
}

/// Output of a valuation. Built once per calculation and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DcfResult {
    pub future_cash_flows: Vec<f64>,
    pub present_values: Vec<f64>,
    pub sum_pv_explicit: f64,
    pub terminal_value: f64,
    pub terminal_value_pv: f64,
    pub total_enterprise_value: f64,
    pub stock_price: f64,
}

/// One bar of the projected cash-flow chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlowPoint {
    pub year: u32,
    pub value: f64,
}

impl DcfResult {
    pub fn forecast_years(&self) -> u32 {
        self.future_cash_flows.len() as u32
    }

    /// Projected cash flows labelled by year, starting at year 1.
    pub fn cash_flow_series(&self) -> Vec<CashFlowPoint> {
        self.future_cash_flows
            .iter()
            .enumerate()
            .map(|(i, value)| CashFlowPoint {
                year: i as u32 + 1,
                value: *value,
            })
            .collect()
    }
}
