// Discounted cash flow (DCF) valuation
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use shared::models::{DcfInputs, DcfResult};

/// Longest explicit forecast horizon the engine accepts.
pub const MAX_FORECAST_YEARS: u32 = 1000;

/// How the engine treats a non-positive share count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareCountPolicy {
    /// Reject `shares_outstanding <= 0` before computing anything.
    #[default]
    Strict,
    /// Divide unguarded; a zero share count yields an infinite or NaN price.
    Permissive,
}

/// Stateless DCF calculator.
///
/// Every call to [`DcfEngine::compute`] is independent, so one engine can be
/// shared freely between concurrent requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct DcfEngine {
    share_count_policy: ShareCountPolicy,
}

impl DcfEngine {
    pub fn new(share_count_policy: ShareCountPolicy) -> Self {
        Self { share_count_policy }
    }

    pub fn share_count_policy(&self) -> ShareCountPolicy {
        self.share_count_policy
    }

    /// Projects `forecast_years` cash flows, discounts them, adds the Gordon
    /// growth terminal value and divides by the share count.
    ///
    /// All inputs are validated before any arithmetic, so an error never comes
    /// with a partial result.
    pub fn compute(&self, inputs: &DcfInputs) -> Result<DcfResult, EngineError> {
        self.validate(inputs)?;

        let years = inputs.forecast_years as usize;
        let discount_base = 1.0 + inputs.discount_rate;
        let mut future_cash_flows = Vec::with_capacity(years);
        let mut present_values = Vec::with_capacity(years);

        // Year-by-year compounding: each year builds on the previous one.
        let mut cash_flow = inputs.current_fcf;
        for year in 1..=inputs.forecast_years {
            cash_flow *= 1.0 + inputs.growth_rate;
            let present_value = cash_flow / discount_base.powf(year as f64);
            tracing::trace!(year, cash_flow, present_value, "Projected forecast year");
            future_cash_flows.push(cash_flow);
            present_values.push(present_value);
        }

        let sum_pv_explicit = present_values.iter().fold(0.0, |acc, pv| acc + pv);

        // `cash_flow` now holds the final forecast year
        let next_year_cash_flow = cash_flow * (1.0 + inputs.terminal_growth);
        let terminal_value = next_year_cash_flow / (inputs.discount_rate - inputs.terminal_growth);
        let terminal_value_pv = terminal_value / discount_base.powf(inputs.forecast_years as f64);

        let total_enterprise_value = sum_pv_explicit + terminal_value_pv;
        let stock_price = total_enterprise_value / inputs.shares_outstanding;

        tracing::debug!(
            forecast_years = inputs.forecast_years,
            sum_pv_explicit,
            terminal_value_pv,
            total_enterprise_value,
            stock_price,
            "DCF valuation computed"
        );

        Ok(DcfResult {
            future_cash_flows,
            present_values,
            sum_pv_explicit,
            terminal_value,
            terminal_value_pv,
            total_enterprise_value,
            stock_price,
        })
    }

    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn validate(&self, inputs: &DcfInputs) -> Result<(), EngineError> {
        // Written as a negated `>` so NaN rates are rejected too
        if !(inputs.discount_rate > inputs.terminal_growth) {
            return Err(EngineError::InvalidRateRelationship {
                discount_rate: inputs.discount_rate,
                terminal_growth: inputs.terminal_growth,
            });
        }
        if inputs.forecast_years == 0 || inputs.forecast_years > MAX_FORECAST_YEARS {
            return Err(EngineError::InvalidForecastHorizon(inputs.forecast_years));
        }
        if self.share_count_policy == ShareCountPolicy::Strict && !(inputs.shares_outstanding > 0.0) {
            return Err(EngineError::InvalidShareCount(inputs.shares_outstanding));
        }
        Ok(())
    }
}

/// Computes a valuation with the default (strict) engine.
pub fn compute(inputs: &DcfInputs) -> Result<DcfResult, EngineError> {
    DcfEngine::default().compute(inputs)
}
