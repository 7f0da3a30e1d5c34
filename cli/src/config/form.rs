// Form defaults as a user would type them: rates in percent.
use serde::{Deserialize, Serialize};
use shared::models::DcfInputs;
use shared::utils::display_format::{fraction_to_percent, percent_to_fraction};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormDefaults {
    pub current_fcf: f64,
    pub growth_rate_pct: f64,
    pub forecast_years: u32,
    pub discount_rate_pct: f64,
    pub terminal_growth_pct: f64,
    pub shares_outstanding: f64,
}

impl FormDefaults {
    /// Converts the percent fields to the fractions the engine expects.
    pub fn to_dcf_inputs(&self) -> DcfInputs {
        DcfInputs {
            current_fcf: self.current_fcf,
            growth_rate: percent_to_fraction(self.growth_rate_pct),
            forecast_years: self.forecast_years,
            discount_rate: percent_to_fraction(self.discount_rate_pct),
            terminal_growth: percent_to_fraction(self.terminal_growth_pct),
            shares_outstanding: self.shares_outstanding,
        }
    }

    pub fn from_dcf_inputs(inputs: &DcfInputs) -> Self {
        FormDefaults {
            current_fcf: inputs.current_fcf,
            growth_rate_pct: fraction_to_percent(inputs.growth_rate),
            forecast_years: inputs.forecast_years,
            discount_rate_pct: fraction_to_percent(inputs.discount_rate),
            terminal_growth_pct: fraction_to_percent(inputs.terminal_growth),
            shares_outstanding: inputs.shares_outstanding,
        }
    }
}
