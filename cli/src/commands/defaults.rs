//! `fair-value defaults`: show the form defaults in the units a user types them.

use shared::models::DcfInputs;
use shared::utils::display_format::format_trimmed;

use crate::config::{AppConfig, FormDefaults};
use crate::error::Result;
use crate::services::EngineClient;

pub async fn run(config: &AppConfig, remote: bool) -> Result<String> {
    let inputs = if remote {
        let mut client = EngineClient::connect(config.engine.endpoint()).await?;
        client.default_inputs().await?
    } else {
        config.defaults.to_dcf_inputs()
    };
    Ok(render(&inputs, config))
}

// Enough precision for anything typed into the form
const FORM_DECIMALS: usize = 6;

pub fn render(inputs: &DcfInputs, config: &AppConfig) -> String {
    let form = FormDefaults::from_dcf_inputs(inputs);
    let unit = &config.display.amount_unit;
    format!(
        "Current free cash flow:   {} {}\n\
         Growth rate:              {}%\n\
         Forecast years:           {}\n\
         Discount rate:            {}%\n\
         Terminal growth rate:     {}%\n\
         Shares outstanding:       {}\n",
        format_trimmed(form.current_fcf, FORM_DECIMALS),
        unit,
        format_trimmed(form.growth_rate_pct, FORM_DECIMALS),
        form.forecast_years,
        format_trimmed(form.discount_rate_pct, FORM_DECIMALS),
        format_trimmed(form.terminal_growth_pct, FORM_DECIMALS),
        format_trimmed(form.shares_outstanding, FORM_DECIMALS),
    )
}
