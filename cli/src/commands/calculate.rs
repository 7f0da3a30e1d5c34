//! `fair-value calculate`: run one valuation and render it.

use std::path::PathBuf;

use chrono::Utc;
use shared::models::{DcfInputs, DcfResult};

use crate::components::{export_cash_flows_csv, render_cash_flow_chart, render_json, render_summary, ValuationReport};
use crate::config::AppConfig;
use crate::error::Result;
use crate::services::EngineClient;

use super::OutputFormat;

/// Values given on the command line. Rates are already fractions.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputOverrides {
    pub current_fcf: Option<f64>,
    pub growth_rate: Option<f64>,
    pub forecast_years: Option<u32>,
    pub discount_rate: Option<f64>,
    pub terminal_growth: Option<f64>,
    pub shares_outstanding: Option<f64>,
}

impl InputOverrides {
    pub fn apply(&self, defaults: DcfInputs) -> DcfInputs {
        DcfInputs {
            current_fcf: self.current_fcf.unwrap_or(defaults.current_fcf),
            growth_rate: self.growth_rate.unwrap_or(defaults.growth_rate),
            forecast_years: self.forecast_years.unwrap_or(defaults.forecast_years),
            discount_rate: self.discount_rate.unwrap_or(defaults.discount_rate),
            terminal_growth: self.terminal_growth.unwrap_or(defaults.terminal_growth),
            shares_outstanding: self.shares_outstanding.unwrap_or(defaults.shares_outstanding),
        }
    }
}

pub struct CalculateOptions {
    pub overrides: InputOverrides,
    pub remote: bool,
    pub format: OutputFormat,
    pub export_csv: Option<PathBuf>,
}

pub async fn run(config: &AppConfig, options: CalculateOptions) -> Result<String> {
    let inputs = options.overrides.apply(config.defaults.to_dcf_inputs());
    tracing::debug!(?inputs, remote = options.remote, "Running valuation");

    // Nothing is rendered or exported unless the engine accepted the inputs
    let (valuation_id, result) = if options.remote {
        let mut client = EngineClient::connect(config.engine.endpoint()).await?;
        tracing::debug!(endpoint = client.endpoint(), "Using remote engine");
        let remote = client.calculate(&inputs).await?;
        (Some(remote.valuation_id), remote.result)
    } else {
        (None, engine::valuation::compute(&inputs)?)
    };

    if let Some(path) = &options.export_csv {
        export_cash_flows_csv(path, &result)?;
    }

    render(config, options.format, &inputs, &result, valuation_id.as_deref())
}

pub fn render(
    config: &AppConfig,
    format: OutputFormat,
    inputs: &DcfInputs,
    result: &DcfResult,
    valuation_id: Option<&str>,
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format!(
            "{}\n{}",
            render_summary(result, &config.display),
            render_cash_flow_chart(&result.cash_flow_series(), &config.display)
        )),
        OutputFormat::Json => render_json(&ValuationReport {
            generated_at: Utc::now(),
            valuation_id,
            inputs,
            result,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CliError, RATE_RELATIONSHIP_MESSAGE};
    use approx::assert_relative_eq;

    fn local_options(overrides: InputOverrides) -> CalculateOptions {
        CalculateOptions {
            overrides,
            remote: false,
            format: OutputFormat::Table,
            export_csv: None,
        }
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let overrides = InputOverrides {
            discount_rate: Some(0.1),
            forecast_years: Some(3),
            ..InputOverrides::default()
        };
        let inputs = overrides.apply(DcfInputs::default());
        assert_relative_eq!(inputs.discount_rate, 0.1);
        assert_eq!(inputs.forecast_years, 3);
        assert_eq!(inputs.current_fcf, 100.0);
        assert_relative_eq!(inputs.terminal_growth, 0.01);
    }

    #[tokio::test]
    async fn test_local_table_output() {
        let config = AppConfig::load_default().unwrap();
        let output = run(&config, local_options(InputOverrides::default())).await.unwrap();
        assert!(output.starts_with("Theoretical stock price: 1,713 JPY"));
        assert!(output.contains("Projected free cash flow (100M JPY)"));
        assert!(output.contains("Year 5 |"));
    }

    #[tokio::test]
    async fn test_invalid_rates_produce_no_output_or_export() {
        let config = AppConfig::load_default().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("should_not_exist.csv");
        let options = CalculateOptions {
            export_csv: Some(csv_path.clone()),
            ..local_options(InputOverrides {
                discount_rate: Some(0.01),
                terminal_growth: Some(0.02),
                ..InputOverrides::default()
            })
        };

        let err = run(&config, options).await.unwrap_err();
        assert!(matches!(err, CliError::Engine(_)));
        assert_eq!(err.user_message(), RATE_RELATIONSHIP_MESSAGE);
        assert!(!csv_path.exists());
    }

    #[tokio::test]
    async fn test_json_output_and_csv_export() {
        let config = AppConfig::load_default().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("flows.csv");
        let options = CalculateOptions {
            format: OutputFormat::Json,
            export_csv: Some(csv_path.clone()),
            ..local_options(InputOverrides {
                forecast_years: Some(1),
                ..InputOverrides::default()
            })
        };

        let output = run(&config, options).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["result"]["future_cash_flows"].as_array().unwrap().len(), 1);
        assert!(csv_path.exists());
    }
}
