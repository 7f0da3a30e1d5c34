// File and JSON outputs of a valuation
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::models::{DcfInputs, DcfResult};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
struct CashFlowRow {
    year: u32,
    future_cash_flow: f64,
    present_value: f64,
}

/// Full report for `--format json`.
#[derive(Debug, Serialize)]
pub struct ValuationReport<'a> {
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valuation_id: Option<&'a str>,
    pub inputs: &'a DcfInputs,
    pub result: &'a DcfResult,
}

/// Writes `year,future_cash_flow,present_value` rows.
pub fn write_cash_flows_csv<W: Write>(writer: W, result: &DcfResult) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (point, present_value) in result.cash_flow_series().iter().zip(&result.present_values) {
        csv_writer.serialize(CashFlowRow {
            year: point.year,
            future_cash_flow: point.value,
            present_value: *present_value,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn export_cash_flows_csv(path: &Path, result: &DcfResult) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_cash_flows_csv(file, result)?;
    tracing::info!(path = %path.display(), rows = result.future_cash_flows.len(), "Exported cash flow series");
    Ok(())
}

pub fn render_json(report: &ValuationReport<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_result() -> DcfResult {
        engine::valuation::compute(&DcfInputs::default()).unwrap()
    }

    #[test]
    fn test_csv_has_header_and_one_row_per_year() {
        let mut buffer = Vec::new();
        write_cash_flows_csv(&mut buffer, &default_result()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "year,future_cash_flow,present_value");
        assert!(lines[1].starts_with("1,105.0,97.2222"));
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cash_flows.csv");
        export_cash_flows_csv(&path, &default_result()).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let years: Vec<u32> = reader
            .records()
            .map(|record| record.unwrap()[0].parse().unwrap())
            .collect();
        assert_eq!(years, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_json_report_contains_inputs_and_result() {
        let inputs = DcfInputs::default();
        let result = default_result();
        let report = ValuationReport {
            generated_at: Utc::now(),
            valuation_id: None,
            inputs: &inputs,
            result: &result,
        };
        let json: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert_eq!(json["inputs"]["forecast_years"], 5);
        assert_eq!(json["result"]["future_cash_flows"][0], 105.0);
        assert!(json.get("valuation_id").is_none());
        assert!(json["generated_at"].is_string());
    }
}
