// Terminal renderings of a valuation
pub mod chart;
pub mod export;
pub mod report;

pub use chart::render_cash_flow_chart;
pub use export::{export_cash_flows_csv, render_json, ValuationReport};
pub use report::render_summary;
