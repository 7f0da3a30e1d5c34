// Text summary: price up top, then the two present-value components
use crate::config::DisplaySettings;
use shared::models::DcfResult;
use shared::utils::display_format::{format_amount, format_price};

pub fn render_summary(result: &DcfResult, display: &DisplaySettings) -> String {
    let amount = |value: f64| format!("{} {}", format_amount(value), display.amount_unit);

    let rows = [
        (format!("Forecast period ({} years)", result.forecast_years()), amount(result.sum_pv_explicit)),
        ("Terminal value (beyond horizon)".to_string(), amount(result.terminal_value_pv)),
        ("Enterprise value".to_string(), amount(result.total_enterprise_value)),
    ];
    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

    let mut out = format!(
        "Theoretical stock price: {} {}\n\nBreakdown\n",
        format_price(result.stock_price),
        display.price_unit
    );
    for (label, value) in &rows {
        out.push_str(&format!("  {:<label_width$}  {:>value_width$}\n", label, value));
    }
    out
}
