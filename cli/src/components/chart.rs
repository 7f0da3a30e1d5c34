// Horizontal bar chart of the projected cash flows, one row per forecast year
use crate::config::DisplaySettings;
use shared::models::CashFlowPoint;
use shared::utils::display_format::format_amount;

const POSITIVE_BAR: char = '█';
const NEGATIVE_BAR: char = '░';

pub fn render_cash_flow_chart(series: &[CashFlowPoint], display: &DisplaySettings) -> String {
    let mut out = format!("Projected free cash flow ({})\n", display.amount_unit);
    if series.is_empty() {
        return out;
    }

    let max_abs = series.iter().map(|p| p.value.abs()).fold(0.0_f64, f64::max);
    let year_width = series.iter().map(|p| p.year.to_string().len()).max().unwrap_or(1);
    let labels: Vec<String> = series.iter().map(|p| format_amount(p.value)).collect();
    let value_width = labels.iter().map(|l| l.len()).max().unwrap_or(0);

    for (point, label) in series.iter().zip(&labels) {
        let bar_len = if max_abs > 0.0 && max_abs.is_finite() {
            ((point.value.abs() / max_abs) * display.chart_width as f64).round() as usize
        } else {
            0
        };
        let bar_char = if point.value < 0.0 { NEGATIVE_BAR } else { POSITIVE_BAR };
        let bar: String = std::iter::repeat(bar_char).take(bar_len).collect();
        out.push_str(&format!(
            "  Year {:>year_width$} | {:<chart_width$} {:>value_width$}\n",
            point.year,
            bar,
            label,
            chart_width = display.chart_width
        ));
    }
    out
}
