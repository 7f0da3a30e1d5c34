// Formatting and input helpers shared by the engine service and the CLI.
// The engine never rounds; everything here is presentation.

pub mod display_format {
    use anyhow::{anyhow, Result};
    use std::str::FromStr;

    /// Formats a value with `decimals` decimal places and comma thousand separators,
    /// e.g. `1713.133` with one decimal becomes `"1,713.1"`.
    pub fn format_grouped(value: f64, decimals: usize) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let formatted = format!("{:.decimals$}", value.abs(), decimals = decimals);
        let (int_part, frac_part) = match formatted.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (formatted.as_str(), None),
        };

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        // "-0.0" would otherwise show up for tiny negatives
        let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
        let sign = if value < 0.0 && !is_zero { "-" } else { "" };
        match frac_part {
            Some(frac) => format!("{}{}.{}", sign, grouped, frac),
            None => format!("{}{}", sign, grouped),
        }
    }

    /// Price display: rounded to the nearest integer unit.
    pub fn format_price(value: f64) -> String {
        format_grouped(value, 0)
    }

    /// Breakdown display: one decimal place.
    pub fn format_amount(value: f64) -> String {
        format_grouped(value, 1)
    }

    /// Formats with at most `max_decimals` decimals and drops trailing zeros,
    /// so `7.000000000000001` becomes `"7"` and `2.50` becomes `"2.5"`.
    /// No thousand separators: the output reads back as typed input.
    pub fn format_trimmed(value: f64, max_decimals: usize) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let formatted = format!("{:.decimals$}", value, decimals = max_decimals);
        let trimmed = if formatted.contains('.') {
            formatted.trim_end_matches('0').trim_end_matches('.')
        } else {
            formatted.as_str()
        };
        if trimmed == "-0" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Converts a user-entered percentage (5.0 for 5%) to a fraction.
    pub fn percent_to_fraction(percent: f64) -> f64 {
        percent / 100.0
    }

    pub fn fraction_to_percent(fraction: f64) -> f64 {
        fraction * 100.0
    }

    // Accepts "5", "5.5" or "5.5%"
    pub fn parse_percent(s: &str) -> Result<f64> {
        let trimmed = s.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
        let percent = f64::from_str(number)
            .map_err(|e| anyhow!("Failed to parse percentage '{}': {}", s, e))?;
        if !percent.is_finite() {
            return Err(anyhow!("Percentage '{}' is not a finite number", s));
        }
        Ok(percent_to_fraction(percent))
    }

}
