//! Plain-text rendering of the summary tiles.

use solar_data::metrics::Metrics;
use solar_feed::SeriesName;
use std::fmt::Write;

const LABEL_WIDTH: usize = 18;

/// Format a number with thousands separators and at most three decimals,
/// trimming trailing zeros: `15204.3` -> `"15,204.3"`.
pub fn format_grouped(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = int_part == "0" && frac_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// An average tile value with no decimals, or `n/a` when unavailable.
pub fn format_average(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{:.0} Wh", value),
        None => "n/a".to_string(),
    }
}

pub fn render_summary(metrics: &Metrics) -> String {
    let tiles = &metrics.tile_values;
    let rows = [
        ("Current", format!("{} Wh", tiles.current_wh)),
        ("15 minutes (avg)", format_average(tiles.averages.last_15_mins)),
        ("1 hour (avg)", format_average(tiles.averages.last_1_hour)),
        ("3 hours (avg)", format_average(tiles.averages.last_3_hours)),
        ("Month", format!("{} kWh", tiles.month_kwh)),
        ("All Time", format!("{} kWh", tiles.all_time_kwh)),
    ];

    let mut out = String::from("Solar panels\n");
    for (label, value) in rows {
        let _ = writeln!(out, "  {:<LABEL_WIDTH$}{}", label, value);
    }
    out.push_str("Solar Generation (24hr)\n");
    for name in SeriesName::ALL {
        let total = format_grouped(metrics.totals.get(name));
        let _ = writeln!(out, "  {:<LABEL_WIDTH$}{} kWh", name.label(), total);
    }
    out
}
