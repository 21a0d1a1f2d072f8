//! Text cleanup and number formatting for research artifacts.

use once_cell::sync::Lazy;
use regex::Regex;

static MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("markup regex"));

/// Strip `<color=...>` / `<i>` style markup runs from display text.
pub fn strip_markup(text: &str) -> String {
    MARKUP.replace_all(text, "").into_owned()
}

/// Format a decimal fraction as a percentage, e.g. `0.048` → `"4.80%"`.
pub fn fmt_percent(value: f64, decimals: usize) -> String {
    format!("{:.decimals$}%", value * 100.0)
}

/// Format a curve or skill multiplier, e.g. `0.7561` → `"0.756"`.
pub fn fmt_multiplier(value: f64) -> String {
    format!("{value:.3}")
}

/// Round to a number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Round every value in a list.
pub fn round_all(values: &[f64], decimals: u32) -> Vec<f64> {
    values.iter().map(|&v| round_to(v, decimals)).collect()
}

/// File-system key for an entity name: lowercased, spaces to underscores,
/// quotes dropped. `"Staff of Homa"` → `"staff_of_homa"`.
pub fn entity_key(name: &str) -> String {
    name.to_lowercase()
        .replace(' ', "_")
        .replace(['\'', '"'], "")
}
