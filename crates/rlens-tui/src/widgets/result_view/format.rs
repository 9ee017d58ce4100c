//! Display formatting for result values.
//!
//! Clamping happens here, at render time; the records keep what the service
//! sent.

use std::fmt::Display;

use rlens_core::results::{DayActivity, HourActivity};

pub const NOT_AVAILABLE: &str = "N/A";

const GAUGE_FILLED: char = '█';
const GAUGE_EMPTY: char = '░';

/// `value` via Display, or `N/A`.
pub fn or_na<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

/// Two decimals, or `N/A`.
pub fn two_decimals(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{:.2}", v))
}

/// Toxicity score clamped to `[0, 100]`, e.g. `12.50%`.
pub fn toxicity_percent(score: f64) -> String {
    format!("{:.2}%", clamp_toxicity(score))
}

pub fn clamp_toxicity(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

/// Gauge fill for a toxicity score.
pub fn toxicity_ratio(score: f64) -> f64 {
    clamp_toxicity(score) / 100.0
}

/// Gauge fill for a sentiment average in `[-1, 1]`; neutral is half full.
pub fn sentiment_ratio(average: f64) -> f64 {
    (average.clamp(-1.0, 1.0) + 1.0) / 2.0
}

/// `H:00 (N activities)` joined with `, `, or `N/A` when empty.
pub fn active_hours(hours: &[HourActivity]) -> String {
    join_or_na(
        hours
            .iter()
            .map(|h| format!("{}:00 ({} activities)", h.hour, h.count)),
    )
}

/// `Day (N activities)` joined with `, `, or `N/A` when empty.
pub fn active_days(days: &[DayActivity]) -> String {
    join_or_na(
        days.iter()
            .map(|d| format!("{} ({} activities)", d.day, d.count)),
    )
}

fn join_or_na(items: impl Iterator<Item = String>) -> String {
    let joined = items.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        joined
    }
}

/// Text gauge `width` cells wide, filled to `ratio` (clamped to `[0, 1]`).
pub fn gauge_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * width as f64).round() as usize;
    let mut bar = String::with_capacity(width * GAUGE_FILLED.len_utf8());
    bar.extend(std::iter::repeat(GAUGE_FILLED).take(filled));
    bar.extend(std::iter::repeat(GAUGE_EMPTY).take(width - filled));
    bar
}
