//! # Schema Normalizers
//!
//! One pure function per panel maps the raw JSON reply into its typed record.
//! Optional fields fall back to fixed defaults when absent or mistyped;
//! required fields produce a [`ValidationError`] naming the dotted path.
//!
//! All lookups go through [`Fields`], a read-only cursor over one JSON object
//! that remembers its path so errors can point at e.g.
//! `toxicity_analysis.toxicity_score`.

mod activity;
mod community;
mod insights;
mod roast;

pub use activity::{time_machine_report, toxicity_report, viral_prediction};
pub use community::{subreddit_comparison, subreddit_recommendations, subreddit_sentiment};
pub use insights::user_insights;
pub use roast::{subreddit_roast, therapist_advice, user_roast};

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use thiserror::Error;

/// Longest raw payload excerpt kept for log lines.
const RAW_EXCERPT_LIMIT: usize = 500;

// ── ValidationError ──────────────────────────────────────────────────────────

/// A required field was absent or had the wrong type.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Invalid response format from server: missing or invalid field '{path}'")]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `time_machine.oldest_post.title`.
    pub path: String,
    /// The complete payload, kept for diagnostics.
    pub raw: Value,
}

impl ValidationError {
    /// The raw payload as compact JSON, cut to a log-friendly length.
    pub fn raw_excerpt(&self) -> String {
        let text = self.raw.to_string();
        match text.char_indices().nth(RAW_EXCERPT_LIMIT) {
            Some((cut, _)) => format!("{}...", &text[..cut]),
            None => text,
        }
    }
}

// ── Fields ───────────────────────────────────────────────────────────────────

/// Read-only cursor over one JSON object inside a payload.
///
/// A cursor over a missing or non-object value behaves like an empty object,
/// so optional nested records fall through to their defaults.
#[derive(Debug, Clone)]
pub(crate) struct Fields<'a> {
    root: &'a Value,
    map: Option<&'a Map<String, Value>>,
    path: String,
}

impl<'a> Fields<'a> {
    pub(crate) fn root(raw: &'a Value) -> Self {
        Self {
            root: raw,
            map: raw.as_object(),
            path: String::new(),
        }
    }

    fn path_of(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    fn missing(&self, key: &str) -> ValidationError {
        ValidationError {
            path: self.path_of(key),
            raw: self.root.clone(),
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.and_then(|m| m.get(key))
    }

    fn nested(&self, path: String, value: Option<&'a Value>) -> Fields<'a> {
        Fields {
            root: self.root,
            map: value.and_then(Value::as_object),
            path,
        }
    }

    // ── optional lookups ──

    pub(crate) fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(Value::as_str).map(str::to_string)
    }

    pub(crate) fn text_or_empty(&self, key: &str) -> String {
        self.text(key).unwrap_or_default()
    }

    pub(crate) fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    pub(crate) fn integer(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(as_integer)
    }

    pub(crate) fn integer_or_zero(&self, key: &str) -> i64 {
        self.integer(key).unwrap_or(0)
    }

    /// Nested object; an absent or mistyped value yields an empty cursor.
    pub(crate) fn object(&self, key: &str) -> Fields<'a> {
        self.nested(self.path_of(key), self.get(key))
    }

    /// Object elements of an array field. Non-object elements are dropped.
    pub(crate) fn items(&self, key: &str) -> Vec<Fields<'a>> {
        match self.get(key).and_then(Value::as_array) {
            Some(items) => self.collect_items(key, items),
            None => Vec::new(),
        }
    }

    /// String elements of an array field. Non-string elements are dropped.
    pub(crate) fn strings(&self, key: &str) -> Vec<String> {
        self.get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Object of name to number. Non-numeric entries are dropped.
    pub(crate) fn number_map(&self, key: &str) -> BTreeMap<String, f64> {
        self.get(key)
            .and_then(Value::as_object)
            .map(|m| {
                m.iter()
                    .filter_map(|(k, v)| v.as_f64().map(|n| (k.clone(), n)))
                    .collect()
            })
            .unwrap_or_default()
    }

    // ── required lookups ──

    pub(crate) fn require_text(&self, key: &str) -> Result<String, ValidationError> {
        self.text(key).ok_or_else(|| self.missing(key))
    }

    pub(crate) fn require_number(&self, key: &str) -> Result<f64, ValidationError> {
        self.number(key).ok_or_else(|| self.missing(key))
    }

    pub(crate) fn require_integer(&self, key: &str) -> Result<i64, ValidationError> {
        self.integer(key).ok_or_else(|| self.missing(key))
    }

    pub(crate) fn require_object(&self, key: &str) -> Result<Fields<'a>, ValidationError> {
        match self.get(key) {
            Some(value) if value.is_object() => Ok(self.nested(self.path_of(key), Some(value))),
            _ => Err(self.missing(key)),
        }
    }

    pub(crate) fn require_items(&self, key: &str) -> Result<Vec<Fields<'a>>, ValidationError> {
        match self.get(key).and_then(Value::as_array) {
            Some(items) => Ok(self.collect_items(key, items)),
            None => Err(self.missing(key)),
        }
    }

    fn collect_items(&self, key: &str, items: &'a [Value]) -> Vec<Fields<'a>> {
        items
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_object())
            .map(|(i, v)| self.nested(format!("{}[{}]", self.path_of(key), i), Some(v)))
            .collect()
    }
}

/// Integer view of a JSON number. Integral floats such as `3.0` count.
fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && f.is_finite() && f.abs() < i64::MAX as f64)
        .map(|f| f as i64)
}
