//! Feature Vector - named model input built from one recognition event
//!
//! Keys mirror the column names the classifier was trained with. Symbol
//! score features are keyed by the symbol itself (`"А"`, `"7"`, ...).

use serde::Serialize;

use super::alphabet::count_foreign_symbols;
use super::calendar::{decompose, parse_time_check};
use super::scores::{max_score, min_score, symbol_scores};
use super::template::regno_category;
use super::FeatureError;
use crate::models::RecognitionEvent;

/// Scalar feature value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Number(f64),
    Text(String),
}

impl FeatureValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FeatureValue::Number(v) => Some(*v),
            FeatureValue::Text(_) => None,
        }
    }

    /// Category string as the trainer saw it (integers without a fraction)
    pub fn as_category(&self) -> String {
        match self {
            FeatureValue::Text(s) => s.clone(),
            FeatureValue::Number(v) if v.fract() == 0.0 && v.is_finite() => format!("{}", *v as i64),
            FeatureValue::Number(v) => v.to_string(),
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(v: f64) -> Self {
        FeatureValue::Number(v)
    }
}

impl From<i64> for FeatureValue {
    fn from(v: i64) -> Self {
        FeatureValue::Number(v as f64)
    }
}

impl From<usize> for FeatureValue {
    fn from(v: usize) -> Self {
        FeatureValue::Number(v as f64)
    }
}

impl From<u32> for FeatureValue {
    fn from(v: u32) -> Self {
        FeatureValue::Number(f64::from(v))
    }
}

impl From<&str> for FeatureValue {
    fn from(v: &str) -> Self {
        FeatureValue::Text(v.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(v: String) -> Self {
        FeatureValue::Text(v)
    }
}

/// Insertion-ordered name → value mapping.
///
/// Inserting an existing name replaces its value in place.
#[derive(Debug, Clone, Default)]
pub struct FeatureVector {
    entries: Vec<(String, FeatureValue)>,
}

impl FeatureVector {
    pub fn new() -> Self {
        Self { entries: Vec::with_capacity(64) }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FeatureValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// JSON object for debug logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .entries
            .iter()
            .map(|(n, v)| (n.clone(), serde_json::to_value(v).unwrap_or(serde_json::Value::Null)))
            .collect();
        serde_json::Value::Object(map)
    }
}

/// Space-separated characters, e.g. `"А123"` → `"А 1 2 3"`
fn spaced(regno: &str) -> String {
    regno.chars().map(String::from).collect::<Vec<_>>().join(" ")
}

/// Build the feature vector for one recognition event.
///
/// Fails only when `time_check` cannot be parsed; malformed score lists
/// degrade to `[0]`.
pub fn build_features(event: &RecognitionEvent) -> Result<FeatureVector, FeatureError> {
    let sym_scores = event.afts_regno_ai_char_scores.values();
    let len_scores = event.afts_regno_ai_length_scores.values();
    let check_time = parse_time_check(&event.time_check)?;
    let calendar = decompose(&check_time);

    let mut x = FeatureVector::new();
    x.insert("afts_regno_ai_score", event.afts_regno_ai_score);
    x.insert("direction", event.direction);
    x.insert("recognition_accuracy", event.recognition_accuracy);

    x.insert("max_sym_score", max_score(&sym_scores));
    x.insert("min_sym_score", min_score(&sym_scores));
    x.insert("max_len_score", max_score(&len_scores));

    x.insert("ai_len", event.afts_regno_ai.chars().count());
    x.insert("cam_len", event.regno_recognize.chars().count());

    x.insert("regno_recognize_text", spaced(&event.regno_recognize));
    x.insert("afts_regno_ai_text", spaced(&event.afts_regno_ai));

    x.insert("camera_type", event.camera_type.as_str());
    x.insert("camera_class", event.camera_class.as_str());

    x.insert("weekday", calendar.weekday);
    x.insert("month", calendar.month);
    x.insert("hour", calendar.hour);

    x.insert("regno_template", regno_category(&event.regno_recognize));
    x.insert("regno_template_ai", regno_category(&event.afts_regno_ai));
    x.insert("foreign_sym", count_foreign_symbols(&event.regno_recognize));

    for (symbol, score) in symbol_scores(&event.afts_regno_ai, &sym_scores) {
        x.insert(symbol.to_string(), score);
    }

    Ok(x)
}
