use crate::error::{KpiError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metrics(BTreeMap<String, Value>);

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(input)? {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(KpiError::InvalidMetrics(json_kind(&other).to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn number(&self, key: &str) -> f64 {
        self.0.get(key).map(coerce_number).unwrap_or(0.0)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn insert_percent(&mut self, key: &str, percent: Option<f64>) {
        let value = percent
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null);
        self.0.insert(key.to_string(), value);
    }

    pub fn merged_with(&self, newer: &Metrics) -> Metrics {
        let mut merged = self.clone();
        for (key, value) in &newer.0 {
            merged.0.insert(key.clone(), value.clone());
        }
        merged
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Value)> for Metrics {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Reads a metric value the way a lenient form handler would: numbers pass
/// through, strings parse their leading decimal literal, anything else is 0.
pub fn coerce_number(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(text) => parse_leading_float(text),
        _ => 0.0,
    };
    if parsed.is_finite() {
        parsed
    } else {
        0.0
    }
}

fn parse_leading_float(raw: &str) -> f64 {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - end - 1;
        if digits + frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }
    if digits == 0 {
        return 0.0;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().unwrap_or(0.0)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerce_number_reads_numbers_and_numeric_strings() {
        assert_eq!(coerce_number(&json!(12)), 12.0);
        assert_eq!(coerce_number(&json!(12.5)), 12.5);
        assert_eq!(coerce_number(&json!("12.5")), 12.5);
        assert_eq!(coerce_number(&json!("  -3")), -3.0);
        assert_eq!(coerce_number(&json!("1e3")), 1000.0);
    }

    #[test]
    fn coerce_number_parses_leading_literal_like_parse_float() {
        assert_eq!(coerce_number(&json!("12.5kg")), 12.5);
        assert_eq!(coerce_number(&json!(".5")), 0.5);
        assert_eq!(coerce_number(&json!("7.")), 7.0);
        assert_eq!(coerce_number(&json!("2e")), 2.0);
    }

    #[test]
    fn coerce_number_defaults_to_zero() {
        assert_eq!(coerce_number(&json!("abc")), 0.0);
        assert_eq!(coerce_number(&json!("")), 0.0);
        assert_eq!(coerce_number(&json!(".")), 0.0);
        assert_eq!(coerce_number(&json!("Infinity")), 0.0);
        assert_eq!(coerce_number(&json!(null)), 0.0);
        assert_eq!(coerce_number(&json!(true)), 0.0);
        assert_eq!(coerce_number(&json!([1])), 0.0);
    }

    #[test]
    fn number_defaults_to_zero_for_missing_keys() {
        let metrics = Metrics::new();
        assert_eq!(metrics.number("weekly_sales"), 0.0);
    }

    #[test]
    fn from_json_str_rejects_non_objects() {
        let err = Metrics::from_json_str("[1, 2]").expect_err("arrays are not metrics");
        assert!(matches!(err, KpiError::InvalidMetrics(kind) if kind == "array"));
    }

    #[test]
    fn merged_with_overwrites_new_keys_and_keeps_old_ones() {
        let old = Metrics::from_json_str(r#"{"weekly_sales_target": 1000, "weekly_sales": 200}"#)
            .expect("old metrics should parse");
        let new = Metrics::from_json_str(r#"{"weekly_sales": "850"}"#)
            .expect("new metrics should parse");

        let merged = old.merged_with(&new);
        assert_eq!(merged.number("weekly_sales_target"), 1000.0);
        assert_eq!(merged.get("weekly_sales"), Some(&json!("850")));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn insert_percent_writes_null_for_undefined_values() {
        let mut metrics = Metrics::new();
        metrics.insert_percent("sales_achievement_percent", None);
        metrics.insert_percent("aov_achievement_percent", Some(f64::NAN));
        metrics.insert_percent("cost_percent", Some(12.5));
        assert_eq!(metrics.get("sales_achievement_percent"), Some(&Value::Null));
        assert_eq!(metrics.get("aov_achievement_percent"), Some(&Value::Null));
        assert_eq!(metrics.get("cost_percent"), Some(&json!(12.5)));
    }
}
