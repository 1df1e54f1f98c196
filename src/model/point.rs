use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize as _;

use crate::foundation::error::{MorphError, MorphResult};

/// Auxiliary per-dataset field kept beside the geometry-critical ones
/// (tooltips and display logic read these; layouts never do).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Number(f64),
    Text(String),
}

/// One data point. `id` is the join key between layouts and must be unique
/// within a dataset.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DataPoint {
    pub id: String,
    #[serde(default)]
    pub category: String,
    /// Missing or non-numeric input is stored as `None` and laid out as `0`.
    #[serde(default, alias = "valueA", deserialize_with = "lenient_number")]
    pub value_a: Option<f64>,
    #[serde(default, alias = "valueB", deserialize_with = "lenient_number")]
    pub value_b: Option<f64>,
    #[serde(default)]
    pub label: String,
    /// Every other top-level field, plus the entries of a nested `extra`
    /// object. Nulls, arrays and objects are dropped.
    #[serde(flatten, deserialize_with = "lenient_extra")]
    pub extra: BTreeMap<String, Scalar>,
}

impl DataPoint {
    pub fn new(id: impl Into<String>, category: impl Into<String>, a: f64, b: f64) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            value_a: Some(a),
            value_b: Some(b),
            label: String::new(),
            extra: BTreeMap::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Scalar) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Layout value for the primary axis; missing and non-finite become `0`.
    pub fn a(&self) -> f64 {
        finite_or_zero(self.value_a)
    }

    /// Layout value for the secondary axis; missing and non-finite become `0`.
    pub fn b(&self) -> f64 {
        finite_or_zero(self.value_b)
    }

    pub fn has_missing_values(&self) -> bool {
        !self.value_a.is_some_and(f64::is_finite) || !self.value_b.is_some_and(f64::is_finite)
    }
}

fn finite_or_zero(v: Option<f64>) -> f64 {
    v.filter(|x| x.is_finite()).unwrap_or(0.0)
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let parsed = match raw {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed.filter(|x| x.is_finite()))
}

fn lenient_extra<'de, D>(deserializer: D) -> Result<BTreeMap<String, Scalar>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
    let mut nested = BTreeMap::new();
    let mut top = BTreeMap::new();
    for (key, value) in raw {
        match value {
            serde_json::Value::Object(map) if key == "extra" => {
                nested.extend(map.into_iter().filter_map(|(k, v)| Some((k, scalar(v)?))));
            }
            v => {
                if let Some(s) = scalar(v) {
                    top.insert(key, s);
                }
            }
        }
    }
    nested.extend(top);
    Ok(nested)
}

fn scalar(value: serde_json::Value) -> Option<Scalar> {
    match value {
        serde_json::Value::Bool(b) => Some(Scalar::Bool(b)),
        serde_json::Value::Number(n) => n.as_f64().map(Scalar::Number),
        serde_json::Value::String(s) => Some(Scalar::Text(s)),
        serde_json::Value::Null | serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            None
        }
    }
}

/// Number of points whose `value_a` or `value_b` was soft-failed to `0`.
pub fn missing_value_count(points: &[DataPoint]) -> usize {
    points.iter().filter(|p| p.has_missing_values()).count()
}

/// Reject empty or duplicate ids; either would break the id join between layouts.
pub fn validate_points(points: &[DataPoint]) -> MorphResult<()> {
    let mut seen = BTreeSet::<&str>::new();
    for p in points {
        if p.id.is_empty() {
            return Err(MorphError::validation("point id must be non-empty"));
        }
        if !seen.insert(p.id.as_str()) {
            return Err(MorphError::validation(format!(
                "duplicate point id '{}'",
                p.id
            )));
        }
    }
    Ok(())
}

/// Distinct categories, sorted lexicographically.
pub fn categories(points: &[DataPoint]) -> Vec<String> {
    points
        .iter()
        .map(|p| p.category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/model/point.rs"]
mod tests;
