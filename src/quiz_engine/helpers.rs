//! JSON coercion helpers shared by config loading and item validation.
//!
//! Authors write `quiz.json` by hand, so scalar fields are lenient: a string
//! or a number is accepted wherever text is expected, and an empty string
//! counts as missing.

use serde_json::{Map, Value};

/// Text content of a scalar field, or `None` when it is missing or blank.
pub fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Shorthand for [`scalar_text`] on an object field.
pub fn field_text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    scalar_text(obj.get(key))
}

/// Parse a count written as a string the way a shell user would type it.
///
/// Surrounding whitespace is ignored and a blank string reads as zero, which
/// is then rejected by count resolution.
pub fn parse_count_str(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
