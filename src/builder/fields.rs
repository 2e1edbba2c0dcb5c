use crate::model::ConstraintError;
use serde_json::{Map, Value};

/// Optional field; JSON `null` counts as absent
pub(super) fn optional<'a>(object: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    object.get(field).filter(|value| !value.is_null())
}

pub(super) fn string<'a>(value: &'a Value, field: &str) -> Result<&'a str, ConstraintError> {
    value
        .as_str()
        .ok_or_else(|| ConstraintError::new(field, format!("must be a string, got {value}")))
}

pub(super) fn object<'a>(
    value: &'a Value,
    field: &str,
) -> Result<&'a Map<String, Value>, ConstraintError> {
    value
        .as_object()
        .ok_or_else(|| ConstraintError::new(field, format!("must be an object, got {value}")))
}

pub(super) fn array<'a>(value: &'a Value, field: &str) -> Result<&'a [Value], ConstraintError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ConstraintError::new(field, format!("must be an array, got {value}")))
}

pub(super) fn boolean(value: &Value, field: &str) -> Result<bool, ConstraintError> {
    value
        .as_bool()
        .ok_or_else(|| ConstraintError::new(field, format!("must be a boolean, got {value}")))
}

/// JSON number as f64; numeric strings are not coerced
pub(super) fn number(value: &Value, field: &str) -> Result<f64, ConstraintError> {
    value
        .as_f64()
        .ok_or_else(|| ConstraintError::new(field, format!("must be a number, got {value}")))
}

/// Integral JSON number; a float is accepted only with a zero fraction
pub(super) fn integer(value: &Value, field: &str) -> Result<i64, ConstraintError> {
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
        _ => Err(ConstraintError::new(
            field,
            format!("must be an integer, got {value}"),
        )),
    }
}
