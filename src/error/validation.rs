use super::{Details, ErrorCode};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// One named sub-violation collected for reporting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub field: String,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// Decoded data lacks a required field or has the wrong container kind
#[derive(Error, Debug, Clone, PartialEq)]
#[error("[{}] {message}{}", ValidationError::CATEGORY, field_suffix(.field))]
pub struct ValidationError {
    pub code: ErrorCode,
    pub message: String,
    /// Path of the field that failed, e.g. `slides[0].elements[1].position`
    pub field: Option<String>,
    pub violations: Vec<Violation>,
    pub details: Details,
}

fn field_suffix(field: &Option<String>) -> String {
    field
        .as_deref()
        .map(|field| format!(" (field: {field})"))
        .unwrap_or_default()
}

impl ValidationError {
    pub const CATEGORY: &'static str = "VALIDATION_ERROR";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationError,
            message: ErrorCode::ValidationError.message_or_default(message.into()),
            field: None,
            violations: Vec::new(),
            details: Details::new(),
        }
    }

    pub fn missing_field(path: impl Into<String>) -> Self {
        let path = path.into();
        let mut err = Self::new(format!("missing required field: {path}"));
        err.code = ErrorCode::MissingField;
        err.add_violation(path.clone(), "missing", None);
        err.field = Some(path);
        err
    }

    pub fn invalid_field(path: impl Into<String>, expected: &str) -> Self {
        let path = path.into();
        let mut err = Self::new(format!("{path} must be {expected}"));
        err.code = ErrorCode::InvalidField;
        err.add_violation(path.clone(), format!("expected {expected}"), None);
        err.field = Some(path);
        err
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.add_detail(key, value);
        self
    }

    pub fn add_detail(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.details.insert(key.into(), value.into());
    }

    /// Record a named sub-violation; mirrored into the detail bag
    pub fn add_violation(
        &mut self,
        field: impl Into<String>,
        error: impl Into<String>,
        value: Option<Value>,
    ) {
        self.violations.push(Violation {
            field: field.into(),
            error: error.into(),
            value,
        });
        let snapshot = serde_json::to_value(&self.violations).unwrap_or(Value::Null);
        self.details.insert("validation_errors".to_string(), snapshot);
    }
}
