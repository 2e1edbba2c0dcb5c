use thiserror::Error;

/// A field value falls outside what the typed model allows
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{field}: {reason}")]
pub struct ConstraintError {
    pub field: String,
    pub reason: String,
}

impl ConstraintError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Re-attribute the violation to a different field name
    pub fn in_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }
}

/// Check an inclusive numeric range; NaN never passes
pub(crate) fn check_range(
    field: &str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<f64, ConstraintError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ConstraintError::new(
            field,
            format!("must be between {min} and {max}, got {value}"),
        ))
    }
}

/// Check a string's length in characters
pub(crate) fn check_title(field: &str, value: &str, max_chars: usize) -> Result<(), ConstraintError> {
    let len = value.chars().count();
    if len == 0 {
        return Err(ConstraintError::new(field, "must not be empty"));
    }
    if len > max_chars {
        return Err(ConstraintError::new(
            field,
            format!("must be at most {max_chars} characters, got {len}"),
        ));
    }
    Ok(())
}
