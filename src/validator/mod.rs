//! Structural validation of decoded deck data.
//!
//! Checks shape and presence only: required keys exist and containers have the
//! right kind. Ranges, enum membership and patterns are left to typed
//! construction. The walk is fail-fast; the first violation in document order
//! is returned.


use crate::error::ValidationError;
use serde_json::{Map, Value};
use tracing::debug;

/// Shape checker for document -> slides -> elements -> position/style
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralValidator;

impl StructuralValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a decoded tree, returning the first structural violation
    pub fn validate(&self, data: &Value) -> Result<(), ValidationError> {
        let document = Self::validate_structure(data)?;
        Self::validate_document(document)?;

        let mut element_count = 0;
        if let Some(Value::Array(slides)) = document.get("slides") {
            for (index, slide) in slides.iter().enumerate() {
                element_count += Self::validate_slide(index, slide)?;
            }
        }

        debug!(element_count, "structural validation passed");
        Ok(())
    }

    /// Top-level shape: an object with `title` and an array `slides`
    fn validate_structure(data: &Value) -> Result<&Map<String, Value>, ValidationError> {
        let document = data
            .as_object()
            .ok_or_else(|| ValidationError::invalid_field("document", "an object"))?;

        for field in ["title", "slides"] {
            if !document.contains_key(field) {
                return Err(ValidationError::missing_field(field));
            }
        }

        if !document["slides"].is_array() {
            return Err(ValidationError::invalid_field("slides", "an array"));
        }

        Ok(document)
    }

    fn validate_document(document: &Map<String, Value>) -> Result<(), ValidationError> {
        let title_ok = document["title"]
            .as_str()
            .is_some_and(|title| !title.trim().is_empty());
        if !title_ok {
            return Err(ValidationError::invalid_field("title", "a non-empty string"));
        }

        if let Some(metadata) = document.get("metadata") {
            if !metadata.is_object() {
                return Err(ValidationError::invalid_field("metadata", "an object"));
            }
        }

        Ok(())
    }

    /// Returns the number of elements checked
    fn validate_slide(index: usize, slide: &Value) -> Result<usize, ValidationError> {
        let path = format!("slides[{index}]");
        let slide = slide
            .as_object()
            .ok_or_else(|| ValidationError::invalid_field(path.as_str(), "an object"))?;

        for field in ["title", "elements"] {
            if !slide.contains_key(field) {
                return Err(ValidationError::missing_field(format!("{path}.{field}")));
            }
        }

        let elements = slide["elements"].as_array().ok_or_else(|| {
            ValidationError::invalid_field(format!("{path}.elements"), "an array")
        })?;

        for (element_index, element) in elements.iter().enumerate() {
            Self::validate_element(&format!("{path}.elements[{element_index}]"), element)?;
        }

        Ok(elements.len())
    }

    fn validate_element(path: &str, element: &Value) -> Result<(), ValidationError> {
        let element = element
            .as_object()
            .ok_or_else(|| ValidationError::invalid_field(path, "an object"))?;

        for field in ["type", "content", "position"] {
            if !element.contains_key(field) {
                return Err(ValidationError::missing_field(format!("{path}.{field}")));
            }
        }

        let position = element["position"].as_object().ok_or_else(|| {
            ValidationError::invalid_field(format!("{path}.position"), "an object")
        })?;
        for axis in ["x", "y"] {
            if !position.contains_key(axis) {
                return Err(ValidationError::missing_field(format!(
                    "{path}.position.{axis}"
                )));
            }
        }

        if let Some(style) = element.get("style") {
            if !style.is_object() {
                return Err(ValidationError::invalid_field(
                    format!("{path}.style"),
                    "an object",
                ));
            }
        }

        Ok(())
    }
}
