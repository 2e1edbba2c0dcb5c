use super::depth::{decode_json, DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH};
use super::FormatHandler;
use crate::error::{ErrorCode, ParseError};
use serde_json::Value;

/// Reference handler for JSON-encoded decks
pub struct JsonHandler {
    max_depth: usize,
}

impl JsonHandler {
    pub const FORMAT_ID: &'static str = "json";

    /// Create a handler with the default nesting limit
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the maximum nesting depth, counted from the root value.
    /// Values above [`MAX_SUPPORTED_DEPTH`] are clamped to it.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_SUPPORTED_DEPTH);
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Root must be an object; required fields are left to the structural validator
    fn check_root_shape(data: &Value) -> Result<(), ParseError> {
        if data.is_object() {
            Ok(())
        } else {
            Err(invalid_format("JSON root must be an object"))
        }
    }
}

fn invalid_format(message: impl Into<String>) -> ParseError {
    ParseError::new(message)
        .with_code(ErrorCode::InvalidFormat)
        .with_format(JsonHandler::FORMAT_ID)
}

impl Default for JsonHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatHandler for JsonHandler {
    fn format_id(&self) -> &str {
        Self::FORMAT_ID
    }

    fn parse(&self, raw: &str) -> Result<Value, ParseError> {
        let data = decode_json(raw, self.max_depth).map_err(|e| e.with_format(Self::FORMAT_ID))?;
        Self::check_root_shape(&data)?;
        Ok(data)
    }

    fn validate_format(&self, raw: &str) -> bool {
        decode_json(raw, self.max_depth).is_ok()
    }

    fn name(&self) -> &str {
        "JsonHandler"
    }
}
