use super::{Details, ErrorCode};
use serde_json::Value;
use thiserror::Error;

/// Raw input could not be turned into a loosely-typed tree
#[derive(Error, Debug, Clone, PartialEq)]
#[error("[{}] {message}{}", ParseError::CATEGORY, position_suffix(.line, .column))]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    /// Format identifier the input was parsed as, when known
    pub format: Option<String>,
    /// 1-based line of the offending input, when the handler can tell
    pub line: Option<usize>,
    /// 1-based column of the offending input, when the handler can tell
    pub column: Option<usize>,
    pub details: Details,
}

fn position_suffix(line: &Option<usize>, column: &Option<usize>) -> String {
    match (line, column) {
        (Some(line), Some(column)) => format!(" at line {line} column {column}"),
        (Some(line), None) => format!(" at line {line}"),
        _ => String::new(),
    }
}

impl ParseError {
    pub const CATEGORY: &'static str = "PARSE_ERROR";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ParseError,
            message: ErrorCode::ParseError.message_or_default(message.into()),
            format: None,
            line: None,
            column: None,
            details: Details::new(),
        }
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.message = self.code.recode_message(code, std::mem::take(&mut self.message));
        self.code = code;
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.add_detail(key, value);
        self
    }

    pub fn add_detail(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.details.insert(key.into(), value.into());
    }

    /// Input rejected by the size guard before any decoding
    pub fn input_too_large(size: usize, max: usize) -> Self {
        Self::new(format!("input is {size} bytes, exceeding the {max} byte limit"))
            .with_code(ErrorCode::InputTooLarge)
            .with_detail("size", size)
            .with_detail("max", max)
    }

    pub fn unsupported_format(format_id: &str) -> Self {
        Self::new(format!("unsupported format: {format_id}"))
            .with_code(ErrorCode::UnsupportedFormat)
            .with_format(format_id)
    }

    pub fn depth_exceeded(max_depth: usize) -> Self {
        Self::new(format!("maximum nesting depth of {max_depth} exceeded"))
            .with_code(ErrorCode::DepthExceeded)
            .with_detail("max_depth", max_depth)
    }

    /// Wraps a failure that did not originate as one of the known error kinds
    pub fn unexpected(stage: &str, description: impl Into<String>) -> Self {
        let description = description.into();
        Self::new(format!("unexpected failure during {stage}: {description}"))
            .with_detail("stage", stage)
            .with_detail("cause", description)
    }
}
