use std::fmt;

/// Fine-grained reason attached to every pipeline error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Generic or unexpected parse failure
    ParseError,
    /// Input is not well-formed JSON
    InvalidJson,
    /// Input decodes but lacks the shape a handler requires
    InvalidFormat,
    /// Input exceeds the configured byte cap
    InputTooLarge,
    /// No handler registered for the requested format
    UnsupportedFormat,
    /// Decoded value nests deeper than the handler allows
    DepthExceeded,
    /// Generic structural validation failure
    ValidationError,
    /// Field present but of the wrong kind
    InvalidField,
    /// Required field absent
    MissingField,
    /// Generic typed-construction failure
    BuildError,
    /// Element value violates a schema constraint
    InvalidElement,
    /// Handler registration failure
    PluginError,
}

impl ErrorCode {
    /// Stable identifier, suitable for logs and machine consumers
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ParseError => "PARSE_ERROR",
            ErrorCode::InvalidJson => "INVALID_JSON",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InputTooLarge => "INPUT_TOO_LARGE",
            ErrorCode::UnsupportedFormat => "UNSUPPORTED_FORMAT",
            ErrorCode::DepthExceeded => "DEPTH_EXCEEDED",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidField => "INVALID_FIELD",
            ErrorCode::MissingField => "MISSING_FIELD",
            ErrorCode::BuildError => "BUILD_ERROR",
            ErrorCode::InvalidElement => "INVALID_ELEMENT",
            ErrorCode::PluginError => "PLUGIN_ERROR",
        }
    }

    /// Human-readable fallback message for the code
    pub fn default_message(self) -> &'static str {
        match self {
            ErrorCode::ParseError => "parse error",
            ErrorCode::InvalidJson => "invalid JSON",
            ErrorCode::InvalidFormat => "invalid data format",
            ErrorCode::InputTooLarge => "input exceeds size limit",
            ErrorCode::UnsupportedFormat => "unsupported format",
            ErrorCode::DepthExceeded => "nesting depth exceeded",
            ErrorCode::ValidationError => "data validation error",
            ErrorCode::InvalidField => "invalid field value",
            ErrorCode::MissingField => "missing required field",
            ErrorCode::BuildError => "document build error",
            ErrorCode::InvalidElement => "invalid element",
            ErrorCode::PluginError => "plugin error",
        }
    }

    /// `message`, or this code's default message when `message` is empty
    pub(crate) fn message_or_default(self, message: String) -> String {
        if message.trim().is_empty() {
            self.default_message().to_string()
        } else {
            message
        }
    }

    /// Message to carry after switching from `self` to `next`.
    /// A message that was only this code's default follows the new code.
    pub(crate) fn recode_message(self, next: ErrorCode, message: String) -> String {
        if message == self.default_message() {
            next.default_message().to_string()
        } else {
            message
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
