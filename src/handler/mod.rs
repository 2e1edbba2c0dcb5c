mod depth;
mod json;
mod registry;

#[cfg(test)]
mod tests;

pub use depth::{decode_json, DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH};
pub use json::JsonHandler;
pub use registry::FormatRegistry;

use crate::error::ParseError;
use serde_json::Value;

/// Descriptive information about a registered handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerInfo {
    /// Format identifier the handler is registered under
    pub format: String,
    /// Implementation name
    pub name: String,
    pub version: String,
}

/// Core trait that all format handlers must implement
///
/// A handler turns one serialized encoding into a loosely-typed tree. It holds
/// no per-call state, so a single instance serves concurrent callers.
pub trait FormatHandler: Send + Sync {
    /// Stable identifier the handler is registered under (e.g. "json")
    fn format_id(&self) -> &str;

    /// Decode raw input into a loosely-typed nested object
    ///
    /// # Arguments
    /// * `raw` - Complete input text
    ///
    /// # Returns
    /// The decoded tree, or a ParseError carrying position context when
    /// available
    fn parse(&self, raw: &str) -> Result<Value, ParseError>;

    /// Cheap well-formedness check that never fails
    fn validate_format(&self, raw: &str) -> bool;

    /// Implementation name reported by `info`
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
            .rsplit("::")
            .next()
            .unwrap_or("handler")
    }

    fn version(&self) -> &str {
        "1.0.0"
    }

    fn info(&self) -> HandlerInfo {
        HandlerInfo {
            format: self.format_id().to_string(),
            name: self.name().to_string(),
            version: self.version().to_string(),
        }
    }
}
