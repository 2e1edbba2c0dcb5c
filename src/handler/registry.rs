use super::{FormatHandler, HandlerInfo};
use crate::error::PluginError;
use std::collections::HashMap;
use tracing::debug;

/// Dispatch table from format identifier to handler
///
/// Lookups take `&self` and never fail; registration takes `&mut self`, so a
/// registry shared across threads is read-only for as long as it is shared.
pub struct FormatRegistry {
    /// Format identifier -> Handler mapping
    map: HashMap<String, Box<dyn FormatHandler>>,
}

impl FormatRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Register a handler under the identifier it reports
    ///
    /// Replaces any handler already registered for that identifier.
    ///
    /// # Example
    /// ```ignore
    /// registry.register(JsonHandler::new())?;
    /// ```
    pub fn register(&mut self, handler: impl FormatHandler + 'static) -> Result<(), PluginError> {
        self.register_boxed(Box::new(handler))
    }

    /// Register an already boxed handler
    pub fn register_boxed(&mut self, handler: Box<dyn FormatHandler>) -> Result<(), PluginError> {
        let format_id = handler.format_id().trim().to_string();
        if format_id.is_empty() {
            return Err(PluginError::new("handler registration failed: empty format identifier")
                .with_plugin_name(handler.name()));
        }

        if self.map.insert(format_id.clone(), handler).is_some() {
            debug!(format = %format_id, "replaced existing format handler");
        } else {
            debug!(format = %format_id, "registered format handler");
        }
        Ok(())
    }

    /// Remove the handler for an identifier; no-op when absent
    pub fn unregister(&mut self, format_id: &str) -> Option<Box<dyn FormatHandler>> {
        let removed = self.map.remove(format_id);
        if removed.is_some() {
            debug!(format = %format_id, "unregistered format handler");
        }
        removed
    }

    /// Select the handler registered for a format identifier
    pub fn lookup(&self, format_id: &str) -> Option<&dyn FormatHandler> {
        self.map.get(format_id).map(|h| &**h)
    }

    pub fn contains(&self, format_id: &str) -> bool {
        self.map.contains_key(format_id)
    }

    /// List all registered format identifiers, sorted
    pub fn list_formats(&self) -> Vec<&str> {
        let mut formats: Vec<&str> = self.map.keys().map(|s| s.as_str()).collect();
        formats.sort_unstable();
        formats
    }

    /// Describe every registered handler, sorted by format identifier
    pub fn handler_infos(&self) -> Vec<HandlerInfo> {
        let mut infos: Vec<HandlerInfo> = self.map.values().map(|h| h.info()).collect();
        infos.sort_by(|a, b| a.format.cmp(&b.format));
        infos
    }

    /// Get the number of registered handlers
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::JsonHandler;

    #[test]
    fn test_lookup_missing_is_none() {
        let registry = FormatRegistry::new();
        assert!(registry.lookup("json").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_format_selection() {
        let mut registry = FormatRegistry::new();
        registry.register(JsonHandler::new()).unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.list_formats().contains(&"json"));
        assert_eq!(registry.lookup("json").unwrap().format_id(), "json");
    }
}
