use super::{Details, ErrorCode};
use thiserror::Error;

/// A format handler could not be registered
#[derive(Error, Debug, Clone, PartialEq)]
#[error("[{}] {message}", PluginError::CATEGORY)]
pub struct PluginError {
    pub message: String,
    /// Type name of the handler that failed to register
    pub plugin_name: Option<String>,
    pub details: Details,
}

impl PluginError {
    pub const CATEGORY: &'static str = "PLUGIN_ERROR";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            plugin_name: None,
            details: Details::new(),
        }
    }

    pub fn with_plugin_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.details
            .insert("plugin_name".to_string(), name.clone().into());
        self.plugin_name = Some(name);
        self
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::PluginError
    }
}
