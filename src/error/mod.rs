mod build;
mod codes;
mod parse;
mod plugin;
mod validation;

#[cfg(test)]
mod tests;

pub use build::{BuildDocumentError, BuildStage};
pub use codes::ErrorCode;
pub use parse::ParseError;
pub use plugin::PluginError;
pub use validation::{ValidationError, Violation};

use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Structured context attached to every error kind
pub type Details = BTreeMap<String, Value>;

/// The three disjoint failure categories a pipeline run can surface
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeckError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Build(#[from] BuildDocumentError),
}

impl DeckError {
    /// Stable category code: `PARSE_ERROR`, `VALIDATION_ERROR` or `BUILD_ERROR`
    pub fn category(&self) -> &'static str {
        match self {
            DeckError::Parse(_) => ParseError::CATEGORY,
            DeckError::Validation(_) => ValidationError::CATEGORY,
            DeckError::Build(_) => BuildDocumentError::CATEGORY,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DeckError::Parse(e) => e.code,
            DeckError::Validation(e) => e.code,
            DeckError::Build(e) => e.code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            DeckError::Parse(e) => &e.message,
            DeckError::Validation(e) => &e.message,
            DeckError::Build(e) => &e.message,
        }
    }

    pub fn details(&self) -> &Details {
        match self {
            DeckError::Parse(e) => &e.details,
            DeckError::Validation(e) => &e.details,
            DeckError::Build(e) => &e.details,
        }
    }
}
