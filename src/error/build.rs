use super::{Details, ErrorCode};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Level of the object graph being constructed when a failure occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildStage {
    Document,
    Slide,
    Element,
}

impl BuildStage {
    pub fn as_str(self) -> &'static str {
        match self {
            BuildStage::Document => "document",
            BuildStage::Slide => "slide",
            BuildStage::Element => "element",
        }
    }
}

impl fmt::Display for BuildStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structurally valid data violates a typed-schema constraint
#[derive(Error, Debug, Clone, PartialEq)]
#[error("[{}] {message}{}", BuildDocumentError::CATEGORY, context_suffix(.stage, .element_ref))]
pub struct BuildDocumentError {
    pub code: ErrorCode,
    pub message: String,
    pub stage: Option<BuildStage>,
    /// Path to the offending slide or element, e.g. `slides[0].elements[2]`
    pub element_ref: Option<String>,
    pub details: Details,
}

fn context_suffix(stage: &Option<BuildStage>, element_ref: &Option<String>) -> String {
    match (stage, element_ref) {
        (Some(stage), Some(at)) => format!(" (stage: {stage}, at: {at})"),
        (Some(stage), None) => format!(" (stage: {stage})"),
        (None, Some(at)) => format!(" (at: {at})"),
        (None, None) => String::new(),
    }
}

impl BuildDocumentError {
    pub const CATEGORY: &'static str = "BUILD_ERROR";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::BuildError,
            message: ErrorCode::BuildError.message_or_default(message.into()),
            stage: None,
            element_ref: None,
            details: Details::new(),
        }
    }

    pub fn missing_field(stage: BuildStage, field: &str) -> Self {
        Self::new(format!("missing required field: {field}"))
            .with_code(ErrorCode::MissingField)
            .at_stage(stage)
            .with_detail("field", field)
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.message = self.code.recode_message(code, std::mem::take(&mut self.message));
        self.code = code;
        self
    }

    pub fn at_stage(mut self, stage: BuildStage) -> Self {
        self.stage = Some(stage);
        self.details.insert("stage".to_string(), stage.as_str().into());
        self
    }

    pub fn with_element_ref(mut self, element_ref: impl Into<String>) -> Self {
        let element_ref = element_ref.into();
        self.details
            .insert("element_id".to_string(), element_ref.clone().into());
        self.element_ref = Some(element_ref);
        self
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.add_detail(key, value);
        self
    }

    pub fn add_detail(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.details.insert(key.into(), value.into());
    }
}
