use super::constraint::{check_title, ConstraintError};
use super::Element;
use crate::builder::DocumentBuilder;
use crate::error::BuildDocumentError;
use serde::Serialize;
use serde_json::{Map, Value};

pub const DOCUMENT_TITLE_MAX_CHARS: usize = 200;
pub const SLIDE_TITLE_MAX_CHARS: usize = 100;

/// Metadata used when the input carries none
pub fn default_metadata() -> Map<String, Value> {
    let mut metadata = Map::new();
    metadata.insert("author".to_string(), Value::from(""));
    metadata.insert("created".to_string(), Value::from(""));
    metadata.insert("modified".to_string(), Value::from(""));
    metadata.insert("version".to_string(), Value::from("1.0"));
    metadata
}

/// One slide and its elements, in input order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slide {
    title: String,
    elements: Vec<Element>,
    #[serde(skip_serializing_if = "Option::is_none")]
    background: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl Slide {
    pub fn new(title: impl Into<String>, elements: Vec<Element>) -> Result<Self, ConstraintError> {
        let title = title.into();
        check_title("title", &title, SLIDE_TITLE_MAX_CHARS)?;
        Ok(Self {
            title,
            elements,
            background: None,
            layout: None,
            notes: None,
        })
    }

    pub fn with_elements(mut self, elements: Vec<Element>) -> Self {
        self.elements = elements;
        self
    }

    pub fn with_background(mut self, background: Map<String, Value>) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn background(&self) -> Option<&Map<String, Value>> {
        self.background.as_ref()
    }

    pub fn layout(&self) -> Option<&str> {
        self.layout.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

/// Root of the presentation object graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    title: String,
    slides: Vec<Slide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    theme: Option<Map<String, Value>>,
    metadata: Map<String, Value>,
}

impl Document {
    pub fn new(title: impl Into<String>, slides: Vec<Slide>) -> Result<Self, ConstraintError> {
        let title = title.into();
        check_title("title", &title, DOCUMENT_TITLE_MAX_CHARS)?;
        Ok(Self {
            title,
            slides,
            theme: None,
            metadata: default_metadata(),
        })
    }

    pub fn with_slides(mut self, slides: Vec<Slide>) -> Self {
        self.slides = slides;
        self
    }

    pub fn with_theme(mut self, theme: Map<String, Value>) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Rebuild a document from wire-schema data, skipping format decoding
    pub fn from_value(data: &Value) -> Result<Self, BuildDocumentError> {
        DocumentBuilder::new().build(data)
    }

    /// Encode back into the wire schema, omitting absent optionals
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn theme(&self) -> Option<&Map<String, Value>> {
        self.theme.as_ref()
    }

    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    pub fn element_count(&self) -> usize {
        self.slides.iter().map(|slide| slide.elements.len()).sum()
    }
}
