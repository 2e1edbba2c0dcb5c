use super::constraint::ConstraintError;
use super::{Position, Style};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Width/height bag for an element
pub type Size = BTreeMap<String, f64>;

/// Closed set of element kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Image,
    Shape,
    Chart,
}

impl ElementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Image => "image",
            ElementKind::Shape => "shape",
            ElementKind::Chart => "chart",
        }
    }
}

impl FromStr for ElementKind {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ElementKind::Text),
            "image" => Ok(ElementKind::Image),
            "shape" => Ok(ElementKind::Shape),
            "chart" => Ok(ElementKind::Chart),
            other => Err(ConstraintError::new(
                "type",
                format!("must be one of text, image, shape, chart, got {other:?}"),
            )),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A positioned item on a slide
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    #[serde(rename = "type")]
    kind: ElementKind,
    /// Free-form, kind-dependent payload
    content: Value,
    position: Position,
    style: Style,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<Size>,
    /// Unrecognized input fields, kept as-is
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Element {
    pub fn new(kind: ElementKind, content: Value, position: Position) -> Self {
        Self {
            kind,
            content,
            position,
            style: Style::default(),
            size: None,
            extra: Map::new(),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_extra(mut self, extra: Map<String, Value>) -> Self {
        self.extra = extra;
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn content(&self) -> &Value {
        &self.content
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn size(&self) -> Option<&Size> {
        self.size.as_ref()
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}
