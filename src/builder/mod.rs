//! Typed construction of the document graph from validated data.
//!
//! Walks document -> slides -> elements in input order. Field-level
//! constraints (ranges, enum membership, color pattern, units) are enforced by
//! the model constructors; this module maps their failures onto
//! BuildDocumentError tagged with the stage and the path of the offending
//! slide or element. Nothing is returned unless the whole graph builds.

mod fields;


use crate::error::{BuildDocumentError, BuildStage, ErrorCode};
use crate::model::{
    Color, ConstraintError, Document, Element, ElementKind, Position, Size, Slide, Style, Unit,
};
use fields::{array, boolean, integer, number, object, optional, string};
use serde_json::{Map, Value};
use tracing::debug;

/// Element keys with a typed home; everything else lands in `Element::extra`
const ELEMENT_FIELDS: [&str; 5] = ["type", "content", "position", "style", "size"];

/// Builds a `Document` from loosely-typed data
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentBuilder;

impl DocumentBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, data: &Value) -> Result<Document, BuildDocumentError> {
        let stage = BuildStage::Document;
        let data = object(data, "document").map_err(|e| constraint(stage, None, e))?;

        let title = require(data, "title", stage, None)?;
        let title = string(title, "title").map_err(|e| constraint(stage, None, e))?;
        let mut document = Document::new(title, Vec::new()).map_err(|e| constraint(stage, None, e))?;

        if let Some(metadata) = optional(data, "metadata") {
            let metadata = object(metadata, "metadata").map_err(|e| constraint(stage, None, e))?;
            document = document.with_metadata(metadata.clone());
        }
        if let Some(theme) = optional(data, "theme") {
            let theme = object(theme, "theme").map_err(|e| constraint(stage, None, e))?;
            document = document.with_theme(theme.clone());
        }

        let slides = require(data, "slides", stage, None)?;
        let slides = array(slides, "slides").map_err(|e| constraint(stage, None, e))?;
        let slides = slides
            .iter()
            .enumerate()
            .map(|(index, slide)| self.build_slide(index, slide))
            .collect::<Result<Vec<_>, _>>()?;

        let document = document.with_slides(slides);
        debug!(
            slides = document.slides().len(),
            elements = document.element_count(),
            "document constructed"
        );
        Ok(document)
    }

    fn build_slide(&self, index: usize, data: &Value) -> Result<Slide, BuildDocumentError> {
        let stage = BuildStage::Slide;
        let at = format!("slides[{index}]");
        let fail = |e: ConstraintError| constraint(stage, Some(at.as_str()), e);

        let data = object(data, "slide").map_err(fail)?;
        let title = require(data, "title", stage, Some(at.as_str()))?;
        let mut slide = Slide::new(string(title, "title").map_err(fail)?, Vec::new()).map_err(fail)?;

        if let Some(background) = optional(data, "background") {
            slide = slide.with_background(object(background, "background").map_err(fail)?.clone());
        }
        if let Some(layout) = optional(data, "layout") {
            slide = slide.with_layout(string(layout, "layout").map_err(fail)?);
        }
        if let Some(notes) = optional(data, "notes") {
            slide = slide.with_notes(string(notes, "notes").map_err(fail)?);
        }

        let elements = require(data, "elements", stage, Some(at.as_str()))?;
        let elements = array(elements, "elements")
            .map_err(fail)?
            .iter()
            .enumerate()
            .map(|(element_index, element)| {
                self.build_element(&format!("{at}.elements[{element_index}]"), element)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(slide.with_elements(elements))
    }

    fn build_element(&self, at: &str, data: &Value) -> Result<Element, BuildDocumentError> {
        let stage = BuildStage::Element;
        let fail = |e: ConstraintError| constraint(stage, Some(at), e);

        let data = object(data, "element").map_err(fail)?;
        let kind: ElementKind = string(require(data, "type", stage, Some(at))?, "type")
            .and_then(|kind| kind.parse())
            .map_err(fail)?;
        let content = require(data, "content", stage, Some(at))?.clone();
        let position = require(data, "position", stage, Some(at))?;
        let position = build_position(position).map_err(fail)?;

        let mut element = Element::new(kind, content, position);

        if let Some(style) = optional(data, "style") {
            element = element.with_style(build_style(style).map_err(fail)?);
        }
        if let Some(size) = optional(data, "size") {
            element = element.with_size(build_size(size).map_err(fail)?);
        }

        let extra: Map<String, Value> = data
            .iter()
            .filter(|(key, _)| !ELEMENT_FIELDS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        if !extra.is_empty() {
            element = element.with_extra(extra);
        }

        Ok(element)
    }
}

fn build_position(value: &Value) -> Result<Position, ConstraintError> {
    let position = object(value, "position")?;
    let axis = |name: &str| -> Result<f64, ConstraintError> {
        let field = format!("position.{name}");
        let value = position
            .get(name)
            .ok_or_else(|| ConstraintError::new(field.as_str(), "is required"))?;
        number(value, &field)
    };
    let x = axis("x")?;
    let y = axis("y")?;

    let unit = match optional(position, "unit") {
        Some(unit) => string(unit, "position.unit")?
            .parse::<Unit>()
            .map_err(|e| e.in_field("position.unit"))?,
        None => Unit::default(),
    };

    Position::new(x, y, unit).map_err(|e| {
        let field = format!("position.{}", e.field);
        e.in_field(field)
    })
}

/// Unknown style keys are ignored
fn build_style(value: &Value) -> Result<Style, ConstraintError> {
    let data = object(value, "style")?;
    let mut style = Style::default();

    if let Some(size) = optional(data, "font_size") {
        let size = integer(size, "style.font_size")?;
        let size = u32::try_from(size).map_err(|_| {
            ConstraintError::new("style.font_size", format!("must be between 1 and 1000, got {size}"))
        })?;
        style = style
            .with_font_size(size)
            .map_err(|e| e.in_field("style.font_size"))?;
    }
    if let Some(family) = optional(data, "font_family") {
        style = style.with_font_family(string(family, "style.font_family")?);
    }
    if let Some(color) = optional(data, "color") {
        let color = Color::parse(string(color, "style.color")?)
            .map_err(|e| e.in_field("style.color"))?;
        style = style.with_color(color);
    }
    if let Some(color) = optional(data, "background_color") {
        let color = Color::parse(string(color, "style.background_color")?)
            .map_err(|e| e.in_field("style.background_color"))?;
        style = style.with_background_color(color);
    }
    if let Some(bold) = optional(data, "bold") {
        style = style.with_bold(boolean(bold, "style.bold")?);
    }
    if let Some(italic) = optional(data, "italic") {
        style = style.with_italic(boolean(italic, "style.italic")?);
    }
    if let Some(underline) = optional(data, "underline") {
        style = style.with_underline(boolean(underline, "style.underline")?);
    }
    if let Some(opacity) = optional(data, "opacity") {
        style = style
            .with_opacity(number(opacity, "style.opacity")?)
            .map_err(|e| e.in_field("style.opacity"))?;
    }
    if let Some(rotation) = optional(data, "rotation") {
        style = style
            .with_rotation(number(rotation, "style.rotation")?)
            .map_err(|e| e.in_field("style.rotation"))?;
    }

    Ok(style)
}

fn build_size(value: &Value) -> Result<Size, ConstraintError> {
    object(value, "size")?
        .iter()
        .map(|(key, value)| -> Result<(String, f64), ConstraintError> {
            Ok((key.clone(), number(value, &format!("size.{key}"))?))
        })
        .collect()
}

fn require<'a>(
    data: &'a Map<String, Value>,
    field: &str,
    stage: BuildStage,
    at: Option<&str>,
) -> Result<&'a Value, BuildDocumentError> {
    data.get(field).ok_or_else(|| {
        let err = BuildDocumentError::missing_field(stage, field);
        match at {
            Some(at) => err.with_element_ref(at),
            None => err,
        }
    })
}

fn constraint(stage: BuildStage, at: Option<&str>, err: ConstraintError) -> BuildDocumentError {
    let code = match stage {
        BuildStage::Element => ErrorCode::InvalidElement,
        _ => ErrorCode::BuildError,
    };
    let built = BuildDocumentError::new(format!("{stage} construction failed: {err}"))
        .with_code(code)
        .at_stage(stage)
        .with_detail("field", err.field);
    match at {
        Some(at) => built.with_element_ref(at),
        None => built,
    }
}
