use super::constraint::{check_range, ConstraintError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex color pattern compiles"));

pub const FONT_SIZE_MIN: u32 = 1;
pub const FONT_SIZE_MAX: u32 = 1000;

/// `#RRGGBB` color string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn parse(value: &str) -> Result<Self, ConstraintError> {
        if !value.starts_with('#') {
            return Err(ConstraintError::new(
                "color",
                format!("must start with '#', got {value:?}"),
            ));
        }
        if !HEX_COLOR.is_match(value) {
            return Err(ConstraintError::new(
                "color",
                format!("must be '#' followed by 6 hex digits, got {value:?}"),
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Color {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Visual styling of an element; every field is optional on input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<Color>,
    bold: bool,
    italic: bool,
    underline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    background_color: Option<Color>,
    opacity: f64,
    rotation: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font_size: None,
            font_family: None,
            color: None,
            bold: false,
            italic: false,
            underline: false,
            background_color: None,
            opacity: 1.0,
            rotation: 0.0,
        }
    }
}

impl Style {
    pub fn with_font_size(mut self, size: u32) -> Result<Self, ConstraintError> {
        if !(FONT_SIZE_MIN..=FONT_SIZE_MAX).contains(&size) {
            return Err(ConstraintError::new(
                "font_size",
                format!("must be between {FONT_SIZE_MIN} and {FONT_SIZE_MAX}, got {size}"),
            ));
        }
        self.font_size = Some(size);
        Ok(self)
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    /// Opacity must lie in `[0, 1]`
    pub fn with_opacity(mut self, opacity: f64) -> Result<Self, ConstraintError> {
        self.opacity = check_range("opacity", opacity, 0.0, 1.0)?;
        Ok(self)
    }

    /// Rotation in degrees, `[0, 360]`
    pub fn with_rotation(mut self, rotation: f64) -> Result<Self, ConstraintError> {
        self.rotation = check_range("rotation", rotation, 0.0, 360.0)?;
        Ok(self)
    }

    pub fn font_size(&self) -> Option<u32> {
        self.font_size
    }

    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    pub fn background_color(&self) -> Option<&Color> {
        self.background_color.as_ref()
    }

    pub fn bold(&self) -> bool {
        self.bold
    }

    pub fn italic(&self) -> bool {
        self.italic
    }

    pub fn underline(&self) -> bool {
        self.underline
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }
}
