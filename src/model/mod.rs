mod constraint;
mod document;
mod element;
mod position;
mod style;


pub use constraint::ConstraintError;
pub use document::{
    default_metadata, Document, Slide, DOCUMENT_TITLE_MAX_CHARS, SLIDE_TITLE_MAX_CHARS,
};
pub use element::{Element, ElementKind, Size};
pub use position::{Position, Unit, COORDINATE_MAX, COORDINATE_MIN};
pub use style::{Color, Style, FONT_SIZE_MAX, FONT_SIZE_MIN};
