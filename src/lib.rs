// Public API exports
pub mod builder;
pub mod error;
pub mod handler;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod validator;

// Re-export main types for convenience
pub use error::{
    BuildDocumentError, BuildStage, DeckError, ErrorCode, ParseError, PluginError,
    ValidationError, Violation,
};

pub use model::{Color, Document, Element, ElementKind, Position, Size, Slide, Style, Unit};

pub use handler::{FormatHandler, FormatRegistry, HandlerInfo, JsonHandler};

pub use builder::DocumentBuilder;
pub use pipeline::{Pipeline, PipelineConfig};
pub use validator::StructuralValidator;
