//! Pipeline coordinator: size guard -> handler lookup -> decode -> structural
//! validation -> typed construction.
//!
//! Each stage runs to completion before the next starts. Stage errors keep
//! their own kind; a panic inside a stage is reported as a ParseError so the
//! caller only ever sees the three known kinds.

mod config;


pub use config::{PipelineConfig, DEFAULT_MAX_INPUT_BYTES};

use crate::builder::DocumentBuilder;
use crate::error::{DeckError, ParseError, PluginError};
use crate::handler::{FormatHandler, FormatRegistry, HandlerInfo, JsonHandler};
use crate::model::Document;
use crate::validator::StructuralValidator;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, error, info, warn};

/// Owns the format registry and runs documents through every stage
///
/// Parsing takes `&self`, so one pipeline can serve many threads at once.
/// Registering or removing handlers takes `&mut self` and therefore cannot
/// overlap with in-flight parses.
pub struct Pipeline {
    config: PipelineConfig,
    registry: FormatRegistry,
    validator: StructuralValidator,
    builder: DocumentBuilder,
}

impl Pipeline {
    /// Create a pipeline with an empty registry
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            registry: FormatRegistry::new(),
            validator: StructuralValidator::new(),
            builder: DocumentBuilder::new(),
        }
    }

    /// Create a pipeline with the built-in JSON handler registered
    pub fn with_default_handlers(config: PipelineConfig) -> Self {
        let mut pipeline = Self::new(config);
        let json = JsonHandler::new().with_max_depth(pipeline.config.max_depth);
        if let Err(err) = pipeline.register_handler(json) {
            warn!(%err, "built-in JSON handler was not registered");
        }
        pipeline
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Register a handler, replacing any handler with the same identifier
    pub fn register_handler(
        &mut self,
        handler: impl FormatHandler + 'static,
    ) -> Result<(), PluginError> {
        self.registry.register(handler)
    }

    /// Remove a handler; no-op when none is registered
    pub fn unregister_handler(&mut self, format_id: &str) {
        self.registry.unregister(format_id);
    }

    pub fn supported_formats(&self) -> Vec<String> {
        self.registry
            .list_formats()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn handler_infos(&self) -> Vec<HandlerInfo> {
        self.registry.handler_infos()
    }

    /// Parse input using the configured default format
    pub fn parse(&self, input: &str) -> Result<Document, DeckError> {
        self.parse_as(input, &self.config.default_format)
    }

    /// Parse input as the given format
    pub fn parse_as(&self, input: &str, format_id: &str) -> Result<Document, DeckError> {
        let size = input.len();
        if size > self.config.max_input_bytes {
            warn!(bytes = size, max = self.config.max_input_bytes, "input rejected by size guard");
            return Err(ParseError::input_too_large(size, self.config.max_input_bytes).into());
        }

        info!(format = format_id, bytes = size, "parsing document");

        let handler = self.registry.lookup(format_id).ok_or_else(|| {
            error!(format = format_id, "unsupported format");
            ParseError::unsupported_format(format_id)
        })?;

        debug!("decoding input");
        let data = run_stage("parse", || handler.parse(input))?;

        debug!("validating structure");
        run_stage("validation", || self.validator.validate(&data))?;

        debug!("building document");
        let document = run_stage("build", || self.builder.build(&data))?;

        info!(
            slides = document.slides().len(),
            elements = document.element_count(),
            "document parsed"
        );
        Ok(document)
    }

    /// Run only the handler's cheap format pre-check
    pub fn validate_format(&self, input: &str, format_id: &str) -> Result<bool, ParseError> {
        let handler = self
            .registry
            .lookup(format_id)
            .ok_or_else(|| ParseError::unsupported_format(format_id))?;
        Ok(handler.validate_format(input))
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::with_default_handlers(PipelineConfig::default())
    }
}

/// Run one stage, keeping its error kind and converting a panic into a ParseError
fn run_stage<T, E>(stage: &str, f: impl FnOnce() -> Result<T, E>) -> Result<T, DeckError>
where
    E: Into<DeckError>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result.map_err(|err| {
            let err = err.into();
            debug!(stage, code = %err.code(), "stage failed");
            err
        }),
        Err(payload) => {
            let description = panic_message(&*payload);
            error!(stage, %description, "stage failed unexpectedly");
            Err(ParseError::unexpected(stage, description).into())
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
