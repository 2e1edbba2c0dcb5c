use crate::handler::{JsonHandler, DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH};
use serde::{de, Deserialize, Deserializer};

/// 10 MiB of UTF-8 input
pub const DEFAULT_MAX_INPUT_BYTES: usize = 10 * 1024 * 1024;

/// Limits and defaults for a pipeline instance
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Inputs longer than this many bytes are rejected before decoding
    pub max_input_bytes: usize,
    /// Format used by `Pipeline::parse`
    pub default_format: String,
    /// Nesting limit handed to the built-in JSON handler, at most `MAX_SUPPORTED_DEPTH`
    #[serde(deserialize_with = "bounded_depth")]
    pub max_depth: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            default_format: JsonHandler::FORMAT_ID.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl PipelineConfig {
    /// Create a config with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum input size in bytes
    pub fn max_input_bytes(mut self, bytes: usize) -> Self {
        self.max_input_bytes = bytes;
        self
    }

    pub fn default_format(mut self, format_id: impl Into<String>) -> Self {
        self.default_format = format_id.into();
        self
    }

    /// Set maximum nesting depth for the built-in JSON handler, clamped to
    /// `MAX_SUPPORTED_DEPTH`
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.min(MAX_SUPPORTED_DEPTH);
        self
    }

    /// Load from JSON; omitted fields keep their defaults
    pub fn from_json_str(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

fn bounded_depth<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let depth = usize::deserialize(deserializer)?;
    if depth > MAX_SUPPORTED_DEPTH {
        return Err(de::Error::custom(format_args!(
            "max_depth {depth} is above the supported limit of {MAX_SUPPORTED_DEPTH}"
        )));
    }
    Ok(depth)
}
