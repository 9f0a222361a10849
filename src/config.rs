//! Settings for the CLI and editor adapters
//!
//! Layered with the `config` crate: built-in defaults, then an optional TOML
//! file, then `PROMPT_HIGHLIGHTER_*` environment variables. The engine itself
//! takes no configuration.

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::{
    cache::DEFAULT_CACHE_CAPACITY,
    engine::EXPLAIN_PREVIEW_CHARS,
    error::{HighlightError, Result},
    scheduler::DEFAULT_DEBOUNCE_MS,
};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "PROMPT_HIGHLIGHTER";

/// Longest accepted debounce delay
const MAX_DEBOUNCE_MS: u64 = 10_000;

/// How `highlight` output is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One span per line
    #[default]
    Text,
    /// JSON array of spans
    Json,
    /// Source text with terminal colors
    Ansi,
}

/// Highlighter settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlighterConfig {
    /// Default output format for `highlight`
    pub output_format: OutputFormat,

    /// Allow terminal colors
    pub color_output: bool,

    /// Debounce delay for live highlighting in milliseconds
    pub debounce_ms: u64,

    /// Number of buffers kept by the highlight cache
    pub cache_capacity: usize,

    /// Characters of input echoed in explain reports
    pub preview_chars: usize,
}

impl Default for HighlighterConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Text,
            color_output: true,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            preview_chars: EXPLAIN_PREVIEW_CHARS,
        }
    }
}

impl HighlighterConfig {
    /// Load settings from an optional TOML file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            debug!("Loading highlighter config from {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }

        let settings: Self = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.cache_capacity == 0 {
            return Err(invalid("cache_capacity must be at least 1"));
        }
        if self.preview_chars == 0 {
            return Err(invalid("preview_chars must be at least 1"));
        }
        if self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(invalid(format!(
                "debounce_ms must be at most {}",
                MAX_DEBOUNCE_MS
            )));
        }
        Ok(())
    }

    /// Effective settings as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| HighlightError::Config(config::ConfigError::Message(e.to_string())))
    }
}

fn invalid(message: impl Into<String>) -> HighlightError {
    HighlightError::Config(config::ConfigError::Message(message.into()))
}
