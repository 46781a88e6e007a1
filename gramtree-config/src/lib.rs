//! Shared configuration loader for the gramtree toolchain.
//!
//! `defaults/gramtree.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`GramtreeConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/gramtree.default.toml");

/// Top-level configuration consumed by gramtree applications.
#[derive(Debug, Clone, Deserialize)]
pub struct GramtreeConfig {
    pub derive: DeriveConfig,
    pub trace: TraceConfig,
    pub render: RenderConfig,
}

/// Derivation knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct DeriveConfig {
    pub start_symbol: String,
    pub max_depth: usize,
}

/// Trace rendering knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct TraceConfig {
    pub indent: String,
}

/// Tree rendering knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub max_label_chars: usize,
    pub node_shape: NodeShape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeShape {
    Circle,
    Box,
    Ellipse,
    Plaintext,
}

impl NodeShape {
    /// The Graphviz attribute value for this shape.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeShape::Circle => "circle",
            NodeShape::Box => "box",
            NodeShape::Ellipse => "ellipse",
            NodeShape::Plaintext => "plaintext",
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<GramtreeConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<GramtreeConfig, ConfigError> {
    Loader::new().build()
}
