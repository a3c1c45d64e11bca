//! Configuration loading
//!
//! `defaults/macrogram.default.toml` is embedded into the crate so that the documented
//! defaults and runtime behaviour stay in sync. Callers layer their own files and overrides
//! on top via [Loader] before deserializing into [MacrogramConfig].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::grammar::ParserKind;
use crate::scan::ScanOptions;

const DEFAULT_TOML: &str = include_str!("../defaults/macrogram.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct MacrogramConfig {
    pub dispatch: DispatchConfig,
    pub scan: ScanConfig,
}

/// Grammar trial order for lines that are not parsed with an explicit kind.
#[derive(Debug, Clone, Deserialize)]
pub struct DispatchConfig {
    pub order: Vec<ParserKind>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    pub terminator: String,
    pub comment_prefix: String,
    pub skip_blank: bool,
    pub allow_nested_blocks: bool,
}

impl MacrogramConfig {
    /// Scanner options derived from this configuration.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            order: self.dispatch.order.clone(),
            terminator: non_empty(&self.scan.terminator),
            comment_prefix: non_empty(&self.scan.comment_prefix),
            skip_blank: self.scan.skip_blank,
            allow_nested_blocks: self.scan.allow_nested_blocks,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
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

    pub fn build(self) -> Result<MacrogramConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MacrogramConfig, ConfigError> {
    Loader::new().build()
}
