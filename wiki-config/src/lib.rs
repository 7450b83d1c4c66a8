//! Shared configuration loader for the wiki-events toolchain.
//!
//! `defaults/wiki.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`WikiConfig`],
//! then turn the `convert` table into [`ConverterOptions`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use wiki_events::options::parse_namespace_keys;
use wiki_events::{ConvertError, ConverterOptions, ReferenceTypePolicy};

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/wiki.default.toml");

/// Top-level configuration consumed by wiki-events applications.
#[derive(Debug, Clone, Deserialize)]
pub struct WikiConfig {
    pub convert: ConvertConfig,
    pub output: OutputConfig,
}

/// Mirrors the knobs of [`ConverterOptions`] in their TOML spelling.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub reference_type: String,
    pub no_toc: bool,
    pub template_macro_prefix: String,
    pub max_depth: usize,
    /// Namespace number (as a string key) to extra aliases.
    #[serde(default)]
    pub namespaces: BTreeMap<String, Vec<String>>,
}

impl TryFrom<&ConvertConfig> for ConverterOptions {
    type Error = ConvertError;

    fn try_from(config: &ConvertConfig) -> Result<Self, Self::Error> {
        Ok(ConverterOptions {
            reference_type: config.reference_type.parse::<ReferenceTypePolicy>()?,
            custom_namespaces: parse_namespace_keys(&config.namespaces)?,
            no_toc: config.no_toc,
            template_macro_prefix: config.template_macro_prefix.clone(),
            max_depth: config.max_depth,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
}

impl WikiConfig {
    pub fn converter_options(&self) -> Result<ConverterOptions, ConvertError> {
        ConverterOptions::try_from(&self.convert)
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
    pub fn build(self) -> Result<WikiConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<WikiConfig, ConfigError> {
    Loader::new().build()
}
