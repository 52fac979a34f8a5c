//! Configuration loading for sassy.
//!
//! `defaults/sassy.default.toml` is embedded into the binary so that documentation and
//! runtime behavior stay in sync. Callers layer user files and command-line overrides on top
//! of those defaults via [`Loader`] before deserializing into [`SassyConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::convert::TransformOptions;

const DEFAULT_TOML: &str = include_str!("../defaults/sassy.default.toml");

/// Name of the optional configuration file picked up from the working directory.
pub const LOCAL_CONFIG_FILE: &str = "sassy.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SassyConfig {
    pub batch: BatchConfig,
    pub transform: TransformOptions,
}

/// Which files a batch run rewrites.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    pub directory: String,
    /// File name suffix without the leading dot.
    pub extension: String,
    pub dry_run: bool,
}

impl BatchConfig {
    pub fn directory(&self) -> PathBuf {
        PathBuf::from(&self.directory)
    }

    /// Whether `file_name` carries the configured extension.
    pub fn matches(&self, file_name: &str) -> bool {
        let extension = self.extension.trim_start_matches('.');
        file_name
            .strip_suffix(extension)
            .is_some_and(|stem| stem.ends_with('.'))
    }
}

/// Builds a [`SassyConfig`] from the embedded defaults plus whatever the caller stacks on
/// top. Later layers win key by key.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Only `defaults/sassy.default.toml` so far.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Stack a TOML file named on the command line. It must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Stack a TOML file that may or may not be there, such as `sassy.toml` in the working
    /// directory.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one dotted key, e.g. `batch.directory` from `--dir`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers and deserialize. Type mismatches surface here.
    pub fn build(self) -> Result<SassyConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults with nothing layered on top.
pub fn load_defaults() -> Result<SassyConfig, ConfigError> {
    Loader::new().build()
}
