//! Configuration management for fconstgen.
//!
//! This module provides the [`Config`] struct which controls what is read and
//! what is generated. Configuration can be loaded from:
//! - TOML files (`fconstgen.toml` in the working directory, or `--config`)
//! - CLI arguments (which override file settings)
//!
//! With no file and no arguments the defaults reproduce the Bmad header:
//! six Fortran modules translated into `include/bmad_enums.h`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::parser::DEFAULT_REAL_KIND;
use crate::translate::translator::DEFAULT_INDENT;

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "fconstgen.toml";

/// Fortran sources scanned by default, relative to the working directory
const DEFAULT_INPUTS: &[&str] = &[
    "../bmad/modules/bmad_struct.f90",
    "../sim_utils/io/output_mod.f90",
    "../sim_utils/interfaces/physical_constants.f90",
    "../sim_utils/interfaces/particle_species_mod.f90",
    "../sim_utils/interfaces/sim_utils_struct.f90",
    "../sim_utils/plot/quick_plot_struct.f90",
];

// Serde default functions
fn default_inputs() -> Vec<PathBuf> {
    DEFAULT_INPUTS.iter().map(PathBuf::from).collect()
}
fn default_output() -> PathBuf {
    PathBuf::from("include/bmad_enums.h")
}
fn default_namespace() -> String {
    "Bmad".to_string()
}
fn default_include_guard() -> String {
    "BMAD_ENUMS".to_string()
}
fn default_real_kind() -> String {
    DEFAULT_REAL_KIND.to_string()
}
fn default_indent() -> usize {
    DEFAULT_INDENT
}

/// Main configuration struct for fconstgen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Fortran sources, translated in this order
    #[serde(default = "default_inputs")]
    pub inputs: Vec<PathBuf>,

    /// Generated header path (default: include/bmad_enums.h)
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// C++ namespace wrapping the constants (default: Bmad)
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Include guard macro (default: `BMAD_ENUMS`)
    #[serde(default = "default_include_guard")]
    pub include_guard: String,

    /// Kind parameter marking double-precision reals (default: RP)
    #[serde(default = "default_real_kind")]
    pub real_kind: String,

    /// Spaces before each declaration line (default: 2)
    #[serde(default = "default_indent")]
    pub indent: usize,
}

/// Partial configuration for TOML parsing
///
/// All fields are `Option<T>` so we can distinguish between
/// "explicitly set" and "not specified" when merging configs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    pub inputs: Option<Vec<PathBuf>>,
    pub output: Option<PathBuf>,
    pub namespace: Option<String>,
    pub include_guard: Option<String>,
    pub real_kind: Option<String>,
    pub indent: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            inputs: default_inputs(),
            output: default_output(),
            namespace: default_namespace(),
            include_guard: default_include_guard(),
            real_kind: default_real_kind(),
            indent: default_indent(),
        }
    }
}

/// C/C++ identifier: letter or underscore, then word characters
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl Config {
    /// Maximum reasonable indent size
    const MAX_INDENT: usize = 16;

    /// Validate configuration values
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.inputs.is_empty() {
            return Some("inputs must name at least one Fortran file".to_string());
        }
        if self.output.as_os_str().is_empty() {
            return Some("output must not be empty".to_string());
        }
        if !is_identifier(&self.namespace) {
            return Some(format!(
                "namespace '{}' is not a valid C++ identifier",
                self.namespace
            ));
        }
        if !is_identifier(&self.include_guard) {
            return Some(format!(
                "include_guard '{}' is not a valid macro name",
                self.include_guard
            ));
        }
        let kind = self.real_kind.trim();
        let is_kind_number = !kind.is_empty() && kind.chars().all(|c| c.is_ascii_digit());
        if !is_identifier(kind) && !is_kind_number {
            return Some(format!(
                "real_kind '{}' is neither a kind parameter name nor a kind number",
                self.real_kind
            ));
        }
        if self.indent > Self::MAX_INDENT {
            return Some(format!(
                "indent {} exceeds maximum of {}",
                self.indent,
                Self::MAX_INDENT
            ));
        }
        None
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Parse configuration from TOML text, unset keys keep their defaults
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let partial: PartialConfig = toml::from_str(contents)?;
        let mut config = Self::default();
        config.apply_partial(partial);
        Ok(config)
    }

    /// Load `fconstgen.toml` from `dir` if present, defaults otherwise
    pub fn discover(dir: &Path) -> anyhow::Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            tracing::debug!(config = %path.display(), "using discovered config file");
            Self::from_toml_file(&path)
        } else {
            tracing::debug!(dir = %dir.display(), "no config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: PartialConfig) {
        if let Some(v) = partial.inputs {
            self.inputs = v;
        }
        if let Some(v) = partial.output {
            self.output = v;
        }
        if let Some(v) = partial.namespace {
            self.namespace = v;
        }
        if let Some(v) = partial.include_guard {
            self.include_guard = v;
        }
        if let Some(v) = partial.real_kind {
            self.real_kind = v;
        }
        if let Some(v) = partial.indent {
            self.indent = v;
        }
    }
}
