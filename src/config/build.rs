//! `[build]` section configuration.
//!
//! Contains the template scan settings: paths, extensions, partial
//! classification, whitespace purging and the traversal mode.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Enums
// ============================================================================

/// How the source tree is turned into generated artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalMode {
    /// One artifact per directory, mirroring the source layout (default).
    #[default]
    PerDirectory,
    /// Every template in the tree merged into a single artifact.
    Merged,
}

// ============================================================================
// Main BuildConfig
// ============================================================================

/// `[build]` section in hbsc.toml - template scan configuration.
///
/// # Example
/// ```toml
/// [build]
/// source = "templates"       # Source directory
/// output = "public/js"       # Output directory (defaults to source)
/// extensions = ["hbs"]
/// partial_prefix = "_"
/// purge_whitespace = true
/// mode = "merged"
/// merged_output = "templates.js"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Template source directory.
    #[serde(default = "defaults::build::source")]
    #[educe(Default = defaults::build::source())]
    pub source: PathBuf,

    /// Output directory for generated artifacts. Defaults to the source
    /// directory when unset.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: Option<PathBuf>,

    /// File extensions eligible for precompilation.
    #[serde(default = "defaults::build::extensions")]
    #[educe(Default = defaults::build::extensions())]
    pub extensions: Vec<String>,

    /// Filename prefix marking a template as a partial. Unset or empty
    /// disables partial classification.
    #[serde(default = "defaults::build::partial_prefix")]
    #[educe(Default = defaults::build::partial_prefix())]
    pub partial_prefix: Option<String>,

    /// Strip newline, carriage-return and tab characters before compiling.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub purge_whitespace: bool,

    /// Recompile every batch, ignoring output freshness.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub always_recompile: bool,

    /// Artifact fan-out strategy.
    #[serde(default = "defaults::build::mode")]
    #[educe(Default = defaults::build::mode())]
    pub mode: TraversalMode,

    /// Artifact file name used in merged mode, relative to the output
    /// directory.
    #[serde(default = "defaults::build::merged_output")]
    #[educe(Default = defaults::build::merged_output())]
    pub merged_output: PathBuf,

    /// Text encoding for reading templates and writing artifacts.
    /// Only UTF-8 is supported.
    #[serde(default = "defaults::build::encoding")]
    #[educe(Default = defaults::build::encoding())]
    pub encoding: String,
}
