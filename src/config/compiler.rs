//! `[compiler]` section configuration.
//!
//! Identifies the JavaScript runtime and the handlebars.js bundle used for
//! precompilation.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[compiler]` section in hbsc.toml.
///
/// # Example
/// ```toml
/// [compiler]
/// command = ["node"]
/// version = "1.0.0"
/// bundle = "vendor/handlebars.js"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerConfig {
    /// JavaScript runtime command and leading arguments.
    #[serde(default = "defaults::compiler::command")]
    #[educe(Default = defaults::compiler::command())]
    pub command: Vec<String>,

    /// Handlebars library version, used to locate the bundle in the cache
    /// directory when `bundle` is unset.
    #[serde(default = "defaults::compiler::version")]
    #[educe(Default = defaults::compiler::version())]
    pub version: String,

    /// Explicit path to a handlebars.js bundle. Overrides cache lookup.
    #[serde(default = "defaults::compiler::bundle")]
    #[educe(Default = defaults::compiler::bundle())]
    pub bundle: Option<PathBuf>,

    /// Cache directory holding handlebars.js bundles, one file per version.
    /// Supports tilde expansion.
    #[serde(default = "defaults::compiler::cache_dir")]
    #[educe(Default = defaults::compiler::cache_dir())]
    pub cache_dir: PathBuf,
}

impl CompilerConfig {
    /// Resolve the bundle path: explicit `bundle` wins, otherwise the
    /// versioned file inside the cache directory.
    pub fn bundle_path(&self) -> PathBuf {
        match &self.bundle {
            Some(path) => path.clone(),
            None => self.cache_dir.join(&self.version),
        }
    }
}
