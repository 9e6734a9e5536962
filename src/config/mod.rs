//! Precompiler configuration management for `hbsc.toml`.
//!
//! # Sections
//!
//! | Section      | Purpose                                          |
//! |--------------|--------------------------------------------------|
//! | `[build]`    | Source/output paths, extensions, traversal mode  |
//! | `[compiler]` | JavaScript runtime and handlebars.js bundle      |
//!
//! # Example
//!
//! ```toml
//! [build]
//! source = "templates"
//! output = "public/js"
//! partial_prefix = "_"
//! purge_whitespace = true
//!
//! [compiler]
//! command = ["node"]
//! version = "1.0.0"
//! ```

mod build;
mod compiler;
pub mod defaults;
mod error;

// Re-export public types used by other modules
pub use build::{BuildConfig, TraversalMode};
pub use compiler::CompilerConfig;

use error::ConfigError;

use crate::cli::{Cli, Commands};
use anyhow::{Context, Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing hbsc.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Template scan settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Compiler runtime settings
    #[serde(default)]
    pub compiler: CompilerConfig,
}

impl Config {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Get CLI arguments reference
    pub fn get_cli(&self) -> &'static Cli {
        self.cli.unwrap()
    }

    /// Output root for generated artifacts. Falls back to the source
    /// directory, matching the behaviour when `[build.output]` is unset.
    pub fn output_root(&self) -> &Path {
        self.build.output.as_deref().unwrap_or(&self.build.source)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        // Determine the final root path based on command
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => {
                let base = cli
                    .root
                    .as_ref()
                    .cloned()
                    .unwrap_or_else(|| self.get_root().to_owned());
                base.join(name)
            }
            _ => cli
                .root
                .as_ref()
                .cloned()
                .unwrap_or_else(|| self.get_root().to_owned()),
        };

        self.set_root(&root);
        self.update_path_with_root(&root);

        if let Commands::Build { build_args } = &cli.command {
            if build_args.force {
                self.build.always_recompile = true;
            }
            Self::update_option(
                &mut self.build.purge_whitespace,
                build_args.purge_whitespace.as_ref(),
            );
            if let Some(prefix) = &build_args.partial_prefix {
                self.build.partial_prefix = Some(prefix.clone());
            }
            if let Some(extensions) = &build_args.extensions {
                self.build.extensions = extensions.clone();
            }
            if let Some(merged) = &build_args.merged {
                self.build.mode = TraversalMode::Merged;
                self.build.merged_output = merged.clone();
            }
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path) {
        let cli = self.get_cli();

        // Apply CLI overrides first
        Self::update_option(&mut self.build.source, cli.source.as_ref());
        if let Some(output) = &cli.output {
            self.build.output = Some(output.clone());
        }

        // Normalize root to absolute path
        let root = Self::normalize_path(root);
        self.set_root(&root);

        // Normalize config path
        self.config_path = Self::normalize_path(&root.join(&cli.config));

        // Normalize all directory paths
        self.build.source = Self::normalize_path(&root.join(&self.build.source));
        let output = self
            .build
            .output
            .as_ref()
            .map_or_else(|| self.build.source.clone(), |out| root.join(out));
        self.build.output = Some(Self::normalize_path(&output));

        // Normalize bundle and cache paths (with tilde expansion)
        if let Some(bundle) = &self.compiler.bundle {
            self.compiler.bundle = Some(Self::expand_path(bundle, &root));
        }
        self.compiler.cache_dir = Self::expand_path(&self.compiler.cache_dir, &root);
    }

    /// Expand a tilde prefix and anchor relative paths at the project root
    fn expand_path(path: &Path, root: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        let path = PathBuf::from(expanded);
        if path.is_relative() {
            Self::normalize_path(&root.join(path))
        } else {
            Self::normalize_path(&path)
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<()> {
        if !self.config_path.exists() {
            bail!("Config file not found");
        }

        Self::check_command_installed("[compiler.command]", &self.compiler.command)?;

        if self.build.extensions.is_empty() {
            bail!(ConfigError::Validation(
                "[build.extensions] must name at least one extension".into()
            ));
        }

        let encoding = self.build.encoding.to_ascii_uppercase();
        if encoding != "UTF-8" && encoding != "UTF8" {
            bail!(ConfigError::Validation(format!(
                "[build.encoding] `{}` is not supported, only UTF-8",
                self.build.encoding
            )));
        }

        if !self.build.source.exists() {
            bail!(ConfigError::Validation(format!(
                "[build.source] `{}` does not exist",
                self.build.source.display()
            )));
        }

        Ok(())
    }

    /// Check if a command is installed and available
    fn check_command_installed(field: &str, command: &[String]) -> Result<()> {
        if command.is_empty() {
            bail!(ConfigError::Validation(format!(
                "{field} must have at least one element"
            )));
        }

        let cmd = &command[0];
        which::which(cmd)
            .with_context(|| format!("`{cmd}` not found. Please install it first."))?;

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
