//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// hbsc handlebars template precompiler CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Template source directory (relative to project root)
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Output directory for generated artifacts (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file name (default: hbsc.toml)
    #[arg(short = 'C', long, default_value = "hbsc.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Build arguments for the Build command
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Recompile everything, ignoring output freshness
    #[arg(short, long)]
    pub force: bool,

    /// Strip newline, carriage-return and tab characters before compiling
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub purge_whitespace: Option<bool>,

    /// Filename prefix marking partial templates
    #[arg(long)]
    pub partial_prefix: Option<String>,

    /// Template file extensions eligible for precompilation
    #[arg(short, long, value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// Merge the whole tree into one artifact with this file name
    #[arg(short, long, num_args = 0..=1, default_missing_value = "templates.js")]
    pub merged: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a starter hbsc.toml and template directory
    Init {
        /// the name(path) of the project directory, relative to `root`
        name: Option<PathBuf>,
    },

    /// Precompile the template tree into registration artifacts
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
}
