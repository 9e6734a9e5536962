//! Template precompilation pipeline.
//!
//! This module holds the pieces the orchestrator wires together:
//!
//! - **adapter**: the pluggable `Handlebars.precompile` capability
//! - **classify**: split candidate files into partials and templates
//! - **normalize**: optional whitespace purging before compilation
//! - **emit**: assemble the generated registration artifact
//! - **utils**: traversal and output-freshness helpers
//!
//! # Pipeline
//!
//! ```text
//! collect_files() ──► classify() ──► purge_whitespace() ──► precompile()
//!                                                               │
//!                  Artifact::register_partial/template() ◄──────┘
//! ```

pub mod adapter;
pub mod classify;
pub mod emit;
pub mod normalize;
pub mod utils;

pub use adapter::{CompileError, CompilerAdapter, ScriptRuntime};
pub use classify::classify;
pub use emit::{Artifact, partial_key, template_key};
pub use normalize::purge_whitespace;
pub use utils::{collect_files, should_skip};
