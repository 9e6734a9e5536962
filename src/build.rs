//! Precompilation orchestration.
//!
//! Walks the template source tree and produces generated registration
//! artifacts, one batch at a time.
//!
//! # Architecture
//!
//! ```text
//! precompile_all()
//!     │
//!     ├── ScriptRuntime::startup()      acquire the compiler once per run
//!     │
//!     ├── per-directory mode ──► visit() recurses, one artifact per
//!     │                          directory that yields templates
//!     │
//!     └── merged mode ──► one batch over the whole tree, one artifact
//!
//! each batch: collect ──► staleness check ──► classify ──► compile ──► emit
//! ```
//!
//! Batches run strictly sequentially; the first failure aborts the run with
//! the offending path.

use crate::{
    compiler::{
        Artifact, CompilerAdapter, ScriptRuntime, classify, collect_files, partial_key,
        purge_whitespace, should_skip, template_key,
    },
    config::{Config, TraversalMode},
    log,
};
use anyhow::{Context, Result, bail};
use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

/// Precompile the configured source tree.
///
/// The compiler capability is acquired once and held for the whole run.
pub fn precompile_all(config: &'static Config) -> Result<()> {
    let runtime = ScriptRuntime::startup(config)?;
    run_with_adapter(config, &runtime)
}

/// Orchestrator entry point, generic over the compiler capability.
pub(crate) fn run_with_adapter<A: CompilerAdapter>(config: &Config, adapter: &A) -> Result<()> {
    match config.build.mode {
        TraversalMode::PerDirectory => visit(config, adapter, &config.build.source)?,
        TraversalMode::Merged => precompile_merged(config, adapter)?,
    }
    log!("build"; "done");
    Ok(())
}

/// Visit a directory and then its children, depth-first.
fn visit<A: CompilerAdapter>(config: &Config, adapter: &A, dir: &Path) -> Result<()> {
    precompile_dir(config, adapter, dir)?;

    let mut children: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory `{}`", dir.display()))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_ok_and(|ty| ty.is_dir()))
        .filter(|entry| !entry.file_name().to_string_lossy().starts_with('.'))
        .map(|entry| entry.path())
        .collect();
    children.sort();

    for child in children {
        visit(config, adapter, &child)?;
    }
    Ok(())
}

/// Precompile the templates directly inside one directory.
///
/// A directory yielding no templates produces nothing: no artifact and no
/// mirrored output directory.
fn precompile_dir<A: CompilerAdapter>(config: &Config, adapter: &A, dir: &Path) -> Result<()> {
    let templates = collect_files(dir, &config.build.extensions, false);
    if templates.is_empty() {
        return Ok(());
    }

    let output_file = output_file_for(config, dir);
    if should_skip(&output_file, &templates, config.build.always_recompile) {
        log!("skip"; "unchanged {}", output_file.display());
        return Ok(());
    }

    precompile_batch(config, adapter, templates, &output_file)
}

/// Precompile every template under the source root into a single artifact.
fn precompile_merged<A: CompilerAdapter>(config: &Config, adapter: &A) -> Result<()> {
    let templates = collect_files(&config.build.source, &config.build.extensions, true);
    if templates.is_empty() {
        log!("build"; "no templates under `{}`", config.build.source.display());
        return Ok(());
    }

    let output_file = config.output_root().join(&config.build.merged_output);
    if should_skip(&output_file, &templates, config.build.always_recompile) {
        log!("skip"; "unchanged {}", output_file.display());
        return Ok(());
    }

    precompile_batch(config, adapter, templates, &output_file)
}

/// Artifact path for a directory: its relative position mirrored under the
/// output root, named after the directory itself.
fn output_file_for(config: &Config, dir: &Path) -> PathBuf {
    let relative = dir
        .strip_prefix(&config.build.source)
        .unwrap_or(Path::new(""));
    let name = dir
        .file_name()
        .map_or(Cow::Borrowed("templates"), |name| name.to_string_lossy());
    config
        .output_root()
        .join(relative)
        .join(format!("{name}.js"))
}

/// Compile one batch and write its artifact.
///
/// Partials are compiled and registered before regular templates. The
/// artifact is assembled fully in memory first, so a failing template leaves
/// no half-written output behind.
fn precompile_batch<A: CompilerAdapter>(
    config: &Config,
    adapter: &A,
    templates: Vec<PathBuf>,
    output_file: &Path,
) -> Result<()> {
    log!(
        "compile";
        "precompiling {} templates to {}",
        templates.len(),
        output_file.display()
    );

    let prefix = config.build.partial_prefix.as_deref();
    let (partials, regulars) = classify(templates, prefix);

    let mut artifact = Artifact::new();
    for path in &partials {
        let compiled = compile_source(config, adapter, path)?;
        let Some(key) = partial_key(path, prefix.unwrap_or("")) else {
            bail!("template `{}` has no usable file name", path.display());
        };
        artifact.register_partial(key, &compiled);
    }
    for path in &regulars {
        let compiled = compile_source(config, adapter, path)?;
        let Some(key) = template_key(path) else {
            bail!("template `{}` has no usable file name", path.display());
        };
        artifact.register_template(key, &compiled);
    }

    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create output directory `{}`", parent.display())
        })?;
    }
    fs::write(output_file, artifact.finish())
        .with_context(|| format!("Failed to write `{}`", output_file.display()))
}

/// Read, normalize and compile one template source.
fn compile_source<A: CompilerAdapter>(
    config: &Config,
    adapter: &A,
    path: &Path,
) -> Result<String> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read template `{}`", path.display()))?;
    let text = raw.strip_prefix('\u{feff}').unwrap_or(&raw);
    let source = purge_whitespace(text, config.build.purge_whitespace);
    adapter
        .precompile(&source)
        .with_context(|| format!("Failed to precompile `{}`", path.display()))
}

// ============================================================================
// Tests
// ============================================================================
