//! Pluggable Handlebars compiler capability.
//!
//! The precompiler never parses Handlebars syntax itself; it hands template
//! source to a [`CompilerAdapter`] and receives the compiled-function literal
//! back as text. The shipped implementation runs the unmodified
//! `handlebars.js` bundle inside an external JavaScript runtime, but any
//! implementation of the trait works (tests use an in-memory stub).

use crate::config::Config;
use crate::utils::exec::exec_with_stdin;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by a compiler capability.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The runtime or the handlebars.js bundle cannot be used.
    #[error("handlebars compiler unavailable: {0}")]
    Unavailable(String),

    /// The compiler rejected the template source.
    #[error("{0}")]
    Rejected(String),
}

/// Anything that can run `Handlebars.precompile` over raw template source.
pub trait CompilerAdapter {
    /// Compile raw template source into the serialized function literal.
    fn precompile(&self, source: &str) -> Result<String, CompileError>;
}

/// Driver evaluated by the JavaScript runtime. Loads the bundle passed as
/// the first script argument, reads the template from stdin, and writes the
/// precompiled function spec to stdout. Syntax errors reach stderr with a
/// non-zero exit status.
const DRIVER: &str = "\
const Handlebars = require(process.argv[1]);\
const source = require('fs').readFileSync(0, 'utf8');\
process.stdout.write(Handlebars.precompile(source));";

/// Compiler capability backed by an external JavaScript runtime executing
/// the handlebars.js bundle. Resolved once per run and held for its
/// duration.
#[derive(Debug)]
pub struct ScriptRuntime {
    command: Vec<String>,
    bundle: PathBuf,
}

impl ScriptRuntime {
    /// Resolve the runtime command and bundle location from configuration.
    ///
    /// # Errors
    /// [`CompileError::Unavailable`] when the bundle file does not exist or
    /// the runtime binary cannot be found.
    pub fn startup(config: &Config) -> Result<Self, CompileError> {
        let bundle = config.compiler.bundle_path();
        if !bundle.is_file() {
            return Err(CompileError::Unavailable(format!(
                "handlebars bundle not found at `{}`",
                bundle.display()
            )));
        }

        let command = config.compiler.command.clone();
        let program = command.first().ok_or_else(|| {
            CompileError::Unavailable("[compiler.command] is empty".into())
        })?;
        which::which(program).map_err(|_| {
            CompileError::Unavailable(format!("runtime `{program}` not found"))
        })?;

        Ok(Self { command, bundle })
    }
}

impl CompilerAdapter for ScriptRuntime {
    fn precompile(&self, source: &str) -> Result<String, CompileError> {
        let args = ["-e".as_ref(), DRIVER.as_ref(), self.bundle.as_os_str()];
        let output = exec_with_stdin(&self.command, &args, source.as_bytes())
            .map_err(|err| match err.kind() {
                ErrorKind::NotFound => CompileError::Unavailable(format!(
                    "runtime `{}` not found",
                    self.command[0]
                )),
                _ => CompileError::Unavailable(err.to_string()),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CompileError::Rejected(stderr.trim().to_string()));
        }

        String::from_utf8(output.stdout)
            .map_err(|_| CompileError::Rejected("compiler produced non-UTF-8 output".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_startup_fails_without_bundle() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::from_str("").unwrap();
        config.compiler.cache_dir = dir.path().to_path_buf();

        let err = ScriptRuntime::startup(&config).unwrap_err();
        assert!(matches!(err, CompileError::Unavailable(_)));
        assert!(err.to_string().contains("1.0.0"));
    }

    #[test]
    fn test_startup_fails_for_missing_runtime() {
        let dir = TempDir::new().unwrap();
        let bundle = dir.path().join("handlebars.js");
        fs::write(&bundle, "module.exports = {};").unwrap();

        let mut config = Config::from_str("").unwrap();
        config.compiler.bundle = Some(bundle);
        config.compiler.command = vec!["hbsc-no-such-runtime".into()];

        let err = ScriptRuntime::startup(&config).unwrap_err();
        assert!(matches!(err, CompileError::Unavailable(_)));
    }
}
