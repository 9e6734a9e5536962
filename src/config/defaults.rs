//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use super::super::TraversalMode;
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn source() -> PathBuf {
        "templates".into()
    }

    pub fn output() -> Option<PathBuf> {
        None
    }

    pub fn extensions() -> Vec<String> {
        vec!["html".into(), "htm".into(), "hbs".into()]
    }

    pub fn partial_prefix() -> Option<String> {
        None
    }

    pub fn mode() -> TraversalMode {
        TraversalMode::default()
    }

    pub fn merged_output() -> PathBuf {
        "templates.js".into()
    }

    pub fn encoding() -> String {
        "UTF-8".into()
    }
}

// ============================================================================
// [compiler] Section Defaults
// ============================================================================

pub mod compiler {
    use std::path::PathBuf;

    pub fn command() -> Vec<String> {
        vec!["node".into()]
    }

    pub fn version() -> String {
        "1.0.0".into()
    }

    pub fn bundle() -> Option<PathBuf> {
        None
    }

    pub fn cache_dir() -> PathBuf {
        "~/.cache/hbsc/script".into()
    }
}
