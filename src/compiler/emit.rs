//! Generated artifact assembly.
//!
//! Builds the self-invoking registration module in memory:
//!
//! ```text
//! (function() {
//!   var template = Handlebars.template, templates = Handlebars.templates = Handlebars.templates || {};
//! Handlebars.registerPartial('greet', templates['greet']=template(<fn>));
//! templates['root']=template(<fn>);
//! })();
//! ```
//!
//! Partials must be registered before regular templates so that a template
//! body referencing a partial resolves it within the same evaluation pass.
//! The whole artifact is assembled in memory and written in one operation,
//! so a failed batch never leaves a half-written file behind.

use std::fmt::Write;
use std::path::Path;

/// In-memory builder for one generated artifact.
pub struct Artifact {
    buf: String,
}

impl Artifact {
    /// Open the wrapper and declare the local template constructor and
    /// registry bindings.
    pub fn new() -> Self {
        let mut buf = String::new();
        buf.push_str("(function() {\n");
        buf.push_str(
            "  var template = Handlebars.template, \
             templates = Handlebars.templates = Handlebars.templates || {};\n",
        );
        Self { buf }
    }

    /// Register a partial: stored in the templates map and additionally
    /// bound into the partial registry under the same key.
    pub fn register_partial(&mut self, key: &str, compiled: &str) {
        let key = escape_key(key);
        writeln!(
            self.buf,
            "Handlebars.registerPartial('{key}', templates['{key}']=template({compiled}));"
        )
        .ok();
    }

    /// Register a regular template in the templates map only.
    pub fn register_template(&mut self, key: &str, compiled: &str) {
        let key = escape_key(key);
        writeln!(self.buf, "templates['{key}']=template({compiled});").ok();
    }

    /// Close the wrapper and return the finished artifact text.
    pub fn finish(mut self) -> String {
        self.buf.push_str("})();\n");
        self.buf
    }
}

/// Registration key for a template file: the filename without extension.
pub fn template_key(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|stem| stem.to_str())
}

/// Registration key for a partial: the filename without extension and
/// without the partial prefix, so `partial_greet.hbs` is invokable as
/// `{{> greet}}`.
pub fn partial_key<'a>(path: &'a Path, prefix: &str) -> Option<&'a str> {
    template_key(path).map(|stem| stem.strip_prefix(prefix).unwrap_or(stem))
}

/// Escape a key for embedding in a single-quoted JavaScript string literal.
fn escape_key(key: &str) -> String {
    key.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_artifact_is_self_contained() {
        let mut artifact = Artifact::new();
        artifact.register_template("root1", "FN1");
        let text = artifact.finish();

        assert!(text.starts_with("(function() {\n"));
        assert!(text.contains(
            "var template = Handlebars.template, \
             templates = Handlebars.templates = Handlebars.templates || {};"
        ));
        assert!(text.contains("templates['root1']=template(FN1);\n"));
        assert!(text.ends_with("})();\n"));
    }

    #[test]
    fn test_partial_registers_into_both_registries() {
        let mut artifact = Artifact::new();
        artifact.register_partial("greet", "FN");
        let text = artifact.finish();

        assert!(text.contains(
            "Handlebars.registerPartial('greet', templates['greet']=template(FN));"
        ));
    }

    #[test]
    fn test_partials_precede_templates() {
        let mut artifact = Artifact::new();
        artifact.register_partial("greet", "P1");
        artifact.register_partial("foot", "P2");
        artifact.register_template("root3", "T1");
        let text = artifact.finish();

        let last_partial = text.rfind("registerPartial").unwrap();
        let first_template = text.find("templates['root3']").unwrap();
        assert!(last_partial < first_template);
    }

    #[test]
    fn test_template_key_strips_extension_and_directory() {
        assert_eq!(template_key(&PathBuf::from("views/root1.hbs")), Some("root1"));
        assert_eq!(template_key(&PathBuf::from("_greet.html")), Some("_greet"));
    }

    #[test]
    fn test_partial_key_strips_prefix() {
        assert_eq!(
            partial_key(&PathBuf::from("views/partial_greet.hbs"), "partial_"),
            Some("greet")
        );
        // a stem that happens not to carry the prefix is kept as-is
        assert_eq!(partial_key(&PathBuf::from("greet.hbs"), "_"), Some("greet"));
    }

    #[test]
    fn test_key_quotes_are_escaped() {
        let mut artifact = Artifact::new();
        artifact.register_template("it's", "FN");
        let text = artifact.finish();
        assert!(text.contains("templates['it\\'s']=template(FN);"));
    }
}
