//! Partial/template classification by filename prefix.

use std::path::PathBuf;

/// Split candidate files into partials and regular templates.
///
/// A file is a partial iff its filename starts with `partial_prefix`.
/// An unset or empty prefix disables partial scanning entirely, so every
/// file lands in the regular group. Order within each group is the input
/// traversal order.
pub fn classify(
    files: Vec<PathBuf>,
    partial_prefix: Option<&str>,
) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let prefix = partial_prefix.filter(|p| !p.is_empty());

    let mut partials = Vec::new();
    let mut templates = Vec::new();
    for file in files {
        let is_partial = prefix.is_some_and(|prefix| {
            file.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(prefix))
        });
        if is_partial {
            partials.push(file);
        } else {
            templates.push(file);
        }
    }
    (partials, templates)
}
