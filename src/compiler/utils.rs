//! Traversal and freshness helpers shared by both traversal strategies.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Files to ignore during directory traversal
pub const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Collect candidate template files under `dir`.
///
/// Non-recursive collection looks only at files directly inside `dir`;
/// recursive collection walks the whole tree. Hidden files and the ignore
/// list are skipped. Entries are sorted by file name so traversal order is
/// stable across platforms.
pub fn collect_files(dir: &Path, extensions: &[String], recursive: bool) -> Vec<PathBuf> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(if recursive { usize::MAX } else { 1 })
        .sort_by_file_name();

    walker
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !name.starts_with('.') && !IGNORED_FILES.contains(&name)
        })
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| extensions.iter().any(|e| e == ext))
        })
        .map(|e| e.into_path())
        .collect()
}

/// Decide whether recompiling a batch may be skipped.
///
/// Never skips when `force` is set or the output artifact is missing.
/// Otherwise skips iff no source is strictly newer than the artifact.
/// Unreadable metadata counts as stale.
pub fn should_skip(output: &Path, sources: &[PathBuf], force: bool) -> bool {
    if force {
        return false;
    }
    let Ok(output_meta) = output.metadata() else {
        return false;
    };
    let Ok(output_time) = output_meta.modified() else {
        return false;
    };

    sources.iter().all(|source| {
        source
            .metadata()
            .and_then(|meta| meta.modified())
            .is_ok_and(|source_time| source_time <= output_time)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn exts() -> Vec<String> {
        vec!["hbs".into(), "html".into()]
    }

    fn set_mtime(path: &Path, time: SystemTime) {
        File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(time)
            .unwrap();
    }

    #[test]
    fn test_collect_non_recursive_skips_subdirectories() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("root.hbs"), "x").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/nested.hbs"), "x").unwrap();

        let files = collect_files(dir.path(), &exts(), false);
        assert_eq!(files, vec![dir.path().join("root.hbs")]);
    }

    #[test]
    fn test_collect_recursive_walks_the_tree() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("root.hbs"), "x").unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("a/b/deep.html"), "x").unwrap();

        let files = collect_files(dir.path(), &exts(), true);
        assert_eq!(files.len(), 2);
        assert!(files.contains(&dir.path().join("a/b/deep.html")));
    }

    #[test]
    fn test_collect_ignores_hidden_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".DS_Store"), "x").unwrap();
        fs::write(dir.path().join(".hidden.hbs"), "x").unwrap();
        fs::write(dir.path().join("visible.hbs"), "x").unwrap();

        let files = collect_files(dir.path(), &exts(), false);
        assert_eq!(files, vec![dir.path().join("visible.hbs")]);
    }

    #[test]
    fn test_skip_requires_existing_output() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("root.hbs");
        fs::write(&source, "x").unwrap();

        let missing = dir.path().join("out.js");
        assert!(!should_skip(&missing, &[source], false));
    }

    #[test]
    fn test_force_always_recompiles() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("root.hbs");
        let output = dir.path().join("out.js");
        fs::write(&source, "x").unwrap();
        fs::write(&output, "x").unwrap();
        set_mtime(&source, SystemTime::now() - Duration::from_secs(3600));

        assert!(should_skip(&output, &[source.clone()], false));
        assert!(!should_skip(&output, &[source], true));
    }

    #[test]
    fn test_newer_source_defeats_skip() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("root.hbs");
        let output = dir.path().join("out.js");
        fs::write(&source, "x").unwrap();
        fs::write(&output, "x").unwrap();
        set_mtime(&output, SystemTime::now() - Duration::from_secs(3600));

        assert!(!should_skip(&output, &[source], false));
    }
}
