//! Project initialization.
//!
//! Writes a starter configuration and template directory.

use crate::{config::Config, log};
use anyhow::{Context, Result};
use std::fs;

/// Write a default hbsc.toml and create the template source directory.
pub fn init_config(config: &Config) -> Result<()> {
    let root = config.get_root();
    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create {}", root.display()))?;

    let content = toml::to_string_pretty(&Config::default())?;
    fs::write(&config.config_path, content)
        .with_context(|| format!("Failed to write {}", config.config_path.display()))?;

    fs::create_dir_all(&config.build.source)
        .with_context(|| format!("Failed to create {}", config.build.source.display()))?;

    log!("init"; "created {}", config.config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_a_parseable_config() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::from_str("").unwrap();
        config.build.root = Some(dir.path().to_path_buf());
        config.config_path = dir.path().join("hbsc.toml");
        config.build.source = dir.path().join("templates");

        init_config(&config).unwrap();

        let written = Config::from_path(&dir.path().join("hbsc.toml")).unwrap();
        assert_eq!(written.build.extensions, vec!["html", "htm", "hbs"]);
        assert_eq!(written.compiler.command, vec!["node"]);
        assert!(dir.path().join("templates").is_dir());
    }
}
