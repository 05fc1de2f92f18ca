//! Locating the release descriptor inside a project directory.

use crate::config::error::{ConfigError, ConfigResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File names probed by [`find_config`], in priority order.
pub const CONFIG_FILE_NAMES: [&str; 4] =
    [".relkit.yml", ".relkit.yaml", "relkit.yml", "relkit.yaml"];

/// Returns the first descriptor found directly inside `dir`.
///
/// Only regular files count; a directory named `.relkit.yml` is skipped.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if none of [`CONFIG_FILE_NAMES`] exists.
pub fn find_config(dir: &Path) -> ConfigResult<PathBuf> {
    for name in CONFIG_FILE_NAMES {
        let candidate = dir.join(name);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "found config file");
            return Ok(candidate);
        }
    }

    Err(ConfigError::NotFound {
        dir: dir.to_path_buf(),
        tried: CONFIG_FILE_NAMES.join(", "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_find_config_prefers_hidden_yml() {
        let dir = tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("relkit.yaml"), "").expect("Failed to write file");
        fs::write(dir.path().join(".relkit.yml"), "").expect("Failed to write file");

        let found = find_config(dir.path()).expect("Should find a config");
        assert_eq!(found, dir.path().join(".relkit.yml"));
    }

    #[test]
    fn test_find_config_falls_back_to_visible_name() {
        let dir = tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("relkit.yaml"), "").expect("Failed to write file");

        let found = find_config(dir.path()).expect("Should find a config");
        assert_eq!(found, dir.path().join("relkit.yaml"));
    }

    #[test]
    fn test_find_config_skips_directories() {
        let dir = tempdir().expect("Failed to create temp dir");
        fs::create_dir(dir.path().join(".relkit.yml")).expect("Failed to create dir");
        fs::write(dir.path().join("relkit.yml"), "").expect("Failed to write file");

        let found = find_config(dir.path()).expect("Should find a config");
        assert_eq!(found, dir.path().join("relkit.yml"));
    }

    #[test]
    fn test_find_config_empty_directory() {
        let dir = tempdir().expect("Failed to create temp dir");

        match find_config(dir.path()) {
            Err(ConfigError::NotFound { dir: searched, tried }) => {
                assert_eq!(searched, dir.path());
                assert!(tried.contains(".relkit.yml"));
            }
            other => panic!("Expected NotFound error, got {:?}", other),
        }
    }
}
