//! Release descriptor loader.
//!
//! Two entry points share one decode path:
//! - [`load`] opens a file and hands it to [`load_from_reader`]
//! - [`load_from_reader`] buffers any byte stream and decodes it
//!
//! Each call does exactly one read and one parse. Nothing is cached, so
//! loading the same input twice yields two equal, independent values.

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::models::Project;
use rk_protocol::config_models::ProjectConfig;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Loads a release descriptor from `path`.
///
/// The file is closed when this function returns, whether decoding
/// succeeded or not.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - The file cannot be opened (missing, permission denied, a directory on
///   platforms where opening one fails)
/// - The file cannot be read to the end
/// - The content is not valid YAML or a value has the wrong type
///
/// # Example
///
/// ```rust,no_run
/// use rk_core::config::load;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let project = load(".relkit.yml")?;
/// println!("Releasing to {}", project.config.release.github);
/// # Ok(())
/// # }
/// ```
pub fn load(path: impl AsRef<Path>) -> ConfigResult<Project> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading config file");

    let file = File::open(path).map_err(|source| ConfigError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    load_from_reader(file)
}

/// Loads a release descriptor from any byte stream.
///
/// The stream is read to the end before decoding starts. Empty input, a
/// comment-only document and a bare `~` decode to the zero configuration. The returned
/// project never has runtime overlay values set.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] if the stream fails mid-way and
/// [`ConfigError::Parse`] if the bytes do not decode into a
/// [`ProjectConfig`].
pub fn load_from_reader<R: Read>(mut reader: R) -> ConfigResult<Project> {
    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .map_err(|source| ConfigError::Read { source })?;
    debug!(bytes = data.len(), "read config");

    let config = decode(&data)?;
    debug!(sections = ?config.configured_sections(), "parsed config");

    Ok(Project::new(config))
}

/// Loads a release descriptor held in memory.
pub fn load_from_str(content: &str) -> ConfigResult<Project> {
    load_from_reader(content.as_bytes())
}

fn decode(data: &[u8]) -> ConfigResult<ProjectConfig> {
    // Empty, comment-only and `~` documents all decode to `None`.
    serde_yaml::from_slice::<Option<ProjectConfig>>(data)
        .map(Option::unwrap_or_default)
        .map_err(|source| ConfigError::Parse { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io;
    use tempfile::tempdir;

    /// Yields some bytes, then fails.
    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "truncated"));
            }
            self.served = true;
            let chunk = b"release:\n";
            let n = chunk.len().min(buf.len());
            buf[..n].copy_from_slice(&chunk[..n]);
            Ok(n)
        }
    }

    #[test]
    fn test_load_minimal_release() {
        let project = load_from_str("release: {github: {owner: acme, name: tool}, draft: true}")
            .expect("Should load minimal release");

        assert_eq!(project.config.release.github.to_string(), "acme/tool");
        assert!(project.config.release.draft);
        assert_eq!(project.config.configured_sections(), vec!["release"]);
    }

    #[test]
    fn test_load_empty_stream() {
        let project = load_from_reader(io::empty()).expect("Empty input should load");
        assert_eq!(project, Project::default());
    }

    #[test]
    fn test_load_whitespace_only() {
        let project = load_from_str("\n  \n\t\n").expect("Whitespace should load");
        assert_eq!(project.config, ProjectConfig::default());
    }

    #[test]
    fn test_load_null_document() {
        for input in ["~\n", "null\n", "---\n", "# only a comment\n"] {
            let project = load_from_str(input).expect("Null document should load");
            assert_eq!(project.config, ProjectConfig::default(), "input: {input:?}");
        }
    }

    #[test]
    fn test_load_null_sections() {
        let explicit =
            load_from_str("release: ~\nbuild: null\nbrew:\n").expect("Null sections should load");
        assert_eq!(explicit.config, ProjectConfig::default());
    }

    #[test]
    fn test_load_null_fields() {
        let input = r#"
release:
  github: ~
  draft: null
build:
  goos: null
  binary: ~
  hooks:
  ignore:
    - goos: windows
      goarch: ~
archive:
  replacements: ~
  format_overrides: null
"#;
        let project = load_from_str(input).expect("Null fields should load");
        let config = &project.config;

        assert_eq!(config.release, Default::default());
        assert!(config.build.goos.is_empty());
        assert_eq!(config.build.binary, "");
        assert_eq!(config.build.ignore.len(), 1);
        assert_eq!(config.build.ignore[0].goos, "windows");
        assert_eq!(config.build.ignore[0].goarch, "");
        assert!(config.archive.replacements.is_empty());
        assert!(config.archive.format_overrides.is_empty());
        assert_eq!(config.configured_sections(), vec!["build"]);
    }

    #[test]
    fn test_null_and_empty_values_agree() {
        let null = load_from_str("build:\n  goos: ~\n").expect("Should load");
        let empty = load_from_str("build:\n  goos:\n").expect("Should load");
        let absent = load_from_str("build: {}\n").expect("Should load");

        assert_eq!(null, empty);
        assert_eq!(null, absent);
    }

    #[test]
    fn test_yaml_1_1_booleans_are_rejected() {
        let result = load_from_str("release:\n  draft: yes\n");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let result = load_from_str("release: {github: {owner: acme");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_scalar_for_list() {
        let result = load_from_str("build:\n  goos: linux\n");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_scalar_for_section() {
        let result = load_from_str("release: yes please\n");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_numbers_into_string_lists() {
        let project = load_from_str("build:\n  goarm: [6, 7]\n").expect("Should load goarm");
        assert_eq!(project.config.build.goarm, vec!["6", "7"]);
    }

    #[test]
    fn test_load_empty_collections() {
        let project = load_from_str("build:\n  goos: []\narchive:\n  replacements: {}\n")
            .expect("Empty collections should load");
        assert_eq!(project.config, ProjectConfig::default());
    }

    #[test]
    fn test_explicit_false_equals_absent() {
        let explicit = load_from_str("release:\n  draft: false\n").expect("Should load");
        let absent = load_from_str("release: {}\n").expect("Should load");
        assert_eq!(explicit, absent);
    }

    #[test]
    fn test_read_failure() {
        let result = load_from_reader(FailingReader { served: false });
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_load_twice_is_equal() {
        let input = "build:\n  binary: tool\n  goos: [linux]\nsnapshot:\n  name_template: dev\n";

        let first = load_from_str(input).expect("First load");
        let second = load_from_str(input).expect("Second load");

        assert_eq!(first, second);
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(".relkit.yml");
        fs::write(&path, "fpm:\n  formats: [deb]\n  vendor: Acme\n")
            .expect("Failed to write config");

        let project = load(&path).expect("Should load from path");

        assert_eq!(project.config.fpm.formats, vec!["deb"]);
        assert_eq!(project.config.fpm.vendor, "Acme");
        assert_eq!(project.dist(), None);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("missing.yml");

        match load(&path) {
            Err(ConfigError::Open { path: failed, source }) => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("Expected Open error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_file_reports_parse() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(".relkit.yml");
        fs::write(&path, "build:\n  goos: [linux\n").expect("Failed to write config");

        assert!(matches!(load(&path), Err(ConfigError::Parse { .. })));
    }
}
