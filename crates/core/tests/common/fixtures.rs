//! Test fixtures for creating sample descriptors on disk.

use tempfile::TempDir;

/// A descriptor touching every section.
pub const FULL_DESCRIPTOR: &str = r#"
release:
  github:
    owner: acme
    name: tool
  draft: true
brew:
  github:
    owner: acme
    name: homebrew-tap
  folder: Formula
  install: bin.install "tool"
  dependencies: [git]
  build_dependencies: [go]
build:
  main: ./cmd/tool
  binary: tool
  ldflags: -s -w
  goos: [linux, darwin, windows]
  goarch: [amd64, arm64]
  ignore:
    - goos: windows
      goarch: arm64
  hooks:
    pre: make generate
  env:
    - CGO_ENABLED=0
archive:
  format: tar.gz
  format_overrides:
    - goos: windows
      format: zip
  name_template: "{{.Binary}}_{{.Os}}_{{.Arch}}"
  replacements:
    darwin: macOS
  files: [LICENSE]
source:
  format: tar.gz
  excludes: [dist]
fpm:
  formats: [deb, rpm]
  vendor: Acme
  maintainer: Dev <dev@example.com>
  license: MIT
snapshot:
  name_template: SNAPSHOT-{{.Commit}}
checksum:
  name_template: checksums.txt
hooks:
  pre: echo start
cleanup:
  hooks:
    - rm -rf tmp
"#;

/// Create a temporary project directory with `contents` written to
/// `file_name`.
///
/// Returns a TempDir that must be kept alive for the test duration.
pub fn create_test_project(file_name: &str, contents: &str) -> std::io::Result<TempDir> {
    let temp_dir = tempfile::tempdir()?;
    std::fs::write(temp_dir.path().join(file_name), contents)?;
    Ok(temp_dir)
}
