//! Build matrix models for the `build` section.

use crate::hook_models::Hooks;
use crate::nullable::null_as_default;
use serde::{Deserialize, Serialize};

/// A single (goos, goarch, goarm) target excluded from the build matrix.
///
/// Consumers use it purely as a membership filter; empty components are
/// allowed.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct IgnoredBuild {
    #[serde(deserialize_with = "null_as_default")]
    pub goos: String,
    #[serde(deserialize_with = "null_as_default")]
    pub goarch: String,
    #[serde(deserialize_with = "null_as_default")]
    pub goarm: String,
}

/// Cross-compilation matrix and build invocation.
///
/// Empty target lists are left empty here. Choosing an implicit target is
/// up to the builder.
///
/// # Example
///
/// ```yaml
/// build:
///   main: ./cmd/tool
///   binary: tool
///   ldflags: -s -w -X main.version={{.Version}}
///   goos: [linux, darwin, windows]
///   goarch: [amd64, arm]
///   goarm: [6, 7]
///   ignore:
///     - goos: windows
///       goarch: arm
///   hooks:
///     pre: make generate
///   env:
///     - CGO_ENABLED=0
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Build {
    /// Target operating systems.
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub goos: Vec<String>,

    /// Target architectures.
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub goarch: Vec<String>,

    /// ARM variants, only meaningful when `goarch` contains `arm`.
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub goarm: Vec<String>,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub ignore: Vec<IgnoredBuild>,

    /// Path to the entrypoint package or file.
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub main: String,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub ldflags: String,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub flags: String,

    /// Output binary name.
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub binary: String,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "crate::skip::is_empty_section"
    )]
    pub hooks: Hooks,

    /// Extra `KEY=value` entries added to the build environment.
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub env: Vec<String>,
}
