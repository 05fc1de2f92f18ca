//! Archive layout models for the `archive` and `source` sections.
//!
//! Name templates and replacements are kept as raw strings. Rendering them
//! belongs to the templating step downstream.

use crate::nullable::null_as_default;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Archive format to use for one operating system instead of the default.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FormatOverride {
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub goos: String,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub format: String,
}

/// How build outputs are packaged into archives.
///
/// # Example
///
/// ```yaml
/// archive:
///   format: tar.gz
///   format_overrides:
///     - goos: windows
///       format: zip
///   name_template: "{{.Binary}}_{{.Version}}_{{.Os}}_{{.Arch}}"
///   replacements:
///     darwin: macOS
///     amd64: x86_64
///   files:
///     - LICENSE
///     - README.md
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Archive {
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub format: String,

    #[serde(
        deserialize_with = "null_as_default",
        alias = "formatoverrides",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub format_overrides: Vec<FormatOverride>,

    #[serde(
        deserialize_with = "null_as_default",
        alias = "nametemplate",
        skip_serializing_if = "String::is_empty"
    )]
    pub name_template: String,

    /// Substitutions applied to template variables, e.g. `darwin -> macOS`.
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub replacements: BTreeMap<String, String>,

    /// Extra files bundled next to the binary.
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub files: Vec<String>,
}

/// Source tarball packaging.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Source {
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub format: String,

    #[serde(
        deserialize_with = "null_as_default",
        alias = "nametemplate",
        skip_serializing_if = "String::is_empty"
    )]
    pub name_template: String,

    /// Glob patterns left out of the source archive.
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub excludes: Vec<String>,
}
