//! Package metadata models for the `brew` and `fpm` sections.

use crate::nullable::null_as_default;
use crate::repo_models::Repo;
use serde::{Deserialize, Serialize};

/// Homebrew formula metadata.
///
/// # Example
///
/// ```yaml
/// brew:
///   github:
///     owner: acme
///     name: homebrew-tap
///   folder: Formula
///   install: bin.install "tool"
///   dependencies: [git]
///   build_dependencies: [go]
///   test: system "#{bin}/tool --version"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Homebrew {
    /// Tap repository the formula is pushed to.
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "crate::skip::is_empty_section"
    )]
    pub github: Repo,

    /// Folder inside the tap repository.
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub folder: String,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub caveats: String,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub head: String,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub plist: String,

    /// Ruby snippet for the formula's `install` block.
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub install: String,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub dependencies: Vec<String>,

    #[serde(
        deserialize_with = "null_as_default",
        alias = "builddependencies",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub build_dependencies: Vec<String>,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub conflicts: Vec<String>,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub description: String,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub homepage: String,

    /// Ruby snippet for the formula's `test` block.
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub test: String,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub special: String,
}

/// Native package metadata handed to fpm (deb, rpm and friends).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Fpm {
    /// Package formats to produce, e.g. `deb`, `rpm`.
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub formats: Vec<String>,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub dependencies: Vec<String>,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub conflicts: Vec<String>,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub vendor: String,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub homepage: String,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub maintainer: String,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub description: String,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub license: String,
}
