//! Release target and naming models.

use crate::nullable::null_as_default;
use crate::repo_models::Repo;
use serde::{Deserialize, Serialize};

/// Where the release is cut.
///
/// ```yaml
/// release:
///   github:
///     owner: acme
///     name: tool
///   draft: true
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Release {
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "crate::skip::is_empty_section"
    )]
    pub github: Repo,

    /// Create the release as a draft. An explicit `false` and a missing key
    /// are the same thing.
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "crate::skip::is_false"
    )]
    pub draft: bool,
}

/// Naming used for builds that are not cut from a tag.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Snapshot {
    #[serde(
        deserialize_with = "null_as_default",
        alias = "nametemplate",
        skip_serializing_if = "String::is_empty"
    )]
    pub name_template: String,
}

/// Naming of the checksums file.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Checksum {
    #[serde(
        deserialize_with = "null_as_default",
        alias = "nametemplate",
        skip_serializing_if = "String::is_empty"
    )]
    pub name_template: String,
}
