//! The root of a release descriptor.

use crate::archive_models::{Archive, Source};
use crate::build_models::Build;
use crate::hook_models::{Cleanup, Hooks};
use crate::nullable::null_as_default;
use crate::package_models::{Fpm, Homebrew};
use crate::release_models::{Checksum, Release, Snapshot};
use crate::skip::is_empty_section;
use serde::{Deserialize, Serialize};

/// Every section of a `.relkit.yml` descriptor.
///
/// All sections are optional. A missing section, an empty one and one
/// holding only zero values decode to the same `Default` value.
///
/// Runtime-only data such as the dist directory is not part of this type;
/// see `rk_core::config::models::Project`.
///
/// # Example
///
/// ```yaml
/// release:
///   github:
///     owner: acme
///     name: tool
/// build:
///   binary: tool
///   goos: [linux, darwin]
/// archive:
///   format: tar.gz
/// snapshot:
///   name_template: SNAPSHOT-{{.Commit}}
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectConfig {
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_empty_section"
    )]
    pub release: Release,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_empty_section"
    )]
    pub brew: Homebrew,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_empty_section"
    )]
    pub build: Build,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_empty_section"
    )]
    pub archive: Archive,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_empty_section"
    )]
    pub source: Source,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_empty_section"
    )]
    pub fpm: Fpm,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_empty_section"
    )]
    pub snapshot: Snapshot,

    /// Hooks around the whole release run.
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_empty_section"
    )]
    pub hooks: Hooks,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_empty_section"
    )]
    pub checksum: Checksum,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_empty_section"
    )]
    pub cleanup: Cleanup,
}

impl ProjectConfig {
    /// Names of the top-level sections holding at least one non-zero value,
    /// in declaration order.
    pub fn configured_sections(&self) -> Vec<&'static str> {
        let sections = [
            ("release", !is_empty_section(&self.release)),
            ("brew", !is_empty_section(&self.brew)),
            ("build", !is_empty_section(&self.build)),
            ("archive", !is_empty_section(&self.archive)),
            ("source", !is_empty_section(&self.source)),
            ("fpm", !is_empty_section(&self.fpm)),
            ("snapshot", !is_empty_section(&self.snapshot)),
            ("hooks", !is_empty_section(&self.hooks)),
            ("checksum", !is_empty_section(&self.checksum)),
            ("cleanup", !is_empty_section(&self.cleanup)),
        ];

        sections
            .into_iter()
            .filter_map(|(name, present)| present.then_some(name))
            .collect()
    }
}
