//! Repository reference shared by the release and brew sections.

use crate::nullable::null_as_default;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A repository on a code-hosting service, e.g. `acme/tool`.
///
/// ```yaml
/// github:
///   owner: acme
///   name: tool
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Repo {
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub owner: String,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,
}

impl Repo {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

/// Renders as `owner/name`. Empty components are kept as-is.
impl fmt::Display for Repo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
