//! Lifecycle hooks run around build and release steps.

use crate::nullable::null_as_default;
use serde::{Deserialize, Serialize};

/// Commands run before and after an action.
///
/// An empty command means no action for that phase.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Hooks {
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub pre: String,

    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub post: String,
}

/// Commands run after a release has been published, in declaration order.
///
/// ```yaml
/// cleanup:
///   hooks:
///     - rm -rf dist/tmp
///     - ./scripts/notify.sh
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Cleanup {
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub hooks: Vec<String>,
}
