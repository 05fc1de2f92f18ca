//! Loaded project: the descriptor plus runtime-only values.
//!
//! The schema in [`ProjectConfig`] only holds what can be written in a
//! descriptor. Values the runtime decides on, such as the dist directory,
//! live in a [`RuntimeOverlay`] next to it so they can never be read from or
//! written to a file.

use rk_protocol::config_models::ProjectConfig;
use std::path::{Path, PathBuf};

/// Values attached to a project after loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeOverlay {
    /// Directory build outputs are written to.
    pub dist: Option<PathBuf>,
}

/// A loaded release descriptor.
///
/// # Example
///
/// ```rust
/// use rk_core::config::load_from_str;
///
/// let project = load_from_str("release:\n  draft: true\n")?
///     .with_dist("target/dist");
///
/// assert!(project.config.release.draft);
/// assert_eq!(project.dist(), Some(std::path::Path::new("target/dist")));
/// # Ok::<(), rk_core::config::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Project {
    /// Everything decoded from the descriptor.
    pub config: ProjectConfig,

    /// Runtime-only values. Always empty straight out of the loader.
    pub runtime: RuntimeOverlay,
}

impl Project {
    pub fn new(config: ProjectConfig) -> Self {
        Self {
            config,
            runtime: RuntimeOverlay::default(),
        }
    }

    /// Attaches the dist directory.
    pub fn with_dist(mut self, dist: impl Into<PathBuf>) -> Self {
        self.runtime.dist = Some(dist.into());
        self
    }

    pub fn dist(&self) -> Option<&Path> {
        self.runtime.dist.as_deref()
    }
}

impl From<ProjectConfig> for Project {
    fn from(config: ProjectConfig) -> Self {
        Self::new(config)
    }
}
