//! # rk-protocol
//!
//! The release descriptor schema for relkit.
//!
//! This crate defines the plain data types a `.relkit.yml` file decodes into.
//! It performs no I/O; loading lives in `rk-core`.
//!
//! ## Modules
//!
//! - [`repo_models`]: Remote repository reference
//! - [`build_models`]: Cross-compilation matrix and build invocation
//! - [`archive_models`]: Binary and source archive layout
//! - [`package_models`]: Homebrew formula and FPM package metadata
//! - [`release_models`]: Release target, snapshot and checksum naming
//! - [`hook_models`]: Lifecycle and cleanup hooks
//! - [`config_models`]: The root `ProjectConfig` aggregate
//!
//! ## Design Principles
//!
//! - Zero value means absent: every field defaults when missing from input
//! - Unknown keys are ignored rather than rejected
//! - Serialization omits empty fields, so a re-emitted descriptor only
//!   carries what was configured

pub mod archive_models;
pub mod build_models;
pub mod config_models;
pub mod hook_models;
pub mod package_models;
pub mod release_models;
pub mod repo_models;

mod nullable;
mod skip;

// Re-export all public types for convenience
pub use archive_models::*;
pub use build_models::*;
pub use config_models::*;
pub use hook_models::*;
pub use package_models::*;
pub use release_models::*;
pub use repo_models::*;
