//! Release descriptor loading.
//!
//! This module turns a `.relkit.yml` file, or any byte stream, into a
//! [`models::Project`].

pub mod discovery;
pub mod error;
pub mod loader;
pub mod models;
pub mod writer;

pub use discovery::find_config;
pub use error::{ConfigError, ConfigResult};
pub use loader::{load, load_from_reader, load_from_str};
pub use models::{Project, RuntimeOverlay};
pub use writer::to_yaml;
