//! Common test utilities shared by the loader integration tests.

pub mod fixtures;

pub use fixtures::*;
