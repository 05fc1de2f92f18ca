//! # rk-core
//!
//! Release descriptor loading for relkit.
//!
//! This crate provides:
//! - Loading a descriptor from a path or any `Read` source
//! - Locating the descriptor inside a project directory
//! - A runtime overlay for values that never come from the file
//! - Re-emitting a configuration as normalized YAML
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading and management

pub mod config;

pub use rk_protocol as protocol;
