//! Emitting a configuration back to YAML.

use crate::config::error::{ConfigError, ConfigResult};
use rk_protocol::config_models::ProjectConfig;

/// Serializes `config` as a YAML document.
///
/// Empty fields and all-empty sections are left out, so the output only
/// carries what is actually configured. A zero configuration renders as
/// `{}`. Runtime overlay values are not part of [`ProjectConfig`] and are
/// never emitted.
pub fn to_yaml(config: &ProjectConfig) -> ConfigResult<String> {
    serde_yaml::to_string(config).map_err(|source| ConfigError::Serialize { source })
}
