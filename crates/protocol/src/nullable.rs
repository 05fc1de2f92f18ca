//! Deserialization helpers for optional descriptor values.

use serde::{Deserialize, Deserializer};

/// Reads an explicit YAML null (`~`, `null`, or an empty value) as the
/// type's zero value, so `release: ~` and a missing `release` agree.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
