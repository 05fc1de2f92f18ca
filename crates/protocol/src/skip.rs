//! Predicates for `skip_serializing_if`.

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

pub(crate) fn is_empty_section<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}
