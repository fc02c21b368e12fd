use crate::value::ValueKind;
use thiserror::Error;

/// Errors raised while discriminating a [`Value`](crate::Value) into one of its variants
///
/// The map itself never returns this: a missing key is reported as `None` or
/// `false`. A `ValueError` only comes out of the caller-side conversions
/// ([`TryFrom`], [`TypedValue::from_value`](crate::TypedValue::from_value),
/// [`ConcurrentMap::load_as`](crate::ConcurrentMap::load_as)).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueError {
    /// The stored value is a different variant than the one asked for
    #[error("value kind mismatch: expected {expected}, found {found}")]
    KindMismatch {
        expected: ValueKind,
        found: ValueKind,
    },
}
