//! Tri-state field marker for partial updates.

use serde::{Deserialize, Deserializer};

/// One field of a partial update body.
///
/// JSON cannot tell "key left out" from "key set to null" once it lands in an
/// `Option`, so patch DTOs use this instead. Fields must carry
/// `#[serde(default)]` so a missing key becomes `Unchanged`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldPatch<T> {
    /// Key absent from the request.
    #[default]
    Unchanged,
    /// Key present with `null`.
    Clear,
    /// Key present with a value.
    Set(T),
}

impl<T> FieldPatch<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, FieldPatch::Unchanged)
    }

    /// `Some(value)` only when a value was supplied.
    pub fn into_value(self) -> Option<T> {
        match self {
            FieldPatch::Set(value) => Some(value),
            _ => None,
        }
    }

    /// Column-write form: whether to touch the column, and the value to put
    /// there (`None` for `Clear`).
    pub fn as_write(&self) -> (bool, Option<&T>) {
        match self {
            FieldPatch::Unchanged => (false, None),
            FieldPatch::Clear => (true, None),
            FieldPatch::Set(value) => (true, Some(value)),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FieldPatch<U> {
        match self {
            FieldPatch::Unchanged => FieldPatch::Unchanged,
            FieldPatch::Clear => FieldPatch::Clear,
            FieldPatch::Set(value) => FieldPatch::Set(f(value)),
        }
    }
}

impl<'de, T> Deserialize<'de> for FieldPatch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => FieldPatch::Set(value),
            None => FieldPatch::Clear,
        })
    }
}
