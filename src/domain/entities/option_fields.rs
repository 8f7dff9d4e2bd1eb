use serde::{Deserialize, Deserializer};

/// Represents optional field semantics in partial update requests.
///
/// - `Unchanged` → key absent from the body
/// - `SetToNull` → key present with `null`
/// - `SetToValue` → key present with a value
///
/// Fields of this type must be annotated `#[serde(default)]` so that an absent key
/// becomes `Unchanged` instead of a deserialization error.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OptionField<T> {
    #[default]
    Unchanged,
    SetToNull,
    SetToValue(T),
}

impl<'de, T> Deserialize<'de> for OptionField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => OptionField::SetToValue(value),
            None => OptionField::SetToNull,
        })
    }
}

impl<T> OptionField<T> {
    /// Convert to nested option:
    /// - `None` → unchanged
    /// - `Some(None)` → set null
    /// - `Some(Some(T))` → set to value
    pub fn into_option(self) -> Option<Option<T>> {
        match self {
            Self::Unchanged => None,
            Self::SetToNull => Some(None),
            Self::SetToValue(v) => Some(Some(v)),
        }
    }
}

impl<T> From<Option<Option<T>>> for OptionField<T> {
    fn from(opt: Option<Option<T>>) -> Self {
        match opt {
            None => OptionField::Unchanged,
            Some(None) => OptionField::SetToNull,
            Some(Some(v)) => OptionField::SetToValue(v),
        }
    }
}
