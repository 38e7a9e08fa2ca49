use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidateLength, ValidationErrors};

/// Represents optional field semantics in PATCH/UPDATE requests.
///
/// - `Unchanged` → field not present in the body
/// - `SetToNull` → explicitly `null`
/// - `SetToValue` → set to provided value
///
/// Use together with `#[serde(default)]` on the containing struct so that a
/// missing key falls back to `Unchanged`.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
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
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(v) => OptionField::SetToValue(v),
            None => OptionField::SetToNull,
        })
    }
}

// ---------------------- Validation support ----------------------

impl<T> ValidateLength<u64> for OptionField<T>
where
    T: ValidateLength<u64>
{
    fn length(&self) -> Option<u64> {
        match self {
            OptionField::SetToValue(value) => value.length(),
            _ => None,
        }
    }
    fn validate_length(&self, min: Option<u64>, max: Option<u64>, equal: Option<u64>) -> bool {
        match self {
            OptionField::SetToValue(value) => value.validate_length(min, max, equal),
            _ => true,
        }
    }
}

impl<T: Validate> Validate for OptionField<T> {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            OptionField::SetToValue(value) => value.validate(),
            _ => Ok(()),
        }
    }
}

// ---------------------- Core helpers ----------------------

impl<T> OptionField<T> {
    /// Borrowed nested option:
    /// - `None` → unchanged
    /// - `Some(None)` → set null
    /// - `Some(Some(&T))` → set to value
    pub fn as_ref_option(&self) -> Option<Option<&T>> {
        match self {
            Self::Unchanged => None,
            Self::SetToNull => Some(None),
            Self::SetToValue(value) => Some(Some(value)),
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    pub fn is_set_to_null(&self) -> bool {
        matches!(self, Self::SetToNull)
    }

    /// If `SetToValue`, returns a reference to inner value.
    pub fn value_ref(&self) -> Option<&T> {
        if let Self::SetToValue(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Resolve against the currently stored value.
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Self::Unchanged => current,
            Self::SetToNull => None,
            Self::SetToValue(v) => Some(v),
        }
    }

    /// Resolve a non-nullable column: `SetToNull` keeps the stored value.
    pub fn apply_required(self, current: T) -> T {
        match self {
            Self::SetToValue(v) => v,
            _ => current,
        }
    }
}
