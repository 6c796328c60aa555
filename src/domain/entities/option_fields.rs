use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateLength, ValidationErrors};

/// Represents optional field semantics in profile update requests.
///
/// - `Unchanged` → field not touched
/// - `Clear` → reset to empty
/// - `Set` → replace with the provided value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum OptionField<T> {
    Unchanged,
    Clear,
    Set(T),
}

impl<T> Default for OptionField<T> {
    fn default() -> Self {
        OptionField::Unchanged
    }
}

// ---------------------- Validation support ----------------------

impl<T> ValidateLength<u64> for OptionField<T>
where
    T: ValidateLength<u64>,
{
    fn length(&self) -> Option<u64> {
        match self {
            OptionField::Set(value) => value.length(),
            _ => None,
        }
    }
    fn validate_length(&self, min: Option<u64>, max: Option<u64>, equal: Option<u64>) -> bool {
        match self {
            OptionField::Set(value) => value.validate_length(min, max, equal),
            _ => true,
        }
    }
}

impl<T: Validate> Validate for OptionField<T> {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            OptionField::Set(value) => value.validate(),
            _ => Ok(()),
        }
    }
}

// ---------------------- Core helpers & conversions ----------------------

impl<T> OptionField<T> {
    /// Convert to nested option:
    /// - `None` → unchanged
    /// - `Some(None)` → clear
    /// - `Some(Some(T))` → set to value
    pub fn into_option(self) -> Option<Option<T>> {
        match self {
            Self::Unchanged => None,
            Self::Clear => Some(None),
            Self::Set(v) => Some(Some(v)),
        }
    }

    /// True when `Unchanged`.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// If `Set`, returns a reference to the inner value.
    pub fn value_ref(&self) -> Option<&T> {
        if let Self::Set(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Convert into `Option<T>`, dropping the unchanged/clear distinction.
    pub fn flatten(self) -> Option<T> {
        match self {
            OptionField::Set(v) => Some(v),
            _ => None,
        }
    }
}

// ---------------------- Type-specific convenience ----------------------

impl OptionField<String> {
    /// Applies the patch to a plain text field. `Clear` empties the field,
    /// which is how unset text fields are represented on the profile.
    pub fn apply_to(self, field: &mut String) {
        match self {
            Self::Unchanged => {}
            Self::Clear => field.clear(),
            Self::Set(value) => *field = value,
        }
    }
}

// ---------------------- From conversions ----------------------

impl<T> From<Option<Option<T>>> for OptionField<T> {
    fn from(opt: Option<Option<T>>) -> Self {
        match opt {
            None => OptionField::Unchanged,
            Some(None) => OptionField::Clear,
            Some(Some(v)) => OptionField::Set(v),
        }
    }
}

impl<T> From<OptionField<T>> for Option<Option<T>> {
    fn from(of: OptionField<T>) -> Self {
        of.into_option()
    }
}

// ---------------------- Aliases ----------------------

pub type PatchString = OptionField<String>;
