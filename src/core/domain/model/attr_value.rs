//! Tri-state attribute values.
//!
//! Every attribute of a resource record is either still pending (`Unknown`),
//! deliberately unset (`Null`) or carries a value (`Known`). Keeping the three
//! states apart is what lets defaulting logic tell "the caller left this out"
//! from "the caller set it to an empty value".

/// A single attribute value in one of three states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AttrValue<T> {
    /// Not yet determined; will be resolved by defaults or by the server.
    Unknown,
    /// Explicitly absent.
    #[default]
    Null,
    /// A concrete value.
    Known(T),
}

/// String attribute.
pub type StringValue = AttrValue<String>;

/// Boolean attribute.
pub type BoolValue = AttrValue<bool>;

impl<T> AttrValue<T> {
    pub fn known(value: impl Into<T>) -> Self {
        AttrValue::Known(value.into())
    }

    /// Maps an optional API field onto an attribute: `None` becomes `Null`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => AttrValue::Known(v),
            None => AttrValue::Null,
        }
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, AttrValue::Unknown)
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        matches!(self, AttrValue::Known(_))
    }

    /// Returns the value if known.
    pub fn as_known(&self) -> Option<&T> {
        match self {
            AttrValue::Known(v) => Some(v),
            _ => None,
        }
    }

    /// Replaces `Unknown` with `fallback`, leaving the other states alone.
    pub fn or_if_unknown(self, fallback: AttrValue<T>) -> Self {
        match self {
            AttrValue::Unknown => fallback,
            other => other,
        }
    }
}

impl AttrValue<String> {
    /// Borrowed string view of a known value.
    pub fn as_str(&self) -> Option<&str> {
        self.as_known().map(String::as_str)
    }
}

impl<T> From<T> for AttrValue<T> {
    fn from(value: T) -> Self {
        AttrValue::Known(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_null() {
        let value: StringValue = AttrValue::default();
        assert!(value.is_null());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(
            StringValue::from_option(Some("a".to_string())),
            AttrValue::Known("a".to_string())
        );
        assert_eq!(StringValue::from_option(None), AttrValue::Null);
    }

    #[test]
    fn test_unknown_and_null_are_distinct() {
        let unknown: BoolValue = AttrValue::Unknown;
        let null: BoolValue = AttrValue::Null;
        assert_ne!(unknown, null);
        assert_eq!(unknown.as_known(), null.as_known());
    }

    #[test]
    fn test_or_if_unknown() {
        let fallback: StringValue = AttrValue::known("x");
        assert_eq!(
            StringValue::Unknown.or_if_unknown(fallback.clone()),
            fallback
        );
        assert_eq!(
            StringValue::Null.or_if_unknown(fallback.clone()),
            AttrValue::Null
        );
        assert_eq!(
            StringValue::known("y").or_if_unknown(fallback),
            AttrValue::known("y")
        );
    }
}
