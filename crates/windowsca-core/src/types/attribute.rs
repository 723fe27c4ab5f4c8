//! Tri-state attribute values as delivered by the plugin host

/// A single provider attribute value
///
/// Terraform distinguishes between a value that was never written (`Null`)
/// and one that was written but depends on something not applied yet
/// (`Unknown`). Both are different from an explicit, possibly empty, string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AttributeValue {
    /// Declared, but not resolvable until a dependency is applied
    Unknown,
    /// Not provided
    #[default]
    Null,
    /// Provided literal
    Set(String),
}

impl AttributeValue {
    /// Create a set value
    pub fn set(value: impl Into<String>) -> Self {
        AttributeValue::Set(value.into())
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, AttributeValue::Unknown)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }

    /// The literal value, if one was set
    pub fn value(&self) -> Option<&str> {
        match self {
            AttributeValue::Set(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

impl From<Option<String>> for AttributeValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(v) => AttributeValue::Set(v),
            None => AttributeValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_states() {
        assert!(AttributeValue::Unknown.is_unknown());
        assert!(AttributeValue::Null.is_null());
        assert_eq!(AttributeValue::set("h").value(), Some("h"));
        assert_eq!(AttributeValue::Unknown.value(), None);
        assert_eq!(AttributeValue::default(), AttributeValue::Null);
    }

    #[test]
    fn test_empty_set_is_not_null() {
        let empty = AttributeValue::set("");
        assert!(!empty.is_null());
        assert_eq!(empty.value(), Some(""));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(AttributeValue::from(None), AttributeValue::Null);
        assert_eq!(AttributeValue::from(Some("u".to_string())), AttributeValue::set("u"));
    }
}
