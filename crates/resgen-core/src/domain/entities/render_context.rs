//! Binding set handed to the template engine.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Separator that turns a raw value into a list.
pub const LIST_SEPARATOR: char = ',';

/// A resolved property value.
///
/// Classification is purely syntactic: a raw value containing at least one
/// [`LIST_SEPARATOR`] is a list, anything else is a scalar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Scalar(String),
    List(Vec<String>),
}

impl PropertyValue {
    /// Classify and trim a raw value.
    ///
    /// Empty elements produced by consecutive or trailing separators are kept.
    pub fn from_raw(raw: &str) -> Self {
        if raw.contains(LIST_SEPARATOR) {
            Self::List(
                raw.split(LIST_SEPARATOR)
                    .map(|part| part.trim().to_string())
                    .collect(),
            )
        } else {
            Self::Scalar(raw.trim().to_string())
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            Self::Scalar(_) => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    /// Scalars print verbatim; lists print their elements joined by the
    /// separator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => f.write_str(s),
            Self::List(items) => {
                let mut first = true;
                for item in items {
                    if !first {
                        write!(f, "{LIST_SEPARATOR}")?;
                    }
                    f.write_str(item)?;
                    first = false;
                }
                Ok(())
            }
        }
    }
}

/// Where a binding came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertySource {
    Explicit,
    Environment,
}

/// Property name → value, built once per invocation.
///
/// Keys are unique by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: HashMap<String, (PropertyValue, PropertySource)>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a value, replacing any earlier binding of the same name.
    pub fn insert(&mut self, key: impl Into<String>, value: PropertyValue, source: PropertySource) {
        self.variables.insert(key.into(), (value, source));
    }

    /// Add a binding, consuming self and returning the extended context.
    pub fn with_variable(mut self, key: impl Into<String>, value: PropertyValue) -> Self {
        self.insert(key, value, PropertySource::Explicit);
        self
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.variables.get(key).map(|(value, _)| value)
    }

    pub fn source_of(&self, key: &str) -> Option<PropertySource> {
        self.variables.get(key).map(|(_, source)| *source)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Number of bindings that came from the given source.
    pub fn count_from(&self, source: PropertySource) -> usize {
        self.variables.values().filter(|(_, s)| *s == source).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_free_value_is_trimmed_scalar() {
        assert_eq!(
            PropertyValue::from_raw("  World \t"),
            PropertyValue::Scalar("World".into())
        );
    }

    #[test]
    fn comma_makes_a_trimmed_list() {
        assert_eq!(
            PropertyValue::from_raw("a, b ,c"),
            PropertyValue::List(vec!["a".into(), "b".into(), "c".into()])
        );
    }

    #[test]
    fn empty_elements_are_preserved() {
        assert_eq!(
            PropertyValue::from_raw("a,,b,"),
            PropertyValue::List(vec!["a".into(), "".into(), "b".into(), "".into()])
        );
        assert_eq!(
            PropertyValue::from_raw(","),
            PropertyValue::List(vec!["".into(), "".into()])
        );
    }

    #[test]
    fn empty_raw_value_is_empty_scalar() {
        assert_eq!(PropertyValue::from_raw(""), PropertyValue::Scalar("".into()));
    }

    #[test]
    fn list_displays_joined() {
        let v = PropertyValue::from_raw("red, green ,blue");
        assert_eq!(v.to_string(), "red,green,blue");
        assert_eq!(v.as_list().map(<[String]>::len), Some(3));
        assert!(v.as_scalar().is_none());
    }

    #[test]
    fn insert_replaces_existing_binding() {
        let mut ctx = RenderContext::new();
        ctx.insert("k", PropertyValue::from_raw("env"), PropertySource::Environment);
        ctx.insert("k", PropertyValue::from_raw("explicit"), PropertySource::Explicit);
        assert_eq!(ctx.len(), 1);
        assert_eq!(ctx.get("k").unwrap().as_scalar(), Some("explicit"));
        assert_eq!(ctx.source_of("k"), Some(PropertySource::Explicit));
    }
}
