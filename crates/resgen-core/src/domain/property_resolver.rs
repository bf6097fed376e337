use std::collections::HashMap;

use tracing::{debug, trace};

use crate::domain::{
    entities::{
        configuration::ExplicitProperties,
        render_context::{PropertySource, PropertyValue, RenderContext},
    },
    error::DomainError,
};

/// Merges explicit properties with environment variables.
///
/// An environment variable whose name is also an explicit property is
/// discarded entirely; the explicit raw value is the only input for that key.
pub struct PropertyResolver;

impl PropertyResolver {
    pub fn resolve(
        explicit: &ExplicitProperties,
        environment: &HashMap<String, String>,
    ) -> Result<RenderContext, DomainError> {
        let mut context = RenderContext::new();

        for (key, raw) in environment {
            if explicit.contains_key(key) {
                trace!(key = %key, "Environment variable shadowed by explicit property");
                continue;
            }
            context.insert(key.clone(), classify(key, raw), PropertySource::Environment);
        }

        for (key, raw) in explicit {
            let raw = raw
                .as_deref()
                .ok_or_else(|| DomainError::MissingPropertyValue { key: key.clone() })?;
            context.insert(key.clone(), classify(key, raw), PropertySource::Explicit);
        }

        Ok(context)
    }
}

fn classify(key: &str, raw: &str) -> PropertyValue {
    let value = PropertyValue::from_raw(raw);
    if value.is_list() {
        debug!(key = %key, "Processing property as list");
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn explicit(entries: &[(&str, &str)]) -> ExplicitProperties {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), Some(v.to_string())))
            .collect()
    }

    fn env(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn union_of_explicit_and_environment() {
        let ctx = PropertyResolver::resolve(
            &explicit(&[("name", "World")]),
            &env(&[("HOME", "/home/dev")]),
        )
        .unwrap();

        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx.get("name"), Some(&PropertyValue::Scalar("World".into())));
        assert_eq!(ctx.source_of("HOME"), Some(PropertySource::Environment));
    }

    #[test]
    fn explicit_list_wins_over_environment() {
        let ctx = PropertyResolver::resolve(
            &explicit(&[("colors", "red,green,blue")]),
            &env(&[("colors", "OVERRIDDEN")]),
        )
        .unwrap();

        assert_eq!(
            ctx.get("colors"),
            Some(&PropertyValue::List(vec![
                "red".into(),
                "green".into(),
                "blue".into()
            ]))
        );
        assert_eq!(ctx.source_of("colors"), Some(PropertySource::Explicit));
    }

    #[test]
    fn environment_entry_is_discarded_not_merged() {
        // A list-shaped environment value must not leak into a scalar explicit one.
        let ctx = PropertyResolver::resolve(
            &explicit(&[("tags", "solo")]),
            &env(&[("tags", "x,y")]),
        )
        .unwrap();
        assert_eq!(ctx.get("tags"), Some(&PropertyValue::Scalar("solo".into())));
    }

    #[test]
    fn environment_values_are_classified_too() {
        let ctx =
            PropertyResolver::resolve(&ExplicitProperties::new(), &env(&[("PATHS", " a , b ")]))
                .unwrap();
        assert_eq!(
            ctx.get("PATHS"),
            Some(&PropertyValue::List(vec!["a".into(), "b".into()]))
        );
    }

    #[test]
    fn declared_explicit_property_without_value_is_an_error() {
        let mut props = explicit(&[("ok", "1")]);
        props.insert("broken".into(), None);

        let err = PropertyResolver::resolve(&props, &env(&[("broken", "from-env")])).unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingPropertyValue {
                key: "broken".into()
            }
        );
    }

    #[test]
    fn empty_inputs_give_empty_context() {
        let ctx = PropertyResolver::resolve(&ExplicitProperties::new(), &HashMap::new()).unwrap();
        assert!(ctx.is_empty());
    }

    #[test]
    fn counts_by_source() {
        let ctx = PropertyResolver::resolve(
            &explicit(&[("a", "1"), ("b", "2")]),
            &env(&[("b", "x"), ("c", "3")]),
        )
        .unwrap();
        assert_eq!(ctx.count_from(PropertySource::Explicit), 2);
        assert_eq!(ctx.count_from(PropertySource::Environment), 1);
    }
}
