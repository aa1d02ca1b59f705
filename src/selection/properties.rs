//! User-entered configuration and the effective property set derived from it.
//!
//! Values are keyed by raw property name with no component namespace, so two
//! components exposing the same property name share one entry.

use crate::catalog::{ConfigurationProperty, ForageBean, PropertyKind};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Flat `property name -> value` map collected during a wizard session.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Configuration(BTreeMap<String, Value>);

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Configured value as display text; `None` for absent, null or empty.
    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name).and_then(value_text)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Configuration {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

pub(crate) fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Where an effective property's value came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueSource {
    BeanName,
    Configured,
    Default,
}

/// Property that ends up in the summary and in the generated properties.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveProperty {
    pub name: String,
    pub label: String,
    pub kind: PropertyKind,
    pub value: String,
    pub source: ValueSource,
    pub description: Option<String>,
    pub config_tag: Option<String>,
}

/// Display value of a property: configured value, else default, else empty.
pub fn display_value(property: &ConfigurationProperty, configuration: &Configuration) -> String {
    configuration
        .text(&property.name)
        .or_else(|| property.default_text().map(str::to_string))
        .unwrap_or_default()
}

/// Active properties for `bean` in catalog order.
///
/// `bean-name` properties are always active and show the bean's name; others
/// need a non-empty configured or default value.
pub fn effective_properties(
    properties: &[ConfigurationProperty],
    bean: &ForageBean,
    configuration: &Configuration,
) -> Vec<EffectiveProperty> {
    properties
        .iter()
        .filter_map(|property| {
            let kind = property.kind();
            let (value, source) = if kind == PropertyKind::BeanName {
                (bean.name.clone(), ValueSource::BeanName)
            } else if let Some(configured) = configuration.text(&property.name) {
                (configured, ValueSource::Configured)
            } else {
                (property.default_text()?.to_string(), ValueSource::Default)
            };
            Some(EffectiveProperty {
                name: property.name.clone(),
                label: property.display_label().to_string(),
                kind,
                value,
                source,
                description: property.description.clone(),
                config_tag: property.config_tag.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn property(name: &str, kind: &str, default: Option<&str>) -> ConfigurationProperty {
        ConfigurationProperty {
            name: name.to_string(),
            property_type: kind.to_string(),
            default_value: default.map(str::to_string),
            ..Default::default()
        }
    }

    fn bean() -> ForageBean {
        ForageBean {
            name: "postgresql".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn text_skips_null_and_empty() {
        let configuration: Configuration = [
            ("a", json!(null)),
            ("b", json!("")),
            ("c", json!(false)),
            ("d", json!(5)),
        ]
        .into_iter()
        .collect();
        assert_eq!(configuration.text("a"), None);
        assert_eq!(configuration.text("b"), None);
        assert_eq!(configuration.text("c").as_deref(), Some("false"));
        assert_eq!(configuration.text("d").as_deref(), Some("5"));
        assert_eq!(configuration.text("missing"), None);
    }

    #[test]
    fn configured_beats_default() {
        let properties = vec![property("jdbc.url", "string", Some("jdbc:default"))];
        let mut configuration = Configuration::new();
        configuration.set("jdbc.url", "jdbc:custom");
        let effective = effective_properties(&properties, &bean(), &configuration);
        assert_eq!(effective.len(), 1);
        assert_eq!(effective[0].value, "jdbc:custom");
        assert_eq!(effective[0].source, ValueSource::Configured);
    }

    #[test]
    fn empty_configured_value_falls_back_to_default() {
        let properties = vec![property("jdbc.url", "string", Some("jdbc:default"))];
        let mut configuration = Configuration::new();
        configuration.set("jdbc.url", "");
        let effective = effective_properties(&properties, &bean(), &configuration);
        assert_eq!(effective[0].value, "jdbc:default");
        assert_eq!(effective[0].source, ValueSource::Default);
    }

    #[test]
    fn unset_property_without_default_is_inactive() {
        let properties = vec![
            property("jdbc.user", "string", None),
            property("jdbc.password", "password", Some("")),
        ];
        let effective = effective_properties(&properties, &bean(), &Configuration::new());
        assert!(effective.is_empty());
    }

    #[test]
    fn bean_name_property_is_always_active() {
        let properties = vec![property("jdbc.provider", "Bean-Name", None)];
        let effective = effective_properties(&properties, &bean(), &Configuration::new());
        assert_eq!(effective.len(), 1);
        assert_eq!(effective[0].value, "postgresql");
        assert_eq!(effective[0].source, ValueSource::BeanName);
        assert_eq!(effective[0].kind, PropertyKind::BeanName);
    }

    #[test]
    fn display_value_defaults_to_empty() {
        let prop = property("jdbc.user", "string", None);
        assert_eq!(display_value(&prop, &Configuration::new()), "");
        let prop = property("jdbc.url", "string", Some("jdbc:x"));
        assert_eq!(display_value(&prop, &Configuration::new()), "jdbc:x");
    }
}
