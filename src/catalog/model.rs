//! Deserializable representation of the Forage component catalog.
//!
//! The types mirror the JSON document produced by the catalog build so the
//! resolver and the selection aggregator can walk it without ad-hoc JSON
//! handling. Every list defaults to empty when omitted, and scalar fields such
//! as `defaultValue` accept strings, numbers or booleans.

use crate::catalog::identity::{MavenCoordinate, PropertyKind, RuntimeType};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Root catalog document.
pub struct ForageCatalog {
    #[serde(deserialize_with = "scalar_string")]
    pub version: Option<String>,
    pub generated_by: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub timestamp: Option<String>,
    pub components: Vec<CatalogComponent>,
}

impl ForageCatalog {
    /// Parse a catalog held in memory.
    pub fn from_json_str(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// One Maven-addressable unit of the catalog, keyed by `artifact_id`.
pub struct CatalogComponent {
    pub artifact_id: String,
    pub group_id: String,
    #[serde(deserialize_with = "scalar_string_or_empty")]
    pub version: String,
    pub configuration_properties: Vec<ConfigurationProperty>,
    pub beans: Vec<ForageBean>,
    pub factories: Vec<ForageFactory>,
    pub dependant_beans: Vec<DependantBean>,
    #[serde(deserialize_with = "optional_runtime_type")]
    pub runtime_type: Option<RuntimeType>,
}

impl CatalogComponent {
    pub fn coordinate(&self) -> MavenCoordinate {
        MavenCoordinate::new(&self.group_id, &self.artifact_id, &self.version)
    }

    pub fn has_bean(&self, name: &str) -> bool {
        self.beans.iter().any(|bean| bean.name == name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Selectable provider implementation.
pub struct ForageBean {
    pub name: String,
    pub components: Vec<String>,
    pub description: Option<String>,
    pub class_name: Option<String>,
    pub feature: Option<String>,
}

impl ForageBean {
    /// True when the bean and `components` name at least one common Camel component.
    pub fn shares_component(&self, components: &[String]) -> bool {
        self.components
            .iter()
            .any(|name| components.iter().any(|other| other == name))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// How a bean or related object is constructed, with optional per-runtime overlays.
pub struct ForageFactory {
    pub name: String,
    pub components: Vec<String>,
    pub description: Option<String>,
    pub bean_type: Option<String>,
    pub factory_type: Option<String>,
    pub class_name: Option<String>,
    pub autowired: bool,
    #[serde(deserialize_with = "optional_runtime_type")]
    pub runtime_type: Option<RuntimeType>,
    pub runtimes: Vec<RuntimeComponent>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Runtime-specific overlay (Spring Boot, Quarkus, ...) nested under a factory.
///
/// Carries its own Maven coordinates; nested factories and dependant beans are
/// reported against these coordinates rather than the outer component's.
pub struct RuntimeComponent {
    pub artifact_id: String,
    pub group_id: String,
    #[serde(deserialize_with = "scalar_string_or_empty")]
    pub version: String,
    #[serde(deserialize_with = "optional_runtime_type")]
    pub runtime_type: Option<RuntimeType>,
    pub configuration_properties: Vec<ConfigurationProperty>,
    pub beans: Vec<ForageBean>,
    pub factories: Vec<ForageFactory>,
    pub dependant_beans: Vec<DependantBean>,
}

impl RuntimeComponent {
    pub fn coordinate(&self) -> MavenCoordinate {
        MavenCoordinate::new(&self.group_id, &self.artifact_id, &self.version)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Configurable property; `name` is only unique inside its owning component.
pub struct ConfigurationProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub description: Option<String>,
    pub required: bool,
    #[serde(deserialize_with = "scalar_string")]
    pub default_value: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub example: Option<String>,
    pub label: Option<String>,
    pub config_tag: Option<String>,
}

impl ConfigurationProperty {
    pub fn kind(&self) -> PropertyKind {
        PropertyKind::from_type(&self.property_type)
    }

    /// Label shown to users; falls back to the property name.
    pub fn display_label(&self) -> &str {
        match self.label.as_deref() {
            Some(label) if !label.trim().is_empty() => label,
            _ => &self.name,
        }
    }

    /// Default value, treating an empty string as absent.
    pub fn default_text(&self) -> Option<&str> {
        self.default_value.as_deref().filter(|value| !value.is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Bean generated as a side effect of a property being switched on.
pub struct DependantBean {
    pub depends_on_factory_type: Option<String>,
    pub depends_on_property: Option<String>,
    pub description: Option<String>,
    pub named_beans: Vec<String>,
    pub bean_type: Option<String>,
    pub property_bean_name: Option<String>,
    pub class_name: Option<String>,
}

fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string, number or boolean, found {other}"
        ))),
    }
}

fn scalar_string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_string(deserializer)?.unwrap_or_default())
}

fn optional_runtime_type<'de, D>(deserializer: D) -> Result<Option<RuntimeType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .filter(|value| !value.trim().is_empty())
        .map(|value| RuntimeType::parse(&value)))
}
