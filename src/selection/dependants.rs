//! Activation of dependant beans from configured and default property values.

use crate::catalog::{CatalogResolver, ConfigurationProperty, DependantBean, ResolvedDependantBean};
use crate::selection::properties::Configuration;
use serde_json::Value;

/// Whether `bean` should be generated for the current configuration.
///
/// A bean with no `dependsOnProperty` is always active. Otherwise a configured
/// value decides: `false`/`"false"` switch it off, any other non-empty value
/// switches it on. With nothing configured, a catalog default of `"true"` on a
/// property of the same name (first match in `defaults`) switches it on.
pub fn is_dependant_active(
    bean: &DependantBean,
    configuration: &Configuration,
    defaults: &[&ConfigurationProperty],
) -> bool {
    let property = match bean.depends_on_property.as_deref() {
        None | Some("") => return true,
        Some(property) => property,
    };

    match configuration.get(property) {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) if text == "false" => false,
        Some(Value::String(text)) if !text.is_empty() => true,
        Some(Value::Null) | Some(Value::String(_)) | None => defaults
            .iter()
            .find(|candidate| candidate.name == property)
            .and_then(|candidate| candidate.default_value.as_deref())
            .is_some_and(|default| default == "true"),
        Some(_) => true,
    }
}

/// Properties consulted for dependant-bean defaults: the bean's own resolved
/// properties followed by its `-common` sibling's.
pub fn default_candidates<'a>(
    resolver: &CatalogResolver<'a>,
    bean_name: &str,
) -> Vec<&'a ConfigurationProperty> {
    let mut candidates: Vec<&'a ConfigurationProperty> = resolver
        .configuration_properties_for_bean(bean_name)
        .iter()
        .collect();
    if let Some(common) = resolver
        .component_for_bean(bean_name)
        .and_then(|owner| resolver.common_component(&owner.artifact_id))
    {
        candidates.extend(common.configuration_properties.iter());
    }
    candidates
}

/// Dependant beans for `bean_name` that the configuration activates.
pub fn active_dependant_beans(
    resolver: &CatalogResolver<'_>,
    bean_name: &str,
    configuration: &Configuration,
) -> Vec<ResolvedDependantBean> {
    let defaults = default_candidates(resolver, bean_name);
    resolver
        .dependant_beans_for_bean(bean_name)
        .into_iter()
        .filter(|entry| is_dependant_active(&entry.bean, configuration, &defaults))
        .collect()
}
