//! Derives the configuration summary for a selected bean.
//!
//! Given a bean name and the flat configuration map, `summarize` gathers the
//! Maven variants, effective properties, matching factories, dependency
//! buckets and activated dependant beans. Missing catalog data degrades to
//! empty fields; nothing here fails.

pub mod dependants;
pub mod factories;
pub mod maven;
pub mod properties;
pub mod render;

pub use dependants::{active_dependant_beans, is_dependant_active};
pub use factories::{
    DependencyBucket, DependencyBuckets, MatchedFactory, matching_factories, primary_factories,
};
pub use maven::{MavenVariants, maven_variants};
pub use properties::{Configuration, EffectiveProperty, ValueSource, effective_properties};

use crate::catalog::{CatalogResolver, ForageBean, MavenCoordinate, ResolvedDependantBean};
use serde::Serialize;
use tracing::debug;

/// Everything shown after the wizard finishes.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSummary {
    pub bean: Option<ForageBean>,
    /// Name the user gave the bean instance; may be empty.
    pub instance_name: String,
    pub component: Option<MavenCoordinate>,
    pub variants: MavenVariants,
    pub properties: Vec<EffectiveProperty>,
    pub factories: Vec<MatchedFactory>,
    pub primary_factories: Vec<MatchedFactory>,
    pub dependencies: DependencyBuckets,
    pub dependant_beans: Vec<ResolvedDependantBean>,
}

impl SelectionSummary {
    pub fn with_instance_name(mut self, name: impl Into<String>) -> Self {
        self.instance_name = name.into();
        self
    }

    /// Instance name, or the catalog bean name when none was entered.
    pub fn display_name(&self) -> &str {
        if !self.instance_name.trim().is_empty() {
            return &self.instance_name;
        }
        self.bean.as_ref().map(|bean| bean.name.as_str()).unwrap_or("")
    }
}

/// Build the summary for `bean_name` under `configuration`.
pub fn summarize(
    resolver: &CatalogResolver<'_>,
    bean_name: &str,
    configuration: &Configuration,
) -> SelectionSummary {
    let Some(bean) = resolver.bean_by_name(bean_name) else {
        debug!(bean = bean_name, "bean not in catalog; summary is empty");
        return SelectionSummary::default();
    };
    let owner = resolver.component_for_bean(bean_name);

    let properties = effective_properties(
        resolver.configuration_properties_for_bean(bean_name),
        bean,
        configuration,
    );
    let factories = matching_factories(resolver, bean);
    let primary = primary_factories(&factories);
    let dependencies = DependencyBuckets::from_matches(owner, &factories);
    let dependant_beans = active_dependant_beans(resolver, bean_name, configuration);

    debug!(
        bean = bean_name,
        properties = properties.len(),
        factories = factories.len(),
        dependant_beans = dependant_beans.len(),
        "selection summarized"
    );

    SelectionSummary {
        bean: Some(bean.clone()),
        instance_name: String::new(),
        component: owner.map(|component| component.coordinate()),
        variants: owner
            .map(|component| maven_variants(resolver, component))
            .unwrap_or_default(),
        properties,
        factories,
        primary_factories: primary,
        dependencies,
        dependant_beans,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ForageCatalog;
    use pretty_assertions::assert_eq;

    #[test]
    fn unknown_bean_yields_empty_summary() {
        let catalog = ForageCatalog::default();
        let resolver = CatalogResolver::new(Some(&catalog));
        let summary = summarize(&resolver, "missing", &Configuration::new());
        assert_eq!(summary, SelectionSummary::default());
        assert_eq!(summary.display_name(), "");
    }

    #[test]
    fn no_catalog_yields_empty_summary() {
        let summary = summarize(&CatalogResolver::empty(), "postgresql", &Configuration::new());
        assert!(summary.bean.is_none());
        assert!(summary.dependencies.generic.is_empty());
    }

    #[test]
    fn display_name_prefers_instance_name() {
        let summary = SelectionSummary {
            bean: Some(ForageBean {
                name: "postgresql".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(summary.display_name(), "postgresql");
        let summary = summary.with_instance_name("ordersDb");
        assert_eq!(summary.display_name(), "ordersDb");
    }
}
