//! Read-only queries over a loaded catalog.
//!
//! Every lookup is an ordered scan, so a catalog with duplicate bean or
//! factory names resolves to the first entry in document order. Misses and an
//! absent catalog produce `None` or empty results, never errors.
//!
//! Property and dependant-bean lookups climb the artifact family: the owning
//! component first, then its `{base}-common` sibling, then `{base}` itself.

use crate::catalog::identity::{MavenCoordinate, base_artifact_name, common_artifact_name};
use crate::catalog::model::{
    CatalogComponent, ConfigurationProperty, DependantBean, ForageBean, ForageCatalog,
    ForageFactory,
};
use serde::Serialize;
use tracing::debug;

/// Dependant bean tagged with the factory type and coordinates it came from.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDependantBean {
    pub bean: DependantBean,
    pub factory_type: Option<String>,
    pub coordinate: MavenCoordinate,
}

#[derive(Clone, Copy, Debug, Default)]
/// Borrowing query surface over an optional catalog.
pub struct CatalogResolver<'a> {
    catalog: Option<&'a ForageCatalog>,
}

impl<'a> CatalogResolver<'a> {
    pub fn new(catalog: Option<&'a ForageCatalog>) -> Self {
        Self { catalog }
    }

    /// Resolver with no catalog behind it; every query comes back empty.
    pub fn empty() -> Self {
        Self { catalog: None }
    }

    pub fn catalog(&self) -> Option<&'a ForageCatalog> {
        self.catalog
    }

    pub fn components(&self) -> &'a [CatalogComponent] {
        self.catalog
            .map(|catalog| catalog.components.as_slice())
            .unwrap_or(&[])
    }

    pub fn component_by_artifact_id(&self, artifact_id: &str) -> Option<&'a CatalogComponent> {
        self.components()
            .iter()
            .find(|component| component.artifact_id == artifact_id)
    }

    /// Beans declared directly on top-level components.
    pub fn all_beans(&self) -> Vec<&'a ForageBean> {
        self.components()
            .iter()
            .flat_map(|component| component.beans.iter())
            .collect()
    }

    /// Factories declared directly on top-level components.
    pub fn all_factories(&self) -> Vec<&'a ForageFactory> {
        self.components()
            .iter()
            .flat_map(|component| component.factories.iter())
            .collect()
    }

    pub fn bean_by_name(&self, name: &str) -> Option<&'a ForageBean> {
        self.components()
            .iter()
            .flat_map(|component| component.beans.iter())
            .find(|bean| bean.name == name)
    }

    pub fn factory_by_name(&self, name: &str) -> Option<&'a ForageFactory> {
        self.components()
            .iter()
            .flat_map(|component| component.factories.iter())
            .find(|factory| factory.name == name)
    }

    /// Beans offered for a Camel component such as `camel-sql`.
    pub fn beans_by_component(&self, camel_component: &str) -> Vec<&'a ForageBean> {
        self.all_beans()
            .into_iter()
            .filter(|bean| bean.components.iter().any(|name| name == camel_component))
            .collect()
    }

    pub fn factories_by_component(&self, camel_component: &str) -> Vec<&'a ForageFactory> {
        self.all_factories()
            .into_iter()
            .filter(|factory| {
                factory
                    .components
                    .iter()
                    .any(|name| name == camel_component)
            })
            .collect()
    }

    /// Beans for a Camel component grouped by `feature`, in order of first
    /// appearance. Beans without a feature share the empty group.
    pub fn beans_by_feature(&self, camel_component: &str) -> Vec<(String, Vec<&'a ForageBean>)> {
        let mut groups: Vec<(String, Vec<&'a ForageBean>)> = Vec::new();
        for bean in self.beans_by_component(camel_component) {
            let feature = bean.feature.clone().unwrap_or_default();
            match groups.iter_mut().find(|(name, _)| *name == feature) {
                Some((_, beans)) => beans.push(bean),
                None => groups.push((feature, vec![bean])),
            }
        }
        groups
    }

    /// Top-level component whose own bean list declares `bean_name`.
    pub fn component_for_bean(&self, bean_name: &str) -> Option<&'a CatalogComponent> {
        self.components()
            .iter()
            .find(|component| component.has_bean(bean_name))
    }

    /// `{base}-common` sibling of `artifact_id`, if the catalog has one.
    pub fn common_component(&self, artifact_id: &str) -> Option<&'a CatalogComponent> {
        self.component_by_artifact_id(&common_artifact_name(artifact_id))
    }

    /// `{base}` family component of `artifact_id`, if the catalog has one.
    pub fn base_component(&self, artifact_id: &str) -> Option<&'a CatalogComponent> {
        self.component_by_artifact_id(&base_artifact_name(artifact_id))
    }

    /// Configuration properties for a bean, inherited from the artifact family
    /// when the owning component declares none.
    ///
    /// The first non-empty list among owning component, `-common` sibling and
    /// base component wins.
    pub fn configuration_properties_for_bean(&self, bean_name: &str) -> &'a [ConfigurationProperty] {
        let Some(owner) = self.component_for_bean(bean_name) else {
            return &[];
        };
        if !owner.configuration_properties.is_empty() {
            return &owner.configuration_properties;
        }

        let fallbacks = [
            ("common", self.common_component(&owner.artifact_id)),
            ("base", self.base_component(&owner.artifact_id)),
        ];
        for (level, candidate) in fallbacks {
            if let Some(component) = candidate {
                if !component.configuration_properties.is_empty() {
                    debug!(
                        bean = bean_name,
                        owner = %owner.artifact_id,
                        inherited_from = %component.artifact_id,
                        fallback = level,
                        "configuration properties inherited"
                    );
                    return &component.configuration_properties;
                }
            }
        }
        &[]
    }

    /// Dependant beans reachable from a bean's artifact family.
    ///
    /// Order: owning component, `-common` sibling, base component. Within each,
    /// the component's own entries precede entries nested under its factories'
    /// runtime bundles, which carry the runtime bundle's coordinates and the
    /// outer factory's type.
    pub fn dependant_beans_for_bean(&self, bean_name: &str) -> Vec<ResolvedDependantBean> {
        let Some(owner) = self.component_for_bean(bean_name) else {
            return Vec::new();
        };

        let mut candidates: Vec<&CatalogComponent> = vec![owner];
        for sibling in [
            self.common_component(&owner.artifact_id),
            self.base_component(&owner.artifact_id),
        ]
        .into_iter()
        .flatten()
        {
            if !candidates
                .iter()
                .any(|seen| seen.artifact_id == sibling.artifact_id)
            {
                candidates.push(sibling);
            }
        }

        let mut resolved = Vec::new();
        for component in candidates {
            let coordinate = component.coordinate();
            for bean in &component.dependant_beans {
                resolved.push(ResolvedDependantBean {
                    bean: bean.clone(),
                    factory_type: bean.depends_on_factory_type.clone(),
                    coordinate: coordinate.clone(),
                });
            }
            for factory in &component.factories {
                for runtime in &factory.runtimes {
                    let runtime_coordinate = runtime.coordinate();
                    for bean in &runtime.dependant_beans {
                        resolved.push(ResolvedDependantBean {
                            bean: bean.clone(),
                            factory_type: factory.factory_type.clone(),
                            coordinate: runtime_coordinate.clone(),
                        });
                    }
                }
            }
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog(value: serde_json::Value) -> ForageCatalog {
        serde_json::from_value(value).unwrap()
    }

    fn family_catalog() -> ForageCatalog {
        catalog(json!({
            "components": [
                {
                    "artifactId": "forage-jdbc-postgresql",
                    "groupId": "io.kaoto.forage",
                    "version": "1.0",
                    "beans": [{"name": "postgresql", "components": ["camel-sql"], "feature": "Relational"}],
                    "dependantBeans": [{"dependsOnProperty": "jdbc.transactions", "dependsOnFactoryType": "tx"}],
                    "factories": [{
                        "name": "pg-factory",
                        "factoryType": "DataSource",
                        "runtimes": [{
                            "artifactId": "forage-jdbc-postgresql-starter",
                            "groupId": "io.kaoto.forage.sb",
                            "version": "1.1",
                            "dependantBeans": [{"beanType": "TransactionManager"}]
                        }]
                    }]
                },
                {
                    "artifactId": "forage-jdbc-common",
                    "groupId": "io.kaoto.forage",
                    "version": "1.0",
                    "configurationProperties": [{"name": "jdbc.url", "type": "string"}],
                    "dependantBeans": [{"beanType": "Common"}]
                },
                {
                    "artifactId": "forage-jdbc",
                    "groupId": "io.kaoto.forage",
                    "version": "1.0",
                    "configurationProperties": [{"name": "jdbc.base", "type": "string"}],
                    "beans": [{"name": "generic", "components": ["camel-jdbc"]}],
                    "dependantBeans": [{"beanType": "Base"}]
                }
            ]
        }))
    }

    #[test]
    fn empty_resolver_returns_nothing() {
        let resolver = CatalogResolver::empty();
        assert!(resolver.component_by_artifact_id("forage-jdbc").is_none());
        assert!(resolver.all_factories().is_empty());
        assert!(resolver.bean_by_name("postgresql").is_none());
        assert!(resolver.configuration_properties_for_bean("postgresql").is_empty());
        assert!(resolver.dependant_beans_for_bean("postgresql").is_empty());
    }

    #[test]
    fn first_duplicate_name_wins() {
        let catalog = catalog(json!({
            "components": [
                {"artifactId": "a", "beans": [{"name": "dup", "description": "first"}]},
                {"artifactId": "b", "beans": [{"name": "dup", "description": "second"}]}
            ]
        }));
        let resolver = CatalogResolver::new(Some(&catalog));
        let bean = resolver.bean_by_name("dup").unwrap();
        assert_eq!(bean.description.as_deref(), Some("first"));
        assert_eq!(resolver.all_beans().len(), 2);
    }

    #[test]
    fn first_duplicate_factory_wins() {
        let catalog = catalog(json!({
            "components": [
                {"artifactId": "a", "factories": [{"name": "ds", "factoryType": "first"}]},
                {"artifactId": "b", "factories": [{"name": "ds", "factoryType": "second"}]}
            ]
        }));
        let resolver = CatalogResolver::new(Some(&catalog));
        let factory = resolver.factory_by_name("ds").unwrap();
        assert_eq!(factory.factory_type.as_deref(), Some("first"));
        assert!(resolver.factory_by_name("missing").is_none());
    }

    #[test]
    fn factories_filter_on_exact_component_name() {
        let catalog = catalog(json!({
            "components": [{
                "artifactId": "forage-jdbc",
                "factories": [
                    {"name": "sql", "components": ["camel-sql"]},
                    {"name": "sql-stored", "components": ["camel-sql-stored"]},
                    {"name": "both", "components": ["camel-jdbc", "camel-sql"]}
                ]
            }]
        }));
        let resolver = CatalogResolver::new(Some(&catalog));
        let names: Vec<_> = resolver
            .factories_by_component("camel-sql")
            .iter()
            .map(|factory| factory.name.as_str())
            .collect();
        assert_eq!(names, vec!["sql", "both"]);
        assert!(resolver.factories_by_component("sql").is_empty());
    }

    #[test]
    fn flattened_lists_skip_runtime_bundles() {
        let catalog = catalog(json!({
            "components": [{
                "artifactId": "forage-jdbc",
                "beans": [{"name": "top", "components": ["camel-sql"]}],
                "factories": [{
                    "name": "ds",
                    "components": ["camel-sql"],
                    "runtimes": [{
                        "artifactId": "forage-jdbc-starter",
                        "beans": [{"name": "nested", "components": ["camel-sql"]}],
                        "factories": [{"name": "nested-ds", "components": ["camel-sql"]}]
                    }]
                }]
            }]
        }));
        let resolver = CatalogResolver::new(Some(&catalog));
        assert_eq!(resolver.all_beans().len(), 1);
        assert_eq!(resolver.all_factories().len(), 1);
        assert!(resolver.bean_by_name("nested").is_none());
        assert!(resolver.factory_by_name("nested-ds").is_none());
        assert_eq!(resolver.beans_by_component("camel-sql").len(), 1);
        assert_eq!(resolver.factories_by_component("camel-sql").len(), 1);
    }

    #[test]
    fn properties_prefer_common_over_base() {
        let catalog = family_catalog();
        let resolver = CatalogResolver::new(Some(&catalog));
        let properties = resolver.configuration_properties_for_bean("postgresql");
        assert_eq!(properties.len(), 1);
        assert_eq!(properties[0].name, "jdbc.url");
    }

    #[test]
    fn properties_fall_back_to_base() {
        let mut catalog = family_catalog();
        catalog.components[1].configuration_properties.clear();
        let resolver = CatalogResolver::new(Some(&catalog));
        let properties = resolver.configuration_properties_for_bean("postgresql");
        assert_eq!(properties.len(), 1);
        assert_eq!(properties[0].name, "jdbc.base");
    }

    #[test]
    fn unknown_bean_has_no_properties() {
        let catalog = family_catalog();
        let resolver = CatalogResolver::new(Some(&catalog));
        assert!(resolver.configuration_properties_for_bean("oracle").is_empty());
    }

    #[test]
    fn dependant_beans_follow_family_order() {
        let catalog = family_catalog();
        let resolver = CatalogResolver::new(Some(&catalog));
        let resolved = resolver.dependant_beans_for_bean("postgresql");
        assert_eq!(resolved.len(), 4);

        assert_eq!(resolved[0].factory_type.as_deref(), Some("tx"));
        assert_eq!(resolved[0].coordinate.artifact_id, "forage-jdbc-postgresql");

        assert_eq!(resolved[1].bean.bean_type.as_deref(), Some("TransactionManager"));
        assert_eq!(resolved[1].factory_type.as_deref(), Some("DataSource"));
        assert_eq!(
            resolved[1].coordinate,
            MavenCoordinate::new("io.kaoto.forage.sb", "forage-jdbc-postgresql-starter", "1.1")
        );

        assert_eq!(resolved[2].bean.bean_type.as_deref(), Some("Common"));
        assert_eq!(resolved[3].bean.bean_type.as_deref(), Some("Base"));
    }

    #[test]
    fn base_owner_is_not_visited_twice() {
        let catalog = family_catalog();
        let resolver = CatalogResolver::new(Some(&catalog));
        let resolved = resolver.dependant_beans_for_bean("generic");
        let kinds: Vec<_> = resolved
            .iter()
            .map(|entry| entry.bean.bean_type.as_deref().unwrap_or(""))
            .collect();
        assert_eq!(kinds, vec!["Base", "Common"]);
    }

    #[test]
    fn beans_group_by_feature() {
        let catalog = family_catalog();
        let resolver = CatalogResolver::new(Some(&catalog));
        let groups = resolver.beans_by_feature("camel-sql");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "Relational");
        assert_eq!(groups[0].1[0].name, "postgresql");
        assert!(resolver.beans_by_component("camel-kafka").is_empty());
    }
}
