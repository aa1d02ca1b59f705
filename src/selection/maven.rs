//! Runtime variants of the owning Maven artifact.

use crate::catalog::identity::{
    quarkus_artifact_name, spring_boot_artifact_name, strip_runtime_suffix,
};
use crate::catalog::{CatalogComponent, CatalogResolver, MavenCoordinate};
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Plain, Spring Boot and Quarkus flavours of the selected bean's artifact.
pub struct MavenVariants {
    pub base: Option<MavenCoordinate>,
    pub spring_boot: Option<MavenCoordinate>,
    pub quarkus: Option<MavenCoordinate>,
}

/// Look up the `-starter` and `-quarkus` siblings of `owner`.
///
/// The base variant is the catalog component named after the stripped id,
/// falling back to the owner itself. A Quarkus-flavoured owner accepts the
/// stripped id as its Quarkus variant when no `-quarkus` sibling exists.
pub fn maven_variants(resolver: &CatalogResolver<'_>, owner: &CatalogComponent) -> MavenVariants {
    let base_id = strip_runtime_suffix(&owner.artifact_id);
    let base = resolver
        .component_by_artifact_id(base_id)
        .unwrap_or(owner)
        .coordinate();
    let spring_boot = resolver
        .component_by_artifact_id(&spring_boot_artifact_name(base_id))
        .map(CatalogComponent::coordinate);
    let quarkus = resolver
        .component_by_artifact_id(&quarkus_artifact_name(base_id))
        .or_else(|| {
            if owner.artifact_id.contains("quarkus") {
                resolver.component_by_artifact_id(base_id)
            } else {
                None
            }
        })
        .map(CatalogComponent::coordinate);

    MavenVariants {
        base: Some(base),
        spring_boot,
        quarkus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ForageCatalog;
    use serde_json::json;

    fn catalog_of(ids: &[&str]) -> ForageCatalog {
        let components: Vec<_> = ids
            .iter()
            .map(|id| json!({"artifactId": id, "groupId": "g", "version": "1"}))
            .collect();
        serde_json::from_value(json!({ "components": components })).unwrap()
    }

    #[test]
    fn finds_starter_and_quarkus_siblings() {
        let catalog = catalog_of(&[
            "forage-jdbc-postgresql",
            "forage-jdbc-postgresql-starter",
            "forage-jdbc-postgresql-quarkus",
        ]);
        let resolver = CatalogResolver::new(Some(&catalog));
        let variants = maven_variants(&resolver, &catalog.components[0]);
        assert_eq!(
            variants.base.unwrap().artifact_id,
            "forage-jdbc-postgresql"
        );
        assert_eq!(
            variants.spring_boot.unwrap().artifact_id,
            "forage-jdbc-postgresql-starter"
        );
        assert_eq!(
            variants.quarkus.unwrap().artifact_id,
            "forage-jdbc-postgresql-quarkus"
        );
    }

    #[test]
    fn missing_variants_are_none() {
        let catalog = catalog_of(&["forage-jms-artemis"]);
        let resolver = CatalogResolver::new(Some(&catalog));
        let variants = maven_variants(&resolver, &catalog.components[0]);
        assert!(variants.spring_boot.is_none());
        assert!(variants.quarkus.is_none());
        assert_eq!(variants.base.unwrap().artifact_id, "forage-jms-artemis");
    }

    #[test]
    fn starter_owner_resolves_from_stripped_id() {
        let catalog = catalog_of(&["forage-jdbc-h2-starter", "forage-jdbc-h2"]);
        let resolver = CatalogResolver::new(Some(&catalog));
        let variants = maven_variants(&resolver, &catalog.components[0]);
        assert_eq!(variants.base.unwrap().artifact_id, "forage-jdbc-h2");
        assert_eq!(
            variants.spring_boot.unwrap().artifact_id,
            "forage-jdbc-h2-starter"
        );
        assert!(variants.quarkus.is_none());
    }

    #[test]
    fn quarkus_owner_accepts_stripped_id() {
        let catalog = catalog_of(&["forage-jdbc-h2-quarkus", "forage-jdbc-h2"]);
        let resolver = CatalogResolver::new(Some(&catalog));
        let variants = maven_variants(&resolver, &catalog.components[0]);
        assert_eq!(
            variants.quarkus.unwrap().artifact_id,
            "forage-jdbc-h2-quarkus"
        );

        let catalog = catalog_of(&["forage-ai-quarkus-ext"]);
        let resolver = CatalogResolver::new(Some(&catalog));
        let owner = resolver.component_by_artifact_id("forage-ai-quarkus-ext").unwrap();
        let variants = maven_variants(&resolver, owner);
        assert_eq!(variants.quarkus.unwrap().artifact_id, "forage-ai-quarkus-ext");
    }
}
