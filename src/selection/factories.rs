//! Factory matching, dependency buckets and primary-bean selection.
//!
//! A factory matches a bean when their `components` lists intersect. Factories
//! nested under a runtime bundle also match when their parent factory does,
//! and report the runtime bundle's coordinates.

use crate::catalog::{
    CatalogComponent, CatalogResolver, ForageBean, ForageFactory, MavenCoordinate, RuntimeType,
};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Factory that applies to the selected bean, with the coordinates to depend on.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedFactory {
    pub name: String,
    pub description: Option<String>,
    pub bean_type: Option<String>,
    pub factory_type: Option<String>,
    pub class_name: Option<String>,
    pub autowired: bool,
    pub runtime_type: Option<RuntimeType>,
    pub coordinate: MavenCoordinate,
    /// True for factories found inside a runtime bundle.
    pub nested: bool,
}

impl MatchedFactory {
    fn top_level(factory: &ForageFactory, component: &CatalogComponent) -> Self {
        Self {
            name: factory.name.clone(),
            description: factory.description.clone(),
            bean_type: factory.bean_type.clone(),
            factory_type: factory.factory_type.clone(),
            class_name: factory.class_name.clone(),
            autowired: factory.autowired,
            runtime_type: factory
                .runtime_type
                .clone()
                .or_else(|| component.runtime_type.clone()),
            coordinate: component.coordinate(),
            nested: false,
        }
    }
}

/// Every factory in the catalog that applies to `bean`.
///
/// Top-level matches come first, deduplicated by name; nested runtime matches
/// follow, deduplicated by name and artifact id. A nested match takes its
/// coordinates and runtime type from the runtime bundle only.
pub fn matching_factories(resolver: &CatalogResolver<'_>, bean: &ForageBean) -> Vec<MatchedFactory> {
    let mut top_level: Vec<MatchedFactory> = Vec::new();
    let mut nested: Vec<MatchedFactory> = Vec::new();

    for component in resolver.components() {
        for factory in &component.factories {
            let parent_matches = bean.shares_component(&factory.components);
            if parent_matches && !top_level.iter().any(|seen| seen.name == factory.name) {
                top_level.push(MatchedFactory::top_level(factory, component));
            }

            for runtime in &factory.runtimes {
                let coordinate = runtime.coordinate();
                for inner in &runtime.factories {
                    if !(parent_matches || bean.shares_component(&inner.components)) {
                        continue;
                    }
                    let duplicate = nested.iter().any(|seen| {
                        seen.name == inner.name && seen.coordinate.artifact_id == coordinate.artifact_id
                    });
                    if duplicate {
                        continue;
                    }
                    nested.push(MatchedFactory {
                        name: inner.name.clone(),
                        description: inner.description.clone(),
                        bean_type: inner.bean_type.clone(),
                        factory_type: inner.factory_type.clone(),
                        class_name: inner.class_name.clone(),
                        autowired: inner.autowired,
                        runtime_type: runtime.runtime_type.clone(),
                        coordinate: coordinate.clone(),
                        nested: true,
                    });
                }
            }
        }
    }

    top_level.extend(nested);
    top_level
}

/// Output group for Maven dependencies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DependencyBucket {
    Generic,
    Main,
    SpringBoot,
    Quarkus,
}

impl DependencyBucket {
    pub const ALL: [DependencyBucket; 4] = [
        DependencyBucket::Generic,
        DependencyBucket::Main,
        DependencyBucket::SpringBoot,
        DependencyBucket::Quarkus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyBucket::Generic => "generic",
            DependencyBucket::Main => "main",
            DependencyBucket::SpringBoot => "spring-boot",
            DependencyBucket::Quarkus => "quarkus",
        }
    }
}

impl fmt::Display for DependencyBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maven coordinates grouped by runtime.
///
/// `generic` always holds the owning component's coordinate; factories with
/// an unrecognized or missing runtime type land in no bucket.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyBuckets {
    pub generic: Vec<MavenCoordinate>,
    pub main: Vec<MavenCoordinate>,
    pub spring_boot: Vec<MavenCoordinate>,
    pub quarkus: Vec<MavenCoordinate>,
}

impl DependencyBuckets {
    pub fn from_matches(owner: Option<&CatalogComponent>, factories: &[MatchedFactory]) -> Self {
        let mut buckets = DependencyBuckets::default();
        if let Some(owner) = owner {
            buckets.generic.push(owner.coordinate());
        }
        for factory in factories {
            let target = match factory.runtime_type {
                Some(RuntimeType::Main) => &mut buckets.main,
                Some(RuntimeType::SpringBoot) => &mut buckets.spring_boot,
                Some(RuntimeType::Quarkus) => &mut buckets.quarkus,
                Some(RuntimeType::Other(_)) | None => continue,
            };
            if !target.contains(&factory.coordinate) {
                target.push(factory.coordinate.clone());
            }
        }
        buckets
    }

    pub fn coordinates(&self, bucket: DependencyBucket) -> &[MavenCoordinate] {
        match bucket {
            DependencyBucket::Generic => &self.generic,
            DependencyBucket::Main => &self.main,
            DependencyBucket::SpringBoot => &self.spring_boot,
            DependencyBucket::Quarkus => &self.quarkus,
        }
    }

    /// Comma-joined `groupId:artifactId:version` list for one bucket.
    pub fn dependency_list(&self, bucket: DependencyBucket) -> String {
        self.coordinates(bucket)
            .iter()
            .map(MavenCoordinate::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// One factory per distinct `beanType`, in order of first appearance.
///
/// Preference: `main` runtime, then no runtime over another runtime, then the
/// first seen. Factories without a bean type are not listed.
pub fn primary_factories(factories: &[MatchedFactory]) -> Vec<MatchedFactory> {
    let mut bean_types: Vec<&str> = Vec::new();
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for factory in factories {
        if let Some(bean_type) = factory.bean_type.as_deref() {
            if seen.insert(bean_type) {
                bean_types.push(bean_type);
            }
        }
    }

    bean_types
        .into_iter()
        .filter_map(|bean_type| {
            let mut best: Option<&MatchedFactory> = None;
            for candidate in factories
                .iter()
                .filter(|factory| factory.bean_type.as_deref() == Some(bean_type))
            {
                best = match best {
                    None => Some(candidate),
                    Some(current) if rank(candidate) < rank(current) => Some(candidate),
                    keep => keep,
                };
            }
            best.cloned()
        })
        .collect()
}

fn rank(factory: &MatchedFactory) -> u8 {
    match factory.runtime_type {
        Some(RuntimeType::Main) => 0,
        None => 1,
        Some(_) => 2,
    }
}
