//! Catalog-driven bean configuration core.
//!
//! The crate loads a Forage component catalog, answers lookups over it
//! (beans, factories, inherited configuration properties, dependant beans),
//! and turns a selected bean plus user-entered property values into a
//! configuration summary: Maven coordinates per runtime, the effective
//! properties and the dependant beans that get generated. `wizard` drives the
//! select → configure → finish flow on top of those pieces.

pub mod catalog;
pub mod error;
pub mod runtime;
pub mod selection;
pub mod wizard;

pub use catalog::{
    CatalogComponent, CatalogLocation, CatalogResolver, CatalogStore, ConfigurationProperty,
    DependantBean, ForageBean, ForageCatalog, ForageFactory, LoadedCatalog, MavenCoordinate,
    PropertyKind, ResolvedDependantBean, RuntimeComponent, RuntimeType, base_artifact_name,
    common_artifact_name, load_catalog_from_path,
};
pub use error::{CatalogError, WizardError};
pub use runtime::{CATALOG_ENV, default_catalog_location};
pub use selection::{
    Configuration, DependencyBucket, DependencyBuckets, EffectiveProperty, MatchedFactory,
    MavenVariants, SelectionSummary, ValueSource, summarize,
};
pub use wizard::{BeanWizard, PropertyField, WizardStep, normalize_component_name};
