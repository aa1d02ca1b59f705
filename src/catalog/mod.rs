//! Component catalog wiring.
//!
//! This module wraps the JSON component catalog so hosts can load a snapshot
//! into a `CatalogStore` and query it through `CatalogResolver`. Types here
//! mirror the catalog document; naming-convention helpers for artifact
//! families live in `identity`.

pub mod identity;
pub mod location;
pub mod model;
pub mod resolver;
pub mod store;

pub use identity::{
    MavenCoordinate, PropertyKind, RuntimeType, base_artifact_name, common_artifact_name,
};
pub use location::{CatalogLocation, load_catalog_from_path};
pub use model::{
    CatalogComponent, ConfigurationProperty, DependantBean, ForageBean, ForageCatalog,
    ForageFactory, RuntimeComponent,
};
pub use resolver::{CatalogResolver, ResolvedDependantBean};
pub use store::{CatalogStore, LoadedCatalog};
