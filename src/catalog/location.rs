//! Catalog load boundary: resolve a location and fetch-and-parse it once.
//!
//! There is no retry, no timeout and no concurrent-load guard. Callers that
//! issue several loads must serialize them themselves.

use crate::catalog::model::ForageCatalog;
use crate::error::CatalogError;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Where a catalog document lives.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CatalogLocation {
    Path(PathBuf),
    Url(String),
}

impl CatalogLocation {
    /// Classify a raw location: `http(s)://` is fetched, `file://` and
    /// everything else is read from disk.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lowered = trimmed.to_ascii_lowercase();
        if lowered.starts_with("http://") || lowered.starts_with("https://") {
            return CatalogLocation::Url(trimmed.to_string());
        }
        let path = trimmed.strip_prefix("file://").unwrap_or(trimmed);
        CatalogLocation::Path(PathBuf::from(path))
    }

    /// Retrieve and parse the catalog at this location.
    pub fn fetch(&self) -> Result<ForageCatalog, CatalogError> {
        info!(location = %self, "loading catalog");
        let body = match self {
            CatalogLocation::Path(path) => read_file(path),
            CatalogLocation::Url(url) => fetch_url(url),
        }
        .inspect_err(|err| warn!(location = %self, error = %err, "catalog retrieval failed"))?;

        let catalog = ForageCatalog::from_json_str(&body).map_err(|err| {
            warn!(location = %self, error = %err, "catalog parse failed");
            CatalogError::parse(self, err)
        })?;

        info!(
            location = %self,
            components = catalog.components.len(),
            version = catalog.version.as_deref().unwrap_or(""),
            generated_by = catalog.generated_by.as_deref().unwrap_or(""),
            "catalog loaded"
        );
        Ok(catalog)
    }
}

impl From<&Path> for CatalogLocation {
    fn from(path: &Path) -> Self {
        CatalogLocation::Path(path.to_path_buf())
    }
}

impl fmt::Display for CatalogLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogLocation::Path(path) => write!(f, "{}", path.display()),
            CatalogLocation::Url(url) => f.write_str(url),
        }
    }
}

/// Read and parse a catalog from disk.
pub fn load_catalog_from_path(path: &Path) -> Result<ForageCatalog, CatalogError> {
    CatalogLocation::from(path).fetch()
}

fn read_file(path: &Path) -> Result<String, CatalogError> {
    debug!(path = %path.display(), "reading catalog file");
    fs::read_to_string(path).map_err(|err| CatalogError::retrieval(path.display(), err.to_string()))
}

fn fetch_url(url: &str) -> Result<String, CatalogError> {
    debug!(url, "fetching catalog over HTTP");
    let client = reqwest::blocking::Client::builder()
        .timeout(None::<Duration>)
        .build()
        .map_err(|err| CatalogError::retrieval(url, err.to_string()))?;
    let response = client
        .get(url)
        .send()
        .map_err(|err| CatalogError::retrieval(url, err.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::retrieval(url, format!("HTTP {status}")));
    }
    response
        .text()
        .map_err(|err| CatalogError::retrieval(url, err.to_string()))
}
