//! Runtime helpers shared across binaries.
//!
//! Centralizes environment lookups, log setup and flag-value parsing so the
//! CLIs behave the same way instead of re-implementing it.

use crate::catalog::CatalogLocation;
use anyhow::{Result, anyhow};
use serde_json::Value;
use std::env;
use std::ffi::OsString;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the catalog to load when no flag is given.
pub const CATALOG_ENV: &str = "FORAGE_CATALOG";

/// Catalog location from `FORAGE_CATALOG`, if set and non-empty.
pub fn default_catalog_location() -> Option<CatalogLocation> {
    env::var(CATALOG_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(|value| CatalogLocation::parse(&value))
}

/// Install a stderr log subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Split a `name=value` assignment. Values that parse as JSON booleans or
/// numbers keep that type; everything else is a string.
pub fn parse_assignment(raw: &str) -> Option<(String, Value)> {
    let (name, value) = raw.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let value = match serde_json::from_str::<Value>(value) {
        Ok(parsed @ (Value::Bool(_) | Value::Number(_))) => parsed,
        _ => Value::String(value.to_string()),
    };
    Some((name.to_string(), value))
}

/// Take the value that follows `flag` on the command line.
pub fn next_value(args: &mut impl Iterator<Item = OsString>, flag: &str) -> Result<String> {
    let Some(raw) = args.next() else {
        return Err(anyhow!("missing value for {flag}"));
    };
    raw.into_string()
        .map_err(|_| anyhow!("value for {flag} is not valid UTF-8"))
}
