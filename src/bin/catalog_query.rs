//! Query a component catalog from the command line.
//!
//! Loads the catalog named by `--catalog` (or `FORAGE_CATALOG`), runs one
//! resolver query and prints the result as pretty JSON. Misses print `null`
//! or `[]` rather than failing, matching the resolver contract.

use anyhow::{Context, Result, anyhow, bail};
use forage_catalog::runtime::{default_catalog_location, init_logging, next_value};
use forage_catalog::{CatalogLocation, CatalogResolver, CatalogStore};
use serde_json::{Value, json};
use std::env;

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse()?;
    let mut store = CatalogStore::new();
    let location = args.catalog.clone();
    store
        .load(location.clone())
        .with_context(|| format!("loading catalog {location}"))?;

    let output = args.query.run(&store.resolver())?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

enum Query {
    List,
    Component(String),
    Bean(String),
    Factory(String),
    Artifact(String),
    Properties(String),
    Dependants(String),
}

impl Query {
    fn run(&self, resolver: &CatalogResolver<'_>) -> Result<Value> {
        let value = match self {
            Query::List => json!({
                "beans": resolver.all_beans().iter().map(|bean| &bean.name).collect::<Vec<_>>(),
                "factories": resolver.all_factories().iter().map(|factory| &factory.name).collect::<Vec<_>>(),
            }),
            Query::Component(name) => json!({
                "beans": resolver.beans_by_component(name),
                "factories": resolver.factories_by_component(name),
            }),
            Query::Bean(name) => serde_json::to_value(resolver.bean_by_name(name))?,
            Query::Factory(name) => serde_json::to_value(resolver.factory_by_name(name))?,
            Query::Artifact(id) => serde_json::to_value(resolver.component_by_artifact_id(id))?,
            Query::Properties(name) => {
                serde_json::to_value(resolver.configuration_properties_for_bean(name))?
            }
            Query::Dependants(name) => {
                serde_json::to_value(resolver.dependant_beans_for_bean(name))?
            }
        };
        Ok(value)
    }
}

struct CliArgs {
    catalog: CatalogLocation,
    query: Query,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args_os().skip(1);
        let mut catalog: Option<CatalogLocation> = None;
        let mut query: Option<Query> = None;

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow!("argument is not valid UTF-8"))?;
            let next = match arg.as_str() {
                "--catalog" => {
                    catalog = Some(CatalogLocation::parse(&next_value(&mut args, "--catalog")?));
                    continue;
                }
                "--list" => Query::List,
                "--component" => Query::Component(next_value(&mut args, "--component")?),
                "--bean" => Query::Bean(next_value(&mut args, "--bean")?),
                "--factory" => Query::Factory(next_value(&mut args, "--factory")?),
                "--artifact" => Query::Artifact(next_value(&mut args, "--artifact")?),
                "--properties" => Query::Properties(next_value(&mut args, "--properties")?),
                "--dependants" => Query::Dependants(next_value(&mut args, "--dependants")?),
                "--help" | "-h" => {
                    print!("{}", usage());
                    std::process::exit(0);
                }
                other => bail!("unknown flag: {other}\n{}", usage()),
            };
            if query.is_some() {
                bail!("only one query flag may be provided");
            }
            query = Some(next);
        }

        let catalog = catalog
            .or_else(default_catalog_location)
            .ok_or_else(|| anyhow!("--catalog is required when FORAGE_CATALOG is not set"))?;
        let query = query.ok_or_else(|| anyhow!("missing query flag\n{}", usage()))?;
        Ok(CliArgs { catalog, query })
    }
}

fn usage() -> &'static str {
    "Usage: catalog-query [--catalog PATH|URL] (--list | --component CAMEL_COMPONENT | --bean NAME | --factory NAME | --artifact ARTIFACT_ID | --properties BEAN | --dependants BEAN)\n\
Loads the component catalog (default: $FORAGE_CATALOG) and prints the query result as JSON.\n"
}
