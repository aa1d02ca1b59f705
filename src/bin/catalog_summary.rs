//! Run the bean wizard non-interactively and print the resulting summary.
//!
//! The flags replay what a user does in the editor: choose a bean for a Camel
//! component, optionally name it, set property values, finish. Validation
//! messages are logged as warnings and never stop the run.

use anyhow::{Context, Result, anyhow, bail};
use forage_catalog::runtime::{
    default_catalog_location, init_logging, next_value, parse_assignment,
};
use forage_catalog::{BeanWizard, CatalogLocation, CatalogStore};
use serde_json::Value;
use std::env;
use tracing::warn;

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
    store
        .load(args.catalog.clone())
        .with_context(|| format!("loading catalog {}", args.catalog))?;
    let resolver = store.resolver();

    let component = match &args.component {
        Some(component) => component.clone(),
        None => resolver
            .bean_by_name(&args.bean)
            .and_then(|bean| bean.components.first().cloned())
            .ok_or_else(|| anyhow!("bean '{}' declares no Camel component; pass --component", args.bean))?,
    };

    let mut wizard = BeanWizard::open(&component);
    if let Some(name) = &args.instance_name {
        wizard.set_bean_name(name)?;
        if let Some(message) = wizard.bean_name_error() {
            warn!(bean_name = %name, "{message}");
        }
    }
    wizard.select_bean(&resolver, &args.bean)?;
    for (name, value) in args.assignments {
        wizard.set_property(&name, value)?;
    }
    for missing in wizard.missing_required(&resolver) {
        warn!(property = %missing, "required property has no value");
    }

    let summary = wizard.finish(&resolver)?;
    match args.output {
        OutputMode::Text => print!("{}", summary.render_text()),
        OutputMode::Properties => print!("{}", summary.render_properties()),
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}

#[derive(Clone, Copy)]
enum OutputMode {
    Text,
    Properties,
    Json,
}

struct CliArgs {
    catalog: CatalogLocation,
    component: Option<String>,
    bean: String,
    instance_name: Option<String>,
    assignments: Vec<(String, Value)>,
    output: OutputMode,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args_os().skip(1);
        let mut catalog: Option<CatalogLocation> = None;
        let mut component: Option<String> = None;
        let mut bean: Option<String> = None;
        let mut instance_name: Option<String> = None;
        let mut assignments = Vec::new();
        let mut output: Option<OutputMode> = None;

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "--catalog" => {
                    catalog = Some(CatalogLocation::parse(&next_value(&mut args, "--catalog")?));
                }
                "--component" => component = Some(next_value(&mut args, "--component")?),
                "--bean" => {
                    if bean.is_some() {
                        bail!("--bean may only be provided once");
                    }
                    bean = Some(next_value(&mut args, "--bean")?);
                }
                "--name" => instance_name = Some(next_value(&mut args, "--name")?),
                "--set" => {
                    let raw = next_value(&mut args, "--set")?;
                    let assignment = parse_assignment(&raw)
                        .ok_or_else(|| anyhow!("--set expects name=value, got {raw}"))?;
                    assignments.push(assignment);
                }
                "--json" | "--properties" => {
                    if output.is_some() {
                        bail!("--json/--properties may only be provided once");
                    }
                    output = Some(if arg == "--json" {
                        OutputMode::Json
                    } else {
                        OutputMode::Properties
                    });
                }
                "--help" | "-h" => {
                    print!("{}", usage());
                    std::process::exit(0);
                }
                other => bail!("unknown flag: {other}\n{}", usage()),
            }
        }

        let catalog = catalog
            .or_else(default_catalog_location)
            .ok_or_else(|| anyhow!("--catalog is required when FORAGE_CATALOG is not set"))?;
        let bean = bean.ok_or_else(|| anyhow!("missing --bean\n{}", usage()))?;
        Ok(CliArgs {
            catalog,
            component,
            bean,
            instance_name,
            assignments,
            output: output.unwrap_or(OutputMode::Text),
        })
    }
}

fn usage() -> &'static str {
    "Usage: catalog-summary [--catalog PATH|URL] --bean NAME [--component CAMEL_COMPONENT] [--name BEAN_NAME] [--set name=value ...] [--json|--properties]\n\
Selects a bean, applies the property values and prints the configuration summary.\n"
}
