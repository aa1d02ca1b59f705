//! Two-step bean wizard: pick a bean, configure its properties, finish.
//!
//! Opening always starts at `SelectBean` with an empty configuration and an
//! empty bean name. `back` from `ConfigureProperties` drops the configuration.
//! Bean-name validation is advisory: the message is recorded but `finish`
//! still succeeds.

use crate::catalog::{CatalogResolver, ConfigurationProperty, ForageBean, PropertyKind};
use crate::error::WizardError;
use crate::selection::properties::display_value;
use crate::selection::{Configuration, SelectionSummary, summarize};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::debug;

const CAMEL_PREFIX: &str = "camel-";

/// Prefix a pipeline node's component name with `camel-` unless it already has it.
pub fn normalize_component_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.starts_with(CAMEL_PREFIX) {
        trimmed.to_string()
    } else {
        format!("{CAMEL_PREFIX}{trimmed}")
    }
}

/// Advisory message for a bean name the user typed, if it is not usable as-is.
pub fn validate_bean_name(name: &str) -> Option<String> {
    if name.chars().any(char::is_whitespace) {
        Some("Bean name must not contain spaces".to_string())
    } else {
        None
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    #[default]
    SelectBean,
    ConfigureProperties,
    Finished,
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WizardStep::SelectBean => "select-bean",
            WizardStep::ConfigureProperties => "configure-properties",
            WizardStep::Finished => "finished",
        })
    }
}

/// One input row of the configure step.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyField<'a> {
    pub property: &'a ConfigurationProperty,
    pub kind: PropertyKind,
    /// Configured value, else default, else empty.
    pub value: String,
}

#[derive(Debug, Default)]
/// Wizard session for one pipeline node.
pub struct BeanWizard {
    component_name: String,
    step: WizardStep,
    selected_bean: Option<String>,
    configuration: Configuration,
    bean_name: String,
    bean_name_error: Option<String>,
}

impl BeanWizard {
    /// Start a fresh session for the node's component (normalized to `camel-*`).
    pub fn open(component_name: &str) -> Self {
        let component_name = normalize_component_name(component_name);
        debug!(component = %component_name, "wizard opened");
        Self {
            component_name,
            ..Self::default()
        }
    }

    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn selected_bean(&self) -> Option<&str> {
        self.selected_bean.as_deref()
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn bean_name(&self) -> &str {
        &self.bean_name
    }

    pub fn bean_name_error(&self) -> Option<&str> {
        self.bean_name_error.as_deref()
    }

    /// Beans offered for this node's component.
    pub fn choices<'a>(&self, resolver: &CatalogResolver<'a>) -> Vec<&'a ForageBean> {
        resolver.beans_by_component(&self.component_name)
    }

    pub fn choices_by_feature<'a>(
        &self,
        resolver: &CatalogResolver<'a>,
    ) -> Vec<(String, Vec<&'a ForageBean>)> {
        resolver.beans_by_feature(&self.component_name)
    }

    /// Pick a bean and move on to configuring it.
    pub fn select_bean(
        &mut self,
        resolver: &CatalogResolver<'_>,
        bean: &str,
    ) -> Result<(), WizardError> {
        self.expect_step(WizardStep::SelectBean, "select a bean")?;
        if !self.choices(resolver).iter().any(|choice| choice.name == bean) {
            return Err(WizardError::UnknownBean(bean.to_string()));
        }
        self.selected_bean = Some(bean.to_string());
        self.configuration.clear();
        self.step = WizardStep::ConfigureProperties;
        debug!(component = %self.component_name, bean, "bean selected");
        Ok(())
    }

    /// Record the bean instance name; whitespace only produces a message.
    pub fn set_bean_name(&mut self, name: &str) -> Result<(), WizardError> {
        if self.step == WizardStep::Finished {
            return Err(WizardError::InvalidTransition {
                step: self.step,
                action: "rename the bean",
            });
        }
        self.bean_name = name.to_string();
        self.bean_name_error = validate_bean_name(name);
        Ok(())
    }

    pub fn set_property(
        &mut self,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<(), WizardError> {
        self.expect_step(WizardStep::ConfigureProperties, "configure properties")?;
        self.configuration.set(name, value);
        Ok(())
    }

    pub fn clear_property(&mut self, name: &str) -> Result<(), WizardError> {
        self.expect_step(WizardStep::ConfigureProperties, "configure properties")?;
        self.configuration.remove(name);
        Ok(())
    }

    /// Input rows for the selected bean's properties.
    pub fn fields<'a>(&self, resolver: &CatalogResolver<'a>) -> Vec<PropertyField<'a>> {
        let Some(bean) = self.selected_bean.as_deref() else {
            return Vec::new();
        };
        resolver
            .configuration_properties_for_bean(bean)
            .iter()
            .map(|property| PropertyField {
                property,
                kind: property.kind(),
                value: display_value(property, &self.configuration),
            })
            .collect()
    }

    /// Required properties with neither a configured nor a default value.
    ///
    /// Advisory only; `finish` does not consult it.
    pub fn missing_required(&self, resolver: &CatalogResolver<'_>) -> Vec<String> {
        self.fields(resolver)
            .into_iter()
            .filter(|field| {
                field.property.required
                    && field.kind != PropertyKind::BeanName
                    && field.value.is_empty()
            })
            .map(|field| field.property.name.clone())
            .collect()
    }

    /// Return to bean selection, discarding the in-progress configuration.
    pub fn back(&mut self) -> Result<(), WizardError> {
        self.expect_step(WizardStep::ConfigureProperties, "go back")?;
        self.selected_bean = None;
        self.configuration.clear();
        self.step = WizardStep::SelectBean;
        Ok(())
    }

    /// Close the wizard and derive the read-only summary.
    pub fn finish(
        &mut self,
        resolver: &CatalogResolver<'_>,
    ) -> Result<SelectionSummary, WizardError> {
        self.expect_step(WizardStep::ConfigureProperties, "finish")?;
        let bean = self.selected_bean.as_deref().unwrap_or_default();
        let summary =
            summarize(resolver, bean, &self.configuration).with_instance_name(&self.bean_name);
        self.step = WizardStep::Finished;
        debug!(
            component = %self.component_name,
            bean,
            advisory = self.bean_name_error.as_deref().unwrap_or(""),
            "wizard finished"
        );
        Ok(summary)
    }

    fn expect_step(&self, expected: WizardStep, action: &'static str) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::InvalidTransition {
                step: self.step,
                action,
            })
        }
    }
}
