//! Text renderings of a `SelectionSummary`.

use crate::catalog::PropertyKind;
use crate::selection::{DependencyBucket, SelectionSummary, ValueSource};
use std::fmt;

const PASSWORD_MASK: &str = "********";

impl SelectionSummary {
    /// `name=value` lines for every active property, in catalog order.
    ///
    /// Passwords are written verbatim; only the human summary masks them.
    pub fn render_properties(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_properties(&mut out);
        out
    }

    /// Human-readable summary of the generated configuration.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = self.write_text(&mut out);
        out
    }

    fn write_properties(&self, out: &mut impl fmt::Write) -> fmt::Result {
        for property in &self.properties {
            writeln!(out, "{}={}", property.name, property.value)?;
        }
        Ok(())
    }

    fn write_text(&self, out: &mut impl fmt::Write) -> fmt::Result {
        let Some(bean) = &self.bean else {
            return out.write_str("No bean selected.\n");
        };

        writeln!(out, "Bean: {} ({})", self.display_name(), bean.name)?;
        if let Some(description) = bean.description.as_deref().filter(|d| !d.is_empty()) {
            writeln!(out, "  {description}")?;
        }

        out.write_str("\nMaven dependencies:\n")?;
        for bucket in DependencyBucket::ALL {
            let list = self.dependencies.dependency_list(bucket);
            if !list.is_empty() {
                writeln!(out, "  {bucket}: {list}")?;
            }
        }

        let variants = [
            ("spring-boot", &self.variants.spring_boot),
            ("quarkus", &self.variants.quarkus),
        ];
        if variants.iter().any(|(_, coordinate)| coordinate.is_some()) {
            out.write_str("\nRuntime variants:\n")?;
            for (label, coordinate) in variants {
                if let Some(coordinate) = coordinate {
                    writeln!(out, "  {label}: {coordinate}")?;
                }
            }
        }

        out.write_str("\nProperties:\n")?;
        if self.properties.is_empty() {
            out.write_str("  (none)\n")?;
        }
        for property in &self.properties {
            let value = if property.kind == PropertyKind::Password {
                PASSWORD_MASK
            } else {
                property.value.as_str()
            };
            let origin = match property.source {
                ValueSource::Default => " (default)",
                ValueSource::BeanName | ValueSource::Configured => "",
            };
            writeln!(out, "  {} = {value}{origin}", property.label)?;
        }

        if !self.primary_factories.is_empty() {
            out.write_str("\nPrimary beans:\n")?;
            for factory in &self.primary_factories {
                writeln!(
                    out,
                    "  {} <- {}",
                    factory.bean_type.as_deref().unwrap_or(""),
                    factory.name
                )?;
            }
        }

        if !self.dependant_beans.is_empty() {
            out.write_str("\nDependant beans:\n")?;
            for entry in &self.dependant_beans {
                let label = entry
                    .bean
                    .bean_type
                    .as_deref()
                    .or(entry.bean.class_name.as_deref())
                    .unwrap_or("bean");
                write!(out, "  {label} from {}", entry.coordinate)?;
                if let Some(property) = entry
                    .bean
                    .depends_on_property
                    .as_deref()
                    .filter(|p| !p.is_empty())
                {
                    write!(out, " (when {property})")?;
                }
                if !entry.bean.named_beans.is_empty() {
                    write!(out, " [{}]", entry.bean.named_beans.join(", "))?;
                }
                out.write_char('\n')?;
            }
        }

        Ok(())
    }
}
