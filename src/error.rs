//! Error types for catalog loading and the wizard flow.
//!
//! Lookup misses are not errors anywhere in this crate; these variants only
//! cover the catalog load boundary and illegal wizard transitions.

use crate::wizard::WizardStep;
use thiserror::Error;

/// Failure while retrieving or parsing a catalog document.
///
/// The store that issued the load keeps whatever catalog it held before.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be read, HTTP transport failed, or the server answered
    /// with a non-success status.
    #[error("unable to retrieve catalog from {location}: {message}")]
    Retrieval { location: String, message: String },

    /// Body was retrieved but is not a catalog document.
    #[error("unable to parse catalog from {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    pub fn retrieval(location: impl ToString, message: impl Into<String>) -> Self {
        Self::Retrieval {
            location: location.to_string(),
            message: message.into(),
        }
    }

    pub fn parse(location: impl ToString, source: serde_json::Error) -> Self {
        Self::Parse {
            location: location.to_string(),
            source,
        }
    }
}

/// Action rejected by the wizard state machine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("cannot {action} while the wizard is at step {step}")]
    InvalidTransition {
        step: WizardStep,
        action: &'static str,
    },

    #[error("bean '{0}' is not offered for this component")]
    UnknownBean(String),
}
