//! Identity - who submitted the transaction.
//!
//! Certificate validation happens before a contract runs. By the time an
//! operation asks for the caller, the runtime has already authenticated the
//! creator; this module only carries the serialized identity and the parsed
//! certificate subject the authorization check keys on.

mod static_identity;
mod token;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for identity extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// The context carries no caller identity.
    #[error("no caller identity in transaction context")]
    Missing,
    /// The identity token could not be parsed into a certificate.
    #[error("malformed identity: {0}")]
    Malformed(String),
}

/// Distinguished-name fields of a certificate subject or issuer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub common_name: String,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub organizational_units: Vec<String>,
}

/// The parts of an X.509 certificate a contract cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub subject: Subject,
    #[serde(default)]
    pub issuer: Option<Subject>,
    #[serde(default)]
    pub serial: String,
}

impl Certificate {
    pub fn new(common_name: impl Into<String>) -> Self {
        Self {
            subject: Subject {
                common_name: common_name.into(),
                ..Subject::default()
            },
            issuer: None,
            serial: String::new(),
        }
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.subject.organization = Some(organization.into());
        self
    }

    pub fn with_issuer(mut self, issuer: Subject) -> Self {
        self.issuer = Some(issuer);
        self
    }

    pub fn common_name(&self) -> &str {
        &self.subject.common_name
    }
}

/// Caller identity as exposed by the transaction context.
pub trait ClientIdentity: Send + Sync {
    /// The serialized identity of the transaction creator.
    fn caller_identity(&self) -> Result<IdentityToken, IdentityError>;

    /// Parse a serialized identity into its certificate.
    fn extract_certificate(&self, token: &IdentityToken) -> Result<Certificate, IdentityError>;
}

pub use static_identity::StaticIdentity;
pub use token::IdentityToken;
