//! StaticIdentity - fixed caller, for tests and embedded hosts.

use super::{Certificate, ClientIdentity, IdentityError, IdentityToken};

/// Reports the same caller for every transaction, or none at all.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    certificate: Option<Certificate>,
}

impl StaticIdentity {
    pub fn new(certificate: Certificate) -> Self {
        Self {
            certificate: Some(certificate),
        }
    }

    /// A caller whose certificate has only a subject common name.
    pub fn for_common_name(common_name: impl Into<String>) -> Self {
        Self::new(Certificate::new(common_name))
    }

    /// No caller. `caller_identity` fails with `IdentityError::Missing`.
    pub fn anonymous() -> Self {
        Self::default()
    }
}

impl ClientIdentity for StaticIdentity {
    fn caller_identity(&self) -> Result<IdentityToken, IdentityError> {
        let certificate = self.certificate.as_ref().ok_or(IdentityError::Missing)?;
        IdentityToken::encode(certificate)
    }

    fn extract_certificate(&self, token: &IdentityToken) -> Result<Certificate, IdentityError> {
        token.decode()
    }
}
