//! IdentityToken - serialized creator identity in PEM-style armor.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::{Certificate, IdentityError};

const BEGIN: &str = "-----BEGIN CERTIFICATE-----";
const END: &str = "-----END CERTIFICATE-----";
const LINE_WIDTH: usize = 64;

/// Opaque serialized identity, as handed over by the ledger runtime.
///
/// The body between the armor lines is base64 of the JSON-encoded
/// `Certificate`, wrapped at 64 columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityToken(Vec<u8>);

impl IdentityToken {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Armor a certificate into a token.
    pub fn encode(certificate: &Certificate) -> Result<Self, IdentityError> {
        let json = serde_json::to_vec(certificate)
            .map_err(|e| IdentityError::Malformed(e.to_string()))?;
        let body = STANDARD.encode(json);

        let mut pem = String::with_capacity(body.len() + BEGIN.len() + END.len() + 8);
        pem.push_str(BEGIN);
        pem.push('\n');
        for line in body.as_bytes().chunks(LINE_WIDTH) {
            pem.push_str(&String::from_utf8_lossy(line));
            pem.push('\n');
        }
        pem.push_str(END);
        pem.push('\n');

        Ok(Self(pem.into_bytes()))
    }

    /// Strip the armor and parse the certificate.
    pub fn decode(&self) -> Result<Certificate, IdentityError> {
        let text = std::str::from_utf8(&self.0)
            .map_err(|e| IdentityError::Malformed(e.to_string()))?;

        let body = text
            .trim()
            .strip_prefix(BEGIN)
            .and_then(|rest| rest.strip_suffix(END))
            .ok_or_else(|| IdentityError::Malformed("missing certificate armor".into()))?;
        let body: String = body.chars().filter(|c| !c.is_whitespace()).collect();

        let json = STANDARD
            .decode(body)
            .map_err(|e| IdentityError::Malformed(e.to_string()))?;
        serde_json::from_slice(&json).map_err(|e| IdentityError::Malformed(e.to_string()))
    }
}
