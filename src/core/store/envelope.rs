//! On-disk envelope around the encrypted payload.
//!
//! ```json
//! {"version": 2, "salt": "<b64>", "iterations": 600000, "data": "<token>"}
//! ```
//!
//! Files written before salts were persisted carry only `{"data": ...}`;
//! those are read with the fixed legacy key derivation parameters.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::core::constants::FORMAT_VERSION;
use crate::core::kdf::KdfParams;
use crate::core::types::Token;
use crate::error::{FormatError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    salt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    iterations: Option<u32>,
    data: Token,
}

impl Envelope {
    /// Current-format envelope recording `params`.
    pub fn new(params: &KdfParams, data: Token) -> Self {
        Self {
            version: Some(FORMAT_VERSION),
            salt: Some(URL_SAFE.encode(params.salt())),
            iterations: Some(params.iterations()),
            data,
        }
    }

    /// Parse an envelope from file contents.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::Envelope` if the bytes are not an envelope object.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| FormatError::Envelope(e).into())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| FormatError::Envelope(e).into())
    }

    /// Whether this envelope predates persisted salts.
    pub fn is_legacy(&self) -> bool {
        self.version.is_none()
    }

    /// Key derivation parameters the payload was encrypted under.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::UnsupportedVersion` for unknown versions and
    /// `FormatError::KdfParams` if salt or iterations are missing or invalid.
    pub fn params(&self) -> Result<KdfParams> {
        match self.version {
            None => Ok(KdfParams::legacy()),
            Some(FORMAT_VERSION) => {
                let salt = self
                    .salt
                    .as_deref()
                    .ok_or_else(|| FormatError::KdfParams("missing salt".into()))?;
                let salt = URL_SAFE
                    .decode(salt.as_bytes())
                    .map_err(|e| FormatError::KdfParams(format!("salt: {}", e)))?;
                let iterations = self
                    .iterations
                    .ok_or_else(|| FormatError::KdfParams("missing iterations".into()))?;
                KdfParams::new(salt, iterations)
            }
            Some(other) => Err(FormatError::UnsupportedVersion(other).into()),
        }
    }

    /// The encrypted payload.
    pub fn data(&self) -> &str {
        &self.data
    }
}
