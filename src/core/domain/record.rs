//! Credential record.
//!
//! One stored service / username / secret triple.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::types::ServiceName;

/// A stored credential.
///
/// Serialized as `{"service", "username", "secret"}`; the older `"password"`
/// key is accepted when reading. The secret is wiped from memory on drop.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Record {
    service: ServiceName,
    username: String,
    #[serde(alias = "password")]
    secret: String,
}

impl Record {
    pub fn new(
        service: impl Into<String>,
        username: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            username: username.into(),
            secret: secret.into(),
        }
    }

    /// Service name as entered.
    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Plaintext secret.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Case-insensitive comparison against a service name.
    pub fn matches(&self, service: &str) -> bool {
        self.service.to_lowercase() == service.to_lowercase()
    }
}

impl std::fmt::Debug for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Record")
            .field("service", &self.service)
            .field("username", &self.username)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.service)
    }
}
