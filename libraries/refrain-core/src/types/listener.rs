//! Listener identity type

use serde::{Deserialize, Serialize};
use std::fmt;

/// The identity the streaming API scopes audio access to
///
/// The API keys stream grants on the listener's email, so it travels with
/// every resolved stream locator. Passed into the playback core explicitly
/// rather than read from ambient session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenerIdentity {
    /// Display name
    pub name: String,

    /// Email the API identifies the listener by
    pub email: String,
}

impl ListenerIdentity {
    /// Create a new listener identity
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Get the email the API keys on
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for ListenerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}
