//! Newtype identifier for menus.
//!
//! The backend addresses menus by an opaque string id; the newtype keeps it
//! from being confused with other strings (names, category slugs).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a menu, as issued by the ordering backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuId(String);

impl MenuId {
    /// Create an ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MenuId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MenuId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for MenuId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
