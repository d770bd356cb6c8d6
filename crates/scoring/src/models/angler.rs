use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an angler as issued by the club roster.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnglerId(String);

impl AnglerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for AnglerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AnglerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AnglerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
