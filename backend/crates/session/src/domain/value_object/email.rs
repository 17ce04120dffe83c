//! Lookup Email Value Object
//!
//! The key the directory is searched with. Login accepts any string, so
//! there is no format validation here: lower-casing is the only normalization.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LookupEmail(String);

impl LookupEmail {
    pub fn new(email: &str) -> Self {
        Self(email.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Part after the last `@`, or `""`. Logs carry this instead of the address.
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map(|(_, d)| d).unwrap_or("")
    }
}

impl std::fmt::Display for LookupEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LookupEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
