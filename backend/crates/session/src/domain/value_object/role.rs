use serde::{Deserialize, Serialize};
use std::fmt;

/// Who is looking at the front end. Selects the landing route and the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Professional,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Patient, Role::Professional, Role::Admin];

    #[inline]
    pub const fn code(&self) -> &'static str {
        use Role::*;
        match self {
            Patient => "patient",
            Professional => "professional",
            Admin => "admin",
        }
    }

    /// Unlike a stored role id, a code can come from a URL, so unknown input is `None`.
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use Role::*;
        match code {
            "patient" => Some(Patient),
            "professional" => Some(Professional),
            "admin" => Some(Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
