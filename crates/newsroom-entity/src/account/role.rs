//! Account role enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::region::Region;

/// The access role attached to an account.
///
/// `editor` is the privileged role with access to every partition and to
/// account management. Any other role names exactly one continental region
/// and grants write access to that region's content only. The global
/// partition has no role of its own; writing to it requires `editor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountRole {
    /// Super-admin: every partition plus account management.
    Editor,
    /// Write access scoped to one continental region.
    Region(Region),
}

impl AccountRole {
    /// Return the role as its wire string (`"editor"` or the region name).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Editor => "editor",
            Self::Region(region) => region.as_str(),
        }
    }

    /// Check if this role is the privileged editor.
    pub fn is_editor(&self) -> bool {
        matches!(self, Self::Editor)
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccountRole {
    type Err = newsroom_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "editor" {
            return Ok(Self::Editor);
        }
        match s.parse::<Region>() {
            // "global" is a partition, not a role.
            Ok(Region::Global) | Err(_) => Err(newsroom_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected 'editor' or a region name"
            ))),
            Ok(region) => Ok(Self::Region(region)),
        }
    }
}

// Roles are plain strings on the wire and in the account table, so the
// serde impls go through `as_str`/`FromStr` rather than a derived
// representation.
impl Serialize for AccountRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AccountRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
