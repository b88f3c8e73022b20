//! The fixed partition enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A data partition of the portal.
///
/// Six continental regions plus the global partition backing the front
/// page. Each region owns an independent news collection and category
/// list; there are no cross-region references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    /// The global partition served on the unprefixed routes.
    Global,
    Africa,
    Asia,
    Australia,
    Europe,
    NorthAmerica,
    SouthAmerica,
}

impl Region {
    /// Every partition, global included.
    pub const ALL: [Region; 7] = [
        Region::Global,
        Region::Africa,
        Region::Asia,
        Region::Australia,
        Region::Europe,
        Region::NorthAmerica,
        Region::SouthAmerica,
    ];

    /// The six continental regions (everything except global).
    pub const CONTINENTS: [Region; 6] = [
        Region::Africa,
        Region::Asia,
        Region::Australia,
        Region::Europe,
        Region::NorthAmerica,
        Region::SouthAmerica,
    ];

    /// Return the region as its kebab-case route/wire segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Africa => "africa",
            Self::Asia => "asia",
            Self::Australia => "australia",
            Self::Europe => "europe",
            Self::NorthAmerica => "north-america",
            Self::SouthAmerica => "south-america",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Region {
    type Err = newsroom_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "global" => Ok(Self::Global),
            "africa" => Ok(Self::Africa),
            "asia" => Ok(Self::Asia),
            "australia" => Ok(Self::Australia),
            "europe" => Ok(Self::Europe),
            "north-america" => Ok(Self::NorthAmerica),
            "south-america" => Ok(Self::SouthAmerica),
            _ => Err(newsroom_core::AppError::validation(format!(
                "Invalid region: '{s}'"
            ))),
        }
    }
}
