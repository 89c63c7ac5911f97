//! Station model.
//!
//! A station is the physical resource category a task is affinitized to:
//! the oven, the stovetop, the prep board, the counter, or "passive" time
//! (resting, marinating, chilling) that occupies no equipment.
//!
//! # Priority
//! Lower value = anchored closer to the serve deadline.
//!
//! | Station | Priority | Tier |
//! |---------|----------|------|
//! | oven | 1 | high |
//! | stove | 2 | high |
//! | counter | 3 | low |
//! | prep | 4 | low |
//! | passive | 5 | low |
//! | anything else | 99 | low |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority assigned to station names outside the known set.
pub const UNKNOWN_STATION_PRIORITY: u8 = 99;

/// Highest priority value that still belongs to the deadline-anchored tier.
pub const HIGH_PRIORITY_CUTOFF: u8 = 2;

/// A cooking station.
///
/// Unrecognized station strings are preserved in [`Station::Other`] and
/// scheduled in the low-priority tier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Station {
    /// The oven (single shared resource).
    Oven,
    /// Stovetop burners.
    Stove,
    /// Counter work (assembly, plating).
    Counter,
    /// Knife and mise-en-place work.
    Prep,
    /// Unattended time (resting, marinating).
    Passive,
    /// A station name outside the known set.
    Other(String),
}

impl Station {
    /// Parses a station name. Never fails; unknown names become `Other`.
    pub fn parse(name: &str) -> Self {
        match name {
            "oven" => Station::Oven,
            "stove" => Station::Stove,
            "counter" => Station::Counter,
            "prep" => Station::Prep,
            "passive" => Station::Passive,
            other => Station::Other(other.to_string()),
        }
    }

    /// Station name as it appears on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Station::Oven => "oven",
            Station::Stove => "stove",
            Station::Counter => "counter",
            Station::Prep => "prep",
            Station::Passive => "passive",
            Station::Other(name) => name,
        }
    }

    /// Scheduling priority (lower = closer to serve time).
    pub fn priority(&self) -> u8 {
        match self {
            Station::Oven => 1,
            Station::Stove => 2,
            Station::Counter => 3,
            Station::Prep => 4,
            Station::Passive => 5,
            Station::Other(_) => UNKNOWN_STATION_PRIORITY,
        }
    }

    /// Whether tasks at this station are anchored directly at serve time.
    #[inline]
    pub fn is_high_priority(&self) -> bool {
        self.priority() <= HIGH_PRIORITY_CUTOFF
    }

    /// Whether this is one of the five known stations.
    pub fn is_known(&self) -> bool {
        !matches!(self, Station::Other(_))
    }
}

/// Priority lookup by raw station name.
pub fn priority_of(station: &str) -> u8 {
    Station::parse(station).priority()
}

/// Presentation order: priority, then station name.
pub fn lane_order(a: &Station, b: &Station) -> std::cmp::Ordering {
    a.priority()
        .cmp(&b.priority())
        .then_with(|| a.as_str().cmp(b.as_str()))
}

impl From<String> for Station {
    fn from(s: String) -> Self {
        Station::parse(&s)
    }
}

impl From<&str> for Station {
    fn from(s: &str) -> Self {
        Station::parse(s)
    }
}

impl From<Station> for String {
    fn from(station: Station) -> Self {
        station.as_str().to_string()
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
