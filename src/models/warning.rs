//! Warning codes.
//!
//! Stable, machine-readable risk indicators attached to a schedule.
//! User-facing wording lives in [`crate::messages`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A risk detected in a placed schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningCode {
    /// Two oven tasks overlap (one oven assumed).
    OvenOverbooked,
    /// Oven work with no prep lane, starting less than 30 minutes before serve.
    AllOvenNoPrep,
    /// Prep work fills more than 90% of its window before serve.
    PrepWindowTooShort,
    /// More overlapping stove tasks than burners.
    CapacityOverload,
    /// More than 20 tasks in total.
    TooManyProjects,
}

impl WarningCode {
    /// Every code, in analysis order.
    pub const ALL: [WarningCode; 5] = [
        WarningCode::OvenOverbooked,
        WarningCode::AllOvenNoPrep,
        WarningCode::PrepWindowTooShort,
        WarningCode::CapacityOverload,
        WarningCode::TooManyProjects,
    ];

    /// The wire code.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCode::OvenOverbooked => "oven_overbooked",
            WarningCode::AllOvenNoPrep => "all_oven_no_prep",
            WarningCode::PrepWindowTooShort => "prep_window_too_short",
            WarningCode::CapacityOverload => "capacity_overload",
            WarningCode::TooManyProjects => "too_many_projects",
        }
    }

    /// Looks up a code by its wire name.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.as_str() == code)
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
