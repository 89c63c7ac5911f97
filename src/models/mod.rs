//! Kitchen scheduling domain models.
//!
//! Pure value types: tasks and recipes going in, placed tasks, lanes and
//! schedules coming out, plus the station priority table and warning codes.
//!
//! # Domain Mappings
//!
//! | u-kitchen | Job-shop equivalent |
//! |-----------|---------------------|
//! | AtomicTask | Operation |
//! | Station | Resource type |
//! | ScheduleLane | Resource timeline |
//! | serve_time | Common due date |

mod kitchen;
mod schedule;
mod station;
mod task;
mod warning;

pub use kitchen::KitchenProfile;
pub use schedule::{Schedule, ScheduleLane, ScheduledTask};
pub use station::{
    lane_order, priority_of, Station, HIGH_PRIORITY_CUTOFF, UNKNOWN_STATION_PRIORITY,
};
pub use task::{flatten_recipes, AtomicTask, Recipe};
pub use warning::WarningCode;
