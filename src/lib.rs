//! Deadline-anchored kitchen scheduling.
//!
//! Turns recipes, already decomposed into station-tagged atomic tasks, into
//! a per-station timeline that lands every dish at one fixed serve time,
//! plus advisory warnings for plans that are risky or physically infeasible.
//!
//! # Modules
//!
//! - **`models`**: Domain types (`AtomicTask`, `Recipe`, `Station`,
//!   `KitchenProfile`, `ScheduledTask`, `ScheduleLane`, `Schedule`, `WarningCode`)
//! - **`scheduler`**: Backward placement, capacity/risk analysis, assembly, KPIs
//! - **`validation`**: Input integrity checks (duplicate IDs, durations, dependency cycles)
//! - **`messages`**: Human-readable wording for warning codes
//! - **`error`**: Boundary error types
//!
//! # Architecture
//!
//! Scheduling is a pure, synchronous function of (tasks, serve time,
//! kitchen profile). There is no shared state between calls; resource
//! contention (one oven, N burners) is modeled as data and reported, never
//! enforced.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling", Ch. 2 (backward scheduling)

pub mod error;
pub mod messages;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{ConfigError, ScheduleError};
pub use scheduler::{build_schedule, BackwardScheduler, ScheduleRequest};
