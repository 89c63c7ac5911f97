//! User-facing wording for warning codes.
//!
//! Each code has a few interchangeable phrasings; callers pick one at
//! random so repeated plans don't read the same. Scheduling never calls
//! into this module.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::models::WarningCode;

const CAPACITY_OVERLOAD: &[&str] = &[
    "You might not have the space to pull this off. Let's rethink the plan.",
    "Eyes a bit bigger than all those stomachs. Maybe move a dish to the oven or grill.",
    "Your burners are yelling 'we're full' in advance. Try staggering dishes or swapping in an oven option.",
];

const PREP_WINDOW_TOO_SHORT: &[&str] = &[
    "This is a speedrun, not a dinner. Let's either start earlier or trim a dish.",
    "Even a brigade would sweat this timeline. Add a little more prep time?",
    "We can make this work or keep your sanity, but not both. Extend the window a bit.",
];

const TOO_MANY_PROJECTS: &[&str] = &[
    "You've built a tasting menu, not a Tuesday night. Maybe swap one project dish for a simple side.",
    "Great choices. Also, do you own a brigade? If not, we might dial one dish back.",
];

const OVEN_OVERBOOKED: &[&str] = &[
    "Your oven has a full dance card. Consider moving something to the stovetop or grill.",
    "That's a lot of oven time in one window. Maybe stagger the dishes or use multiple cooking methods?",
];

const ALL_OVEN_NO_PREP: &[&str] = &[
    "All oven, no prep time. Let's add some buffer or simplify one dish.",
    "The oven's busy, but when do you prep? We need more time before things go in.",
];

/// Every phrasing for a code.
pub fn all_messages(code: WarningCode) -> &'static [&'static str] {
    match code {
        WarningCode::CapacityOverload => CAPACITY_OVERLOAD,
        WarningCode::PrepWindowTooShort => PREP_WINDOW_TOO_SHORT,
        WarningCode::TooManyProjects => TOO_MANY_PROJECTS,
        WarningCode::OvenOverbooked => OVEN_OVERBOOKED,
        WarningCode::AllOvenNoPrep => ALL_OVEN_NO_PREP,
    }
}

/// Picks a phrasing using the given RNG.
pub fn message_for<R: Rng + ?Sized>(code: WarningCode, rng: &mut R) -> &'static str {
    all_messages(code)
        .choose(rng)
        .copied()
        .unwrap_or_else(|| code.as_str())
}

/// Picks a phrasing using the thread-local RNG.
pub fn message(code: WarningCode) -> &'static str {
    message_for(code, &mut rand::rng())
}
