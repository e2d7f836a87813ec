//! Plan domain: drafting state machine, random selection and the
//! recently-accepted memory that biases draws away from repeats.

mod recent;
mod select;
mod state;

pub use recent::RecentSelections;
pub use select::{DEFAULT_PLAN_SIZE, draw_plan, replacement_for};
pub use state::{DataOrigin, Event, Phase, Planner};
