//! Contains route refinement logic: 2-opt local search and time window
//! enforcement via route splitting.

use crate::models::Cost;

/// A tolerance below which a cost change is treated as floating noise. It keeps the
/// local search from cycling on equal cost reversals and the scheduler from flagging
/// violations caused by accumulated rounding.
const COST_EPSILON: Cost = 1E-9;

mod two_opt;
pub use self::two_opt::two_opt_route;

mod timing;
pub use self::timing::{enforce_time_windows, simulate_schedule, Schedule};
