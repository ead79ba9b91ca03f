//! This module reimports commonly used types.

pub use crate::models::{Cost, Demand, Timestamp};
pub use crate::models::{Customer, Depot, Point, Problem, TimeWindow};
pub use crate::models::{DistanceMatrix, MatrixProvider, NodeIndex};
pub use crate::models::{Route, Solution, Tour};
pub use crate::models::{SolverError, SolverResult};

pub use crate::solver::{InfoLogger, Solver};

pub use crate::utils::compare_floats;
pub use crate::utils::{GenericError, GenericResult};
