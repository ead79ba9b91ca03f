//! A collection of models to represent problem and solution in the Capacitated Vehicle
//! Routing Problem domain.

mod domain;
pub use self::domain::*;

mod error;
pub use self::error::*;

mod matrix;
pub use self::matrix::*;

mod solution;
pub use self::solution::*;
