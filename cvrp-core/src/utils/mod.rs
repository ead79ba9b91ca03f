//! A collection of various utilities.

mod comparison;
pub use self::comparison::compare_floats;

mod error;
pub use self::error::{GenericError, GenericResult};

mod parallel;
pub use self::parallel::parallel_into_collect;
