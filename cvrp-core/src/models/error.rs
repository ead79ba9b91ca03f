use crate::models::Demand;
use crate::utils::GenericError;

/// Specifies errors returned by the solver.
#[derive(Clone, Debug, PartialEq)]
pub enum SolverError {
    /// Input is rejected before any computation starts: missing depots or customers,
    /// a non-positive capacity, or a negative demand.
    InvalidInput(String),
    /// A customer cannot be served at all: its demand alone exceeds the vehicle capacity,
    /// so no capacity feasible route can ever contain it.
    UnservableCustomer {
        /// A customer identifier.
        id: String,
        /// The offending demand value.
        demand: Demand,
    },
    /// An external distance matrix provider failed. The error is surfaced as is:
    /// no retry and no fallback to the default distance computation happens.
    Provider(GenericError),
}

/// A type alias for result type with `SolverError`.
pub type SolverResult<T> = Result<T, SolverError>;

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            SolverError::UnservableCustomer { id, demand } => {
                write!(f, "customer '{id}' cannot be served: demand {demand} exceeds vehicle capacity")
            }
            SolverError::Provider(err) => write!(f, "distance matrix provider failed: {err}"),
        }
    }
}

impl std::error::Error for SolverError {}
