//! Core crate containing the building blocks to solve a ***Capacitated Vehicle Routing
//! Problem*** with optional per customer delivery time windows.
//!
//! The solving pipeline runs per depot sub-problem: customers are first partitioned by
//! the nearest depot rule, an initial route set is constructed with the Clarke–Wright
//! savings heuristic, routes are optionally cut to a stop limit, their stop orders are
//! refined with 2-opt local search, and time windows are enforced by splitting routes
//! at violations. The result is a greedy heuristic solution, not a proven optimum.
//!
//! Note on best effort results: a single customer whose own time window cannot be met
//! even in isolation is still emitted in the solution as a one stop tour with its
//! feasibility flag unset, rather than raised as an error. A customer whose demand
//! alone exceeds the vehicle capacity is rejected upfront instead.
//!
//! The engine itself performs no I/O: travel costs come either from the built-in
//! Euclidean computation or from a caller supplied matrix provider.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod construction;
pub mod models;
pub mod prelude;
pub mod refinement;
pub mod solver;
pub mod utils;
