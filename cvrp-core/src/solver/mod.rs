//! Contains the solver orchestrator which sequences depot assignment, route
//! construction and refinement into a complete solution.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

mod assignment;
pub use self::assignment::assign_to_depots;

use crate::construction::{create_savings_routes, split_by_stop_limit};
use crate::models::*;
use crate::refinement::{enforce_time_windows, two_opt_route};
use crate::utils::parallel_into_collect;
use std::sync::Arc;

/// A logger type which is called with human readable information about solver progress.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Solves capacitated vehicle routing problems with the Clarke–Wright savings heuristic,
/// 2-opt local search and time window enforcement via route splitting.
///
/// The solver is stateless across invocations: each [`Solver::solve`] call starts from
/// the immutable problem definition and produces a disjoint [`Solution`].
pub struct Solver {
    problem: Arc<Problem>,
    matrix_provider: Option<MatrixProvider>,
    logger: InfoLogger,
}

impl Solver {
    /// Creates a new [`Solver`] for the given problem with the default Euclidean
    /// distance computation and no logging.
    pub fn new(problem: Arc<Problem>) -> Self {
        Self { problem, matrix_provider: None, logger: Arc::new(|_| {}) }
    }

    /// Sets an external travel cost matrix provider which fully replaces the default
    /// Euclidean computation. A provider failure aborts the solve as is, with no retry
    /// and no fallback.
    pub fn with_matrix_provider(mut self, matrix_provider: MatrixProvider) -> Self {
        self.matrix_provider = Some(matrix_provider);
        self
    }

    /// Sets a logger for per depot progress information.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Solves the problem: assigns customers to their nearest depot, then per depot in
    /// input order constructs routes with the savings heuristic, applies the optional
    /// stop limit, refines stop orders with 2-opt and enforces time windows by
    /// splitting routes at violations.
    ///
    /// A single customer tour whose own time window cannot be met even in isolation is
    /// returned with [`Tour::is_feasible`] unset rather than being rejected; every
    /// other returned tour is capacity and time window feasible.
    pub fn solve(&self) -> SolverResult<Solution> {
        self.validate()?;

        let assigned = assign_to_depots(&self.problem.depots, &self.problem.customers);

        let mut tours = Vec::new();
        let mut total_cost = 0.;

        for (depot, customers) in self.problem.depots.iter().zip(assigned) {
            if customers.is_empty() {
                continue;
            }

            let depot = Arc::new(depot.clone());
            let customers = Arc::new(customers);
            let matrix = self.acquire_matrix(&depot, &customers)?;

            let routes = create_savings_routes(&customers, self.problem.capacity, &matrix);
            let routes = match self.problem.max_route_stops {
                Some(max_stops) => split_by_stop_limit(routes, &customers, max_stops),
                None => routes,
            };
            // routes are refined independently; collection must keep input order
            let routes = parallel_into_collect(routes, |route| Route {
                stops: two_opt_route(route.stops, &matrix),
                load: route.load,
            });

            let depot_tours: Vec<_> = enforce_time_windows(routes, &customers, &matrix)
                .into_iter()
                .map(|(stops, is_feasible)| {
                    let load = stops_load(&stops, &customers);
                    let cost = matrix.route_cost(&stops);

                    Tour { stops, load, cost, depot: depot.clone(), customers: customers.clone(), is_feasible }
                })
                .collect();

            let depot_cost: Cost = depot_tours.iter().map(|tour| tour.cost).sum();

            (self.logger)(&format!(
                "depot '{}': {} customers served by {} routes, cost {:.4}",
                depot.id.as_deref().unwrap_or("unnamed"),
                customers.len(),
                depot_tours.len(),
                depot_cost
            ));

            total_cost += depot_cost;
            tours.extend(depot_tours);
        }

        Ok(Solution { tours, total_cost })
    }

    /// Validates the problem definition before any computation starts.
    fn validate(&self) -> SolverResult<()> {
        let problem = self.problem.as_ref();

        if problem.depots.is_empty() {
            return Err(SolverError::InvalidInput("at least one depot is required".to_string()));
        }
        if problem.customers.is_empty() {
            return Err(SolverError::InvalidInput("at least one customer is required".to_string()));
        }
        if !(problem.capacity > 0.) || !problem.capacity.is_finite() {
            return Err(SolverError::InvalidInput(format!("capacity must be a positive number, got {}", problem.capacity)));
        }
        if problem.max_route_stops == Some(0) {
            return Err(SolverError::InvalidInput("maximum route stops must be positive when set".to_string()));
        }

        for customer in &problem.customers {
            if customer.demand < 0. || !customer.demand.is_finite() {
                return Err(SolverError::InvalidInput(format!(
                    "customer '{}' has a negative or non finite demand {}",
                    customer.id, customer.demand
                )));
            }
            if customer.demand > problem.capacity {
                return Err(SolverError::UnservableCustomer { id: customer.id.clone(), demand: customer.demand });
            }
        }

        Ok(())
    }

    /// Resolves the travel cost matrix for one depot sub-problem: either from the
    /// configured provider or as the default Euclidean matrix.
    fn acquire_matrix(&self, depot: &Depot, customers: &[Customer]) -> SolverResult<DistanceMatrix> {
        let Some(matrix_provider) = &self.matrix_provider else {
            return Ok(DistanceMatrix::euclidean(depot, customers));
        };

        let matrix = matrix_provider(depot, customers).map_err(SolverError::Provider)?;

        if matrix.size() != customers.len() + 1 {
            return Err(SolverError::Provider(
                format!("provider returned a matrix for {} nodes, expected {}", matrix.size(), customers.len() + 1)
                    .into(),
            ));
        }

        Ok(matrix)
    }
}
