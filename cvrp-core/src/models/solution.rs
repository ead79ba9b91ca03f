#[cfg(test)]
#[path = "../../tests/unit/models/solution_test.rs"]
mod solution_test;

use crate::models::{Cost, Customer, Demand, Depot, NodeIndex};
use std::sync::Arc;

/// An in-progress route within one depot sub-problem. Stops always start and end with
/// the depot node and contain no interior depot; the load is the sum of demands of all
/// customers on the route.
#[derive(Clone, Debug)]
pub struct Route {
    /// An ordered stop sequence.
    pub stops: Vec<NodeIndex>,
    /// Total demand served by the route.
    pub load: Demand,
}

impl Route {
    /// Creates a route serving a single customer at the given sub-problem position.
    pub fn singleton(position: usize, demand: Demand) -> Self {
        Self { stops: vec![NodeIndex::DEPOT, NodeIndex::customer(position), NodeIndex::DEPOT], load: demand }
    }

    /// Returns the amount of customer stops on the route.
    pub fn customer_count(&self) -> usize {
        self.stops.len().saturating_sub(2)
    }

    /// Returns the first customer stop, the one adjacent to the starting depot.
    pub fn first_customer(&self) -> Option<NodeIndex> {
        self.stops.get(1).filter(|stop| !stop.is_depot()).copied()
    }

    /// Returns the last customer stop, the one adjacent to the finishing depot.
    pub fn last_customer(&self) -> Option<NodeIndex> {
        if self.stops.len() < 3 {
            return None;
        }

        self.stops.get(self.stops.len() - 2).filter(|stop| !stop.is_depot()).copied()
    }
}

/// Sums demands of the customers visited by the given stop sequence.
pub fn stops_load(stops: &[NodeIndex], customers: &[Customer]) -> Demand {
    stops
        .iter()
        .filter_map(|stop| stop.customer_position())
        .map(|position| customers[position].demand)
        .sum()
}

/// A finalized route with its owning depot and the sub-problem customer list attached.
#[derive(Clone, Debug)]
pub struct Tour {
    /// An ordered stop sequence, local to the owning depot sub-problem.
    pub stops: Vec<NodeIndex>,
    /// Total demand served by the tour.
    pub load: Demand,
    /// Total travel cost along the tour.
    pub cost: Cost,
    /// The owning depot.
    pub depot: Arc<Depot>,
    /// Customers of the owning depot sub-problem, indexed by the stops.
    pub customers: Arc<Vec<Customer>>,
    /// False only for a best effort single customer tour whose own time window
    /// cannot be met even in isolation.
    pub is_feasible: bool,
}

impl Tour {
    /// Resolves a stop to its customer. Returns `None` for the depot node.
    pub fn customer(&self, stop: NodeIndex) -> Option<&Customer> {
        stop.customer_position().and_then(|position| self.customers.get(position))
    }
}

/// A complete solution: all finalized tours across all depots with the grand total cost.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Finalized tours in depot input order.
    pub tours: Vec<Tour>,
    /// Sum of all tour costs.
    pub total_cost: Cost,
}
