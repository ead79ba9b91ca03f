#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use crate::models::{Cost, Customer, Depot};
use crate::utils::{GenericError, GenericResult};
use std::sync::Arc;

/// Identifies a node within a single depot sub-problem: 0 is the depot itself, `1..=n`
/// are the customers assigned to it, in their array order. The index space is local to
/// one sub-problem, so stops of routes owned by different depots must never be mixed.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// The depot node.
    pub const DEPOT: NodeIndex = NodeIndex(0);

    /// Creates an index for the customer at the given zero-based position
    /// in a sub-problem customer list.
    pub fn customer(position: usize) -> Self {
        Self(position + 1)
    }

    /// Checks whether the index denotes the depot.
    pub fn is_depot(&self) -> bool {
        self.0 == 0
    }

    /// Returns the zero-based position of the customer in a sub-problem customer list,
    /// or `None` for the depot.
    pub fn customer_position(&self) -> Option<usize> {
        if self.0 == 0 { None } else { Some(self.0 - 1) }
    }
}

/// A symmetric, zero diagonal travel cost matrix for one depot sub-problem.
/// Row and column 0 correspond to the depot.
#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    size: usize,
    data: Vec<Cost>,
}

impl DistanceMatrix {
    /// Creates a new [`DistanceMatrix`] from row-major data where `size` is the amount
    /// of nodes including the depot. Fails if data shape does not match.
    pub fn new(data: Vec<Cost>, size: usize) -> GenericResult<Self> {
        if data.len() != size * size {
            return Err(GenericError::from(format!(
                "distance matrix has {} entries, expected {} for {size} nodes",
                data.len(),
                size * size
            )));
        }

        Ok(Self { size, data })
    }

    /// Builds a matrix of the given size calling `costs` for each pair of raw node indices.
    pub fn from_fn<F>(size: usize, costs: F) -> Self
    where
        F: Fn(usize, usize) -> Cost,
    {
        let data = (0..size * size).map(|value| costs(value / size, value % size)).collect();
        Self { size, data }
    }

    /// Builds the default straight line distance matrix for a depot and its customers.
    pub fn euclidean(depot: &Depot, customers: &[Customer]) -> Self {
        let locations: Vec<_> =
            std::iter::once(depot.location).chain(customers.iter().map(|customer| customer.location)).collect();

        Self::from_fn(locations.len(), |i, j| locations[i].distance_to(&locations[j]))
    }

    /// Returns the amount of nodes including the depot.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns travel cost between two nodes.
    pub fn distance(&self, from: NodeIndex, to: NodeIndex) -> Cost {
        self.data[from.0 * self.size + to.0]
    }

    /// Returns total travel cost along the given stop sequence.
    pub fn route_cost(&self, stops: &[NodeIndex]) -> Cost {
        stops.windows(2).map(|leg| self.distance(leg[0], leg[1])).sum()
    }
}

/// A capability to supply a travel cost matrix for one depot sub-problem, e.g. resolved
/// from an external routing service by the caller. When configured, it fully replaces
/// the default Euclidean computation and must be resolved to completion before route
/// construction starts: partial matrices are not supported.
pub type MatrixProvider = Arc<dyn Fn(&Depot, &[Customer]) -> GenericResult<DistanceMatrix> + Send + Sync>;
