#[cfg(test)]
#[path = "../../tests/unit/construction/savings_test.rs"]
mod savings_test;

use crate::models::{Cost, Customer, Demand, DistanceMatrix, NodeIndex, Route};
use crate::utils::compare_floats;
use rustc_hash::FxHashMap;

/// Specifies which mergeable end of a route a customer occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RouteEnd {
    /// The first stop after the starting depot. A single customer route
    /// registers its customer on this side.
    Start,
    /// The last stop before the finishing depot.
    End,
}

/// Builds an initial route set for one depot sub-problem using the Clarke–Wright savings
/// heuristic: every customer starts in its own `[depot, customer, depot]` route, then
/// route pairs are greedily merged in descending savings score order as long as the
/// combined load fits the capacity and both customers sit at mergeable route ends.
///
/// Processing order is part of the contract: pairs are visited by descending
/// `s(i,j) = d(0,i) + d(0,j) - d(i,j)` with stable tie order, which makes the result
/// reproducible for a fixed input.
pub fn create_savings_routes(customers: &[Customer], capacity: Demand, matrix: &DistanceMatrix) -> Vec<Route> {
    let n = customers.len();

    // occupied slots only; a merge frees the slot of the absorbed route
    let mut routes: Vec<Option<Route>> =
        customers.iter().enumerate().map(|(position, customer)| Some(Route::singleton(position, customer.demand))).collect();

    // customer node -> (route slot, occupied end); interior customers have no entry
    let mut ends: FxHashMap<NodeIndex, (usize, RouteEnd)> =
        (0..n).map(|position| (NodeIndex::customer(position), (position, RouteEnd::Start))).collect();

    for (_, i, j) in create_savings_list(n, matrix) {
        let (Some(&(left_slot, left_end)), Some(&(right_slot, right_end))) = (ends.get(&i), ends.get(&j)) else {
            continue;
        };
        if left_slot == right_slot {
            continue;
        }

        let (Some(left), Some(right)) = (routes[left_slot].as_ref(), routes[right_slot].as_ref()) else { continue };

        let combined_load = left.load + right.load;
        if combined_load > capacity {
            continue;
        }

        let Some(stops) = merge_stops(&left.stops, left_end, &right.stops, right_end) else { continue };

        for route in [left, right] {
            for end in [route.first_customer(), route.last_customer()].into_iter().flatten() {
                ends.remove(&end);
            }
        }

        let merged = Route { stops, load: combined_load };
        if let Some(first) = merged.first_customer() {
            ends.insert(first, (left_slot, RouteEnd::Start));
        }
        if let Some(last) = merged.last_customer() {
            ends.insert(last, (left_slot, RouteEnd::End));
        }

        routes[left_slot] = Some(merged);
        routes[right_slot] = None;
    }

    routes.into_iter().flatten().collect()
}

/// Computes savings scores for all unordered customer pairs and sorts them in descending
/// score order. Sorting is stable, so equal scores keep their pair enumeration order.
fn create_savings_list(n: usize, matrix: &DistanceMatrix) -> Vec<(Cost, NodeIndex, NodeIndex)> {
    let mut savings = Vec::with_capacity(n * n.saturating_sub(1) / 2);

    for left in 0..n {
        for right in (left + 1)..n {
            let (i, j) = (NodeIndex::customer(left), NodeIndex::customer(right));
            let score = matrix.distance(NodeIndex::DEPOT, i) + matrix.distance(NodeIndex::DEPOT, j)
                - matrix.distance(i, j);
            savings.push((score, i, j));
        }
    }

    savings.sort_by(|(left, ..), (right, ..)| compare_floats(*right, *left));

    savings
}

/// Concatenates two routes so their end customers become internally adjacent, reversing
/// the interior of the second route when both candidate ends are on the same side.
/// Returns `None` for a combination which would not yield exactly one depot at each end.
fn merge_stops(left: &[NodeIndex], left_end: RouteEnd, right: &[NodeIndex], right_end: RouteEnd) -> Option<Vec<NodeIndex>> {
    let stops: Vec<_> = match (left_end, right_end) {
        // right ... j - depot and depot - i ... left
        (RouteEnd::Start, RouteEnd::End) => {
            right[..right.len() - 1].iter().chain(left[1..].iter()).copied().collect()
        }
        // left ... i - depot and depot - j ... right
        (RouteEnd::End, RouteEnd::Start) => {
            left[..left.len() - 1].iter().chain(right[1..].iter()).copied().collect()
        }
        // both depot adjacent starts: reverse right interior to align
        (RouteEnd::Start, RouteEnd::Start) => std::iter::once(NodeIndex::DEPOT)
            .chain(right[1..right.len() - 1].iter().rev().copied())
            .chain(left[1..].iter().copied())
            .collect(),
        // both depot adjacent ends: reverse right interior to align
        (RouteEnd::End, RouteEnd::End) => left[..left.len() - 1]
            .iter()
            .copied()
            .chain(right[1..right.len() - 1].iter().rev().copied())
            .chain(std::iter::once(NodeIndex::DEPOT))
            .collect(),
    };

    let is_valid = stops.first().is_some_and(|stop| stop.is_depot())
        && stops.last().is_some_and(|stop| stop.is_depot())
        && stops[1..stops.len() - 1].iter().all(|stop| !stop.is_depot());

    is_valid.then_some(stops)
}
