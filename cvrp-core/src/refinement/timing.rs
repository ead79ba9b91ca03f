#[cfg(test)]
#[path = "../../tests/unit/refinement/timing_test.rs"]
mod timing_test;

use super::COST_EPSILON;
use crate::models::{Customer, DistanceMatrix, NodeIndex, Route, Timestamp};
use std::collections::VecDeque;

/// Arrival times simulated along a route for a single vehicle departing the depot at
/// time zero. Waiting for a window to open is free; a violation is recorded at the
/// first stop whose service cannot start before its window closes.
#[derive(Clone, Debug)]
pub struct Schedule {
    /// Arrival time at each stop, after any waiting.
    pub arrivals: Vec<Timestamp>,
    /// Stop position of the first time window violation, if any. Positions past it
    /// keep the default arrival value as simulation stops there.
    pub violation: Option<usize>,
}

impl Schedule {
    /// Checks whether the schedule has no time window violation.
    pub fn is_feasible(&self) -> bool {
        self.violation.is_none()
    }
}

/// Simulates the schedule of the given stop sequence: travel time equals distance,
/// arrival before a window opens waits until its start, and the service duration is
/// spent at each customer. The depot window is unconstrained with no service time.
pub fn simulate_schedule(stops: &[NodeIndex], customers: &[Customer], matrix: &DistanceMatrix) -> Schedule {
    let mut arrivals = vec![0.; stops.len()];
    let mut time = 0.;

    for position in 1..stops.len() {
        time += matrix.distance(stops[position - 1], stops[position]);

        let Some(customer_position) = stops[position].customer_position() else {
            arrivals[position] = time;
            continue;
        };
        let customer = &customers[customer_position];

        if time < customer.time_window.start {
            time = customer.time_window.start;
        }
        arrivals[position] = time;

        if time > customer.time_window.end + COST_EPSILON {
            return Schedule { arrivals, violation: Some(position) };
        }

        time += customer.service_time;
    }

    Schedule { arrivals, violation: None }
}

/// Enforces time windows on the given routes by splitting each route at its first
/// violation and re-simulating both sides, using an explicit work queue until every
/// piece is feasible or trivially small.
///
/// A single customer route whose own window cannot be met even in isolation is emitted
/// as a best effort result with the feasibility flag unset instead of being split
/// further: callers must expect such routes in the output. When the violating stop is
/// the first customer of a longer route, that customer is carved out as a singleton so
/// the remainder can make progress; this guarantees every split strictly reduces the
/// customer count of at least one side and the repair terminates.
///
/// Returns stop sequences paired with their feasibility flag, in repair order.
pub fn enforce_time_windows(
    routes: Vec<Route>,
    customers: &[Customer],
    matrix: &DistanceMatrix,
) -> Vec<(Vec<NodeIndex>, bool)> {
    let mut result = Vec::with_capacity(routes.len());

    for route in routes {
        let mut queue = VecDeque::from([route.stops]);

        while let Some(stops) = queue.pop_front() {
            match simulate_schedule(&stops, customers, matrix).violation {
                None => result.push((stops, true)),
                // inherently infeasible singleton: keep it as a best effort result
                Some(_) if stops.len() == 3 => result.push((stops, false)),
                Some(1) => {
                    queue.push_back(vec![NodeIndex::DEPOT, stops[1], NodeIndex::DEPOT]);
                    enqueue(&mut queue, split_right(&stops, 2));
                }
                Some(violation) => {
                    enqueue(&mut queue, split_left(&stops, violation));
                    enqueue(&mut queue, split_right(&stops, violation));
                }
            }
        }
    }

    result
}

fn split_left(stops: &[NodeIndex], violation: usize) -> Vec<NodeIndex> {
    stops[..violation].iter().copied().chain(std::iter::once(NodeIndex::DEPOT)).collect()
}

fn split_right(stops: &[NodeIndex], violation: usize) -> Vec<NodeIndex> {
    std::iter::once(NodeIndex::DEPOT).chain(stops[violation..].iter().copied()).collect()
}

fn enqueue(queue: &mut VecDeque<Vec<NodeIndex>>, stops: Vec<NodeIndex>) {
    // a split side with only the two depot endpoints is discarded
    if stops.len() > 2 {
        queue.push_back(stops);
    }
}
