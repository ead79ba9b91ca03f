#[cfg(test)]
#[path = "../../tests/unit/construction/limits_test.rs"]
mod limits_test;

use crate::models::{stops_load, Customer, NodeIndex, Route};

/// Cuts any route exceeding the stop limit into contiguous chunks of at most `max_stops`
/// customers, taken in the route's existing visiting order. Each chunk becomes its own
/// depot bounded route with the load recomputed from its customer demands. Routes within
/// the limit pass through unchanged.
pub fn split_by_stop_limit(routes: Vec<Route>, customers: &[Customer], max_stops: usize) -> Vec<Route> {
    routes
        .into_iter()
        .flat_map(|route| {
            if route.customer_count() <= max_stops {
                return vec![route];
            }

            route.stops[1..route.stops.len() - 1]
                .chunks(max_stops)
                .map(|chunk| {
                    let stops: Vec<_> = std::iter::once(NodeIndex::DEPOT)
                        .chain(chunk.iter().copied())
                        .chain(std::iter::once(NodeIndex::DEPOT))
                        .collect();
                    let load = stops_load(&stops, customers);

                    Route { stops, load }
                })
                .collect()
        })
        .collect()
}
