use crate::models::*;

/// Creates a customer with an unlimited time window and no service time.
pub fn test_customer(id: &str, x: f64, y: f64, demand: Demand) -> Customer {
    Customer::new(id, Point::new(x, y), demand)
}

/// Creates a depot with the given identifier.
pub fn test_depot(id: &str, x: f64, y: f64) -> Depot {
    Depot::with_id(id, Point::new(x, y))
}

/// Builds the Euclidean matrix for a depot placed at the origin.
pub fn test_matrix(customers: &[Customer]) -> DistanceMatrix {
    DistanceMatrix::euclidean(&Depot::origin(), customers)
}

/// Converts raw values to node indices: 0 denotes the depot, `k` the customer
/// at zero-based position `k - 1`.
pub fn stops_of(raw: &[usize]) -> Vec<NodeIndex> {
    raw.iter().map(|&value| if value == 0 { NodeIndex::DEPOT } else { NodeIndex::customer(value - 1) }).collect()
}

/// Converts node indices back to raw values, the inverse of [`stops_of`].
pub fn raw_stops(stops: &[NodeIndex]) -> Vec<usize> {
    stops.iter().map(|stop| stop.customer_position().map_or(0, |position| position + 1)).collect()
}

/// Creates a route over the given raw stops with its load recomputed from demands.
pub fn test_route(raw: &[usize], customers: &[Customer]) -> Route {
    let stops = stops_of(raw);
    let load = stops_load(&stops, customers);

    Route { stops, load }
}
