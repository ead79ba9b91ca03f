#[cfg(test)]
#[path = "../../tests/unit/solver/assignment_test.rs"]
mod assignment_test;

use crate::models::{Customer, Depot};

/// Partitions customers among depots by the nearest depot rule, producing one
/// independent sub-problem customer list per depot. Ties are broken in favor of the
/// first depot in input order; depots can end up with an empty list.
pub fn assign_to_depots(depots: &[Depot], customers: &[Customer]) -> Vec<Vec<Customer>> {
    let mut assigned = vec![Vec::new(); depots.len()];

    for customer in customers {
        let mut best = 0;
        let mut best_distance = f64::INFINITY;

        for (index, depot) in depots.iter().enumerate() {
            let distance = depot.location.distance_to(&customer.location);
            if distance < best_distance {
                best_distance = distance;
                best = index;
            }
        }

        assigned[best].push(customer.clone());
    }

    assigned
}
