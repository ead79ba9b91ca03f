#[cfg(test)]
#[path = "../../tests/unit/refinement/two_opt_test.rs"]
mod two_opt_test;

use super::COST_EPSILON;
use crate::models::{DistanceMatrix, NodeIndex};

/// Improves a single route's stop order with the 2-opt local search: reverses interior
/// sub-sequences whenever that strictly reduces the travel cost, repeating full scans
/// until no improving reversal is left. The depot endpoints stay fixed, and routes with
/// four or fewer total stops pass through unchanged as no improving move exists there.
///
/// This is a first improvement, multi pass hill climb: deterministic for a fixed matrix
/// and a fixed starting order, and idempotent once converged.
pub fn two_opt_route(mut stops: Vec<NodeIndex>, matrix: &DistanceMatrix) -> Vec<NodeIndex> {
    let n = stops.len();
    if n <= 4 {
        return stops;
    }

    let mut improved = true;
    while improved {
        improved = false;
        for i in 1..n - 2 {
            for k in (i + 1)..n - 1 {
                let (a, b) = (stops[i - 1], stops[i]);
                let (c, d) = (stops[k], stops[k + 1]);

                let before = matrix.distance(a, b) + matrix.distance(c, d);
                let after = matrix.distance(a, c) + matrix.distance(b, d);

                if after + COST_EPSILON < before {
                    stops[i..=k].reverse();
                    improved = true;
                }
            }
        }
    }

    stops
}
