//! Nearest-neighbour sequencing baseline
//!
//! A deterministic single-pass alternative to the genetic search,
//! satisfying the same interface: cost graph in, permutation out.

use crate::algorithm::graph::CostGraph;

/// Order slides by repeatedly taking the cheapest unvisited transition
///
/// Starts at node 0 and extends the route with the minimum-cost edge out
/// of the current node, first-encountered on ties. Fast and deterministic;
/// a baseline the genetic search is expected to beat on interesting
/// inputs.
pub fn nearest_neighbour_route(graph: &CostGraph) -> Vec<usize> {
    let node_count = graph.node_count();
    if node_count == 0 {
        return Vec::new();
    }

    let mut visited = vec![false; node_count];
    let mut route = Vec::with_capacity(node_count);
    let mut current = 0;
    if let Some(flag) = visited.first_mut() {
        *flag = true;
    }
    route.push(current);

    for _ in 1..node_count {
        let mut next: Option<(usize, f64)> = None;
        for candidate in 0..node_count {
            if visited.get(candidate).copied().unwrap_or(true) {
                continue;
            }
            let cost = graph.cost(current, candidate);
            if next.is_none_or(|(_, best)| cost < best) {
                next = Some((candidate, cost));
            }
        }

        let Some((chosen, _)) = next else {
            break;
        };
        if let Some(flag) = visited.get_mut(chosen) {
            *flag = true;
        }
        route.push(chosen);
        current = chosen;
    }

    route
}
