//! Cost graph over the final slide set
//!
//! Nodes are slides in a fixed order; edges carry the inverse transition
//! score between the two slides. The matrix is complete, symmetric, and
//! zero on the diagonal.

use crate::algorithm::scoring::edge_cost;
use crate::io::configuration::NO_RELATION_COST;
use crate::model::slide::Slide;
use ndarray::Array2;

/// Complete symmetric cost graph consumed by the route optimizers
#[derive(Clone, Debug)]
pub struct CostGraph {
    slides: Vec<Slide>,
    costs: Array2<f64>,
}

impl CostGraph {
    /// Build the graph, evaluating each unordered slide pair once
    ///
    /// The single evaluation is mirrored into both matrix halves, and the
    /// diagonal stays zero. Rebuilding from the same slide order yields a
    /// bit-identical matrix.
    pub fn build(slides: Vec<Slide>) -> Self {
        let node_count = slides.len();
        let mut costs = Array2::zeros((node_count, node_count));

        for i in 0..node_count {
            for j in (i + 1)..node_count {
                let Some((first, second)) = slides.get(i).zip(slides.get(j)) else {
                    continue;
                };
                let cost = edge_cost(first, second);
                if let Some(cell) = costs.get_mut([i, j]) {
                    *cell = cost;
                }
                if let Some(cell) = costs.get_mut([j, i]) {
                    *cell = cost;
                }
            }
        }

        Self { slides, costs }
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.slides.len()
    }

    /// Slides in node order
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Traversal cost between two nodes
    ///
    /// Out-of-range indices fall back to the no-relation penalty.
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.costs
            .get([from, to])
            .copied()
            .unwrap_or(NO_RELATION_COST)
    }

    /// Cyclic tour cost of a route over this graph
    ///
    /// Sums the edge costs between consecutive route entries, closing the
    /// tour from the last node back to the first.
    pub fn route_cost(&self, route: &[usize]) -> f64 {
        route
            .iter()
            .enumerate()
            .map(|(position, &from)| {
                let to = route
                    .get(position + 1)
                    .or_else(|| route.first())
                    .copied()
                    .unwrap_or(from);
                self.cost(from, to)
            })
            .sum()
    }
}
