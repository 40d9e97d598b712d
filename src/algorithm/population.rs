//! Route individuals and whole-population operations

use crate::algorithm::graph::CostGraph;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::iter::{IntoParallelRefMutIterator, ParallelIterator};
use std::cmp::Ordering;

/// A candidate tour: a permutation of every node index in the graph
///
/// The cyclic route cost is cached after the first evaluation and dropped
/// whenever the route is mutated in place, so a stale cache is never
/// reused.
#[derive(Clone, Debug)]
pub struct Individual {
    route: Vec<usize>,
    cost: Option<f64>,
}

impl Individual {
    /// Create an individual from an explicit route
    pub const fn from_route(route: Vec<usize>) -> Self {
        Self { route, cost: None }
    }

    /// Create a uniformly random permutation of `node_count` indices
    pub fn random(node_count: usize, rng: &mut StdRng) -> Self {
        let mut route: Vec<usize> = (0..node_count).collect();
        route.shuffle(rng);
        Self::from_route(route)
    }

    /// Route in visiting order
    pub fn route(&self) -> &[usize] {
        &self.route
    }

    /// Take ownership of the route
    pub fn into_route(self) -> Vec<usize> {
        self.route
    }

    /// Cyclic route cost, cached after the first evaluation
    pub fn route_cost(&mut self, graph: &CostGraph) -> f64 {
        if let Some(cost) = self.cost {
            return cost;
        }
        let cost = graph.route_cost(&self.route);
        self.cost = Some(cost);
        cost
    }

    /// Inverse of the route cost
    ///
    /// Route costs are strictly positive for graphs with two or more
    /// nodes: every tour edge carries either a positive inverse score or
    /// the no-relation penalty.
    pub fn fitness(&mut self, graph: &CostGraph) -> f64 {
        1.0 / self.route_cost(graph)
    }

    /// Mutable access to the route, dropping the cached cost
    pub fn route_mut(&mut self) -> &mut Vec<usize> {
        self.cost = None;
        &mut self.route
    }
}

/// Cost-ranked reference to a population slot
#[derive(Clone, Copy, Debug)]
pub struct RankedRoute {
    /// Position of the individual in the population
    pub index: usize,
    /// Cyclic route cost of that individual
    pub cost: f64,
}

/// Fixed-size collection of individuals, replaced wholesale per generation
#[derive(Clone, Debug)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Create a population of uniformly random routes
    pub fn random(size: usize, node_count: usize, rng: &mut StdRng) -> Self {
        let individuals = (0..size)
            .map(|_| Individual::random(node_count, rng))
            .collect();
        Self { individuals }
    }

    /// Wrap an explicit set of individuals
    pub const fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Number of individuals
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Test whether the population holds no individuals
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Borrow an individual by position
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Rank every individual by cyclic route cost, highest cost first
    ///
    /// Costs are evaluated in parallel, one worker per individual, with the
    /// graph shared read-only; ranking starts only after every cost is in.
    /// The descending direction matches the roulette table consumed by
    /// selection, so the best individual is the entry with the minimum
    /// cost, not the first entry.
    pub fn rank(&mut self, graph: &CostGraph) -> Vec<RankedRoute> {
        self.individuals.par_iter_mut().for_each(|individual| {
            individual.route_cost(graph);
        });

        let mut ranked: Vec<RankedRoute> = self
            .individuals
            .iter_mut()
            .enumerate()
            .map(|(index, individual)| RankedRoute {
                index,
                cost: individual.route_cost(graph),
            })
            .collect();
        ranked.sort_by(|a, b| b.cost.partial_cmp(&a.cost).unwrap_or(Ordering::Equal));
        ranked
    }
}
