//! Generation loop and configuration for the genetic route optimizer

use crate::algorithm::breeding::{breed_generation, mutate_route};
use crate::algorithm::graph::CostGraph;
use crate::algorithm::population::{Individual, Population};
use crate::algorithm::selection::select_mating_pool;
use crate::io::configuration::{
    DEFAULT_ELITE_SIZE, DEFAULT_GENERATIONS, DEFAULT_MUTATION_RATE, DEFAULT_POPULATION_SIZE,
};
use crate::io::error::{Result, invalid_parameter};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Search parameters for the genetic optimizer
#[derive(Clone, Copy, Debug)]
pub struct GaConfig {
    /// Number of individuals per generation
    pub population_size: usize,
    /// Ranked entries carried unmodified into each mating pool
    pub elite_size: usize,
    /// Per-gene swap probability applied to every child
    pub mutation_rate: f64,
    /// Number of generations before the search stops
    pub generations: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            elite_size: DEFAULT_ELITE_SIZE,
            mutation_rate: DEFAULT_MUTATION_RATE,
            generations: DEFAULT_GENERATIONS,
        }
    }
}

impl GaConfig {
    /// Validate parameter bounds
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when the population is empty, the elite
    /// exceeds the population, or the mutation rate leaves [0, 1].
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(invalid_parameter(
                "population_size",
                &self.population_size,
                &"population must hold at least one individual",
            ));
        }
        if self.elite_size > self.population_size {
            return Err(invalid_parameter(
                "elite_size",
                &self.elite_size,
                &"elite cannot exceed the population size",
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid_parameter(
                "mutation_rate",
                &self.mutation_rate,
                &"mutation rate must lie in [0, 1]",
            ));
        }
        Ok(())
    }
}

/// Evolves slide orderings against a fixed cost graph
///
/// The population is replaced wholesale each generation. After the final
/// generation the answer is the minimum-cost individual of the last
/// population; no best-ever individual is tracked across generations, so
/// the search can regress late and still report the final state.
pub struct GeneticOptimizer {
    config: GaConfig,
    population: Population,
    rng: StdRng,
    generation: usize,
}

impl GeneticOptimizer {
    /// Create an optimizer with a validated configuration and a random
    /// starting population drawn from the given seed
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when the configuration fails validation.
    pub fn new(graph: &CostGraph, config: GaConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let population = Population::random(config.population_size, graph.node_count(), &mut rng);
        Ok(Self {
            config,
            population,
            rng,
            generation: 0,
        })
    }

    /// Generations evolved so far
    pub const fn generation(&self) -> usize {
        self.generation
    }

    /// Configured search parameters
    pub const fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Advance the search by one generation
    ///
    /// Ranks the current population, builds the elitist mating pool, breeds
    /// children by ordered crossover, applies swap mutation to every child,
    /// and replaces the population wholesale.
    pub fn advance_generation(&mut self, graph: &CostGraph) {
        let ranked = self.population.rank(graph);
        let selected = select_mating_pool(&ranked, self.config.elite_size, &mut self.rng);
        let pool: Vec<Individual> = selected
            .iter()
            .filter_map(|&index| self.population.get(index).cloned())
            .collect();

        let mut children = breed_generation(&pool, self.config.elite_size, &mut self.rng);
        for child in &mut children {
            mutate_route(child.route_mut(), self.config.mutation_rate, &mut self.rng);
        }

        self.population = Population::from_individuals(children);
        self.generation += 1;
    }

    /// Run the configured number of generations and return the winner
    pub fn run(&mut self, graph: &CostGraph) -> Vec<usize> {
        while self.generation < self.config.generations {
            self.advance_generation(graph);
        }
        self.best_route(graph)
    }

    /// Minimum-cost route in the current population
    ///
    /// The ranking is cost-descending, so the winner is its last entry.
    pub fn best_route(&mut self, graph: &CostGraph) -> Vec<usize> {
        let ranked = self.population.rank(graph);
        ranked
            .last()
            .and_then(|entry| self.population.get(entry.index))
            .map(|individual| individual.route().to_vec())
            .unwrap_or_default()
    }

    /// Minimum route cost in the current population
    pub fn best_cost(&mut self, graph: &CostGraph) -> f64 {
        let ranked = self.population.rank(graph);
        ranked.last().map_or(f64::INFINITY, |entry| entry.cost)
    }
}
