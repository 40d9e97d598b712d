//! Solver constants and runtime configuration defaults

// Scoring and graph construction
/// Traversal cost assigned to slide pairs with no transition score
///
/// Strictly greater than the largest finite edge cost (1.0, from a score
/// of 1) so unrelated slides stay traversable but maximally discouraged.
pub const NO_RELATION_COST: f64 = 2.0;

// Bounds the otherwise quadratic pairing scan on huge inputs
/// Maximum candidates scanned per photo while pairing verticals
pub const PAIR_SCAN_LIMIT: usize = 10_000_000;

// Default values for configurable parameters
/// Fixed seed for reproducible searches
pub const DEFAULT_SEED: u64 = 42;

/// Default number of individuals per generation
pub const DEFAULT_POPULATION_SIZE: usize = 100;

/// Default count of ranked entries carried unmodified into the mating pool
pub const DEFAULT_ELITE_SIZE: usize = 20;

/// Default per-gene swap probability
pub const DEFAULT_MUTATION_RATE: f64 = 0.01;

/// Default generation budget
pub const DEFAULT_GENERATIONS: usize = 500;

// Output settings
/// Suffix added to slideshow output filenames
pub const OUTPUT_SUFFIX: &str = "_slideshow";
