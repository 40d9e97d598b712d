/// Ordered crossover and swap mutation over route permutations
pub mod breeding;
/// Complete symmetric cost graph over the slide set
pub mod graph;
/// Nearest-neighbour sequencing baseline
pub mod greedy;
/// Generation loop and configuration for the genetic optimizer
pub mod optimizer;
/// Greedy pairing of vertical photos into combined slides
pub mod pairing;
/// Route individuals and whole-population operations
pub mod population;
/// Transition scoring between neighbouring slides
pub mod scoring;
/// Elitist roulette-wheel selection over ranked routes
pub mod selection;
