/// Command-line interface for batch slideshow assembly
pub mod cli;
/// Solver constants and runtime configuration defaults
pub mod configuration;
/// Error types for dataset handling and the solver pipeline
pub mod error;
/// Dataset parsing for tagged photo collections
pub mod input;
/// Slideshow rendering and submission output
pub mod output;
/// Generation progress reporting for dataset batches
pub mod progress;
