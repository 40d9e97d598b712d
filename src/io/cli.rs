//! Command-line interface for batch slideshow assembly

use crate::algorithm::graph::CostGraph;
use crate::algorithm::greedy::nearest_neighbour_route;
use crate::algorithm::optimizer::{GaConfig, GeneticOptimizer};
use crate::algorithm::pairing::pair_photos;
use crate::io::configuration::{
    DEFAULT_ELITE_SIZE, DEFAULT_GENERATIONS, DEFAULT_MUTATION_RATE, DEFAULT_POPULATION_SIZE,
    DEFAULT_SEED, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, SlideshowError, invalid_parameter};
use crate::io::input::parse_dataset;
use crate::io::output::{slideshow_score, write_slideshow};
use crate::io::progress::ProgressManager;
use crate::model::photo::Photo;
use crate::model::slide::Slide;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Sequencing strategy for ordering the final slide set
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Evolve orderings with the genetic optimizer
    Genetic,
    /// Single deterministic nearest-neighbour pass
    Greedy,
}

#[derive(Parser)]
#[command(name = "slidereel")]
#[command(
    author,
    version,
    about = "Assemble tagged photos into a high-scoring slideshow"
)]
/// Command-line arguments for the slideshow assembler
pub struct Cli {
    /// Input dataset file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible searches
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of generations to evolve
    #[arg(short, long, default_value_t = DEFAULT_GENERATIONS)]
    pub generations: usize,

    /// Individuals per generation
    #[arg(short, long, default_value_t = DEFAULT_POPULATION_SIZE)]
    pub population_size: usize,

    /// Ranked entries carried unmodified into each mating pool
    #[arg(short, long, default_value_t = DEFAULT_ELITE_SIZE)]
    pub elite_size: usize,

    /// Per-gene swap probability
    #[arg(short, long, default_value_t = DEFAULT_MUTATION_RATE)]
    pub mutation_rate: f64,

    /// Ordering strategy
    #[arg(long, value_enum, default_value_t = Strategy::Genetic)]
    pub strategy: Strategy,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process datasets even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Genetic search parameters from the parsed flags
    pub const fn ga_config(&self) -> GaConfig {
        GaConfig {
            population_size: self.population_size,
            elite_size: self.elite_size,
            mutation_rate: self.mutation_rate,
            generations: self.generations,
        }
    }
}

/// Orchestrates batch processing of datasets with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process datasets according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or dataset processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if Self::is_dataset(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a .txt dataset",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if Self::is_dataset(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be a .txt dataset or directory",
            ))
        }
    }

    /// A dataset is any .txt file that is not itself a slideshow output
    fn is_dataset(path: &Path) -> bool {
        if path.extension().and_then(|s| s.to_str()) != Some("txt") {
            return false;
        }
        path.file_stem()
            .and_then(|s| s.to_str())
            .is_none_or(|stem| !stem.ends_with(OUTPUT_SUFFIX))
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    // Allow print for per-dataset summary lines
    #[allow(clippy::print_stderr)]
    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let start_time = Instant::now();
        let output_path = Self::get_output_path(input_path);

        let raw = std::fs::read_to_string(input_path).map_err(|source| {
            SlideshowError::DatasetLoad {
                path: input_path.to_path_buf(),
                source,
            }
        })?;
        let photos = parse_dataset(&raw)?;
        let slides = Self::assemble_slides(&photos)?;

        if slides.is_empty() {
            if !self.cli.quiet {
                eprintln!("Skipping: {} (no slides)", input_path.display());
            }
            return Ok(());
        }

        let graph = CostGraph::build(slides);
        let route = match self.cli.strategy {
            Strategy::Greedy => nearest_neighbour_route(&graph),
            Strategy::Genetic => self.run_optimizer(&graph, input_path)?,
        };

        write_slideshow(&output_path, &graph, &route)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_dataset();
        }

        if !self.cli.quiet {
            eprintln!(
                "{}: {} slides, score {}, {:.2?}",
                input_path.display(),
                route.len(),
                slideshow_score(&graph, &route),
                start_time.elapsed()
            );
        }

        Ok(())
    }

    fn run_optimizer(&mut self, graph: &CostGraph, input_path: &Path) -> Result<Vec<usize>> {
        let config = self.cli.ga_config();
        let mut optimizer = GeneticOptimizer::new(graph, config, self.cli.seed)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_dataset(input_path, config.generations);
        }

        for generation in 1..=config.generations {
            optimizer.advance_generation(graph);
            if let Some(ref pm) = self.progress_manager {
                pm.update_generation(generation);
            }
        }

        Ok(optimizer.best_route(graph))
    }

    /// Build the final slide set and enforce the slide-count contract
    ///
    /// Horizontal photos become slides directly, in input order; vertical
    /// photos are paired greedily and appended. The assembled count must
    /// equal horizontals plus half the verticals.
    fn assemble_slides(photos: &[Photo]) -> Result<Vec<Slide>> {
        let mut slides: Vec<Slide> = photos
            .iter()
            .filter(|photo| !photo.is_vertical())
            .map(Slide::from_horizontal)
            .collect();
        let horizontal_count = slides.len();

        let verticals: Vec<Photo> = photos
            .iter()
            .filter(|photo| photo.is_vertical())
            .cloned()
            .collect();
        let vertical_count = verticals.len();
        if vertical_count > 0 {
            slides.extend(pair_photos(&verticals)?);
        }

        let expected = horizontal_count + vertical_count / 2;
        if slides.len() != expected {
            return Err(SlideshowError::SlideCountMismatch {
                expected,
                actual: slides.len(),
            });
        }
        Ok(slides)
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
