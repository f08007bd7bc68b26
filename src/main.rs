use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;

use gridword::config::PuzzleConfig;
use gridword::coord::AdjacencyMode;
use gridword::dictionary::Dictionary;
use gridword::errors::GridWordError;
use gridword::grid::{Grid, WordGrid};
use gridword::report;
use gridword::solver::{self, SearchStatus};

/// Find dictionary words hidden in a letter grid as paths that visit every cell once
///
/// Sample run: `gridword --config data/config.json`
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
struct Cli {
    /// JSON config naming `Dictionary`, `Input_Matrix` and `Algorithm_Version`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid file: comma-separated letters, one row per line (overrides the config)
    #[arg(short, long)]
    grid: Option<PathBuf>,

    /// Dictionary file: one word per line (overrides the config)
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Allow diagonal steps between letters (overrides the config)
    #[arg(long)]
    diagonal: bool,

    /// Stop searching after this many seconds; results may then be incomplete
    #[arg(short = 't', long)]
    time_budget: Option<u64>,
}

/// Inputs after merging the config file with command-line overrides.
struct Inputs {
    grid: PathBuf,
    dictionary: PathBuf,
    mode: AdjacencyMode,
}

impl Cli {
    fn resolve_inputs(&self) -> Result<Inputs, GridWordError> {
        let config = self.config.as_deref().map(PuzzleConfig::load_from_path).transpose()?;

        let grid = self
            .grid
            .clone()
            .or_else(|| config.as_ref().map(|c| c.grid.clone()))
            .ok_or(GridWordError::MissingInput { what: "grid" })?;
        let dictionary = self
            .dictionary
            .clone()
            .or_else(|| config.as_ref().map(|c| c.dictionary.clone()))
            .ok_or(GridWordError::MissingInput { what: "dictionary" })?;

        let mode = if self.diagonal {
            AdjacencyMode::OrthogonalPlusDiagonal
        } else {
            config.map_or(AdjacencyMode::Orthogonal, |c| c.mode)
        };

        Ok(Inputs { grid, dictionary, mode })
    }
}

/// Entry point of the gridword CLI.
///
/// Delegates to [`try_main`], printing any error with its code and help
/// text before exiting with code 1.
fn main() -> ExitCode {
    gridword::log::init_logger(gridword::log::debug_requested());

    if let Err(e) = try_main() {
        eprintln!("Error: {}", e.display_detailed());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Steps:
/// 1. Parse CLI arguments and merge them with the optional config file.
/// 2. Load the dictionary and the grid.
/// 3. Search for full-coverage words.
/// 4. Print the report on stdout and timings on stderr.
fn try_main() -> Result<(), GridWordError> {
    let cli = Cli::parse();
    let inputs = cli.resolve_inputs()?;

    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&inputs.dictionary)?;
    let grid = Grid::load_from_path(&inputs.grid)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let word_grid = WordGrid::new(grid, inputs.mode);

    let t_search = Instant::now();
    let result = solver::search_with_budget(&word_grid, &dictionary, cli.time_budget.map(Duration::from_secs));
    let search_secs = t_search.elapsed().as_secs_f64();

    print!("{}", report::render(word_grid.grid(), word_grid.mode(), &result.words));

    if let SearchStatus::TimedOut { elapsed } = result.status {
        eprintln!("⚠️  Timed out after {:.1}s; some words may not have been found", elapsed.as_secs_f64());
    }
    eprintln!(
        "Loaded {} words in {:.3}s; searched {} paths in {:.3}s ({} words).",
        dictionary.len(),
        load_secs,
        result.stats.nodes_visited,
        search_secs,
        result.len()
    );

    Ok(())
}
