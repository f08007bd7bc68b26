//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Ad-hoc timing of the grid search on a handful of fixed puzzles.
//! - Loads the dictionary once, then runs each case several times and reports the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print the words found:          `cargo run --bin bench_local --release -- -p`
//!
//! NOTES
//! -----
//! - Not statistically rigorous; use the same machine and `--release` to compare.
//! - Cases live in `get_cases()` below.
//! - One warm-up run per case is done (not included in timing).

use clap::Parser;
use std::hint::black_box;
use std::path::PathBuf;
use std::time::Instant;

use gridword::coord::AdjacencyMode;
use gridword::dictionary::Dictionary;
use gridword::errors::GridWordError;
use gridword::grid::{Grid, WordGrid};
use gridword::solver;

/// Simple local benchmark runner: load the dictionary once, time several grids.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the dictionary file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    dictionary: PathBuf,

    /// Number of repeats per case (median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print the words found by the last run of each case
    #[arg(short = 'p', long = "print")]
    print_words: bool,
}

/// A benchmark case: a grid in file format plus the adjacency mode.
#[derive(Clone)]
struct Case {
    name: &'static str,
    grid: &'static str,
    mode: AdjacencyMode,
}

fn get_cases() -> Vec<Case> {
    vec![
        Case { name: "2x2 orthogonal", grid: "A,M\nG,E", mode: AdjacencyMode::Orthogonal },
        Case { name: "2x2 diagonal", grid: "H,R\nZ,E", mode: AdjacencyMode::OrthogonalPlusDiagonal },
        Case { name: "3x3 orthogonal", grid: "S,T,R\nE,A,E\nN,G,T", mode: AdjacencyMode::Orthogonal },
        Case { name: "3x3 diagonal", grid: "S,T,R\nE,A,E\nN,G,T", mode: AdjacencyMode::OrthogonalPlusDiagonal },
        Case { name: "4x4 diagonal", grid: "S,E,R,S\nP,A,T,L\nI,N,E,S\nC,O,R,D", mode: AdjacencyMode::OrthogonalPlusDiagonal },
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() -> Result<(), GridWordError> {
    /// (case name, median seconds, paths visited, words found)
    type SummaryRow = (&'static str, f64, usize, usize);

    let cli = Cli::parse();

    eprintln!("Loading dictionary from: {}", cli.dictionary.display());
    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dictionary)?;
    eprintln!("Loaded {} words in {:.3}s", dictionary.len(), t_load.elapsed().as_secs_f64());

    let cases = get_cases();
    let mut summary: Vec<SummaryRow> = Vec::with_capacity(cases.len());

    for (idx, case) in cases.iter().enumerate() {
        eprintln!("\n[{:02}] {}", idx + 1, case.name);
        let word_grid = WordGrid::new(Grid::parse_from_str(case.grid)?, case.mode);

        // warm-up, not timed
        let _warmup = solver::search(&word_grid, &dictionary);

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last = None;
        for rep in 0..cli.num_repeats {
            let t_search = Instant::now();
            let result = solver::search(black_box(&word_grid), &dictionary);
            let secs = t_search.elapsed().as_secs_f64();

            eprintln!(
                "  run {:>2}/{:>2}: {:.3}s ({} paths, {} words)",
                rep + 1,
                cli.num_repeats,
                secs,
                result.stats.nodes_visited,
                result.len()
            );
            times.push(secs);
            last = Some(result);
        }

        let med = median(times);
        let (visited, found) = last
            .as_ref()
            .map_or((0, 0), |r| (r.stats.nodes_visited, r.len()));

        if cli.print_words {
            if let Some(result) = &last {
                for word in &result.words {
                    println!("{word}");
                }
            }
        }

        eprintln!(
            "  → median {:.3}s over {} run(s); {} {}",
            med,
            cli.num_repeats,
            found,
            pluralizer(found, "word".into(), None)
        );
        summary.push((case.name, med, visited, found));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<16} | {:>10} | {:>12} | {:>7}", "case", "median (s)", "paths", "# words");
    eprintln!("{:-<16}-+-{:-<10}-+-{:-<12}-+-{:-<7}", "", "", "", "");
    for (name, med, visited, found) in &summary {
        eprintln!("{name:<16} | {med:>10.3} | {visited:>12} | {found:>7}");
    }

    Ok(())
}

fn pluralizer(count: usize, singular: String, plural: Option<String>) -> String {
    if count == 1 {
        singular
    } else {
        plural.unwrap_or_else(|| singular + "s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralizer() {
        assert_eq!(pluralizer(0, "word".into(), None), "words");
        assert_eq!(pluralizer(1, "word".into(), None), "word");
        assert_eq!(pluralizer(2, "path".into(), Some("paths".into())), "paths");
    }

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 2.0, 3.0]), 2.5);
    }

    #[test]
    fn test_cases_parse() {
        for case in get_cases() {
            assert!(Grid::parse_from_str(case.grid).is_ok(), "{} does not parse", case.name);
        }
    }
}
