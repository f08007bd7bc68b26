//! The path search engine: find dictionary words that cover the whole grid.
//!
//! # Algorithm
//!
//! From every cell (row-major order) we run a depth-first walk:
//!
//! 1. The current path spells a word by concatenating its cells.
//! 2. If that word is in the dictionary, the path is a discovered path.
//! 3. If the word is not a stem (a proper prefix of some dictionary word), the
//!    branch stops. This check is independent of step 2: a word that is also
//!    a prefix of a longer word is both recorded and extended.
//! 4. Otherwise every neighbor not already on the path is tried in turn.
//!
//! Only discovered paths whose length equals the number of cells are kept,
//! i.e. paths that visit every cell exactly once.
//!
//! The walk mutates one shared path buffer (push on enter, pop on leave) with
//! a `visited` flag per cell, which is equivalent to copying the path on every
//! extension but allocates nothing per step.
//!
//! # Examples
//!
//! ```
//! use gridword::coord::AdjacencyMode;
//! use gridword::dictionary::Dictionary;
//! use gridword::grid::{Grid, WordGrid};
//! use gridword::solver;
//!
//! let grid = Grid::parse_from_str("A,M\nG,E")?;
//! let word_grid = WordGrid::new(grid, AdjacencyMode::Orthogonal);
//! let dictionary = Dictionary::parse_from_str("game\ngem");
//!
//! let result = solver::search(&word_grid, &dictionary);
//! assert_eq!(result.words.into_iter().collect::<Vec<_>>(), vec!["GAME"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::BTreeSet;
use std::ops::ControlFlow;
use std::time::Duration;

use instant::Instant;
use log::{debug, warn};

use crate::coord::Coord;
use crate::dictionary::Dictionary;
use crate::grid::WordGrid;

/// How many nodes to visit between wall-clock checks.
const BUDGET_CHECK_INTERVAL: usize = 1 << 10;

/// Deduplicated, lexicographically ordered full-coverage words.
pub type ResultSet = BTreeSet<String>;

/// Status of the search run.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchStatus {
    /// Every starting cell was explored to exhaustion.
    Exhausted,

    /// Search stopped because the time budget expired. Results may be incomplete.
    TimedOut { elapsed: Duration },
}

/// Counters gathered during the walk, reported at debug level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Paths entered (including single-cell starts).
    pub nodes_visited: usize,
    /// Paths of any length whose letters formed a dictionary word.
    pub words_matched: usize,
    /// Paths abandoned because their letters were not a stem.
    pub pruned: usize,
}

/// Outcome of [`search`].
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The full-coverage words.
    pub words: ResultSet,
    /// Every full-coverage path that spelled a word, in discovery order.
    /// Several paths may spell the same word.
    pub paths: Vec<Vec<Coord>>,
    pub status: SearchStatus,
    pub stats: SearchStats,
}

impl SearchResult {
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == SearchStatus::Exhausted
    }
}

/// Simple helper to enforce a wall-clock time limit.
struct TimeBudget {
    start: Instant,   // when the budget began
    limit: Duration,  // maximum allowed elapsed time
}

impl TimeBudget {
    fn new(limit: Duration) -> Self {
        Self { start: Instant::now(), limit }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn expired(&self) -> bool {
        self.start.elapsed() >= self.limit
    }
}

macro_rules! timed_stop {
    ($budget:expr, $nodes:expr) => {
        if $nodes % BUDGET_CHECK_INTERVAL == 0 && $budget.is_some_and(TimeBudget::expired) {
            return ControlFlow::Break(());
        }
    };
}

/// Read-only inputs shared by every recursive call.
struct SearchCtx<'a> {
    word_grid: &'a WordGrid,
    dictionary: &'a Dictionary,
    target_len: usize,
    budget: Option<&'a TimeBudget>,
}

/// The path under construction, with enough bookkeeping to undo a step.
struct PathState {
    path: Vec<usize>,
    visited: Vec<bool>,
    word: String,
    /// `word.len()` before each cell was appended.
    word_marks: Vec<usize>,
}

impl PathState {
    fn new(cell_count: usize) -> Self {
        PathState {
            path: Vec::with_capacity(cell_count),
            visited: vec![false; cell_count],
            word: String::new(),
            word_marks: Vec::with_capacity(cell_count),
        }
    }

    fn push(&mut self, index: usize, cell: &str) {
        debug_assert!(!self.visited[index], "cell {index} already on the path");
        self.visited[index] = true;
        self.path.push(index);
        self.word_marks.push(self.word.len());
        self.word.push_str(cell);
    }

    fn pop(&mut self) {
        if let (Some(index), Some(mark)) = (self.path.pop(), self.word_marks.pop()) {
            self.visited[index] = false;
            self.word.truncate(mark);
        }
    }
}

/// Find every dictionary word spelled by a path that visits each cell once.
#[must_use]
pub fn search(word_grid: &WordGrid, dictionary: &Dictionary) -> SearchResult {
    search_with_budget(word_grid, dictionary, None)
}

/// Like [`search`], but stop once `time_budget` has elapsed.
///
/// When the budget runs out the result carries [`SearchStatus::TimedOut`] and
/// holds only what was found before that point.
#[must_use]
pub fn search_with_budget(
    word_grid: &WordGrid,
    dictionary: &Dictionary,
    time_budget: Option<Duration>,
) -> SearchResult {
    let budget = time_budget.map(TimeBudget::new);
    let grid = word_grid.grid();
    let ctx = SearchCtx {
        word_grid,
        dictionary,
        target_len: grid.cell_count(),
        budget: budget.as_ref(),
    };

    let mut result = SearchResult {
        words: ResultSet::new(),
        paths: Vec::new(),
        status: SearchStatus::Exhausted,
        stats: SearchStats::default(),
    };
    let mut state = PathState::new(grid.cell_count());

    for start in 0..grid.cell_count() {
        if extend(&ctx, &mut state, start, &mut result).is_break() {
            let elapsed = budget.as_ref().map_or(Duration::ZERO, TimeBudget::elapsed);
            warn!(
                "Search timed out after {:.1}s at start cell {}; results are incomplete",
                elapsed.as_secs_f64(),
                grid.coord_of(start)
            );
            result.status = SearchStatus::TimedOut { elapsed };
            break;
        }
        debug_assert!(state.path.is_empty(), "path buffer must be empty between starts");
    }

    debug!(
        "Search ({}) visited {} paths, matched {} words, pruned {}; {} full-coverage paths",
        word_grid.mode(),
        result.stats.nodes_visited,
        result.stats.words_matched,
        result.stats.pruned,
        result.paths.len()
    );

    result
}

/// Step onto `index`, explore from there, and step back off.
fn extend(ctx: &SearchCtx, state: &mut PathState, index: usize, out: &mut SearchResult) -> ControlFlow<()> {
    out.stats.nodes_visited += 1;
    timed_stop!(ctx.budget, out.stats.nodes_visited);

    state.push(index, ctx.word_grid.grid().cell_at(index));
    let flow = explore(ctx, state, out);
    state.pop();
    flow
}

fn explore(ctx: &SearchCtx, state: &mut PathState, out: &mut SearchResult) -> ControlFlow<()> {
    if ctx.dictionary.contains_word(&state.word) {
        out.stats.words_matched += 1;
        if state.path.len() == ctx.target_len {
            let grid = ctx.word_grid.grid();
            out.paths.push(state.path.iter().map(|&i| grid.coord_of(i)).collect());
            out.words.insert(state.word.clone());
        }
    }

    if !ctx.dictionary.contains_stem(&state.word) {
        out.stats.pruned += 1;
        return ControlFlow::Continue(());
    }

    let Some(&last) = state.path.last() else {
        return ControlFlow::Continue(());
    };
    for &next in ctx.word_grid.neighbor_indices(last) {
        if !state.visited[next] && extend(ctx, state, next, out).is_break() {
            return ControlFlow::Break(());
        }
    }

    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::AdjacencyMode;
    use crate::grid::Grid;

    fn word_grid(text: &str, mode: AdjacencyMode) -> WordGrid {
        WordGrid::new(Grid::parse_from_str(text).unwrap(), mode)
    }

    fn words(result: &SearchResult) -> Vec<&str> {
        result.words.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_game_orthogonal() {
        let wg = word_grid("A,M\nG,E", AdjacencyMode::Orthogonal);
        let result = search(&wg, &Dictionary::parse_from_str("game\namge\nam"));

        // AMGE needs the diagonal M->G step
        assert_eq!(words(&result), vec!["GAME"]);
        assert_eq!(result.paths, vec![vec![
            Coord::new(1, 0),
            Coord::new(0, 0),
            Coord::new(0, 1),
            Coord::new(1, 1),
        ]]);
        assert!(result.is_complete());
    }

    #[test]
    fn test_herz_needs_diagonal() {
        let dictionary = Dictionary::parse_from_str("herz");
        let mut wg = word_grid("H,R\nZ,E", AdjacencyMode::Orthogonal);
        assert!(search(&wg, &dictionary).is_empty());

        wg.enable_diagonal_search(true);
        let result = search(&wg, &dictionary);
        assert_eq!(words(&result), vec!["HERZ"]);
    }

    #[test]
    fn test_short_words_are_not_results() {
        let wg = word_grid("A,B\nC,D", AdjacencyMode::OrthogonalPlusDiagonal);
        let result = search(&wg, &Dictionary::parse_from_str("ab"));

        assert!(result.is_empty());
        assert!(result.paths.is_empty());
        assert_eq!(result.stats.words_matched, 1);
    }

    #[test]
    fn test_word_and_stem_are_both_followed() {
        // "GAM" is a word and a stem of "GAME"
        let wg = word_grid("A,M\nG,E", AdjacencyMode::Orthogonal);
        let result = search(&wg, &Dictionary::parse_from_str("gam\ngame"));

        assert_eq!(words(&result), vec!["GAME"]);
        assert_eq!(result.stats.words_matched, 2);
    }

    #[test]
    fn test_duplicate_words_from_different_paths_collapse() {
        // Both rows read "AA"; AAAA is spelled by many paths
        let wg = word_grid("A,A\nA,A", AdjacencyMode::Orthogonal);
        let result = search(&wg, &Dictionary::parse_from_str("aaaa"));

        assert_eq!(words(&result), vec!["AAAA"]);
        assert_eq!(result.paths.len(), 8);
    }

    #[test]
    fn test_single_cell_grid() {
        let wg = word_grid("i", AdjacencyMode::Orthogonal);
        let result = search(&wg, &Dictionary::parse_from_str("I\nit"));

        assert_eq!(words(&result), vec!["I"]);
        assert_eq!(result.paths, vec![vec![Coord::new(0, 0)]]);
    }

    #[test]
    fn test_empty_dictionary() {
        let wg = word_grid("A,M\nG,E", AdjacencyMode::OrthogonalPlusDiagonal);
        let result = search(&wg, &Dictionary::default());

        assert!(result.is_empty());
        // every start is visited once, then pruned
        assert_eq!(result.stats.nodes_visited, 4);
        assert_eq!(result.stats.pruned, 4);
    }

    #[test]
    fn test_zero_budget_times_out() {
        let wg = word_grid("A,M\nG,E", AdjacencyMode::Orthogonal);
        let dictionary = Dictionary::parse_from_str("game");

        // The first check happens on node BUDGET_CHECK_INTERVAL, which this
        // tiny search never reaches, so even a zero budget completes.
        let result = search_with_budget(&wg, &dictionary, Some(Duration::ZERO));
        assert!(result.is_complete());
        assert_eq!(words(&result), vec!["GAME"]);
    }

    #[test]
    fn test_budget_stops_large_search() {
        // 5x5 of one letter with a word of every length: nothing is pruned
        let text = vec!["E,E,E,E,E"; 5].join("\n");
        let wg = word_grid(&text, AdjacencyMode::OrthogonalPlusDiagonal);
        let dictionary = Dictionary::from_words(["E".repeat(25)]);

        let result = search_with_budget(&wg, &dictionary, Some(Duration::ZERO));
        assert!(matches!(result.status, SearchStatus::TimedOut { .. }));
        assert!(!result.is_complete());
        assert!(result.stats.nodes_visited >= BUDGET_CHECK_INTERVAL);
    }
}
