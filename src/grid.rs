//! Letter grid parsing and the neighbor table derived from it.
//!
//! A [`Grid`] is the immutable row-major letter matrix. A [`WordGrid`] pairs
//! it with an [`AdjacencyMode`] and the neighbor table that mode implies; the
//! table is rebuilt whenever the mode changes, so it can never go stale.

use std::fmt;
use std::path::Path;

use log::{debug, info};

use crate::coord::{AdjacencyMode, Coord};
use crate::errors::{GridParseError, GridWordError};

/// Separator between cells on a row.
pub const CELL_DELIMITER: char = ',';

/// Rectangular matrix of uppercase cells.
///
/// Invariant: `cells.len() == rows * cols`, and exactly the coordinates in
/// `{0..rows} × {0..cols}` resolve through [`Grid::get`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<String>,
}

impl Grid {
    /// Build a grid from row-major rows of single-character cells.
    ///
    /// # Errors
    ///
    /// Returns a [`GridParseError`] when there are no rows, a row is empty,
    /// rows differ in length, or a cell is not exactly one character.
    pub fn from_rows<R, S>(rows: &[R]) -> Result<Grid, GridParseError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let Some(first) = rows.first() else {
            return Err(GridParseError::EmptyGrid);
        };
        let cols = first.as_ref().len();

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.is_empty() {
                return Err(GridParseError::EmptyRow { row: r });
            }
            if row.len() != cols {
                return Err(GridParseError::RaggedRow { row: r, expected: cols, found: row.len() });
            }
            for (c, raw) in row.iter().enumerate() {
                let cell = raw.as_ref().trim();
                if cell.chars().count() != 1 {
                    return Err(GridParseError::InvalidCell { row: r, col: c, cell: cell.to_string() });
                }
                cells.push(cell.to_uppercase());
            }
        }

        debug_assert_eq!(cells.len(), rows.len() * cols);
        Ok(Grid { rows: rows.len(), cols, cells })
    }

    /// Parse comma-delimited text with one row per line.
    ///
    /// Trailing blank lines are ignored; a blank line between rows is an
    /// [`GridParseError::EmptyRow`].
    ///
    /// # Errors
    ///
    /// See [`Grid::from_rows`].
    pub fn parse_from_str(contents: &str) -> Result<Grid, GridParseError> {
        let rows: Vec<Vec<&str>> = contents
            .trim_end()
            .lines()
            .map(|line| {
                let line = line.trim();
                if line.is_empty() {
                    Vec::new()
                } else {
                    line.split(CELL_DELIMITER).collect()
                }
            })
            .collect();

        // `"".lines()` yields nothing, so a blank file lands in EmptyGrid
        Self::from_rows::<_, &str>(&rows)
    }

    /// Read and parse a grid file.
    ///
    /// # Errors
    ///
    /// [`GridWordError::GridLoad`] if the file is unreadable,
    /// [`GridWordError::GridParse`] if its contents are malformed.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Grid, GridWordError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| GridWordError::GridLoad {
            path: path_ref.display().to_string(),
            source,
        })?;
        let grid = Self::parse_from_str(&data)?;
        info!("Loaded {}x{} grid from {}", grid.rows, grid.cols, path_ref.display());
        Ok(grid)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells; the length of a full-coverage path.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&str> {
        self.index_of(coord).map(|i| self.cells[i].as_str())
    }

    /// Row-major index of `coord`, or `None` when it is outside the grid.
    #[must_use]
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| coord.row * self.cols + coord.col)
    }

    #[must_use]
    pub fn coord_of(&self, index: usize) -> Coord {
        debug_assert!(index < self.cells.len(), "cell index {index} out of bounds");
        Coord::new(index / self.cols, index % self.cols)
    }

    /// Every coordinate, in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cells.len()).map(|i| self.coord_of(i))
    }

    /// Iterate rows as slices of cells.
    pub fn row_cells(&self) -> impl Iterator<Item = &[String]> {
        self.cells.chunks(self.cols)
    }

    /// Concatenate the cells along `path`.
    #[must_use]
    pub fn path_to_word(&self, path: &[Coord]) -> String {
        path.iter().filter_map(|&c| self.get(c)).collect()
    }

    pub(crate) fn cell_at(&self, index: usize) -> &str {
        &self.cells[index]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.row_cells().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

/// A grid plus the neighbor table for its current adjacency mode.
#[derive(Debug, Clone)]
pub struct WordGrid {
    grid: Grid,
    mode: AdjacencyMode,
    /// Neighbor cell indices per cell index, in exploration order.
    neighbors: Vec<Vec<usize>>,
}

impl WordGrid {
    #[must_use]
    pub fn new(grid: Grid, mode: AdjacencyMode) -> Self {
        let mut word_grid = WordGrid { grid, mode, neighbors: Vec::new() };
        word_grid.neighbors = word_grid.valid_neighbors();
        word_grid
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn mode(&self) -> AdjacencyMode {
        self.mode
    }

    /// Switch adjacency mode and rebuild the neighbor table.
    pub fn set_adjacency_mode(&mut self, mode: AdjacencyMode) {
        if mode != self.mode {
            debug!("Switching adjacency mode from {} to {}", self.mode, mode);
        }
        self.mode = mode;
        self.neighbors = self.valid_neighbors();
    }

    /// Convenience wrapper over [`WordGrid::set_adjacency_mode`].
    pub fn enable_diagonal_search(&mut self, enabled: bool) {
        self.set_adjacency_mode(AdjacencyMode::from_diagonal(enabled));
    }

    /// Candidate neighbors of `coord` under the active mode.
    ///
    /// Steps off the top or left edge are dropped here; steps off the bottom
    /// or right edge are still returned and removed by [`WordGrid::valid_neighbors`].
    #[must_use]
    pub fn find_neighbors(&self, coord: Coord) -> Vec<Coord> {
        self.mode
            .steps()
            .iter()
            .filter_map(|&step| coord.offset(step))
            .collect()
    }

    /// Build the neighbor table: candidates filtered to coordinates in the grid.
    #[must_use]
    pub fn valid_neighbors(&self) -> Vec<Vec<usize>> {
        self.grid
            .coords()
            .map(|coord| {
                self.find_neighbors(coord)
                    .into_iter()
                    .filter_map(|n| self.grid.index_of(n))
                    .collect()
            })
            .collect()
    }

    /// In-grid neighbors of `coord`, or an empty list if `coord` is outside.
    #[must_use]
    pub fn neighbors_of(&self, coord: Coord) -> Vec<Coord> {
        self.grid
            .index_of(coord)
            .map(|i| self.neighbors[i].iter().map(|&n| self.grid.coord_of(n)).collect())
            .unwrap_or_default()
    }

    pub(crate) fn neighbor_indices(&self, index: usize) -> &[usize] {
        &self.neighbors[index]
    }
}
