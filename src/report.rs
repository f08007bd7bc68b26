//! Console presentation of a search.

use std::fmt::Write;

use crate::coord::AdjacencyMode;
use crate::grid::Grid;
use crate::solver::ResultSet;

const RULE: &str = "***************************************";

/// Banner line announcing the adjacency mode.
#[must_use]
pub fn mode_banner(mode: AdjacencyMode) -> &'static str {
    if mode.is_diagonal() {
        "---- Diagonal search is ON --------"
    } else {
        "---- Diagonal search is OFF -------"
    }
}

/// Render the grid echo, mode banner, word count and sorted word list.
///
/// `words` is a [`ResultSet`], which already iterates in lexicographic order.
#[must_use]
pub fn render(grid: &Grid, mode: AdjacencyMode, words: &ResultSet) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "{RULE}\n");
    let _ = writeln!(out, " The Input Grid");
    let _ = writeln!(out, "{grid}\n");
    let _ = writeln!(out, "{}\n", mode_banner(mode));
    let _ = writeln!(out, "Found {} words\n", words.len());
    for word in words {
        let _ = writeln!(out, "{word}");
    }
    let _ = writeln!(out, "\n{RULE}");
    out
}
