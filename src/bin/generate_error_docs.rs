//! Generate error code documentation from the error enums themselves.
//!
//! Codes, descriptions, details, and help text come straight from the
//! `code()`, `description()`, `details()`, and `help()` methods of
//! `GridWordError` and `GridParseError`.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write;
use std::io;

use gridword::errors::{GridParseError, GridWordError};

/// Append one section per error; works for any type with
/// `code()`, `description()`, `details()`, `help()`, and `display_detailed()`.
macro_rules! write_error_docs {
    ($out:expr, $errors:expr) => {
        for error in $errors {
            let _ = writeln!($out, "### {}: {}\n", error.code(), error.description());
            let _ = writeln!($out, "**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                let _ = writeln!($out, "**How to fix:**\n```\n{help_text}\n```\n");
            }

            let _ = writeln!($out, "**Example error message:**\n```\n{error}\n```\n");
            let _ = writeln!($out, "**Detailed format:**\n```\n{}\n```\n", error.display_detailed());
            let _ = writeln!($out, "---\n");
        }
    };
}

fn sample_io_error() -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, "No such file or directory (os error 2)")
}

/// One instance of every `GridWordError` variant
fn all_command_error_variants() -> Vec<GridWordError> {
    vec![
        GridWordError::DictionaryLoad { path: "words.txt".to_string(), source: sample_io_error() },
        GridWordError::GridLoad { path: "WordPuzzle.txt".to_string(), source: sample_io_error() },
        GridWordError::GridParse(GridParseError::RaggedRow { row: 1, expected: 2, found: 3 }),
        GridWordError::ConfigLoad { path: "config.json".to_string(), source: sample_io_error() },
        GridWordError::ConfigParse {
            path: "config.json".to_string(),
            // create by parsing truncated JSON
            source: serde_json::from_str::<serde_json::Value>("{\"Dictionary\": ")
                .err()
                .unwrap_or_else(|| serde_json::Error::io(sample_io_error())),
        },
        GridWordError::UnknownAlgorithmVersion { version: 3 },
        GridWordError::MissingArgument { name: "STRING" },
        GridWordError::MissingInput { what: "grid" },
    ]
}

/// One instance of every `GridParseError` variant
fn all_grid_error_variants() -> Vec<GridParseError> {
    vec![
        GridParseError::EmptyGrid,
        GridParseError::EmptyRow { row: 1 },
        GridParseError::RaggedRow { row: 1, expected: 2, found: 3 },
        GridParseError::InvalidCell { row: 0, col: 1, cell: "HR".to_string() },
    ]
}

fn render_docs() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Error Code Reference\n");
    let _ = writeln!(out, "**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    let _ = writeln!(out, "## Table of Contents\n");
    let _ = writeln!(out, "- [Command Errors (E001–E008)](#command-errors)");
    let _ = writeln!(out, "- [Grid Errors (G001–G004)](#grid-errors)\n");

    let _ = writeln!(out, "## Command Errors\n");
    let _ = writeln!(out, "Top-level errors from the gridword tools. E003 wraps a grid error.\n");
    write_error_docs!(out, all_command_error_variants());

    let _ = writeln!(out, "## Grid Errors\n");
    let _ = writeln!(out, "Errors that occur when a grid file is read but is not a rectangular comma-delimited matrix.\n");
    write_error_docs!(out, all_grid_error_variants());

    let _ = writeln!(out, "## Error Display Format\n");
    let _ = writeln!(out, "```\nError: <message> (<code>)\n<help text if available>\n```");
    out
}

fn main() {
    print!("{}", render_docs());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_is_documented() {
        let docs = render_docs();
        for err in all_command_error_variants() {
            assert!(docs.contains(&format!("### {}:", err.code())), "missing {}", err.code());
        }
        for err in all_grid_error_variants() {
            assert!(docs.contains(&format!("### {}:", err.code())), "missing {}", err.code());
        }
    }

    #[test]
    fn test_variant_lists_are_complete() {
        assert_eq!(all_command_error_variants().len(), 8);
        assert_eq!(all_grid_error_variants().len(), 4);
    }
}
