//! Error types for loading puzzles, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Grid parsing problems (`GridParseError`):
//!
//! - G001: `EmptyGrid` (Grid source has no rows)
//! - G002: `EmptyRow` (A row has no cells)
//! - G003: `RaggedRow` (Rows differ in length)
//! - G004: `InvalidCell` (A cell is not exactly one character)
//!
//! Command-level failures (`GridWordError`):
//!
//! - E001: `DictionaryLoad` (Dictionary file unreadable)
//! - E002: `GridLoad` (Grid file unreadable)
//! - E003: `GridParse` (Malformed grid (wraps [`GridParseError`]))
//! - E004: `ConfigLoad` (Config file unreadable)
//! - E005: `ConfigParse` (Config file is not valid JSON for the expected shape)
//! - E006: `UnknownAlgorithmVersion` (Config names an unsupported search mode)
//! - E007: `MissingArgument` (Required positional argument absent)
//! - E008: `MissingInput` (No grid or dictionary path was given)
//!
//! # Examples
//!
//! ```
//! use gridword::errors::{GridParseError, GridWordError};
//!
//! let err = GridWordError::from(GridParseError::RaggedRow { row: 1, expected: 2, found: 3 });
//! assert_eq!(err.code(), "E003");
//! assert!(err.display_detailed().contains("G003"));
//! ```

use std::io;

/// Ways a comma-delimited grid can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridParseError {
    #[error("grid has no rows")]
    EmptyGrid,

    #[error("row {row} is empty")]
    EmptyRow { row: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("cell ({row}, {col}) is \"{cell}\", expected exactly one character")]
    InvalidCell { row: usize, col: usize, cell: String },
}

impl GridParseError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GridParseError::EmptyGrid => "G001",
            GridParseError::EmptyRow { .. } => "G002",
            GridParseError::RaggedRow { .. } => "G003",
            GridParseError::InvalidCell { .. } => "G004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GridParseError::EmptyGrid => "Grid source has no rows",
            GridParseError::EmptyRow { .. } => "A row has no cells",
            GridParseError::RaggedRow { .. } => "Rows differ in length",
            GridParseError::InvalidCell { .. } => "A cell is not exactly one character",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            GridParseError::EmptyGrid => "The grid file was empty or contained only blank lines.",
            GridParseError::EmptyRow { .. } => "A blank line appeared between rows. Every row must contain at least one cell.",
            GridParseError::RaggedRow { .. } => "Every row must have the same number of comma-separated cells as the first row.",
            GridParseError::InvalidCell { .. } => "After trimming whitespace each cell must hold a single character.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GridParseError::EmptyGrid => Some("Write one row per line, e.g. 'A,M' then 'G,E'"),
            GridParseError::EmptyRow { .. } => Some("Remove the blank line between rows"),
            GridParseError::RaggedRow { .. } => Some("Pad or trim the row so the grid is rectangular"),
            GridParseError::InvalidCell { .. } => Some("Separate every letter with a comma, e.g. 'H,R' not 'HR'"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Unified error type for the gridword command-line tools.
#[derive(Debug, thiserror::Error)]
pub enum GridWordError {
    #[error("failed to read dictionary from '{path}': {source}")]
    DictionaryLoad {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read grid from '{path}': {source}")]
    GridLoad {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed grid: {0}")]
    GridParse(#[from] GridParseError),

    #[error("failed to read config from '{path}': {source}")]
    ConfigLoad {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown Algorithm_Version {version} (expected 1 or 2)")]
    UnknownAlgorithmVersion { version: u64 },

    #[error("missing required argument <{name}>")]
    MissingArgument { name: &'static str },

    #[error("no {what} file given")]
    MissingInput { what: &'static str },
}

impl GridWordError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GridWordError::DictionaryLoad { .. } => "E001",
            GridWordError::GridLoad { .. } => "E002",
            GridWordError::GridParse(_) => "E003",
            GridWordError::ConfigLoad { .. } => "E004",
            GridWordError::ConfigParse { .. } => "E005",
            GridWordError::UnknownAlgorithmVersion { .. } => "E006",
            GridWordError::MissingArgument { .. } => "E007",
            GridWordError::MissingInput { .. } => "E008",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GridWordError::DictionaryLoad { .. } => "Dictionary file unreadable",
            GridWordError::GridLoad { .. } => "Grid file unreadable",
            GridWordError::GridParse(_) => "Malformed grid",
            GridWordError::ConfigLoad { .. } => "Config file unreadable",
            GridWordError::ConfigParse { .. } => "Config file has the wrong shape",
            GridWordError::UnknownAlgorithmVersion { .. } => "Unsupported search mode in config",
            GridWordError::MissingArgument { .. } => "Required argument absent",
            GridWordError::MissingInput { .. } => "No grid or dictionary path given",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            GridWordError::DictionaryLoad { .. } => "The word list could not be opened or was not valid UTF-8.",
            GridWordError::GridLoad { .. } => "The grid file could not be opened or was not valid UTF-8.",
            GridWordError::GridParse(_) => "The grid file was read but its contents are not a rectangular comma-delimited grid. This wraps a GridParseError (see the G-codes for specifics).",
            GridWordError::ConfigLoad { .. } => "The JSON configuration file could not be opened.",
            GridWordError::ConfigParse { .. } => "The configuration must be a JSON object with string fields `Dictionary` and `Input_Matrix` and an optional integer `Algorithm_Version`.",
            GridWordError::UnknownAlgorithmVersion { .. } => "`Algorithm_Version` selects the navigation variant: 1 is horizontal and vertical, 2 adds diagonals.",
            GridWordError::MissingArgument { .. } => "The command expects a positional argument and none was supplied.",
            GridWordError::MissingInput { .. } => "Neither a command-line flag nor a config file named the required input file.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GridWordError::DictionaryLoad { .. } => Some("Check the path passed with --dictionary or the config's `Dictionary` field"),
            GridWordError::GridLoad { .. } => Some("Check the path passed with --grid or the config's `Input_Matrix` field"),
            GridWordError::ConfigParse { .. } => Some("Example: {\"Dictionary\": \"words.txt\", \"Input_Matrix\": \"WordPuzzle.txt\", \"Algorithm_Version\": 2}"),
            GridWordError::UnknownAlgorithmVersion { .. } => Some("Use 1 for orthogonal search or 2 to include diagonals"),
            GridWordError::MissingArgument { .. } => Some("Example: first_unique \"EntwicklerHeld\""),
            GridWordError::MissingInput { .. } => Some("Pass --grid and --dictionary, or --config pointing at a JSON file"),
            GridWordError::GridParse(_) | GridWordError::ConfigLoad { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            GridWordError::GridParse(pe) => {
                // delegate to GridParseError's detailed display
                format!("{}\n  caused by: {}", self.code(), pe.display_detailed())
            }
            _ => format_error_with_code_and_help(&self.to_string(), self.code(), self.help()),
        }
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
