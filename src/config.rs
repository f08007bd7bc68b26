//! JSON run configuration naming the puzzle inputs and search mode.
//!
//! ```json
//! {
//!     "Dictionary": "words.txt",
//!     "Input_Matrix": "WordPuzzle.txt",
//!     "Algorithm_Version": 2
//! }
//! ```
//!
//! `Algorithm_Version` 1 searches horizontally and vertically; 2 adds
//! diagonals. It may be omitted (defaults to 1). Relative paths are resolved
//! against the directory holding the config file.

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::coord::AdjacencyMode;
use crate::errors::GridWordError;

/// Navigation variant without diagonal steps.
pub const ALGORITHM_ORTHOGONAL: u64 = 1;
/// Navigation variant with diagonal steps.
pub const ALGORITHM_DIAGONAL: u64 = 2;

/// Raw on-disk shape.
#[derive(Debug, Clone, Deserialize)]
struct RawConfig {
    #[serde(rename = "Dictionary")]
    dictionary: PathBuf,
    #[serde(rename = "Input_Matrix")]
    input_matrix: PathBuf,
    #[serde(rename = "Algorithm_Version", default = "default_algorithm_version")]
    algorithm_version: u64,
}

fn default_algorithm_version() -> u64 {
    ALGORITHM_ORTHOGONAL
}

/// Resolved configuration: paths ready to open, mode decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleConfig {
    pub dictionary: PathBuf,
    pub grid: PathBuf,
    pub mode: AdjacencyMode,
}

impl PuzzleConfig {
    /// Parse config JSON, resolving relative paths against `base_dir`.
    ///
    /// # Errors
    ///
    /// [`GridWordError::ConfigParse`] for malformed JSON or missing fields,
    /// [`GridWordError::UnknownAlgorithmVersion`] for a version other than 1 or 2.
    pub fn parse_from_str(contents: &str, base_dir: &Path, origin: &str) -> Result<PuzzleConfig, GridWordError> {
        let raw: RawConfig = serde_json::from_str(contents).map_err(|source| GridWordError::ConfigParse {
            path: origin.to_string(),
            source,
        })?;

        let mode = match raw.algorithm_version {
            ALGORITHM_ORTHOGONAL => AdjacencyMode::Orthogonal,
            ALGORITHM_DIAGONAL => AdjacencyMode::OrthogonalPlusDiagonal,
            version => return Err(GridWordError::UnknownAlgorithmVersion { version }),
        };

        Ok(PuzzleConfig {
            dictionary: base_dir.join(raw.dictionary),
            grid: base_dir.join(raw.input_matrix),
            mode,
        })
    }

    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// [`GridWordError::ConfigLoad`] if unreadable, otherwise as
    /// [`PuzzleConfig::parse_from_str`].
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<PuzzleConfig, GridWordError> {
        let path_ref = path.as_ref();
        let origin = path_ref.display().to_string();
        let data = std::fs::read_to_string(path_ref).map_err(|source| GridWordError::ConfigLoad {
            path: origin.clone(),
            source,
        })?;

        let base_dir = path_ref.parent().unwrap_or_else(|| Path::new(""));
        let config = Self::parse_from_str(&data, base_dir, &origin)?;
        debug!("Config {origin}: {config:?}");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let json = r#"{"Dictionary": "words.txt", "Input_Matrix": "WordPuzzle.txt", "Algorithm_Version": 2}"#;
        let config = PuzzleConfig::parse_from_str(json, Path::new("/puzzles"), "inline").unwrap();

        assert_eq!(config.dictionary, PathBuf::from("/puzzles/words.txt"));
        assert_eq!(config.grid, PathBuf::from("/puzzles/WordPuzzle.txt"));
        assert_eq!(config.mode, AdjacencyMode::OrthogonalPlusDiagonal);
    }

    #[test]
    fn test_version_defaults_to_orthogonal() {
        let json = r#"{"Dictionary": "w.txt", "Input_Matrix": "g.txt"}"#;
        let config = PuzzleConfig::parse_from_str(json, Path::new(""), "inline").unwrap();

        assert_eq!(config.mode, AdjacencyMode::Orthogonal);
        assert_eq!(config.grid, PathBuf::from("g.txt"));
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let json = r#"{"Dictionary": "/data/w.txt", "Input_Matrix": "g.txt", "Algorithm_Version": 1}"#;
        let config = PuzzleConfig::parse_from_str(json, Path::new("/cfg"), "inline").unwrap();

        assert_eq!(config.dictionary, PathBuf::from("/data/w.txt"));
    }

    #[test]
    fn test_unknown_version() {
        let json = r#"{"Dictionary": "w.txt", "Input_Matrix": "g.txt", "Algorithm_Version": 3}"#;
        let err = PuzzleConfig::parse_from_str(json, Path::new(""), "inline").unwrap_err();

        assert_eq!(err.code(), "E006");
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let err = PuzzleConfig::parse_from_str(r#"{"Dictionary": "w.txt"}"#, Path::new(""), "cfg.json").unwrap_err();

        assert_eq!(err.code(), "E005");
        assert!(err.to_string().contains("Input_Matrix"));
        assert!(err.to_string().contains("cfg.json"));
    }

    #[test]
    fn test_load_resolves_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"Dictionary": "words.txt", "Input_Matrix": "grid.txt"}"#).unwrap();

        let config = PuzzleConfig::load_from_path(&path).unwrap();

        assert_eq!(config.dictionary, dir.path().join("words.txt"));
        assert_eq!(config.grid, dir.path().join("grid.txt"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = PuzzleConfig::load_from_path("/nonexistent/gridword/config.json").unwrap_err();

        assert_eq!(err.code(), "E004");
    }
}
