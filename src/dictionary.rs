//! `dictionary` — load the word list and derive its prefix stems.
//!
//! The output is a [`Dictionary`] holding two sets of uppercase strings:
//! - `words`: every complete word in the source.
//! - `stems`: every *proper* prefix of every word (lengths `1..len`).
//!
//! A word is only a stem when it is also a strict prefix of some longer
//! entry. The search stops extending a path as soon as its letters are not a
//! stem, so a complete word that prefixes nothing ends its branch right there.
//!
//! The public API provides:
//! - `parse_from_str(...)` — works on in-memory text (used by tests and the bench tool).
//! - `load_from_path(...)` — reads a newline-delimited file from disk.

use std::collections::HashSet;
use std::path::Path;

use log::info;

use crate::errors::GridWordError;

/// Complete words plus the prefixes that can still grow into one.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Uppercase complete words. Example: `{"GAME", "HERZ"}`
    pub words: HashSet<String>,
    /// Uppercase proper prefixes. Example for `GAME`: `{"G", "GA", "GAM"}`
    pub stems: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from any sequence of raw words.
    ///
    /// Each word is trimmed and uppercased; words that are empty after
    /// trimming are skipped.
    pub fn from_words<I, S>(raw_words: I) -> Dictionary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary::default();
        for raw in raw_words {
            dictionary.insert(raw.as_ref());
        }
        dictionary
    }

    /// Parse a newline-delimited word list held in memory.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> Dictionary {
        Self::from_words(contents.lines())
    }

    /// Read a newline-delimited word list from `path` and parse it.
    ///
    /// # Errors
    ///
    /// Returns [`GridWordError::DictionaryLoad`] if the file cannot be read.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Dictionary, GridWordError> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|source| GridWordError::DictionaryLoad {
            path: path_ref.display().to_string(),
            source,
        })?;

        let dictionary = Self::parse_from_str(&data);
        info!(
            "Loaded {} words ({} stems) from {}",
            dictionary.words.len(),
            dictionary.stems.len(),
            path_ref.display()
        );
        Ok(dictionary)
    }

    fn insert(&mut self, raw: &str) {
        let word = raw.trim().to_uppercase();
        if word.is_empty() {
            return;
        }

        // Proper prefixes only: stop one character short of the full word.
        // Slicing on char boundaries keeps this correct for non-ASCII input.
        let boundaries: Vec<usize> = word.char_indices().map(|(i, _)| i).skip(1).collect();
        for end in boundaries {
            self.stems.insert(word[..end].to_string());
        }

        self.words.insert(word);
    }

    #[must_use]
    pub fn contains_word(&self, candidate: &str) -> bool {
        self.words.contains(candidate)
    }

    #[must_use]
    pub fn contains_stem(&self, candidate: &str) -> bool {
        self.stems.contains(candidate)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_parse_basic() {
        let dictionary = Dictionary::parse_from_str("game\nherz");

        assert_eq!(dictionary.words, set(&["GAME", "HERZ"]));
        assert_eq!(dictionary.stems, set(&["G", "GA", "GAM", "H", "HE", "HER"]));
    }

    #[test]
    fn test_full_word_is_not_its_own_stem() {
        let dictionary = Dictionary::parse_from_str("cat");

        assert!(dictionary.contains_word("CAT"));
        assert!(!dictionary.contains_stem("CAT"));
    }

    #[test]
    fn test_word_that_prefixes_another_is_a_stem() {
        let dictionary = Dictionary::parse_from_str("cat\ncats");

        assert!(dictionary.contains_word("CAT"));
        assert!(dictionary.contains_stem("CAT"));
        assert!(!dictionary.contains_stem("CATS"));
    }

    #[test]
    fn test_single_letter_word_has_no_stems() {
        let dictionary = Dictionary::parse_from_str("a");

        assert_eq!(dictionary.words, set(&["A"]));
        assert!(dictionary.stems.is_empty());
    }

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        let dictionary = Dictionary::parse_from_str("  Game \r\nHERZ\n\tzOo  ");

        assert_eq!(dictionary.words, set(&["GAME", "HERZ", "ZOO"]));
    }

    #[test]
    fn test_parse_skips_blank_lines_and_deduplicates() {
        let dictionary = Dictionary::parse_from_str("game\n\n   \nGAME\ngame\n");

        assert_eq!(dictionary.len(), 1);
        assert!(!dictionary.contains_word(""));
    }

    #[test]
    fn test_parse_empty_input() {
        let dictionary = Dictionary::parse_from_str("");

        assert!(dictionary.is_empty());
        assert!(dictionary.stems.is_empty());
    }

    #[test]
    fn test_non_ascii_prefixes() {
        let dictionary = Dictionary::parse_from_str("grün");

        assert!(dictionary.contains_word("GRÜN"));
        assert!(dictionary.contains_stem("GRÜ"));
        assert!(dictionary.contains_stem("GR"));
    }

    #[test]
    fn test_load_missing_file_is_dictionary_load_error() {
        let err = Dictionary::load_from_path("/nonexistent/gridword/words.txt").unwrap_err();

        assert_eq!(err.code(), "E001");
        assert!(err.to_string().contains("/nonexistent/gridword/words.txt"));
    }
}
