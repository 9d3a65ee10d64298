//! Dictionary loading utilities
//!
//! A dictionary is a newline-delimited word list. Membership is an exact line
//! match, so callers are expected to pass lowercase words.

use rustc_hash::FxHashSet;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// An in-memory word list
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Load every non-empty line of a file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or opened.
    ///
    /// # Examples
    /// ```no_run
    /// use boggle_trace::wordlists::loader::Dictionary;
    ///
    /// let dictionary = Dictionary::load("dictionary.txt").unwrap();
    /// println!("Loaded {} words", dictionary.len());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_words(content.lines()))
    }

    /// Build a dictionary from words, skipping empty entries
    ///
    /// # Examples
    /// ```
    /// use boggle_trace::wordlists::loader::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["tars", "goat"]);
    /// assert!(dictionary.contains("goat"));
    /// assert!(!dictionary.contains("GOAT"));
    /// ```
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().to_string())
            .filter(|word| !word.is_empty())
            .collect();

        Self { words }
    }

    /// Exact membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in sorted order
    #[must_use]
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

/// Scan a word list file for `word`, stopping at the first matching line
///
/// Reads line by line instead of loading the whole file, which is all a single
/// lookup needs.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or a line cannot be read.
pub fn contains_word<P: AsRef<Path>>(path: P, word: &str) -> io::Result<bool> {
    let reader = BufReader::new(File::open(path)?);

    for line in reader.lines() {
        if line? == word {
            return Ok(true);
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn word_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn from_words_skips_empty() {
        let dictionary = Dictionary::from_words(["abandon", "", "tars"]);

        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("abandon"));
        assert!(dictionary.contains("tars"));
        assert!(!dictionary.contains(""));
    }

    #[test]
    fn membership_is_exact() {
        let dictionary = Dictionary::from_words(["goat"]);

        assert!(dictionary.contains("goat"));
        assert!(!dictionary.contains("Goat"));
        assert!(!dictionary.contains("goa"));
        assert!(!dictionary.contains("goats"));
    }

    #[test]
    fn load_reads_lines() {
        let file = word_file("abandon\r\ntars\n\ngoat\n");
        let dictionary = Dictionary::load(file.path()).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.sorted_words(), vec!["abandon", "goat", "tars"]);
    }

    #[test]
    fn load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Dictionary::load(dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn contains_word_streams_file() {
        let file = word_file("abandon\ntars\r\ngoat");

        assert!(contains_word(file.path(), "abandon").unwrap());
        assert!(contains_word(file.path(), "tars").unwrap());
        assert!(contains_word(file.path(), "goat").unwrap());
        assert!(!contains_word(file.path(), "tan").unwrap());
        assert!(!contains_word(file.path(), "aban").unwrap());
    }

    #[test]
    fn contains_word_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(contains_word(dir.path().join("missing.txt"), "tars").is_err());
    }

    #[test]
    fn empty_dictionary() {
        let dictionary = Dictionary::default();
        assert!(dictionary.is_empty());
        assert!(dictionary.sorted_words().is_empty());
    }
}
