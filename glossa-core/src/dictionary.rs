//! Bilingual word dictionary and its flat-file loader
//!
//! Dictionary files hold one entry per line in the form `key, value`: the
//! key runs up to the first comma, a single space after the comma is
//! skipped, and the rest of the line is the value. Each line is parsed on
//! its own; nothing carries over from one line to the next.

use crate::error::{Error, Result};
use crate::token::END_OF_INPUT;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::{self, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

/// Word-to-word mapping used during translation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any previous value for `key`
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Look up the translation of `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in arbitrary order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut dictionary = Dictionary::new();
        for (key, value) in iter {
            dictionary.insert(key, value);
        }
        dictionary
    }
}

/// Iterator over dictionary entries
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Which column of the dictionary file is the lookup key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left column maps to right column
    #[default]
    Forward,
    /// Right column maps to left column
    Reverse,
}

/// Handling of non-empty lines without a comma
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedEntryPolicy {
    /// Log and ignore the line
    #[default]
    Skip,
    /// Fail with [`Error::MalformedEntry`]
    Reject,
}

/// Counts gathered while loading a dictionary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Entries inserted (duplicates included)
    pub entries: usize,
    /// Blank lines ignored
    pub skipped_blank: usize,
    /// Lines without a comma
    pub skipped_malformed: usize,
    /// Lines with an empty key or value, or using the reserved sentinel text
    pub skipped_incomplete: usize,
}

enum ParsedLine<'a> {
    Blank,
    Malformed,
    Incomplete,
    Reserved,
    Entry(&'a str, &'a str),
}

fn parse_line(line: &str) -> ParsedLine<'_> {
    if line.trim().is_empty() {
        return ParsedLine::Blank;
    }
    let Some((key, rest)) = line.split_once(',') else {
        return ParsedLine::Malformed;
    };
    let value = rest.strip_prefix(' ').unwrap_or(rest);
    if key.is_empty() || value.is_empty() {
        return ParsedLine::Incomplete;
    }
    if key == END_OF_INPUT || value == END_OF_INPUT {
        return ParsedLine::Reserved;
    }
    ParsedLine::Entry(key, value)
}

/// Parametrised loader for `key, value` dictionary files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DictionaryLoader {
    direction: Direction,
    malformed: MalformedEntryPolicy,
}

impl DictionaryLoader {
    /// Loader with forward direction that skips malformed lines
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lookup direction
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the malformed-line policy
    pub fn malformed_entries(mut self, policy: MalformedEntryPolicy) -> Self {
        self.malformed = policy;
        self
    }

    /// Load a dictionary file
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Dictionary> {
        self.load_file_with_report(path).map(|(dictionary, _)| dictionary)
    }

    /// Load a dictionary file and report what was skipped
    pub fn load_file_with_report(&self, path: impl AsRef<Path>) -> Result<(Dictionary, LoadReport)> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading dictionary from {}", path.display());
        self.load_reader_with_report(BufReader::new(file))
    }

    /// Load from any buffered reader
    pub fn load_reader<R: BufRead>(&self, reader: R) -> Result<Dictionary> {
        self.load_reader_with_report(reader).map(|(dictionary, _)| dictionary)
    }

    /// Load from any buffered reader and report what was skipped
    pub fn load_reader_with_report<R: BufRead>(&self, reader: R) -> Result<(Dictionary, LoadReport)> {
        let mut dictionary = Dictionary::new();
        let mut report = LoadReport::default();

        for (index, line) in reader.lines().enumerate() {
            let number = index + 1;
            let line = line.map_err(|source| Error::Read {
                line: number,
                source,
            })?;

            match parse_line(&line) {
                ParsedLine::Blank => report.skipped_blank += 1,
                ParsedLine::Malformed => match self.malformed {
                    MalformedEntryPolicy::Skip => {
                        log::warn!("skipping dictionary line {number}: no comma in {line:?}");
                        report.skipped_malformed += 1;
                    }
                    MalformedEntryPolicy::Reject => {
                        return Err(Error::MalformedEntry {
                            line: number,
                            content: line,
                        });
                    }
                },
                ParsedLine::Incomplete => {
                    log::debug!("skipping dictionary line {number}: empty key or value");
                    report.skipped_incomplete += 1;
                }
                ParsedLine::Reserved => {
                    log::warn!("skipping dictionary line {number}: {END_OF_INPUT:?} is reserved");
                    report.skipped_incomplete += 1;
                }
                ParsedLine::Entry(left, right) => {
                    let (key, value) = match self.direction {
                        Direction::Forward => (left, right),
                        Direction::Reverse => (right, left),
                    };
                    if let Some(previous) = dictionary.insert(key, value) {
                        log::debug!("dictionary line {number}: {key:?} remapped from {previous:?} to {value:?}");
                    }
                    report.entries += 1;
                }
            }
        }

        log::info!(
            "loaded {} dictionary entries ({} malformed, {} incomplete lines skipped)",
            dictionary.len(),
            report.skipped_malformed,
            report.skipped_incomplete
        );
        Ok((dictionary, report))
    }

    /// Parse dictionary text held in memory
    pub fn parse_str(&self, text: &str) -> Result<Dictionary> {
        self.load_reader(Cursor::new(text.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "public, publiczny\nstatic, statyczny\nvoid, pustka\nthis, to\n";

    #[test]
    fn test_parse_forward() {
        let dictionary = DictionaryLoader::new().parse_str(SAMPLE).unwrap();
        assert_eq!(dictionary.len(), 4);
        assert_eq!(dictionary.get("static"), Some("statyczny"));
        assert_eq!(dictionary.get("statyczny"), None);
    }

    #[test]
    fn test_parse_reverse() {
        let dictionary = DictionaryLoader::new()
            .direction(Direction::Reverse)
            .parse_str(SAMPLE)
            .unwrap();
        assert_eq!(dictionary.get("pustka"), Some("void"));
        assert!(!dictionary.contains_key("void"));
    }

    #[test]
    fn test_last_write_wins() {
        let dictionary = DictionaryLoader::new()
            .parse_str("else, inaczej\nelse, jeszcze\n")
            .unwrap();
        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.get("else"), Some("jeszcze"));
    }

    #[test]
    fn test_split_on_first_comma() {
        let dictionary = DictionaryLoader::new().parse_str("a, b, c").unwrap();
        assert_eq!(dictionary.get("a"), Some("b, c"));
    }

    #[test]
    fn test_value_without_leading_space() {
        let dictionary = DictionaryLoader::new().parse_str("if,jeśli").unwrap();
        assert_eq!(dictionary.get("if"), Some("jeśli"));
    }

    #[test]
    fn test_only_one_space_is_skipped() {
        let dictionary = DictionaryLoader::new().parse_str("if,  jeśli").unwrap();
        assert_eq!(dictionary.get("if"), Some(" jeśli"));
    }

    #[test]
    fn test_blank_and_incomplete_lines_skipped() {
        let (dictionary, report) = DictionaryLoader::new()
            .load_reader_with_report(Cursor::new("\nwhile, podczas\n   \nnull, \n, pusty\n"))
            .unwrap();
        assert_eq!(dictionary.len(), 1);
        assert_eq!(report.entries, 1);
        assert_eq!(report.skipped_blank, 2);
        assert_eq!(report.skipped_incomplete, 2);
        assert!(!dictionary.contains_key("null"));
    }

    #[test]
    fn test_sentinel_text_never_inserted() {
        let text = format!("stop, {END_OF_INPUT}\n{END_OF_INPUT}, koniec\ngo, idź\n");
        let (dictionary, report) = DictionaryLoader::new()
            .load_reader_with_report(Cursor::new(text))
            .unwrap();
        assert_eq!(dictionary.len(), 1);
        assert_eq!(report.skipped_incomplete, 2);
        assert!(!dictionary.contains_key("stop"));
    }

    #[test]
    fn test_malformed_line_skipped_without_stale_state() {
        let (dictionary, report) = DictionaryLoader::new()
            .load_reader_with_report(Cursor::new("for, dla\nbroken line\nnew, nowy\n"))
            .unwrap();
        assert_eq!(report.skipped_malformed, 1);
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.get("for"), Some("dla"));
        assert_eq!(dictionary.get("new"), Some("nowy"));
        assert!(dictionary.iter().all(|(k, _)| !k.contains("broken")));
    }

    #[test]
    fn test_malformed_line_rejected() {
        let result = DictionaryLoader::new()
            .malformed_entries(MalformedEntryPolicy::Reject)
            .parse_str("for, dla\nbroken line\n");
        match result {
            Err(Error::MalformedEntry { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "broken line");
            }
            other => panic!("Expected MalformedEntry, got {other:?}"),
        }
    }

    #[test]
    fn test_crlf_dictionary_lines() {
        let dictionary = DictionaryLoader::new()
            .parse_str("true, prawda\r\nfalse, fałsz\r\n")
            .unwrap();
        assert_eq!(dictionary.get("false"), Some("fałsz"));
    }

    #[test]
    fn test_missing_file() {
        let result = DictionaryLoader::new().load_file("/nonexistent/dictionary.txt");
        assert!(matches!(result, Err(Error::FileOpen { .. })));
    }

    #[test]
    fn test_from_iterator() {
        let dictionary: Dictionary = [("Hello", "Witaj"), ("world", "świat")]
            .into_iter()
            .collect();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.get("world"), Some("świat"));
    }
}
