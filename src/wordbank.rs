use crate::error::GameError;
use crate::info_log;
use std::fs;
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/words.txt");

/// Where a round's candidate words come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// The list compiled into the binary.
    Embedded,
    /// A newline-delimited file, re-read on every load.
    File(PathBuf),
}

impl WordSource {
    /// Read the word list. Nothing is cached between calls.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ResourceUnavailable`] if the file cannot be read.
    pub fn load(&self) -> Result<Vec<String>, GameError> {
        match self {
            Self::Embedded => Ok(load_wordbank_from_str(EMBEDDED_WORDBANK)),
            Self::File(path) => load_wordbank_from_file(path),
        }
    }

    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Embedded => "built-in word list".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// One word per line, file order kept, blank lines dropped. Words are not
/// trimmed or re-cased.
#[must_use]
pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// # Errors
///
/// Returns [`GameError::ResourceUnavailable`] if the file is missing, unreadable
/// or not valid UTF-8.
pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, GameError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| GameError::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let words = load_wordbank_from_str(&data);
    info_log!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_dropped_order_kept() {
        let words = load_wordbank_from_str("planet\n\nriver\n\n\nstone\n");
        assert_eq!(words, vec!["planet", "river", "stone"]);
    }

    #[test]
    fn test_words_kept_verbatim() {
        let words = load_wordbank_from_str("Planet\nRIVER\nstone");
        assert_eq!(words, vec!["Planet", "RIVER", "stone"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let words = load_wordbank_from_str("apple\r\nbrave\r\n\r\ncider\r\n");
        assert_eq!(words, vec!["apple", "brave", "cider"]);
    }

    #[test]
    fn test_duplicates_allowed() {
        let words = load_wordbank_from_str("apple\napple\n");
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_embedded_wordbank_is_playable() {
        let words = WordSource::Embedded.load().unwrap();
        assert!(words.len() >= crate::round::WORDS_PER_ROUND);
        assert!(words.iter().all(|w| !w.is_empty()));
    }

    #[test]
    fn test_missing_file_is_resource_unavailable() {
        let source = WordSource::File(PathBuf::from("/definitely/not/here/words.txt"));
        match source.load() {
            Err(GameError::ResourceUnavailable { path, .. }) => {
                assert_eq!(path, PathBuf::from("/definitely/not/here/words.txt"));
            }
            other => panic!("Expected ResourceUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_describe() {
        assert_eq!(WordSource::Embedded.describe(), "built-in word list");
        assert_eq!(
            WordSource::File(PathBuf::from("words.txt")).describe(),
            "words.txt"
        );
    }
}
