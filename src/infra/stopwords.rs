// ============================================================
// Layer 6 — Stopword Lookup
// ============================================================
// A read-only set of English stopwords used by the text
// normaliser. The words come from the stopwords-iso English
// list shipped with the `stop-words` crate.
//
// The set is built once per process on first use and handed
// out as `&'static StopWords`; callers never rebuild it.
//
// Reference: once_cell::sync::Lazy documentation
//            Rust Book §8 (Hash Maps)

use once_cell::sync::Lazy;
use std::collections::HashSet;

static ENGLISH: Lazy<StopWords> = Lazy::new(|| {
    let words = StopWords::from_words(
        stop_words::get(stop_words::LANGUAGE::English)
            .iter()
            .map(|w| w.to_string()),
    );
    tracing::debug!("Loaded {} English stopwords", words.len());
    words
});

/// A set of lowercase tokens to drop during cleaning.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The shared English list, initialised on first call.
    pub fn english() -> &'static StopWords {
        &ENGLISH
    }

    /// Build a set from arbitrary words. Words are lowercased on insert.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_contains_common_words() {
        let sw = StopWords::english();
        for w in ["the", "a", "and", "of", "this", "is"] {
            assert!(sw.contains(w), "expected '{w}' to be a stopword");
        }
        assert!(!sw.contains("transformer"));
    }

    #[test]
    fn test_english_is_shared() {
        assert!(std::ptr::eq(StopWords::english(), StopWords::english()));
    }

    #[test]
    fn test_from_words_lowercases_and_skips_blanks() {
        let sw = StopWords::from_words(["The", "  ", "AND "]);
        assert_eq!(sw.len(), 2);
        assert!(sw.contains("the"));
        assert!(sw.contains("and"));
    }
}
