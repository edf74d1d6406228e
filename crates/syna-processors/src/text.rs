//! Tokenization, stopword filtering and term statistics.
//!
//! Stopwords come from the `stop-words` English list. An allowlist keeps
//! words that look like stopwords but matter to the caller, and when every
//! token of a text is a stopword the unfiltered tokens are used instead so
//! short inputs never come out empty.
//!
//! # Example
//!
//! ```rust
//! use syna_core::ProcessingConfig;
//! use syna_processors::TextAnalyzer;
//!
//! let analyzer = TextAnalyzer::new(&ProcessingConfig::default());
//! assert_eq!(analyzer.content_terms("the glacier and the nebula"), vec!["glacier", "nebula"]);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashSet};
use stop_words::{LANGUAGE, get};
use syna_core::ProcessingConfig;

/// Splits text into terms and computes the statistics the processors need.
pub struct TextAnalyzer {
    stopwords: HashSet<String>,
    allowlist: HashSet<String>,
    enabled: bool,
}

impl TextAnalyzer {
    /// Create a new analyzer from configuration.
    pub fn new(config: &ProcessingConfig) -> Self {
        let stopwords: HashSet<String> = if config.stopwords {
            get(LANGUAGE::English)
                .iter()
                .map(|s| s.to_lowercase())
                .collect()
        } else {
            HashSet::new()
        };

        // Tokens are lowercased, so the allowlist is too
        let allowlist: HashSet<String> = config.allowlist.iter().map(|w| w.to_lowercase()).collect();

        Self {
            stopwords,
            allowlist,
            enabled: config.stopwords,
        }
    }

    /// Lowercase word tokens in reading order.
    ///
    /// Words are runs of alphanumerics; apostrophes are kept inside a word
    /// ("don't") but trimmed from its edges.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .map(|word| word.trim_matches('\''))
            .filter(|word| !word.is_empty())
            .map(str::to_lowercase)
            .collect()
    }

    /// Tokens with stopwords removed, falling back to all tokens when
    /// nothing would remain.
    pub fn content_terms(&self, text: &str) -> Vec<String> {
        let tokens = self.tokenize(text);
        self.filter_tokens(tokens)
    }

    /// Applies stopword filtering to already tokenized text.
    pub fn filter_tokens(&self, tokens: Vec<String>) -> Vec<String> {
        if !self.enabled {
            return tokens;
        }

        let filtered: Vec<String> = tokens
            .iter()
            .filter(|token| !self.is_stopword(token))
            .cloned()
            .collect();

        if filtered.is_empty() { tokens } else { filtered }
    }

    /// Check if a (lowercase) token is a stopword.
    pub fn is_stopword(&self, token: &str) -> bool {
        if self.allowlist.contains(token) {
            return false;
        }
        self.stopwords.contains(token)
    }

    /// Occurrence count of every distinct term.
    pub fn frequencies<'a>(&self, terms: &'a [String]) -> BTreeMap<&'a str, usize> {
        let mut counts = BTreeMap::new();
        for term in terms {
            *counts.entry(term.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Counts unordered pairs of distinct terms appearing within `window`
    /// consecutive positions of each other.
    ///
    /// Each position pairs its term once with every distinct other term in
    /// the following `window - 1` positions. Keys are ordered so that `a < b`.
    pub fn cooccurrences<'a>(
        &self,
        terms: &'a [String],
        window: usize,
    ) -> BTreeMap<(&'a str, &'a str), usize> {
        let mut pairs = BTreeMap::new();
        for (i, left) in terms.iter().enumerate() {
            let end = terms.len().min(i.saturating_add(window));
            let neighbours: BTreeSet<&str> = terms[(i + 1).min(end)..end]
                .iter()
                .map(String::as_str)
                .filter(|right| *right != left.as_str())
                .collect();
            for right in neighbours {
                let key = if left.as_str() < right {
                    (left.as_str(), right)
                } else {
                    (right, left.as_str())
                };
                *pairs.entry(key).or_insert(0) += 1;
            }
        }
        pairs
    }

    /// Number of stopwords known to the analyzer.
    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new(&ProcessingConfig::default())
    }
}

impl std::fmt::Debug for TextAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextAnalyzer")
            .field("enabled", &self.enabled)
            .field("stopword_count", &self.stopwords.len())
            .field("allowlist_count", &self.allowlist.len())
            .finish()
    }
}

/// Sorts `(item, count)` pairs by count descending, then item ascending.
pub(crate) fn rank<K: Ord>(counts: impl IntoIterator<Item = (K, usize)>) -> Vec<(K, usize)> {
    let mut ranked: Vec<(K, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

// ============================================================================
// Tests
// ============================================================================
