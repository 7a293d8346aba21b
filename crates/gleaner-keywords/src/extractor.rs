//! Frequency-ranked keyword extraction over tagged tokens

use crate::tagger::{PosTag, Tagger};
use std::collections::HashMap;
use tracing::debug;

/// Default cap on the number of returned keywords
pub const DEFAULT_KEYWORD_CAP: usize = 10;

/// Minimum token length for a keyword candidate
const MIN_TOKEN_LEN: usize = 3;

/// Extracts ranked keywords from raw text.
///
/// Candidates are noun-like tokens (common or proper) of at least
/// [`MIN_TOKEN_LEN`] characters, lowercased and deduplicated. Ranking is
/// by descending document frequency; ties break by first occurrence in
/// the source text. The result is truncated to the configured cap.
///
/// Extraction never fails: text with zero qualifying tokens yields an
/// empty vector, which is a valid outcome, not an error.
#[derive(Debug)]
pub struct KeywordExtractor {
    tagger: Tagger,
    cap: usize,
}

impl KeywordExtractor {
    /// Create an extractor with the default keyword cap
    pub fn new() -> Self {
        Self {
            tagger: Tagger::new(),
            cap: DEFAULT_KEYWORD_CAP,
        }
    }

    /// Override the keyword cap
    pub fn with_cap(mut self, cap: usize) -> Self {
        self.cap = cap;
        self
    }

    /// Extract ranked keywords from text
    pub fn extract(&self, text: &str) -> Vec<String> {
        let tokens = self.tagger.tag(text);

        // (count, first occurrence index) per normalized candidate
        let mut counts: HashMap<String, (usize, usize)> = HashMap::new();

        for (position, token) in tokens.iter().enumerate() {
            if !matches!(token.tag, PosTag::Noun | PosTag::ProperNoun) {
                continue;
            }
            if token.normalized.len() < MIN_TOKEN_LEN {
                continue;
            }

            counts
                .entry(token.normalized.clone())
                .and_modify(|(count, _)| *count += 1)
                .or_insert((1, position));
        }

        let mut ranked: Vec<(String, (usize, usize))> = counts.into_iter().collect();
        ranked.sort_by(|(_, (count_a, pos_a)), (_, (count_b, pos_b))| {
            count_b.cmp(count_a).then(pos_a.cmp(pos_b))
        });
        ranked.truncate(self.cap);

        debug!(candidates = ranked.len(), "keyword extraction complete");

        ranked.into_iter().map(|(word, _)| word).collect()
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}
