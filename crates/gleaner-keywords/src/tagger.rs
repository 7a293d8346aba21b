//! Lexicon-driven tokenizer and part-of-speech tagger
//!
//! A deterministic local stand-in for a statistical tagging model: a
//! closed-class lexicon decides function words, interjections, and common
//! adjectives; suffix heuristics catch regular adverbs, gerunds, and past
//! tense; everything else alphabetic is treated as noun-like. Capitalized
//! tokens that are not sentence-initial are tagged as proper nouns.

use crate::lexicon;
use std::collections::HashSet;

/// Part-of-speech tag assigned to a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    /// Common noun (the default for open-class alphabetic tokens)
    Noun,
    /// Capitalized token in a non-sentence-initial position
    ProperNoun,
    /// Suffix-detected verb form (gerund or past tense)
    Verb,
    /// Lexicon-listed adjective
    Adjective,
    /// Suffix-detected "-ly" adverb
    Adverb,
    /// Closed-class function word
    Function,
    /// Interjection or affirmation particle
    Interjection,
    /// Non-alphabetic or otherwise unclassifiable token
    Other,
}

/// A single tagged token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text as it appeared in the source, punctuation stripped
    pub text: String,
    /// Lowercased form used for counting and deduplication
    pub normalized: String,
    /// Assigned part-of-speech tag
    pub tag: PosTag,
}

/// Deterministic part-of-speech tagger.
///
/// Built once at process startup; tagging takes `&self` and holds no
/// mutable state, so one instance is shared by all requests.
#[derive(Debug)]
pub struct Tagger {
    function_words: HashSet<&'static str>,
    interjections: HashSet<&'static str>,
    adjectives: HashSet<&'static str>,
    ly_nouns: HashSet<&'static str>,
    ing_nouns: HashSet<&'static str>,
    ed_nouns: HashSet<&'static str>,
}

impl Tagger {
    /// Build a tagger from the bundled lexicon
    pub fn new() -> Self {
        Self {
            function_words: lexicon::FUNCTION_WORDS.iter().copied().collect(),
            interjections: lexicon::INTERJECTIONS.iter().copied().collect(),
            adjectives: lexicon::COMMON_ADJECTIVES.iter().copied().collect(),
            ly_nouns: lexicon::LY_NOUNS.iter().copied().collect(),
            ing_nouns: lexicon::ING_NOUNS.iter().copied().collect(),
            ed_nouns: lexicon::ED_NOUNS.iter().copied().collect(),
        }
    }

    /// Tokenize and tag a text.
    ///
    /// Tokens are whitespace-separated words with surrounding punctuation
    /// stripped; tokens containing non-alphabetic characters are tagged
    /// [`PosTag::Other`] rather than dropped, so positions stay meaningful.
    pub fn tag(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut sentence_initial = true;

        for raw in text.split_whitespace() {
            let stripped = raw.trim_matches(|c: char| !c.is_alphanumeric());
            let ends_sentence =
                raw.ends_with('.') || raw.ends_with('!') || raw.ends_with('?');

            if stripped.is_empty() {
                sentence_initial = sentence_initial || ends_sentence;
                continue;
            }

            let normalized = stripped.to_lowercase();
            let tag = self.classify(stripped, &normalized, sentence_initial);

            tokens.push(Token {
                text: stripped.to_string(),
                normalized,
                tag,
            });

            sentence_initial = ends_sentence;
        }

        tokens
    }

    fn classify(&self, text: &str, normalized: &str, sentence_initial: bool) -> PosTag {
        if !text.chars().all(|c| c.is_alphabetic()) {
            return PosTag::Other;
        }
        if self.function_words.contains(normalized) {
            return PosTag::Function;
        }
        if self.interjections.contains(normalized) {
            return PosTag::Interjection;
        }
        if self.adjectives.contains(normalized) {
            return PosTag::Adjective;
        }
        if normalized.len() >= 4
            && normalized.ends_with("ly")
            && !self.ly_nouns.contains(normalized)
        {
            return PosTag::Adverb;
        }
        if normalized.len() >= 6
            && normalized.ends_with("ing")
            && !self.ing_nouns.contains(normalized)
        {
            return PosTag::Verb;
        }
        if normalized.len() >= 5
            && normalized.ends_with("ed")
            && !normalized.ends_with("eed")
            && !self.ed_nouns.contains(normalized)
        {
            return PosTag::Verb;
        }

        let capitalized = text.chars().next().is_some_and(|c| c.is_uppercase());
        if capitalized && !sentence_initial {
            PosTag::ProperNoun
        } else {
            PosTag::Noun
        }
    }
}

impl Default for Tagger {
    fn default() -> Self {
        Self::new()
    }
}
