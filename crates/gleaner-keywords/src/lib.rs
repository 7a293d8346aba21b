//! Gleaner Keyword Extraction
//!
//! Deterministic linguistic analysis over raw text, independent of the
//! language model. Text is tokenized and part-of-speech tagged by a local
//! lexicon-driven tagger, noun-like tokens are retained, and candidates
//! are ranked by document frequency.
//!
//! # Architecture
//!
//! ```text
//! Text → Tagger (tokenize + POS tag) → noun filter → frequency ranking → keywords
//! ```
//!
//! Extraction is a pure function over its input and the loaded lexicon:
//! it never fails on well-formed input and returns an empty vector when no
//! noun-like tokens are found. The [`Tagger`] is built once at startup and
//! shared read-only across requests.
//!
//! # Examples
//!
//! ```
//! use gleaner_keywords::KeywordExtractor;
//!
//! let extractor = KeywordExtractor::new();
//! let keywords = extractor.extract("The cat sat on the mat. The cat ran.");
//! assert_eq!(keywords[0], "cat");
//! ```

#![warn(missing_docs)]

mod extractor;
mod lexicon;
mod tagger;

pub use extractor::{KeywordExtractor, DEFAULT_KEYWORD_CAP};
pub use tagger::{PosTag, Tagger, Token};
