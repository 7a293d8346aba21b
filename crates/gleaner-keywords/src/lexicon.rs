//! Closed-class word lists backing the tagger
//!
//! Tokens shorter than 3 characters never qualify as keywords, so the
//! lists only carry words of 3+ characters.

/// Function words: articles, prepositions, conjunctions, pronouns,
/// auxiliaries, quantifiers, and common adverbs of time/degree.
pub(crate) const FUNCTION_WORDS: &[&str] = &[
    // determiners and conjunctions
    "the", "and", "but", "for", "nor", "yet", "that", "this", "these", "those",
    "which", "what", "who", "whom", "whose", "when", "where", "while", "why",
    "how", "whether", "because", "although", "though", "unless", "until",
    "since",
    // prepositions
    "with", "from", "into", "onto", "upon", "about", "above", "across",
    "after", "against", "along", "among", "around", "before", "behind",
    "below", "beneath", "beside", "between", "beyond", "during", "inside",
    "near", "off", "out", "outside", "over", "past", "through", "toward",
    "towards", "under", "via", "within", "without", "than", "per",
    // pronouns
    "you", "your", "yours", "she", "her", "hers", "him", "his", "its", "our",
    "ours", "they", "them", "their", "theirs", "everyone", "everybody",
    "someone", "somebody", "anyone", "anybody", "nobody", "itself", "himself",
    "herself", "themselves", "yourself",
    // auxiliaries and modals
    "was", "were", "are", "been", "being", "has", "have", "had", "having",
    "does", "did", "doing", "done", "will", "would", "can", "could", "may",
    "might", "must", "shall", "should",
    // quantifiers
    "all", "any", "both", "each", "either", "neither", "few", "many", "much",
    "more", "most", "other", "another", "some", "such", "several", "enough",
    "none", "own", "same", "every",
    // adverbs of time, place, and degree
    "not", "now", "then", "here", "there", "today", "tonight", "yesterday",
    "tomorrow", "soon", "already", "still", "again", "once", "twice", "ever",
    "never", "always", "often", "sometimes", "usually", "also", "just",
    "only", "even", "too", "very", "quite", "rather", "almost", "perhaps",
    "maybe", "else", "away", "together", "instead", "anyway", "however",
    "therefore", "moreover", "meanwhile", "furthermore", "nevertheless",
];

/// Interjections and affirmation/negation particles.
pub(crate) const INTERJECTIONS: &[&str] = &[
    "wow", "yes", "yeah", "yep", "nah", "nope", "okay", "hey", "huh", "hmm",
    "ugh", "oops", "ouch", "alas", "whoa", "hooray", "bravo", "phew", "psst",
];

/// High-frequency adjectives the suffix rules cannot catch.
pub(crate) const COMMON_ADJECTIVES: &[&str] = &[
    "new", "old", "good", "bad", "great", "big", "small", "large", "little",
    "high", "low", "long", "short", "early", "late", "young", "right",
    "wrong", "first", "second", "third", "last", "next", "best", "better",
    "worse", "worst", "able", "certain", "clear", "different", "easy",
    "hard", "fast", "slow", "free", "full", "important", "local", "major",
    "minor", "national", "international", "possible", "public", "private",
    "real", "recent", "significant", "similar", "social", "special",
    "strong", "weak", "sure", "true", "false", "whole", "positive",
    "negative", "available", "likely", "entire", "current", "former",
];

/// Nouns ending in "-ly" that the adverb suffix rule must not reclassify.
pub(crate) const LY_NOUNS: &[&str] = &[
    "family", "assembly", "supply", "reply", "ally", "rally", "monopoly",
    "anomaly", "butterfly", "italy", "july",
];

/// Nouns ending in "-ing" that the gerund suffix rule must not reclassify.
pub(crate) const ING_NOUNS: &[&str] = &[
    "morning", "evening", "building", "meeting", "wedding", "ceiling",
    "feeling", "warning", "painting", "something", "nothing", "anything",
    "everything",
];

/// Nouns ending in "-ed" that the past-tense suffix rule must not
/// reclassify.
pub(crate) const ED_NOUNS: &[&str] = &["hundred", "hatred", "shed", "seabed"];
