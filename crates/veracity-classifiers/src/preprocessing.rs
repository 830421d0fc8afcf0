//! Text preprocessing shared by the vectorizer and the pipeline.
//!
//! Provides the lowercase/alphabetic normalization applied to every record
//! before feature extraction, plus whitespace tokenization with English
//! stop-word filtering. Everything here is a pure function so the same
//! behavior is reused at fit time and at transform time.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Tokens shorter than this carry no signal once punctuation is stripped.
const MIN_TOKEN_LEN: usize = 2;

/// Normalize raw text for feature extraction: lowercase, then keep only
/// ASCII letters and whitespace. Digits and punctuation are dropped.
///
/// Always succeeds; all-numeric or all-punctuation input yields an empty
/// string. Normalizing twice equals normalizing once.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect()
}

/// Split normalized text into feature tokens: whitespace-separated words of
/// at least [`MIN_TOKEN_LEN`] characters that are not stop words.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized
        .split_whitespace()
        .filter(|token| token.len() >= MIN_TOKEN_LEN)
        .filter(|token| !is_stop_word(token))
        .collect()
}

/// True when `token` is on the fixed English stop-word list.
pub fn is_stop_word(token: &str) -> bool {
    stop_words().contains(token)
}

fn stop_words() -> &'static HashSet<&'static str> {
    static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
    STOP_WORDS.get_or_init(|| ENGLISH_STOP_WORDS.iter().copied().collect())
}

/// Fixed English stop-word list discarded during vocabulary construction.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again",
    "against", "all", "almost", "alone", "along", "already", "also",
    "although", "always", "am", "among", "amongst", "an", "and", "another",
    "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being",
    "below", "beside", "besides", "between", "beyond", "both", "but", "by",
    "can", "cannot", "could", "did", "do", "does", "doing", "done", "down",
    "during", "each", "either", "else", "elsewhere", "enough", "etc", "even",
    "ever", "every", "everyone", "everything", "everywhere", "except", "few",
    "for", "former", "formerly", "from", "further", "had", "has", "have",
    "he", "hence", "her", "here", "hereafter", "hereby", "herein", "hers",
    "herself", "him", "himself", "his", "how", "however", "i", "if", "in",
    "indeed", "into", "is", "it", "its", "itself", "last", "latter",
    "latterly", "least", "less", "many", "may", "me", "meanwhile", "might",
    "mine", "more", "moreover", "most", "mostly", "much", "must", "my",
    "myself", "namely", "neither", "never", "nevertheless", "next", "no",
    "nobody", "none", "noone", "nor", "not", "nothing", "now", "nowhere",
    "of", "off", "often", "on", "once", "one", "only", "onto", "or", "other",
    "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
    "per", "perhaps", "please", "rather", "same", "seem", "seemed",
    "seeming", "seems", "several", "she", "should", "since", "so", "some",
    "somehow", "someone", "something", "sometime", "sometimes", "somewhere",
    "still", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "this", "those",
    "though", "through", "throughout", "thus", "to", "together", "too",
    "toward", "towards", "under", "until", "up", "upon", "us", "very", "was",
    "we", "well", "were", "what", "whatever", "when", "whence", "whenever",
    "where", "whereafter", "whereas", "whereby", "wherein", "whereupon",
    "wherever", "whether", "which", "while", "whither", "who", "whoever",
    "whole", "whom", "whose", "why", "will", "with", "within", "without",
    "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];
