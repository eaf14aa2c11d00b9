use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // A word starts with a letter and may continue with letters, digits,
    // underscores and apostrophes, so contractions stay whole ("don't").
    static ref WORD: Regex = Regex::new(r"(?u)\p{L}[\p{L}\p{N}_']*").expect("valid regex");
}

/// Split text into word tokens lazily, in document order. Punctuation,
/// whitespace and leading digits act as delimiters and are never emitted.
/// Empty or token-free input yields an empty sequence.
pub fn words(text: &str) -> impl Iterator<Item = &str> + '_ {
    WORD.find_iter(text).map(|m| m.as_str())
}
