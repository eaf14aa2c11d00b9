use lazy_static::lazy_static;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::{HashMap, HashSet};

lazy_static! {
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
    static ref ACCENTS: HashMap<char, char> = {
        let table: &[(&str, char)] = &[
            ("àáâãäå", 'a'),
            ("æ", 'a'), // ae, but a single letter is needed
            ("ç", 'c'),
            ("èéêë", 'e'),
            ("ìíîï", 'i'),
            ("ñ", 'n'),
            ("òóôõö", 'o'),
            ("œ", 'o'), // oe, same
            ("ùúûü", 'u'),
            ("ýÿ", 'y'),
            ("ÀÁÂÃÄÅ", 'A'),
            ("Æ", 'A'),
            ("Ç", 'C'),
            ("ÈÉÊË", 'E'),
            ("ÌÍÎÏ", 'I'),
            ("Ñ", 'N'),
            ("ÒÓÔÕÖ", 'O'),
            ("Œ", 'O'),
            ("ÙÚÛÜ", 'U'),
            ("ÝŸ", 'Y'),
        ];
        let mut m = HashMap::new();
        for (runes, rep) in table {
            for r in runes.chars() {
                m.insert(r, *rep);
            }
        }
        m
    };
    static ref STOP_WORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "all","am","an","and","any","are","aren't","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can't","cannot","could","couldn't",
            "did","didn't","do","does","doesn't","doing","don't","down",
            "for","from","further",
            "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
            "i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
            "let's","me","more","most","mustn't","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","shan't","she","she'd","she'll","she's","should","shouldn't","so","some","such",
            "than","that","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
            "under","until","up","very",
            "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","with","won't","would","wouldn't",
            "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves",
        ];
        words.iter().copied().collect()
    };
}

/// Replace accented Latin letters with their unaccented base letter,
/// preserving case. Code points in the combining-diacritical-marks range
/// (U+0300-U+036F) are already attached to a base letter present in the
/// string and pass through untouched, as does anything unmapped.
pub fn fold_accents(s: &str) -> String {
    s.chars()
        .map(|c| {
            if ('\u{0300}'..='\u{036F}').contains(&c) {
                return c;
            }
            ACCENTS.get(&c).copied().unwrap_or(c)
        })
        .collect()
}

/// Exact membership in the fixed English stop-word list. The check is
/// case-sensitive and runs on the token as the tokenizer produced it.
pub fn is_stop_word(w: &str) -> bool {
    STOP_WORDS.contains(w)
}

/// Reduce a raw token to its index term: fold accents, lower-case, stem.
/// Tokens shorter than two bytes and stop words are discarded.
pub fn normalize(token: &str) -> Option<String> {
    if token.len() < 2 || is_stop_word(token) {
        return None;
    }
    let folded = fold_accents(token).to_lowercase();
    Some(STEMMER.stem(&folded).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents() {
        assert_eq!(fold_accents("Mémoires"), "Memoires");
        assert_eq!(fold_accents("señor œuvre"), "senor ouvre");
        // every lowercase row has an uppercase partner
        assert_eq!(fold_accents("Ÿ ÿ Ý ý"), "Y y Y y");
    }

    #[test]
    fn leaves_combining_marks_alone() {
        // "e" followed by U+0301: the base letter is already unaccented.
        assert_eq!(fold_accents("e\u{0301}"), "e\u{0301}");
    }

    #[test]
    fn recognizes_stop_words() {
        for w in ["you", "we", "yours"] {
            assert!(is_stop_word(w), "{w:?} not considered a stop word");
        }
        for w in ["apple", "golang", "wrong"] {
            assert!(!is_stop_word(w), "{w:?} considered a stop word");
        }
    }

    #[test]
    fn normalizes_to_stemmed_terms() {
        assert_eq!(normalize("HEY").as_deref(), Some("hey"));
        assert_eq!(normalize("Try").as_deref(), Some("tri"));
        assert_eq!(normalize("Mémoires").as_deref(), Some("memoir"));
    }

    #[test]
    fn gates_short_tokens_and_stop_words() {
        assert_eq!(normalize("a"), None);
        assert_eq!(normalize("I"), None);
        assert_eq!(normalize("you"), None);
    }
}
