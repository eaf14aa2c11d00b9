use search_core::tokenizer::words;

#[test]
fn splits_on_whitespace() {
    let toks: Vec<&str> = words("Hello world").collect();
    assert_eq!(toks, ["Hello", "world"]);
}

#[test]
fn strips_sentence_punctuation() {
    let toks: Vec<&str> =
        words("I, Tokenizer. I extract: words, sentences, and other things. Right?").collect();
    assert_eq!(
        toks,
        ["I", "Tokenizer", "I", "extract", "words", "sentences", "and", "other", "things", "Right"]
    );
}

#[test]
fn is_restartable() {
    let text = "same text both times";
    let first: Vec<&str> = words(text).collect();
    let second: Vec<&str> = words(text).collect();
    assert_eq!(first, second);
}
