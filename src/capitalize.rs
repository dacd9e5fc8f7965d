use crate::pos::{PartOfSpeech, Tagger};

pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn capitalize_proper_nouns(text: &str, tagger: &dyn Tagger) -> String {
    let words: Vec<String> = tagger
        .tag(text)
        .iter()
        .map(|token| match token.pos {
            PartOfSpeech::Propn | PartOfSpeech::Noun => capitalize_first(&token.text),
            _ => token.text.clone(),
        })
        .collect();
    words.join(" ")
}
