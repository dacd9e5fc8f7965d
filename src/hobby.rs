use crate::capitalize::capitalize_first;
use crate::config::Config;
use crate::gerund::to_gerund;
use crate::pos::{PartOfSpeech, Tagger};

/// Rewrite one hobby phrase into a gerund-led phrase that reads naturally
/// after "I like ..." or "My hobbies include ...".
pub fn format_hobby(hobby: &str, tagger: &dyn Tagger, config: &Config) -> String {
    let hobby = hobby.trim();
    if hobby.is_empty() {
        return String::new();
    }

    let tokens = tagger.tag(hobby);
    let mut words: Vec<String> = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let lower = tokens[i].text.to_lowercase();

        // "to X" collapses into the gerund of X
        if config.infinitive_markers.contains(&lower) && i + 1 < tokens.len() {
            words.push(to_gerund(&tokens[i + 1].text, config));
            i += 2;
            continue;
        }

        // "play X" becomes "playing x"
        if config.play_words.contains(&lower) && i + 1 < tokens.len() {
            words.push(to_gerund(&lower, config));
            words.push(tokens[i + 1].text.to_lowercase());
            i += 2;
            continue;
        }

        match tokens[i].pos {
            PartOfSpeech::Verb => words.push(to_gerund(&tokens[i].text, config)),
            PartOfSpeech::Propn => words.push(tokens[i].text.clone()),
            _ => words.push(lower),
        }
        i += 1;
    }

    if let Some(first) = words.first_mut() {
        *first = capitalize_first(first);
    }
    words.join(" ")
}

pub fn join_with_and(items: &[String]) -> String {
    match items.len() {
        0 => String::new(),
        1 => items[0].clone(),
        n => format!("{}, and {}", items[..n - 1].join(", "), items[n - 1]),
    }
}

pub fn format_hobby_list(hobbies: &[String], tagger: &dyn Tagger, config: &Config) -> String {
    let formatted: Vec<String> = hobbies
        .iter()
        .filter(|h| !h.trim().is_empty())
        .map(|h| format_hobby(h, tagger, config))
        .collect();
    join_with_and(&formatted)
}
