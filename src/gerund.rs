use crate::config::Config;

pub fn to_gerund(word: &str, config: &Config) -> String {
    let word = word.to_lowercase();
    if let Some(mapped) = config.irregular_verbs.get(&word) {
        return mapped.clone();
    }
    if word.ends_with('e') && !config.keep_final_e.iter().any(|w| w == &word) {
        return format!("{}ing", &word[..word.len() - 1]);
    }
    if word.ends_with("ing") {
        return word;
    }
    format!("{}ing", word)
}
