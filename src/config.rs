use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_irregular_verbs")]
    pub irregular_verbs: IndexMap<String, String>,

    #[serde(default = "default_keep_final_e")]
    pub keep_final_e: Vec<String>,

    #[serde(default = "default_infinitive_markers")]
    pub infinitive_markers: Vec<String>,

    #[serde(default = "default_play_words")]
    pub play_words: Vec<String>,

    #[serde(default = "default_function_words")]
    pub function_words: Vec<String>,

    #[serde(default)]
    pub extra_verbs: Vec<String>,
}

fn default_irregular_verbs() -> IndexMap<String, String> {
    // "sing" is listed so the table beats the "already ends in ing" rule.
    [
        ("run", "running"),
        ("swim", "swimming"),
        ("sit", "sitting"),
        ("begin", "beginning"),
        ("sing", "singing"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn default_keep_final_e() -> Vec<String> {
    ["be", "see", "flee"].iter().map(|s| s.to_string()).collect()
}

fn default_infinitive_markers() -> Vec<String> {
    vec!["to".to_string()]
}

fn default_play_words() -> Vec<String> {
    vec!["play".to_string()]
}

fn default_function_words() -> Vec<String> {
    [
        "a", "an", "the", "of", "and", "or", "in", "on", "at", "for", "to",
        "with", "from", "by", "as", "per",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            irregular_verbs: default_irregular_verbs(),
            keep_final_e: default_keep_final_e(),
            infinitive_markers: default_infinitive_markers(),
            play_words: default_play_words(),
            function_words: default_function_words(),
            extra_verbs: Vec::new(),
        }
    }
}
