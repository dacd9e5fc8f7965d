use crate::config::Config;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static RE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][A-Za-z'-]*").unwrap());

static BASE_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "run", "swim", "sit", "begin", "play", "read", "write", "dance",
        "sing", "draw", "paint", "cook", "bake", "travel", "trek", "hike",
        "climb", "cycle", "skate", "ski", "surf", "dive", "fish", "garden",
        "code", "watch", "collect", "sketch", "act", "jog", "box", "wrestle",
        "row", "sail", "knit", "sew", "blog", "debate", "learn", "explore",
        "solve", "build", "make", "create", "design", "edit", "stream",
        "game", "do",
    ]
    .into_iter()
    .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Propn,
    Noun,
    Verb,
    Other,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub text: String,
    pub pos: PartOfSpeech,
}

pub trait Tagger {
    fn tag(&self, text: &str) -> Vec<Token>;
}

/// Rule-based stand-in for a real part-of-speech tagger. Tokens are
/// whitespace-separated chunks; tagging looks at the alphabetic core of
/// each chunk so surrounding punctuation ("(Soccer)", "Rubik's") is kept
/// attached to the token text.
pub struct LexiconTagger {
    verbs: HashSet<String>,
    function_words: HashSet<String>,
}

impl LexiconTagger {
    pub fn new(config: &Config) -> Self {
        let mut verbs: HashSet<String> =
            BASE_VERBS.iter().map(|v| v.to_string()).collect();
        verbs.extend(config.extra_verbs.iter().map(|v| v.to_lowercase()));
        let function_words = config
            .function_words
            .iter()
            .map(|w| w.to_lowercase())
            .collect();
        LexiconTagger {
            verbs,
            function_words,
        }
    }

    fn is_verb(&self, stem: &str) -> bool {
        if self.verbs.contains(stem) {
            return true;
        }
        // Recover the base of an already-inflected gerund: dancing -> dance,
        // swimming -> swim, watching -> watch.
        if let Some(base) = stem.strip_suffix("ing") {
            if self.verbs.contains(base) {
                return true;
            }
            if self.verbs.contains(&format!("{}e", base)) {
                return true;
            }
            let chars: Vec<char> = base.chars().collect();
            if chars.len() >= 2 && chars[chars.len() - 1] == chars[chars.len() - 2] {
                let undoubled: String = chars[..chars.len() - 1].iter().collect();
                if self.verbs.contains(&undoubled) {
                    return true;
                }
            }
        }
        false
    }

    fn classify(&self, chunk: &str) -> PartOfSpeech {
        let stem = match RE_WORD.find(chunk) {
            Some(m) => m.as_str().to_lowercase(),
            None => return PartOfSpeech::Other,
        };
        if self.function_words.contains(&stem) {
            return PartOfSpeech::Other;
        }
        if self.is_verb(&stem) {
            return PartOfSpeech::Verb;
        }
        let capitalized = chunk
            .chars()
            .find(|c| c.is_alphabetic())
            .is_some_and(|c| c.is_uppercase());
        if capitalized {
            PartOfSpeech::Propn
        } else {
            PartOfSpeech::Noun
        }
    }
}

impl Default for LexiconTagger {
    fn default() -> Self {
        LexiconTagger::new(&Config::default())
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, text: &str) -> Vec<Token> {
        let text: String = text.nfkc().collect();
        text.split_whitespace()
            .map(|chunk| Token {
                text: chunk.to_string(),
                pos: self.classify(chunk),
            })
            .collect()
    }
}
