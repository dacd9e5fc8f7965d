pub mod capitalize;
pub mod config;
pub mod gerund;
pub mod hobby;
pub mod intro;
pub mod pos;
pub mod profile;

use config::Config;
use intro::IntroStyle;
use pos::Tagger;
use profile::StudentProfile;

pub fn capitalize(text: &str, tagger: &dyn Tagger) -> String {
    capitalize::capitalize_proper_nouns(text, tagger)
}

pub fn format_list(phrases: &[String], tagger: &dyn Tagger, config: &Config) -> String {
    hobby::format_hobby_list(phrases, tagger, config)
}

pub fn render_intro(
    profile: &StudentProfile,
    style: IntroStyle,
    tagger: &dyn Tagger,
    config: &Config,
) -> String {
    intro::render(profile, style, tagger, config)
}
