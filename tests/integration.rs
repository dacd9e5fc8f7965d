use introgen::config::Config;
use introgen::intro::IntroStyle;
use introgen::pos::LexiconTagger;
use introgen::profile::StudentProfile;

fn sample_profile_json() -> &'static str {
    r#"{
        "greeting": "Good Evening",
        "title": "Mx",
        "name": "Rohan Das",
        "age": 19,
        "date_of_birth": "2005-11-02",
        "admission_year": 2023,
        "graduation_year": 2028,
        "hometown": "Sambalpur",
        "pincode": "768001",
        "matriculation": {
            "school": "government high school",
            "city": "Sambalpur",
            "affiliation": "HSC",
            "year": 2021,
            "percentage": "89%"
        },
        "intermediate": {
            "school": "gangadhar meher junior college",
            "city": "Sambalpur",
            "affiliation": "CHSE",
            "year": 2023,
            "percentage": "86%"
        },
        "entrance_year": 2023,
        "entrance_percentile": "95.6%",
        "why_college": "the campus community is welcoming",
        "goals": "build scientific instruments",
        "fun_fact": "I once cycled 100 km in a day",
        "hobbies": ["Cricket", "play football", "to sing", "Painting"]
    }"#
}

fn load_profile() -> StudentProfile {
    let tagger = LexiconTagger::default();
    let mut profile: StudentProfile = serde_json::from_str(sample_profile_json()).unwrap();
    profile.normalize(&tagger);
    profile
}

#[test]
fn test_full_profile_renders_both_styles() {
    let tagger = LexiconTagger::default();
    let config = Config::default();
    let profile = load_profile();
    assert!(profile.missing_fields().is_empty());

    let casual = introgen::render_intro(&profile, IntroStyle::Casual, &tagger, &config);
    assert!(casual.starts_with("Good Evening everyone"));
    assert!(casual.contains(
        "I like Cricket, Playing football, Singing, and Painting in my free time."
    ));
    assert!(casual.contains("A fun fact about me is: I once cycled 100 km in a day."));

    let professional =
        introgen::render_intro(&profile, IntroStyle::Professional, &tagger, &config);
    assert!(professional.contains("My name is Mx Rohan Das. I was born on 2nd November 2005."));
    assert!(professional.contains(
        "I have completed my matriculation from Government High School, Sambalpur, \
         affiliated to HSC in 2021 with 89%."
    ));
    assert!(professional.contains(
        "I have completed my intermediate from Gangadhar Meher Junior College, Sambalpur, \
         affiliated to CHSE in 2023 with 86%."
    ));
    assert!(professional
        .contains("I appeared in the JEE/OJEE in 2023 and secured a percentile of 95.6%."));
    assert!(professional
        .contains("My hobbies include Cricket, Playing football, Singing, and Painting."));
}

#[test]
fn test_incomplete_profile_lists_missing_fields() {
    let mut profile = load_profile();
    profile.goals = String::new();
    profile.hobbies = vec!["   ".to_string()];
    assert_eq!(profile.missing_fields(), vec!["goals", "hobbies"]);
}

#[test]
fn test_hobby_pipeline_with_custom_config() {
    let tagger = LexiconTagger::default();
    let config: Config = serde_json::from_str(
        r#"{"irregular_verbs": {"run": "running", "jam": "jamming"}}"#,
    )
    .unwrap();
    let hobbies = vec!["to jam".to_string(), "Chess".to_string()];
    assert_eq!(
        introgen::format_list(&hobbies, &tagger, &config),
        "Jamming, and Chess"
    );
}

#[test]
fn test_capitalize_survives_roundtrip_through_profile() {
    let profile = load_profile();
    let tagger = LexiconTagger::default();
    // Normalization already capitalized the school name; running the
    // capitalizer again must not change it.
    assert_eq!(
        introgen::capitalize(&profile.matriculation.school, &tagger),
        profile.matriculation.school
    );
}
