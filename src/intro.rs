use crate::config::Config;
use crate::hobby::format_hobby_list;
use crate::pos::Tagger;
use crate::profile::StudentProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroStyle {
    Casual,
    Professional,
}

pub fn render(
    profile: &StudentProfile,
    style: IntroStyle,
    tagger: &dyn Tagger,
    config: &Config,
) -> String {
    let hobbies_text = format_hobby_list(&profile.hobbies, tagger, config);
    match style {
        IntroStyle::Casual => render_casual(profile, &hobbies_text),
        IntroStyle::Professional => render_professional(profile, &hobbies_text),
    }
}

fn render_casual(p: &StudentProfile, hobbies_text: &str) -> String {
    let lines = vec![
        format!("{} everyone 👋", p.greeting),
        format!(
            "I'm {}, {} years old, currently pursuing {} at {}.",
            p.name, p.age, p.department, p.college_name
        ),
        format!("I like {} in my free time.", hobbies_text),
        format!("I chose this college because {}.", p.why_college),
        format!("In the future, I want to {}.", p.goals),
        format!("A fun fact about me is: {}.", p.fun_fact),
    ];
    lines.join("\n")
}

fn render_professional(p: &StudentProfile, hobbies_text: &str) -> String {
    let lines = vec![
        format!("{} sir/madam,", p.greeting),
        String::new(),
        format!(
            "My name is {} {}. I was born on {}. I am from {}, postal index number {}.",
            p.title,
            p.name,
            p.date_of_birth_in_words(),
            p.hometown,
            p.pincode
        ),
        String::new(),
        format!(
            "I have completed my matriculation from {}, {}, affiliated to {} in {} with {}%.",
            p.matriculation.school,
            p.matriculation.city,
            p.matriculation.affiliation,
            p.matriculation.year,
            p.matriculation.percentage
        ),
        String::new(),
        format!(
            "I have completed my intermediate from {}, {}, affiliated to {} in {} with {}%.",
            p.intermediate.school,
            p.intermediate.city,
            p.intermediate.affiliation,
            p.intermediate.year,
            p.intermediate.percentage
        ),
        String::new(),
        format!(
            "I appeared in the JEE/OJEE in {} and secured a percentile of {}%.",
            p.entrance_year, p.entrance_percentile
        ),
        String::new(),
        format!(
            "Currently, I am pursuing {} at {}.",
            p.department, p.college_name
        ),
        format!("My hobbies include {}.", hobbies_text),
        String::new(),
        format!("I chose this college because {}.", p.why_college),
        format!("In the future, I aim to {}.", p.goals),
        "Thank you seniors for giving me this opportunity.".to_string(),
    ];
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos::LexiconTagger;

    fn sample_profile() -> StudentProfile {
        let mut profile: StudentProfile = serde_json::from_str(
            r#"{
                "greeting": "Good Morning",
                "title": "Ms",
                "name": "Asha Rout",
                "age": 18,
                "date_of_birth": "2006-03-21",
                "admission_year": 2024,
                "graduation_year": 2029,
                "hometown": "Bhubaneswar",
                "pincode": "751001",
                "matriculation": {
                    "school": "delhi public school",
                    "city": "Bhubaneswar",
                    "affiliation": "CBSE",
                    "year": 2022,
                    "percentage": "95%"
                },
                "intermediate": {
                    "school": "sai international school",
                    "city": "Bhubaneswar",
                    "affiliation": "CBSE",
                    "year": 2024,
                    "percentage": "91"
                },
                "entrance_year": 2024,
                "entrance_percentile": "98.4",
                "why_college": "of its research culture",
                "goals": "work on quantum computing",
                "fun_fact": "I have memorized 100 digits of pi",
                "hobbies": ["Chess", "play football", "Painting"]
            }"#,
        )
        .unwrap();
        profile.normalize(&LexiconTagger::default());
        profile
    }

    #[test]
    fn test_casual_intro() {
        let out = render(
            &sample_profile(),
            IntroStyle::Casual,
            &LexiconTagger::default(),
            &Config::default(),
        );
        assert!(out.starts_with("Good Morning everyone"));
        assert!(out.contains(
            "I'm Asha Rout, 18 years old, currently pursuing Integrated Masters of Physics \
             at Odisha University of Technology and Research."
        ));
        assert!(out.contains("I like Chess, Playing football, and Painting in my free time."));
        assert!(out.contains("I chose this college because of its research culture."));
        assert!(out.contains("In the future, I want to work on quantum computing."));
    }

    #[test]
    fn test_professional_intro() {
        let out = render(
            &sample_profile(),
            IntroStyle::Professional,
            &LexiconTagger::default(),
            &Config::default(),
        );
        assert!(out.starts_with("Good Morning sir/madam,"));
        assert!(out.contains("My name is Ms Asha Rout. I was born on 21st March 2006."));
        assert!(out.contains("I am from Bhubaneswar, postal index number 751001."));
        assert!(out.contains(
            "I have completed my matriculation from Delhi Public School, Bhubaneswar, \
             affiliated to CBSE in 2022 with 95%."
        ));
        assert!(out.contains("secured a percentile of 98.4%."));
        assert!(out.contains("My hobbies include Chess, Playing football, and Painting."));
        assert!(out.ends_with("Thank you seniors for giving me this opportunity."));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let profile = sample_profile();
        let tagger = LexiconTagger::default();
        let config = Config::default();
        let a = render(&profile, IntroStyle::Professional, &tagger, &config);
        let b = render(&profile, IntroStyle::Professional, &tagger, &config);
        assert_eq!(a, b);
    }
}
