use crate::capitalize::capitalize_proper_nouns;
use crate::pos::Tagger;
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SchoolRecord {
    pub school: String,
    pub city: String,
    pub affiliation: String,
    #[serde(default)]
    pub year: u32,
    pub percentage: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentProfile {
    pub greeting: String,
    pub title: String,
    pub name: String,
    #[serde(default)]
    pub age: u32,
    pub date_of_birth: NaiveDate,
    #[serde(default = "default_department")]
    pub department: String,
    #[serde(default = "default_college_name")]
    pub college_name: String,
    #[serde(default)]
    pub admission_year: u32,
    #[serde(default)]
    pub graduation_year: u32,
    pub hometown: String,
    pub pincode: String,
    pub matriculation: SchoolRecord,
    pub intermediate: SchoolRecord,
    #[serde(default)]
    pub entrance_year: u32,
    pub entrance_percentile: String,
    pub why_college: String,
    pub goals: String,
    pub fun_fact: String,
    #[serde(default)]
    pub hobbies: Vec<String>,
}

fn default_department() -> String {
    "Integrated Masters of Physics".to_string()
}

fn default_college_name() -> String {
    "Odisha University of Technology and Research".to_string()
}

pub fn ordinal(n: u32) -> String {
    let suffix = if (10..=20).contains(&(n % 100)) {
        "th"
    } else {
        match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{}{}", n, suffix)
}

fn strip_percent(text: &str) -> String {
    text.replace('%', "").trim().to_string()
}

impl SchoolRecord {
    fn normalize(&mut self, tagger: &dyn Tagger) {
        self.school = capitalize_proper_nouns(&self.school, tagger);
        self.percentage = strip_percent(&self.percentage);
    }
}

impl StudentProfile {
    /// Tidy user-entered text: school names get proper-noun capitalization,
    /// marks and percentile lose any "%" the user typed in.
    pub fn normalize(&mut self, tagger: &dyn Tagger) {
        self.matriculation.normalize(tagger);
        self.intermediate.normalize(tagger);
        self.entrance_percentile = strip_percent(&self.entrance_percentile);
    }

    /// Date of birth in words, e.g. "5th January 2005".
    pub fn date_of_birth_in_words(&self) -> String {
        format!(
            "{} {}",
            ordinal(self.date_of_birth.day()),
            self.date_of_birth.format("%B %Y")
        )
    }

    /// Names of fields that are still blank or zero, in declaration order.
    /// Empty means the profile is complete enough to render.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        let mut check = |name: &'static str, filled: bool| {
            if !filled {
                missing.push(name);
            }
        };

        check("greeting", !self.greeting.trim().is_empty());
        check("title", !self.title.trim().is_empty());
        check("name", !self.name.trim().is_empty());
        check("age", self.age > 0);
        check("admission_year", self.admission_year > 0);
        check("graduation_year", self.graduation_year > 0);
        check("hometown", !self.hometown.trim().is_empty());
        check("pincode", !self.pincode.trim().is_empty());
        check(
            "matriculation.school",
            !self.matriculation.school.trim().is_empty(),
        );
        check(
            "matriculation.city",
            !self.matriculation.city.trim().is_empty(),
        );
        check(
            "matriculation.affiliation",
            !self.matriculation.affiliation.trim().is_empty(),
        );
        check("matriculation.year", self.matriculation.year > 0);
        check(
            "matriculation.percentage",
            !self.matriculation.percentage.trim().is_empty(),
        );
        check(
            "intermediate.school",
            !self.intermediate.school.trim().is_empty(),
        );
        check(
            "intermediate.city",
            !self.intermediate.city.trim().is_empty(),
        );
        check(
            "intermediate.affiliation",
            !self.intermediate.affiliation.trim().is_empty(),
        );
        check("intermediate.year", self.intermediate.year > 0);
        check(
            "intermediate.percentage",
            !self.intermediate.percentage.trim().is_empty(),
        );
        check("entrance_year", self.entrance_year > 0);
        check(
            "entrance_percentile",
            !self.entrance_percentile.trim().is_empty(),
        );
        check("why_college", !self.why_college.trim().is_empty());
        check("goals", !self.goals.trim().is_empty());
        check("fun_fact", !self.fun_fact.trim().is_empty());
        check(
            "hobbies",
            self.hobbies.iter().any(|h| !h.trim().is_empty()),
        );

        missing
    }
}
