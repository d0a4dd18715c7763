//! Static résumé content.
//!
//! Every record is a compile-time literal. Nothing here is created, mutated
//! or destroyed after start-up; the `id` strings only serve as render keys.

mod data;

use serde::Serialize;

pub use data::{
    AWARDS_DATA, EDUCATION_DATA, EXPERIENCE_DATA, LANGUAGES_DATA, PROJECTS_DATA, RESUME_DATA,
    SKILLS_DATA,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResumeProfile {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub website: &'static str,
    pub location: &'static str,
    /// Downloadable document, opened in a new browsing context.
    pub document_link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EducationEntry {
    pub id: &'static str,
    pub degree: &'static str,
    pub institution: &'static str,
    pub year: &'static str,
    pub description: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExperienceEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub duration: &'static str,
    pub responsibilities: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    /// Percentage used directly as the bar width. Nothing stops a literal
    /// from leaving 0..=100; see [`ContentStore::out_of_range_skills`].
    pub level: i32,
}

impl Skill {
    pub fn level_in_range(&self) -> bool {
        (0..=100).contains(&self.level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub category: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Award {
    pub id: &'static str,
    pub title: &'static str,
    pub year: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub role: &'static str,
    pub year: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub link: Option<&'static str>,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub language: &'static str,
    /// Free-text label such as "C1" or "Native Speaker".
    pub proficiency: &'static str,
}

/// Read-only bundle of every content table. Slice order is display order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContentStore<'a> {
    pub profile: &'a ResumeProfile,
    pub experience: &'a [ExperienceEntry],
    pub education: &'a [EducationEntry],
    pub skills: &'a [SkillCategory],
    pub projects: &'a [Project],
    pub awards: &'a [Award],
    pub languages: &'a [Language],
}

impl ContentStore<'static> {
    /// The tables compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            profile: &RESUME_DATA,
            experience: EXPERIENCE_DATA,
            education: EDUCATION_DATA,
            skills: SKILLS_DATA,
            projects: PROJECTS_DATA,
            awards: AWARDS_DATA,
            languages: LANGUAGES_DATA,
        }
    }
}

impl<'a> ContentStore<'a> {
    /// Skills whose level falls outside 0..=100, paired with their category.
    pub fn out_of_range_skills(&self) -> Vec<(&'a str, &'a Skill)> {
        self.skills
            .iter()
            .flat_map(|category| {
                category
                    .skills
                    .iter()
                    .filter(|skill| !skill.level_in_range())
                    .map(move |skill| (category.category, skill))
            })
            .collect()
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
