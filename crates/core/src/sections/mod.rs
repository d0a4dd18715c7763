//! Content sections: one card per entry of the matching content table, in
//! table order.

mod awards;
mod education;
mod experience;
mod languages;
mod projects;
mod skills;

pub use awards::awards_section;
pub use education::education_section;
pub use experience::experience_section;
pub use languages::languages_section;
pub use projects::projects_section;
pub use skills::{skill_bar, skills_section};

use crate::{content::ContentStore, section::Section};

/// Every section in page order.
pub fn build_sections(store: &ContentStore<'_>, reveal_margin: f32) -> Vec<Section> {
    vec![
        experience_section(store.experience, reveal_margin),
        education_section(store.education, reveal_margin),
        skills_section(store.skills, reveal_margin),
        projects_section(store.projects, reveal_margin),
        awards_section(store.awards, reveal_margin),
        languages_section(store.languages, reveal_margin),
    ]
}
