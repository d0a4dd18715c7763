use crate::{
    content::Language,
    section::{Card, Entrance, EntranceMotion, Section, SectionContainer, SectionLayout},
};

pub fn languages_section(languages: &[Language], reveal_margin: f32) -> Section {
    let cards = languages
        .iter()
        .enumerate()
        .map(|(index, language)| {
            Card::new(
                language.language.to_lowercase(),
                language.language,
                Entrance::staggered(index, EntranceMotion::Rise),
            )
            .meta(language.proficiency)
        })
        .collect();

    Section {
        container: SectionContainer::new("languages", "Languages", reveal_margin),
        layout: SectionLayout::Grid,
        cards,
    }
}
