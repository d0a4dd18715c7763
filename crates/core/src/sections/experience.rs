use crate::{
    content::ExperienceEntry,
    section::{
        Card, CardBlock, Entrance, EntranceMotion, Section, SectionContainer, SectionLayout,
    },
};

pub fn experience_section(entries: &[ExperienceEntry], reveal_margin: f32) -> Section {
    let cards = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            Card::new(
                entry.id,
                entry.title,
                Entrance::staggered(index, EntranceMotion::SlideFromLeft),
            )
            .subheading(entry.organization)
            .meta(entry.duration)
            .block(CardBlock::Bullets {
                items: entry
                    .responsibilities
                    .iter()
                    .map(|r| r.to_string())
                    .collect(),
            })
        })
        .collect();

    Section {
        container: SectionContainer::new("experience", "Experience", reveal_margin),
        layout: SectionLayout::Stack,
        cards,
    }
}
