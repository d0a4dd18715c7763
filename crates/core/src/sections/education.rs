use crate::{
    content::EducationEntry,
    section::{
        Card, CardBlock, Entrance, EntranceMotion, Section, SectionContainer, SectionLayout,
    },
};

pub fn education_section(entries: &[EducationEntry], reveal_margin: f32) -> Section {
    let cards = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let card = Card::new(
                entry.id,
                entry.degree,
                Entrance::staggered(index, EntranceMotion::SlideFromLeft),
            )
            .subheading(entry.institution)
            .meta(entry.year);
            match entry.description {
                Some(text) => card.block(CardBlock::Paragraph {
                    text: text.to_string(),
                }),
                None => card,
            }
        })
        .collect();

    Section {
        container: SectionContainer::new("education", "Education", reveal_margin),
        layout: SectionLayout::Stack,
        cards,
    }
}
