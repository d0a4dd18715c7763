use crate::{
    content::Award,
    section::{
        Card, CardBlock, Entrance, EntranceMotion, Section, SectionContainer, SectionLayout,
    },
};

pub fn awards_section(awards: &[Award], reveal_margin: f32) -> Section {
    let cards = awards
        .iter()
        .enumerate()
        .map(|(index, award)| {
            Card::new(
                award.id,
                award.title,
                Entrance::staggered(index, EntranceMotion::Grow),
            )
            .meta(award.year)
            .block(CardBlock::Paragraph {
                text: award.description.to_string(),
            })
        })
        .collect();

    Section {
        container: SectionContainer::new("awards", "Awards & Achievements", reveal_margin),
        layout: SectionLayout::Grid,
        cards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::AWARDS_DATA;

    #[test]
    fn one_growing_card_per_award() {
        let section = awards_section(AWARDS_DATA, 50.0);
        assert_eq!(section.cards.len(), AWARDS_DATA.len());
        assert_eq!(section.layout, SectionLayout::Grid);
        assert!(section
            .cards
            .iter()
            .all(|c| c.entrance.motion == EntranceMotion::Grow));
        assert_eq!(section.cards[1].heading, AWARDS_DATA[1].title);
    }
}
