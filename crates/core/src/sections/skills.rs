use crate::{
    content::{Skill, SkillCategory},
    section::{
        Card, CardBlock, Entrance, EntranceMotion, Section, SectionContainer, SectionLayout,
        SkillBar, STAGGER_SECONDS,
    },
};

/// Builds the bar for one skill.
///
/// The fill width equals the level for levels within 0..=100. Levels outside
/// that range are clamped to the nearest bound and logged.
pub fn skill_bar(skill: &Skill, delay: f32) -> SkillBar {
    if !skill.level_in_range() {
        tracing::warn!(
            skill = skill.name,
            level = skill.level,
            "skill level outside 0..=100; clamping"
        );
    }
    let fill_percent = skill.level.clamp(0, 100) as u8;
    SkillBar {
        name: skill.name.to_string(),
        level: skill.level,
        fill_percent,
        label: format!("{fill_percent}%"),
        delay,
    }
}

pub fn skills_section(categories: &[SkillCategory], reveal_margin: f32) -> Section {
    let cards = categories
        .iter()
        .enumerate()
        .map(|(cat_index, category)| {
            let entrance = Entrance::staggered(cat_index, EntranceMotion::Rise);
            let bars = category
                .skills
                .iter()
                .enumerate()
                .map(|(skill_index, skill)| {
                    skill_bar(skill, entrance.delay + skill_index as f32 * STAGGER_SECONDS)
                })
                .collect();
            Card::new(category.category, category.category, entrance)
                .block(CardBlock::SkillBars { bars })
        })
        .collect();

    Section {
        container: SectionContainer::new("skills", "Skills", reveal_margin),
        layout: SectionLayout::Stack,
        cards,
    }
}
