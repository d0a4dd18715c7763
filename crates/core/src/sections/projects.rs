use crate::{
    content::Project,
    section::{
        Card, CardBlock, Entrance, EntranceMotion, Section, SectionContainer, SectionLayout,
    },
};

pub fn projects_section(projects: &[Project], reveal_margin: f32) -> Section {
    let cards = projects
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let mut card = Card::new(
                project.id,
                project.title,
                Entrance::staggered(index, EntranceMotion::Rise),
            )
            .subheading(project.role)
            .meta(project.year)
            .link(project.link)
            .block(CardBlock::Paragraph {
                text: project.description.to_string(),
            })
            .block(CardBlock::Tags {
                items: to_strings(project.technologies),
            });
            if !project.features.is_empty() {
                card = card.block(CardBlock::Features {
                    heading: "Key Features:".to_string(),
                    items: to_strings(project.features),
                });
            }
            card
        })
        .collect();

    Section {
        container: SectionContainer::new("projects", "Projects", reveal_margin),
        layout: SectionLayout::Stack,
        cards,
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &'static str, link: Option<&'static str>, features: &'static [&'static str]) -> Project {
        Project {
            id,
            title: "Title",
            role: "Role",
            year: "2024",
            description: "Description",
            technologies: &["Rust", "Canvas"],
            link,
            features,
        }
    }

    #[test]
    fn optional_link_and_features() {
        let projects = [
            project("with", Some("https://example.com"), &["Fast"]),
            project("without", None, &[]),
        ];
        let section = projects_section(&projects, 50.0);

        let full = &section.cards[0];
        assert_eq!(full.link.as_deref(), Some("https://example.com"));
        assert!(full
            .blocks
            .iter()
            .any(|b| matches!(b, CardBlock::Features { .. })));

        let bare = &section.cards[1];
        assert!(bare.link.is_none());
        assert!(!bare
            .blocks
            .iter()
            .any(|b| matches!(b, CardBlock::Features { .. })));
    }

    #[test]
    fn technologies_keep_their_order() {
        let section = projects_section(&[project("p", None, &[])], 50.0);
        let tags = section.cards[0].blocks.iter().find_map(|b| match b {
            CardBlock::Tags { items } => Some(items.clone()),
            _ => None,
        });
        assert_eq!(tags, Some(vec!["Rust".to_string(), "Canvas".to_string()]));
    }
}
