//! Static HTML rendering of a composed [`Page`].
//!
//! Markup lives in `templates/page.html`; askama escapes every interpolated
//! value, so content tables can carry any text.

use askama::Template;

use crate::{section::CardBlock, Result};

use super::Page;

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    page: &'a Page,
}

/// Renders the full document.
pub fn render(page: &Page) -> Result<String> {
    let document = PageTemplate { page }.render()?;
    tracing::debug!(bytes = document.len(), "rendered page");
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, content::ContentStore};

    fn page() -> Page {
        Page::compose(&AppConfig::default(), &ContentStore::builtin()).unwrap()
    }

    fn rendered() -> String {
        render(&page()).unwrap()
    }

    #[test]
    fn content_text_is_escaped() {
        let mut page = page();
        let card = &mut page.sections[0].cards[0];
        card.key = "k\"1".to_string();
        card.blocks.push(CardBlock::Paragraph {
            text: "<script>alert('x')</script> R&D".to_string(),
        });

        let html = render(&page).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&#60;script&#62;alert(&#39;x&#39;)&#60;/script&#62; R&#38;D"));
        assert!(html.contains("data-key=\"k&#34;1\""));
    }

    #[test]
    fn page_has_looping_audio_and_safe_download() {
        let html = rendered();
        assert!(html.contains("<audio id=\"background-audio\" loop"));
        assert!(html.contains("src=\"/audio.mp3\" type=\"audio/mpeg\""));
        assert!(html.contains(
            "class=\"download\" href=\"/cv.pdf\" target=\"_blank\" rel=\"noopener noreferrer\""
        ));
        assert!(html.contains("class=\"visualizer vine\" width=\"1280\" height=\"96\""));
    }

    #[test]
    fn hero_carries_ghosts_and_energy_line() {
        let html = rendered();
        assert_eq!(html.matches("class=\"glitch-ghost\"").count(), 2);
        assert!(html.contains("style=\"color:#dc2626\""));
        assert!(html.contains("data-duration=\"2\" data-repeat-delay=\"3\""));
        assert!(html.contains("<span data-delay=\"0.6\">N</span>"));
    }

    #[test]
    fn renders_one_article_per_card_in_order() {
        let page = page();
        let html = render(&page).unwrap();
        assert_eq!(html.matches("<article").count(), page.card_count());

        let store = ContentStore::builtin();
        let positions: Vec<usize> = store
            .experience
            .iter()
            .map(|entry| html.find(&format!("data-key=\"{}\"", entry.id)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn skill_bars_carry_width_and_label() {
        let html = rendered();
        let store = ContentStore::builtin();
        for skill in store.skills.iter().flat_map(|c| c.skills) {
            let level = skill.level.clamp(0, 100);
            assert!(html.contains(&format!("style=\"width:{level}%\"")));
            assert!(html.contains(&format!("<span class=\"level\">{level}%</span>")));
        }
    }

    #[test]
    fn external_project_links_open_in_new_context() {
        let html = rendered();
        let store = ContentStore::builtin();
        for link in store.projects.iter().filter_map(|p| p.link) {
            assert!(html.contains(&format!(
                "href=\"{link}\" target=\"_blank\" rel=\"noopener noreferrer\""
            )));
        }
    }
}
