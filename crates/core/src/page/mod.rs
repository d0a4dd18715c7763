//! Whole-page composition: hero, content sections, the spectrum band and
//! the static assets they reference.

mod hero;
pub mod html;
mod runtime;

pub use hero::{DownloadButton, GhostLayer, GlitchText, Hero, WallLetter};
pub use runtime::PageRuntime;

use crate::{
    assets::AssetManifest,
    atmosphere::Atmosphere,
    config::{AppConfig, VisualizerStyleKind},
    content::{ContentStore, ResumeProfile},
    section::{Bounds, ScrollViewport, Section},
    sections::build_sections,
    Result,
};

/// Canvas strip pinned to the bottom of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualizerBand {
    pub style: VisualizerStyleKind,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub profile: ResumeProfile,
    pub hero: Hero,
    pub sections: Vec<Section>,
    pub visualizer: VisualizerBand,
    pub assets: AssetManifest,
    pub atmosphere: Atmosphere,
}

impl Page {
    pub fn compose(config: &AppConfig, content: &ContentStore<'_>) -> Result<Self> {
        config.validate()?;
        let assets = AssetManifest::from_config(&config.assets)?;

        if content.profile.document_link != assets.document.path {
            tracing::warn!(
                profile = content.profile.document_link,
                configured = %assets.document.path,
                "profile document link differs from configured asset; using the asset"
            );
        }
        for (category, skill) in content.out_of_range_skills() {
            tracing::warn!(
                category,
                skill = skill.name,
                level = skill.level,
                "skill level out of range"
            );
        }

        let page = Self {
            profile: *content.profile,
            hero: Hero::new(content.profile, &assets.document.path),
            sections: build_sections(content, config.viewport.reveal_margin),
            visualizer: VisualizerBand {
                style: config.visualizer.style,
                width: config.viewport.width,
                height: config.visualizer.height,
            },
            atmosphere: Atmosphere::generate(&config.viewport, config.atmosphere.seed),
            assets,
        };
        tracing::info!(
            sections = page.sections.len(),
            cards = page.card_count(),
            "composed page"
        );
        Ok(page)
    }

    pub fn card_count(&self) -> usize {
        self.sections.iter().map(|s| s.cards.len()).sum()
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.container.id == id)
    }

    /// Feeds a scroll position to every section. `bounds` lists the sections'
    /// layout boxes in page order; sections without one are skipped.
    /// Returns how many sections were revealed by this call.
    pub fn observe_scroll(
        &mut self,
        viewport: ScrollViewport,
        bounds: &[Bounds],
        now: f32,
    ) -> usize {
        let mut revealed = 0;
        for (section, b) in self.sections.iter_mut().zip(bounds) {
            if section.container.reveal.observe(viewport, *b, now) {
                tracing::debug!(section = section.container.id, "section revealed");
                revealed += 1;
            }
        }
        revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        let config = AppConfig {
            atmosphere: crate::config::AtmosphereConfig { seed: Some(5) },
            ..Default::default()
        };
        Page::compose(&config, &ContentStore::builtin()).unwrap()
    }

    #[test]
    fn compose_collects_every_section() {
        let page = page();
        let store = ContentStore::builtin();
        assert_eq!(page.sections.len(), 6);
        assert_eq!(page.section("projects").unwrap().cards.len(), store.projects.len());
        assert_eq!(page.hero.download.href, "/cv.pdf");
        assert_eq!(page.visualizer.width, 1280);
        assert_eq!(page.visualizer.height, 96);
        assert_eq!(page.atmosphere.seed, 5);
    }

    #[test]
    fn band_spans_the_viewport() {
        let mut config = AppConfig::default();
        config.viewport.width = 2_560;
        let page = Page::compose(&config, &ContentStore::builtin()).unwrap();
        assert_eq!(page.visualizer.width, 2_560);

        config.viewport.width = 0;
        assert!(Page::compose(&config, &ContentStore::builtin()).is_err());
    }

    #[test]
    fn invalid_config_is_refused() {
        let config = AppConfig {
            audio: crate::AudioConfig {
                fft_size: 3,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(Page::compose(&config, &ContentStore::builtin()).is_err());
    }

    #[test]
    fn sections_reveal_as_they_scroll_in() {
        let mut page = page();
        let bounds: Vec<Bounds> = (0..page.sections.len())
            .map(|i| Bounds {
                top: 900.0 + i as f32 * 600.0,
                height: 500.0,
            })
            .collect();

        let viewport = |scroll_top| ScrollViewport {
            scroll_top,
            height: 800.0,
        };
        assert_eq!(page.observe_scroll(viewport(0.0), &bounds, 0.0), 0);
        assert_eq!(page.observe_scroll(viewport(400.0), &bounds, 1.0), 1);
        // Scrolling back up never hides a section again.
        assert_eq!(page.observe_scroll(viewport(0.0), &bounds, 2.0), 0);
        assert!(page.sections[0].container.reveal.is_revealed());
        assert!(!page.sections[1].container.reveal.is_revealed());
    }
}
