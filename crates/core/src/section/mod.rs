//! Scroll-revealed section container and the card view model every content
//! section renders into.

use serde::Serialize;

use crate::motion::{lerp, Easing, Transition};

/// Delay between consecutive cards of one section.
pub const STAGGER_SECONDS: f32 = 0.1;

const REVEAL_SECONDS: f32 = 0.8;
const HIDDEN_OFFSET_PX: f32 = 50.0;
const HIDDEN_BLUR_PX: f32 = 5.0;
const CARD_OFFSET_PX: f32 = 20.0;
const CARD_HIDDEN_SCALE: f32 = 0.9;
const CARD_SECONDS: f32 = 0.3;

/// Vertical extent of an element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub top: f32,
    pub height: f32,
}

impl Bounds {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Visible slice of the document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollViewport {
    pub scroll_top: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevealStyle {
    pub opacity: f32,
    pub offset_y: f32,
    pub blur: f32,
}

/// One-way visibility latch: hidden until first scrolled into view, visible
/// forever after.
#[derive(Debug, Clone, PartialEq)]
pub struct Reveal {
    margin: f32,
    transition: Transition,
    revealed_at: Option<f32>,
}

impl Reveal {
    pub fn new(margin: f32, delay: f32) -> Self {
        Self {
            margin,
            transition: Transition::once(REVEAL_SECONDS)
                .with_delay(delay)
                .with_ease(Easing::EaseOut),
            revealed_at: None,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed_at.is_some()
    }

    pub fn revealed_at(&self) -> Option<f32> {
        self.revealed_at
    }

    /// Checks the element against the viewport shrunk by the margin on both
    /// edges. Returns true only on the call that reveals it.
    pub fn observe(&mut self, viewport: ScrollViewport, bounds: Bounds, now: f32) -> bool {
        if self.revealed_at.is_some() {
            return false;
        }
        let visible_top = viewport.scroll_top + self.margin;
        let visible_bottom = viewport.scroll_top + viewport.height - self.margin;
        if bounds.top < visible_bottom && bounds.bottom() > visible_top {
            self.revealed_at = Some(now);
            return true;
        }
        false
    }

    pub fn style_at(&self, now: f32) -> RevealStyle {
        let progress = match self.revealed_at {
            None => 0.0,
            Some(start) => self
                .transition
                .ease
                .apply(self.transition.progress(now - start)),
        };
        RevealStyle {
            opacity: progress,
            offset_y: lerp(HIDDEN_OFFSET_PX, 0.0, progress),
            blur: lerp(HIDDEN_BLUR_PX, 0.0, progress),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionContainer {
    pub id: &'static str,
    pub title: &'static str,
    pub reveal: Reveal,
}

impl SectionContainer {
    pub fn new(id: &'static str, title: &'static str, margin: f32) -> Self {
        Self {
            id,
            title,
            reveal: Reveal::new(margin, 0.0),
        }
    }
}

/// How a card slides in once its section is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntranceMotion {
    SlideFromLeft,
    Rise,
    Grow,
}

impl EntranceMotion {
    pub fn css_class(self) -> &'static str {
        match self {
            EntranceMotion::SlideFromLeft => "slide",
            EntranceMotion::Rise => "rise",
            EntranceMotion::Grow => "grow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Entrance {
    pub delay: f32,
    pub motion: EntranceMotion,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardStyle {
    pub opacity: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl Entrance {
    /// Entrance for the card at `index`, delayed proportionally to it.
    pub fn staggered(index: usize, motion: EntranceMotion) -> Self {
        Self {
            delay: index as f32 * STAGGER_SECONDS,
            motion,
        }
    }

    /// Style `elapsed` seconds after the owning section was revealed.
    pub fn style_at(&self, elapsed: f32) -> CardStyle {
        let transition = Transition::once(CARD_SECONDS).with_delay(self.delay);
        let p = Easing::EaseOut.apply(transition.progress(elapsed));
        let hidden = 1.0 - p;
        match self.motion {
            EntranceMotion::SlideFromLeft => CardStyle {
                opacity: p,
                offset_x: -CARD_OFFSET_PX * hidden,
                offset_y: 0.0,
                scale: 1.0,
            },
            EntranceMotion::Rise => CardStyle {
                opacity: p,
                offset_x: 0.0,
                offset_y: CARD_OFFSET_PX * hidden,
                scale: 1.0,
            },
            EntranceMotion::Grow => CardStyle {
                opacity: p,
                offset_x: 0.0,
                offset_y: 0.0,
                scale: lerp(CARD_HIDDEN_SCALE, 1.0, p),
            },
        }
    }
}

/// Horizontal bar showing a skill level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillBar {
    pub name: String,
    /// Level as written in the content table.
    pub level: i32,
    /// Bar width in percent of the track, always within 0..=100.
    pub fill_percent: u8,
    pub label: String,
    pub delay: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardBlock {
    Paragraph { text: String },
    Bullets { items: Vec<String> },
    Tags { items: Vec<String> },
    Features { heading: String, items: Vec<String> },
    SkillBars { bars: Vec<SkillBar> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    /// Render key, unique within the section.
    pub key: String,
    pub heading: String,
    pub subheading: Option<String>,
    pub meta: Option<String>,
    /// External link opened in a new browsing context.
    pub link: Option<String>,
    pub blocks: Vec<CardBlock>,
    pub entrance: Entrance,
}

impl Card {
    pub fn new(key: impl Into<String>, heading: impl Into<String>, entrance: Entrance) -> Self {
        Self {
            key: key.into(),
            heading: heading.into(),
            subheading: None,
            meta: None,
            link: None,
            blocks: Vec::new(),
            entrance,
        }
    }

    pub fn subheading(mut self, text: impl Into<String>) -> Self {
        self.subheading = Some(text.into());
        self
    }

    pub fn meta(mut self, text: impl Into<String>) -> Self {
        self.meta = Some(text.into());
        self
    }

    pub fn link(mut self, href: Option<&str>) -> Self {
        self.link = href.map(str::to_string);
        self
    }

    pub fn block(mut self, block: CardBlock) -> Self {
        self.blocks.push(block);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionLayout {
    Stack,
    Grid,
}

impl SectionLayout {
    pub fn css_class(self) -> &'static str {
        match self {
            SectionLayout::Stack => "stack",
            SectionLayout::Grid => "grid",
        }
    }
}

/// A content section ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub container: SectionContainer,
    pub layout: SectionLayout,
    pub cards: Vec<Card>,
}

impl Section {
    /// Cards visible `now` seconds into the page, with their styles. Cards of
    /// a hidden section are all fully transparent.
    pub fn card_styles(&self, now: f32) -> Vec<CardStyle> {
        let elapsed = self
            .container
            .reveal
            .revealed_at()
            .map(|start| now - start)
            .unwrap_or(f32::NEG_INFINITY);
        self.cards
            .iter()
            .map(|card| card.entrance.style_at(elapsed))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(scroll_top: f32) -> ScrollViewport {
        ScrollViewport {
            scroll_top,
            height: 800.0,
        }
    }

    const SECTION: Bounds = Bounds {
        top: 1_500.0,
        height: 400.0,
    };

    #[test]
    fn hidden_until_scrolled_into_view() {
        let mut reveal = Reveal::new(50.0, 0.0);
        assert!(!reveal.observe(viewport(0.0), SECTION, 0.0));
        let hidden = reveal.style_at(1.0);
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.offset_y, 50.0);
        assert_eq!(hidden.blur, 5.0);
    }

    #[test]
    fn margin_delays_reveal() {
        let mut reveal = Reveal::new(50.0, 0.0);
        // Section top is 20px inside the viewport: still within the margin.
        assert!(!reveal.observe(viewport(720.0), SECTION, 0.0));
        assert!(reveal.observe(viewport(800.0), SECTION, 0.0));
    }

    #[test]
    fn reveal_never_reverses() {
        let mut reveal = Reveal::new(50.0, 0.0);
        assert!(reveal.observe(viewport(1_400.0), SECTION, 2.0));
        assert!(!reveal.observe(viewport(0.0), SECTION, 3.0));
        assert!(!reveal.observe(viewport(1_400.0), SECTION, 4.0));
        assert!(reveal.is_revealed());
        assert_eq!(reveal.revealed_at(), Some(2.0));

        let settled = reveal.style_at(10.0);
        assert_eq!(settled.opacity, 1.0);
        assert_eq!(settled.offset_y, 0.0);
        assert_eq!(settled.blur, 0.0);
    }

    #[test]
    fn reveal_animates_over_time() {
        let mut reveal = Reveal::new(0.0, 0.0);
        reveal.observe(viewport(1_400.0), SECTION, 0.0);
        let mid = reveal.style_at(0.4);
        assert!(mid.opacity > 0.5 && mid.opacity < 1.0);
        assert!(mid.blur > 0.0 && mid.blur < 5.0);
    }

    #[test]
    fn stagger_is_proportional_to_index() {
        for index in 0..5 {
            let entrance = Entrance::staggered(index, EntranceMotion::Rise);
            assert!((entrance.delay - index as f32 * 0.1).abs() < 1e-6);
        }
    }

    fn section_of(cards: usize) -> Section {
        Section {
            container: SectionContainer::new("projects", "Projects", 0.0),
            layout: SectionLayout::Grid,
            cards: (0..cards)
                .map(|i| {
                    Card::new(
                        format!("p{i}"),
                        "Card",
                        Entrance::staggered(i, EntranceMotion::Rise),
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn cards_stay_hidden_until_the_section_reveals() {
        let section = section_of(3);
        for now in [0.0, 1.0, 100.0] {
            assert!(section.card_styles(now).iter().all(|style| style.opacity == 0.0));
        }
    }

    #[test]
    fn cards_appear_in_index_order_after_reveal() {
        let mut section = section_of(3);
        section
            .container
            .reveal
            .observe(viewport(1_400.0), SECTION, 2.0);

        let opacities: Vec<f32> = section
            .card_styles(2.15)
            .iter()
            .map(|style| style.opacity)
            .collect();
        assert!(opacities[0] > opacities[1]);
        assert!(opacities[1] > 0.0);
        assert_eq!(opacities[2], 0.0);

        assert!(section.card_styles(10.0).iter().all(|style| style.opacity == 1.0));
    }

    #[test]
    fn each_card_starts_one_stagger_after_the_previous() {
        let mut section = section_of(4);
        section
            .container
            .reveal
            .observe(viewport(1_400.0), SECTION, 0.0);

        for i in 0..4 {
            let start = i as f32 * STAGGER_SECONDS;
            assert_eq!(section.card_styles(start)[i].opacity, 0.0);
            assert!(section.card_styles(start + 0.02)[i].opacity > 0.0);
            if i + 1 < 4 {
                assert_eq!(section.card_styles(start + 0.02)[i + 1].opacity, 0.0);
            }
        }
    }

    #[test]
    fn entrance_styles_settle() {
        let slide = Entrance::staggered(2, EntranceMotion::SlideFromLeft);
        let before = slide.style_at(0.1);
        assert_eq!(before.opacity, 0.0);
        assert_eq!(before.offset_x, -20.0);
        let after = slide.style_at(5.0);
        assert_eq!(after.opacity, 1.0);
        assert_eq!(after.offset_x, 0.0);

        let grow = Entrance::staggered(0, EntranceMotion::Grow);
        assert!((grow.style_at(0.0).scale - 0.9).abs() < 1e-6);
        assert_eq!(grow.style_at(1.0).scale, 1.0);
    }
}
