use crate::{
    content::ResumeProfile,
    motion::{Keyframes, Track, Transition},
    render::Rgba,
};

const FILE_LABEL: &str = "Hawkins Lab Personnel File: #011-ADIB";
const DOWNLOAD_LABEL: &str = "Download Profile";
const WALL_LETTERS: [char; 3] = ['R', 'U', 'N'];
const GLITCH_TIMES: [f32; 5] = [0.0, 0.1, 0.2, 0.3, 1.0];
const ENERGY_SWEEP_SECONDS: f32 = 2.0;
const ENERGY_PAUSE_SECONDS: f32 = 3.0;

/// Offset copy of the title that flickers behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct GhostLayer {
    pub color: Rgba,
    pub offset_x: Track,
    pub opacity: Track,
}

impl GhostLayer {
    fn new(color: Rgba, offsets: [f32; 5], opacities: [f32; 5], period: f32) -> Self {
        let transition = Transition::mirrored(period);
        Self {
            color,
            offset_x: Track::new(
                Keyframes::new(offsets.to_vec()).with_times(GLITCH_TIMES.to_vec()),
                transition,
            ),
            opacity: Track::new(
                Keyframes::new(opacities.to_vec()).with_times(GLITCH_TIMES.to_vec()),
                transition,
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlitchText {
    pub text: String,
    pub ghosts: [GhostLayer; 2],
}

impl GlitchText {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ghosts: [
                GhostLayer::new(
                    Rgba::new(220, 38, 38, 0.7),
                    [0.0, -2.0, 2.0, -1.0, 0.0],
                    [0.7, 0.4, 0.8, 0.4, 0.7],
                    2.5,
                ),
                GhostLayer::new(
                    Rgba::new(59, 130, 246, 0.7),
                    [0.0, 2.0, -2.0, 1.0, 0.0],
                    [0.7, 0.3, 0.7, 0.3, 0.7],
                    3.0,
                ),
            ],
        }
    }

    /// Horizontal offset of each ghost `t` seconds after mount.
    pub fn ghost_offsets(&self, t: f32) -> [f32; 2] {
        [
            self.ghosts[0].offset_x.sample(t),
            self.ghosts[1].offset_x.sample(t),
        ]
    }
}

/// Link to the downloadable document. Always opens in a new browsing
/// context and never leaks the opener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadButton {
    pub href: String,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WallLetter {
    pub letter: char,
    pub pulse: Track,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    pub glitch: GlitchText,
    pub file_label: &'static str,
    pub title: String,
    pub tagline: String,
    pub download: DownloadButton,
    pub letters: Vec<WallLetter>,
    /// Horizontal position of the light sweeping across the hero, in
    /// percent of its width. Rests off-screen between sweeps.
    pub energy: Track,
}

impl Hero {
    pub fn new(profile: &ResumeProfile, document_href: &str) -> Self {
        let letters = WALL_LETTERS
            .iter()
            .enumerate()
            .map(|(i, letter)| WallLetter {
                letter: *letter,
                pulse: Track::new(
                    Keyframes::new(vec![0.3, 0.6, 0.3]),
                    Transition::looping(2.0).with_delay(i as f32 * 0.3),
                ),
            })
            .collect();

        Self {
            glitch: GlitchText::new(&profile.name.to_uppercase()),
            file_label: FILE_LABEL,
            title: profile.title.to_string(),
            tagline: profile.tagline.to_string(),
            download: DownloadButton {
                href: document_href.to_string(),
                label: DOWNLOAD_LABEL,
            },
            letters,
            energy: Track::new(
                Keyframes::new(vec![-100.0, 200.0]),
                Transition::looping(ENERGY_SWEEP_SECONDS)
                    .with_repeat_delay(ENERGY_PAUSE_SECONDS),
            ),
        }
    }
}
