//! Decorative background layer.
//!
//! Three independent datasets (drifting spores, falling snow and passing
//! shadow silhouettes) are generated exactly once from a seeded RNG and then
//! only sampled. Every element runs its own infinite loop; nothing is
//! synchronised between elements.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::{
    config::ViewportConfig,
    motion::{Easing, Keyframes, Transition},
};

const PARTICLES_WIDE: usize = 50;
const PARTICLES_NARROW: usize = 25;
const SNOW_WIDE: usize = 100;
const SNOW_NARROW: usize = 50;
const SILHOUETTES_WIDE: usize = 5;
const SILHOUETTES_NARROW: usize = 2;
const SILHOUETTE_PASS_SECONDS: f32 = 15.0;
const SILHOUETTE_WIDTH_PX: f32 = 128.0;

/// Slow upward-drifting spore. Positions are viewport percentages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particle {
    pub id: usize,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub duration: f32,
    /// Horizontal offsets reached at the middle and end of each cycle.
    pub sway: [f32; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snowflake {
    pub id: usize,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub duration: f32,
    pub drift: f32,
}

/// Full-height shadow crossing the viewport right to left.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Silhouette {
    pub id: usize,
    pub delay: f32,
}

/// One element's rendered state at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpriteState {
    pub id: usize,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub opacity: f32,
    pub rotation: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtmosphereFrame {
    pub time_seconds: f32,
    pub particles: Vec<SpriteState>,
    pub snow: Vec<SpriteState>,
    pub silhouettes: Vec<SpriteState>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Atmosphere {
    pub seed: u64,
    pub narrow: bool,
    pub particles: Vec<Particle>,
    pub snow: Vec<Snowflake>,
    pub silhouettes: Vec<Silhouette>,
}

impl Atmosphere {
    /// Generates the layout for `viewport`. Without a seed one is drawn
    /// from the OS and recorded in the result.
    pub fn generate(viewport: &ViewportConfig, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let narrow = viewport.is_narrow();

        let particle_count = if narrow { PARTICLES_NARROW } else { PARTICLES_WIDE };
        let particles = (0..particle_count)
            .map(|id| Particle {
                id,
                x: rng.gen_range(0.0..100.0),
                y: rng.gen_range(0.0..100.0),
                size: rng.gen_range(0.5..4.5),
                duration: rng.gen_range(15.0..40.0),
                sway: [
                    (rng.gen::<f32>() - 0.5) * 15.0,
                    (rng.gen::<f32>() - 0.5) * 20.0,
                ],
            })
            .collect();

        let snow_count = if narrow { SNOW_NARROW } else { SNOW_WIDE };
        let snow = (0..snow_count)
            .map(|id| Snowflake {
                id,
                x: rng.gen_range(0.0..100.0),
                y: rng.gen_range(-50.0..0.0),
                size: rng.gen_range(1.0..6.0),
                duration: rng.gen_range(10.0..25.0),
                drift: rng.gen_range(-10.0..10.0),
            })
            .collect();

        let silhouette_count = if narrow {
            SILHOUETTES_NARROW
        } else {
            SILHOUETTES_WIDE
        };
        let silhouettes = (0..silhouette_count)
            .map(|id| Silhouette {
                id,
                delay: rng.gen_range(0.0..10.0),
            })
            .collect();

        tracing::debug!(
            seed,
            narrow,
            particles = particle_count,
            snow = snow_count,
            silhouettes = silhouette_count,
            "generated atmosphere"
        );

        Self {
            seed,
            narrow,
            particles,
            snow,
            silhouettes,
        }
    }

    pub fn element_count(&self) -> usize {
        self.particles.len() + self.snow.len() + self.silhouettes.len()
    }

    /// Samples every element at `time_seconds` after mount.
    pub fn sample(&self, time_seconds: f32) -> AtmosphereFrame {
        AtmosphereFrame {
            time_seconds,
            particles: self
                .particles
                .iter()
                .map(|p| p.sample(time_seconds))
                .collect(),
            snow: self.snow.iter().map(|s| s.sample(time_seconds)).collect(),
            silhouettes: self
                .silhouettes
                .iter()
                .map(|s| s.sample(time_seconds))
                .collect(),
        }
    }
}

impl Particle {
    pub fn sample(&self, t: f32) -> SpriteState {
        let transition = Transition::looping(self.duration);
        let progress = transition.progress(t);
        SpriteState {
            id: self.id,
            x: Keyframes::new(vec![self.x, self.x + self.sway[0], self.x + self.sway[1]])
                .at(progress, Easing::Linear),
            y: Keyframes::new(vec![self.y, self.y - 30.0, self.y - 60.0])
                .at(progress, Easing::Linear),
            size: self.size,
            opacity: Keyframes::new(vec![0.0, 0.6, 0.4, 0.0]).at(progress, Easing::Linear),
            rotation: 0.0,
        }
    }
}

impl Snowflake {
    pub fn sample(&self, t: f32) -> SpriteState {
        let fall = Transition::looping(self.duration);
        let spin = Transition::looping(self.duration * 0.5);
        let progress = fall.progress(t);
        SpriteState {
            id: self.id,
            x: Keyframes::new(vec![self.x, self.x + self.drift, self.x])
                .at(progress, Easing::Linear),
            y: Keyframes::new(vec![self.y, self.y + 150.0]).at(progress, Easing::Linear),
            size: self.size,
            opacity: Keyframes::new(vec![0.0, 0.8, 0.6, 0.8, 0.0]).at(progress, Easing::Linear),
            rotation: Keyframes::new(vec![0.0, 360.0]).sample(&spin, t),
        }
    }
}

impl Silhouette {
    pub fn sample(&self, t: f32) -> SpriteState {
        let pass = Transition::looping(SILHOUETTE_PASS_SECONDS).with_delay(self.delay);
        let progress = pass.progress(t);
        SpriteState {
            id: self.id,
            x: Keyframes::new(vec![110.0, -10.0]).at(progress, Easing::Linear),
            y: 0.0,
            size: SILHOUETTE_WIDTH_PX,
            opacity: Keyframes::new(vec![0.0, 0.15, 0.15, 0.0])
                .with_times(vec![0.0, 0.1, 0.9, 1.0])
                .at(progress, Easing::Linear),
            rotation: 0.0,
        }
    }
}
