//! Keyframe animation primitives.
//!
//! Animations are plain data sampled against elapsed seconds, so every moving
//! piece of the page (hero glow, decorative particles, section reveals) can be
//! evaluated deterministically without a running browser.

use serde::{Deserialize, Serialize};

/// Timing curve applied within a keyframe segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) * 0.5
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Repeat {
    /// Play once and hold the final keyframe.
    #[default]
    Once,
    /// Restart from the first keyframe forever.
    Loop,
    /// Alternate forwards and backwards forever.
    Mirror,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub duration: f32,
    pub delay: f32,
    pub repeat: Repeat,
    /// Pause between iterations of a repeating transition.
    pub repeat_delay: f32,
    pub ease: Easing,
}

impl Default for Transition {
    fn default() -> Self {
        Self::once(0.3)
    }
}

impl Transition {
    pub fn once(duration: f32) -> Self {
        Self {
            duration,
            delay: 0.0,
            repeat: Repeat::Once,
            repeat_delay: 0.0,
            ease: Easing::Linear,
        }
    }

    pub fn looping(duration: f32) -> Self {
        Self {
            repeat: Repeat::Loop,
            ..Self::once(duration)
        }
    }

    pub fn mirrored(duration: f32) -> Self {
        Self {
            repeat: Repeat::Mirror,
            ..Self::once(duration)
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_ease(mut self, ease: Easing) -> Self {
        self.ease = ease;
        self
    }

    pub fn with_repeat_delay(mut self, repeat_delay: f32) -> Self {
        self.repeat_delay = repeat_delay;
        self
    }

    /// Un-eased progress through the keyframes at `elapsed` seconds.
    ///
    /// Returns 0 before the delay has passed. Repeating transitions never
    /// finish.
    pub fn progress(&self, elapsed: f32) -> f32 {
        let local = elapsed - self.delay;
        if local <= 0.0 {
            return 0.0;
        }
        if self.duration <= f32::EPSILON {
            return 1.0;
        }

        match self.repeat {
            Repeat::Once => (local / self.duration).min(1.0),
            Repeat::Loop => {
                let period = self.duration + self.repeat_delay.max(0.0);
                let phase = local % period;
                (phase / self.duration).min(1.0)
            }
            Repeat::Mirror => {
                let period = self.duration + self.repeat_delay.max(0.0);
                let cycle = (local / period).floor() as u64;
                let phase = local - cycle as f32 * period;
                let forward = (phase / self.duration).min(1.0);
                if cycle % 2 == 0 {
                    forward
                } else {
                    1.0 - forward
                }
            }
        }
    }
}

/// A sequence of values with optional explicit offsets in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframes {
    values: Vec<f32>,
    times: Vec<f32>,
}

impl Keyframes {
    /// Keyframes spread evenly across the transition.
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        let values = values.into();
        let times = even_times(values.len());
        Self { values, times }
    }

    /// Replaces the evenly spread offsets. Offsets that do not match the
    /// value count, leave [0, 1] or go backwards are ignored.
    pub fn with_times(mut self, times: impl Into<Vec<f32>>) -> Self {
        let times = times.into();
        let valid = times.len() == self.values.len()
            && times.iter().all(|t| (0.0..=1.0).contains(t))
            && times.windows(2).all(|pair| pair[0] <= pair[1]);
        if valid {
            self.times = times;
        } else {
            tracing::warn!(
                values = self.values.len(),
                times = times.len(),
                "ignoring malformed keyframe offsets"
            );
        }
        self
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Value at `progress` (0..=1), easing each segment independently.
    pub fn at(&self, progress: f32, ease: Easing) -> f32 {
        match self.values.as_slice() {
            [] => 0.0,
            [only] => *only,
            values => {
                let progress = progress.clamp(0.0, 1.0);
                let segment = self
                    .times
                    .windows(2)
                    .position(|pair| progress <= pair[1])
                    .unwrap_or(values.len() - 2);
                let (start, end) = (self.times[segment], self.times[segment + 1]);
                let span = end - start;
                let local = if span <= f32::EPSILON {
                    1.0
                } else {
                    (progress - start) / span
                };
                lerp(values[segment], values[segment + 1], ease.apply(local))
            }
        }
    }

    pub fn sample(&self, transition: &Transition, elapsed: f32) -> f32 {
        self.at(transition.progress(elapsed), transition.ease)
    }
}

/// Keyframes paired with the transition that drives them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub keyframes: Keyframes,
    pub transition: Transition,
}

impl Track {
    pub fn new(keyframes: Keyframes, transition: Transition) -> Self {
        Self {
            keyframes,
            transition,
        }
    }

    pub fn sample(&self, elapsed: f32) -> f32 {
        self.keyframes.sample(&self.transition, elapsed)
    }
}

pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

fn even_times(len: usize) -> Vec<f32> {
    match len {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => (0..len).map(|i| i as f32 / (len - 1) as f32).collect(),
    }
}
