//! Media element abstraction and the playback controller that owns it.

#[cfg(test)]
pub(crate) mod deferred;
mod playback;

pub use playback::PlaybackController;

use crate::{AnalysisHandle, Result, SiteError};

/// Signals a media element emits when its real state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    Play,
    Pause,
    Ended,
}

/// Host media element (an `<audio>` tag in a browser).
///
/// Playback state changes are reported through [`MediaEvent`]s which the
/// owner drains with [`MediaElement::take_events`].
pub trait MediaElement {
    /// Starts playback. `Err` means the host refused, e.g. because of its
    /// autoplay policy.
    fn play(&mut self) -> Result<()>;

    fn pause(&mut self);

    fn is_paused(&self) -> bool;

    /// Drains the signals emitted since the previous call, oldest first.
    fn take_events(&mut self) -> Vec<MediaEvent>;

    /// Routes the element's output through an analysis tap. An element can
    /// feed exactly one source node; a second call fails with
    /// [`SiteError::SourceAlreadyConnected`].
    fn connect_source(&mut self, tap: AnalysisHandle) -> Result<()>;

    fn disconnect_source(&mut self);

    /// Records that the visitor interacted with the document.
    fn notify_user_activation(&mut self) {}
}

/// In-process media element that plays a mono sample buffer.
///
/// Time only moves when [`SimulatedMediaElement::advance`] is called, which
/// makes playback fully deterministic.
#[derive(Debug)]
pub struct SimulatedMediaElement {
    samples: Vec<f32>,
    sample_rate: u32,
    position: usize,
    looping: bool,
    paused: bool,
    autoplay_blocked: bool,
    user_activated: bool,
    events: Vec<MediaEvent>,
    tap: Option<AnalysisHandle>,
    rendered_samples: usize,
}

impl SimulatedMediaElement {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate: sample_rate.max(1),
            position: 0,
            looping: false,
            paused: true,
            autoplay_blocked: false,
            user_activated: false,
            events: Vec::new(),
            tap: None,
            rendered_samples: 0,
        }
    }

    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// When set, `play` is rejected until a user activation is recorded.
    pub fn with_autoplay_blocked(mut self, blocked: bool) -> Self {
        self.autoplay_blocked = blocked;
        self
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn position_seconds(&self) -> f32 {
        self.position as f32 / self.sample_rate as f32
    }

    /// Samples delivered to the output, whether or not a tap is attached.
    pub fn rendered_samples(&self) -> usize {
        self.rendered_samples
    }

    pub fn has_source(&self) -> bool {
        self.tap.is_some()
    }

    /// Pauses from outside the page, like a headset button or the OS media
    /// controls would.
    pub fn stop_externally(&mut self) {
        self.pause();
    }

    /// Plays `seconds` worth of audio. Returns the number of samples output.
    pub fn advance(&mut self, seconds: f32) -> Result<usize> {
        if self.paused || seconds <= 0.0 || self.samples.is_empty() {
            return Ok(0);
        }

        let mut remaining = (seconds * self.sample_rate as f32).round() as usize;
        let mut produced = 0;
        while remaining > 0 {
            if self.position >= self.samples.len() {
                if self.looping {
                    self.position = 0;
                } else {
                    self.paused = true;
                    self.events.push(MediaEvent::Pause);
                    self.events.push(MediaEvent::Ended);
                    break;
                }
            }

            let end = (self.position + remaining).min(self.samples.len());
            let block = &self.samples[self.position..end];
            if let Some(tap) = &self.tap {
                tap.push_samples(block)?;
            }
            produced += block.len();
            remaining -= block.len();
            self.position = end;
        }

        if !self.looping && !self.paused && self.position >= self.samples.len() {
            self.paused = true;
            self.events.push(MediaEvent::Pause);
            self.events.push(MediaEvent::Ended);
        }

        self.rendered_samples += produced;
        Ok(produced)
    }
}

impl MediaElement for SimulatedMediaElement {
    fn play(&mut self) -> Result<()> {
        if !self.paused {
            return Ok(());
        }
        if self.autoplay_blocked && !self.user_activated {
            return Err(SiteError::PlaybackRejected(
                "autoplay is blocked until the user interacts with the document".to_string(),
            ));
        }
        if self.samples.is_empty() {
            return Err(SiteError::PlaybackRejected(
                "no playable source".to_string(),
            ));
        }

        if self.position >= self.samples.len() {
            self.position = 0;
        }
        self.paused = false;
        self.events.push(MediaEvent::Play);
        Ok(())
    }

    fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.events.push(MediaEvent::Pause);
        }
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn take_events(&mut self) -> Vec<MediaEvent> {
        std::mem::take(&mut self.events)
    }

    fn connect_source(&mut self, tap: AnalysisHandle) -> Result<()> {
        if self.tap.is_some() {
            return Err(SiteError::SourceAlreadyConnected);
        }
        self.tap = Some(tap);
        Ok(())
    }

    fn disconnect_source(&mut self) {
        self.tap = None;
    }

    fn notify_user_activation(&mut self) {
        self.user_activated = true;
    }
}

/// Mono sine wave, handy for demos and tests.
pub fn sine_wave(frequency: f32, amplitude: f32, seconds: f32, sample_rate: u32) -> Vec<f32> {
    let len = (seconds * sample_rate as f32).round() as usize;
    (0..len)
        .map(|n| {
            let t = n as f32 / sample_rate as f32;
            amplitude * (2.0 * std::f32::consts::PI * frequency * t).sin()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AudioConfig, SpectrumAnalyser};

    fn element(seconds: f32) -> SimulatedMediaElement {
        SimulatedMediaElement::new(sine_wave(440.0, 0.5, seconds, 1_000), 1_000)
    }

    fn tap() -> AnalysisHandle {
        AnalysisHandle::new(SpectrumAnalyser::new(&AudioConfig::default()).unwrap())
    }

    #[test]
    fn play_and_pause_emit_signals() {
        let mut media = element(1.0);
        media.play().unwrap();
        media.play().unwrap();
        media.pause();
        assert_eq!(media.take_events(), vec![MediaEvent::Play, MediaEvent::Pause]);
        assert!(media.take_events().is_empty());
    }

    #[test]
    fn blocked_autoplay_needs_activation() {
        let mut media = element(1.0).with_autoplay_blocked(true);
        assert!(matches!(media.play(), Err(SiteError::PlaybackRejected(_))));
        assert!(media.is_paused());

        media.notify_user_activation();
        media.play().unwrap();
        assert!(!media.is_paused());
    }

    #[test]
    fn empty_source_rejects_play() {
        let mut media = SimulatedMediaElement::new(Vec::new(), 1_000);
        assert!(media.play().is_err());
    }

    #[test]
    fn natural_end_pauses_and_signals() {
        let mut media = element(0.5);
        media.play().unwrap();
        media.take_events();

        let produced = media.advance(2.0).unwrap();
        assert_eq!(produced, 500);
        assert!(media.is_paused());
        assert_eq!(media.take_events(), vec![MediaEvent::Pause, MediaEvent::Ended]);

        media.play().unwrap();
        assert_eq!(media.position_seconds(), 0.0);
    }

    #[test]
    fn looping_wraps_without_ending() {
        let mut media = element(0.5).with_looping(true);
        media.play().unwrap();
        media.take_events();

        assert_eq!(media.advance(1.2).unwrap(), 1_200);
        assert!(!media.is_paused());
        assert!(media.take_events().is_empty());
    }

    #[test]
    fn paused_element_produces_nothing() {
        let mut media = element(1.0);
        assert_eq!(media.advance(0.5).unwrap(), 0);
    }

    #[test]
    fn second_source_connection_is_rejected() {
        let mut media = element(1.0);
        media.connect_source(tap()).unwrap();
        assert!(matches!(
            media.connect_source(tap()),
            Err(SiteError::SourceAlreadyConnected)
        ));

        media.disconnect_source();
        assert!(!media.has_source());
    }

    #[test]
    fn tap_does_not_change_output() {
        let mut plain = element(1.0);
        let mut tapped = element(1.0);
        let handle = tap();
        tapped.connect_source(handle.clone()).unwrap();

        for media in [&mut plain, &mut tapped] {
            media.play().unwrap();
            media.advance(0.25).unwrap();
        }

        assert_eq!(plain.rendered_samples(), tapped.rendered_samples());
        assert_eq!(handle.processed_samples().unwrap(), 250);
    }
}
