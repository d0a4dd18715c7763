use super::{MediaElement, MediaEvent};

/// Owns the page's single media element and mirrors its real state.
///
/// `is_playing` is only ever derived from the element's own signals, so it
/// cannot drift from actual playback even when `play` fails or something
/// outside the page stops the audio.
#[derive(Debug)]
pub struct PlaybackController<M> {
    element: M,
    is_playing: bool,
    awaiting_gesture: bool,
}

impl<M: MediaElement> PlaybackController<M> {
    pub fn new(element: M) -> Self {
        Self {
            element,
            is_playing: false,
            awaiting_gesture: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// True while the interaction fallback is armed after a blocked autoplay.
    pub fn awaiting_gesture(&self) -> bool {
        self.awaiting_gesture
    }

    pub fn element(&self) -> &M {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut M {
        &mut self.element
    }

    /// Attempts autoplay once. A refusal arms the interaction fallback
    /// instead of retrying.
    pub fn mount(&mut self) -> Vec<MediaEvent> {
        match self.element.play() {
            Ok(()) => tracing::debug!("autoplay started"),
            Err(err) => {
                tracing::info!(error = %err, "autoplay blocked; waiting for user interaction");
                self.awaiting_gesture = true;
            }
        }
        self.sync()
    }

    /// Document-level click, touch or key press. Retries playback while the
    /// fallback is armed and disarms it on success.
    pub fn user_gesture(&mut self) -> Vec<MediaEvent> {
        self.element.notify_user_activation();
        if self.awaiting_gesture {
            match self.element.play() {
                Ok(()) => {
                    tracing::debug!("playback started after user interaction");
                    self.awaiting_gesture = false;
                }
                Err(err) => tracing::warn!(error = %err, "audio play failed"),
            }
        }
        self.sync()
    }

    /// Flips playback. Stopping takes effect immediately; starting only
    /// counts once the element reports that it is actually playing.
    pub fn toggle(&mut self) -> Vec<MediaEvent> {
        self.element.notify_user_activation();
        if self.is_playing {
            self.element.pause();
            self.is_playing = false;
        } else {
            match self.element.play() {
                Ok(()) => self.awaiting_gesture = false,
                Err(err) => tracing::warn!(error = %err, "audio play failed"),
            }
        }
        self.sync()
    }

    /// Drains the element's signals and updates `is_playing` from them.
    /// The drained events are returned so other listeners can react.
    pub fn sync(&mut self) -> Vec<MediaEvent> {
        let events = self.element.take_events();
        for event in &events {
            self.is_playing = matches!(event, MediaEvent::Play);
        }
        events
    }

    /// Disarms the interaction fallback and stops playback.
    pub fn unmount(&mut self) -> Vec<MediaEvent> {
        self.awaiting_gesture = false;
        self.element.pause();
        self.sync()
    }
}
