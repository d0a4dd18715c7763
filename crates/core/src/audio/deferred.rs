//! Media element whose `play` is accepted at once but only takes effect when
//! the test says so, like a browser resolving the play promise late.

use super::{MediaElement, MediaEvent};
use crate::{AnalysisHandle, Result, SiteError};

#[derive(Debug, Default)]
pub(crate) struct DeferredMediaElement {
    paused: bool,
    play_requested: bool,
    events: Vec<MediaEvent>,
    tap: Option<AnalysisHandle>,
}

impl DeferredMediaElement {
    pub(crate) fn new() -> Self {
        Self {
            paused: true,
            ..Default::default()
        }
    }

    /// Lets an outstanding `play` request take effect.
    pub(crate) fn resolve_play(&mut self) {
        if self.play_requested && self.paused {
            self.paused = false;
            self.events.push(MediaEvent::Play);
        }
        self.play_requested = false;
    }

    pub(crate) fn has_source(&self) -> bool {
        self.tap.is_some()
    }
}

impl MediaElement for DeferredMediaElement {
    fn play(&mut self) -> Result<()> {
        self.play_requested = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.play_requested = false;
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
}
