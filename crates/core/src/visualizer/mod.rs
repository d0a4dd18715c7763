//! Frequency-spectrum visualizer pinned to the bottom of the page.
//!
//! The audio graph is built lazily on the first `Play` signal and never
//! twice. While audio plays, a per-frame tick reads the analyser, clears the
//! canvas and redraws it in the configured style. Pausing cancels the
//! pending frame and parks the audio context, so a paused visualizer issues
//! no canvas calls at all. Teardown returns it to `Idle`; a later mount
//! builds a fresh graph.

mod bars;
mod graph;
mod vine;

use std::fmt;

pub use bars::BarStyle;
pub use graph::{AudioGraph, ContextState};
pub use vine::VineStyle;

use crate::{
    audio::{MediaElement, MediaEvent},
    config::VisualizerStyleKind,
    render::Canvas,
    timeline::{FrameHandle, FrameScheduler},
    AudioConfig,
};

/// Drawing strategy for one frame of frequency data.
pub trait SpectrumStyle: fmt::Debug {
    fn name(&self) -> &'static str;

    /// Draws `bins` (0..=255 magnitudes, low frequencies first) onto a
    /// freshly cleared canvas.
    fn draw(&self, bins: &[u8], time_seconds: f32, canvas: &mut dyn Canvas);
}

pub fn style_for(kind: VisualizerStyleKind) -> Box<dyn SpectrumStyle> {
    match kind {
        VisualizerStyleKind::Vine => Box::new(VineStyle),
        VisualizerStyleKind::Bars => Box::new(BarStyle),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualizerState {
    /// Waiting for the first play signal.
    Idle,
    Active,
    /// The audio graph could not be built; the canvas stays empty.
    Degraded,
}

#[derive(Debug)]
pub struct SpectrumVisualizer {
    config: AudioConfig,
    style: Box<dyn SpectrumStyle>,
    state: VisualizerState,
    graph: Option<AudioGraph>,
    pending: Option<FrameHandle>,
    bins: Vec<u8>,
    constructions: usize,
    frames_drawn: usize,
}

impl SpectrumVisualizer {
    pub fn new(config: AudioConfig, style: Box<dyn SpectrumStyle>) -> Self {
        Self {
            config,
            style,
            state: VisualizerState::Idle,
            graph: None,
            pending: None,
            bins: Vec::new(),
            constructions: 0,
            frames_drawn: 0,
        }
    }

    pub fn state(&self) -> VisualizerState {
        self.state
    }

    pub fn style_name(&self) -> &'static str {
        self.style.name()
    }

    pub fn graph(&self) -> Option<&AudioGraph> {
        self.graph.as_ref()
    }

    /// How many times an audio graph was built since the last teardown.
    /// Never exceeds one.
    pub fn graph_constructions(&self) -> usize {
        self.constructions
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn frames_drawn(&self) -> usize {
        self.frames_drawn
    }

    /// Most recent frequency data, one byte per bin.
    pub fn bins(&self) -> &[u8] {
        &self.bins
    }

    /// Reacts to a media signal forwarded by the playback controller.
    pub fn handle_event<M, S>(&mut self, event: MediaEvent, media: &mut M, scheduler: &mut S)
    where
        M: MediaElement,
        S: FrameScheduler,
    {
        match event {
            MediaEvent::Play => self.on_play(media, scheduler),
            MediaEvent::Pause | MediaEvent::Ended => {
                self.stop_loop(scheduler);
                if let Some(graph) = self.graph.as_mut() {
                    graph.suspend();
                }
            }
        }
    }

    fn on_play<M, S>(&mut self, media: &mut M, scheduler: &mut S)
    where
        M: MediaElement,
        S: FrameScheduler,
    {
        match self.state {
            VisualizerState::Idle => self.initialise(media),
            VisualizerState::Active => {
                if let Some(graph) = self.graph.as_mut() {
                    if graph.state() == ContextState::Suspended {
                        if let Err(err) = graph.resume() {
                            tracing::warn!(error = %err, "could not resume audio context");
                        }
                    }
                }
            }
            VisualizerState::Degraded => {}
        }

        if self.state == VisualizerState::Active && self.pending.is_none() {
            self.pending = Some(scheduler.request_frame());
        }
    }

    fn initialise<M: MediaElement>(&mut self, media: &mut M) {
        self.constructions += 1;
        match AudioGraph::attach(&self.config, media) {
            Ok(graph) => {
                self.bins = vec![0; self.config.frequency_bin_count()];
                self.graph = Some(graph);
                self.state = VisualizerState::Active;
                tracing::info!(style = self.style.name(), "spectrum visualizer started");
            }
            Err(err) => {
                tracing::error!(error = %err, "audio context error; visualizer disabled");
                self.state = VisualizerState::Degraded;
            }
        }
    }

    fn stop_loop<S: FrameScheduler>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
    }

    /// Runs one frame if `handle` is the callback this visualizer is waiting
    /// for. Returns whether anything was drawn.
    pub fn on_frame<C, S>(
        &mut self,
        handle: FrameHandle,
        time_seconds: f32,
        canvas: &mut C,
        scheduler: &mut S,
    ) -> bool
    where
        C: Canvas,
        S: FrameScheduler,
    {
        if self.pending != Some(handle) {
            return false;
        }
        self.pending = Some(scheduler.request_frame());

        let Some(graph) = self.graph.as_ref() else {
            return false;
        };
        if let Err(err) = graph.analyser().byte_frequency_data(&mut self.bins) {
            tracing::warn!(error = %err, "skipping spectrum frame");
            return false;
        }

        canvas.clear();
        self.style.draw(&self.bins, time_seconds, canvas);
        self.frames_drawn += 1;
        true
    }

    /// Cancels the frame loop, releases the audio graph and goes back to
    /// `Idle` so the next play after a remount starts from scratch.
    pub fn teardown<M, S>(&mut self, media: &mut M, scheduler: &mut S)
    where
        M: MediaElement,
        S: FrameScheduler,
    {
        self.stop_loop(scheduler);
        if let Some(mut graph) = self.graph.take() {
            graph.close(media);
        }
        self.bins.clear();
        self.constructions = 0;
        self.state = VisualizerState::Idle;
        tracing::debug!("spectrum visualizer torn down");
    }
}
