use crate::{
    audio::{MediaElement, MediaEvent, PlaybackController, SimulatedMediaElement},
    render::Canvas,
    timeline::{FrameClock, FrameHandle, FrameScheduler},
    visualizer::SpectrumVisualizer,
    Result,
};

/// Live half of the page: the playback controller, the spectrum visualizer
/// and the host surfaces they draw on and schedule against.
///
/// Media signals drained by the controller are forwarded to the visualizer
/// in order, so both always see the same playback history.
#[derive(Debug)]
pub struct PageRuntime<M, S, C> {
    controller: PlaybackController<M>,
    visualizer: SpectrumVisualizer,
    scheduler: S,
    canvas: C,
    mounted: bool,
}

impl<M, S, C> PageRuntime<M, S, C>
where
    M: MediaElement,
    S: FrameScheduler,
    C: Canvas,
{
    pub fn new(media: M, visualizer: SpectrumVisualizer, scheduler: S, canvas: C) -> Self {
        Self {
            controller: PlaybackController::new(media),
            visualizer,
            scheduler,
            canvas,
            mounted: false,
        }
    }

    pub fn controller(&self) -> &PlaybackController<M> {
        &self.controller
    }

    pub fn visualizer(&self) -> &SpectrumVisualizer {
        &self.visualizer
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_playing(&self) -> bool {
        self.controller.is_playing()
    }

    pub fn media_mut(&mut self) -> &mut M {
        self.controller.element_mut()
    }

    /// Attempts autoplay.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        let events = self.controller.mount();
        self.dispatch(events);
    }

    /// Any click, touch or key press on the document.
    pub fn user_gesture(&mut self) {
        if !self.mounted {
            return;
        }
        let events = self.controller.user_gesture();
        self.dispatch(events);
    }

    /// The visitor pressed the audio toggle.
    pub fn toggle_audio(&mut self) {
        if !self.mounted {
            return;
        }
        let events = self.controller.toggle();
        self.dispatch(events);
    }

    /// Picks up signals the element emitted on its own, such as reaching
    /// the end of the track.
    pub fn sync(&mut self) {
        let events = self.controller.sync();
        self.dispatch(events);
    }

    /// Runs the frame callback behind `handle`. Returns whether the
    /// visualizer drew.
    pub fn run_frame(&mut self, handle: FrameHandle, time_seconds: f32) -> bool {
        self.visualizer
            .on_frame(handle, time_seconds, &mut self.canvas, &mut self.scheduler)
    }

    /// Stops playback, cancels the frame loop and disconnects the analysis
    /// tap. Safe to call more than once; a later `mount` starts over.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        let events = self.controller.unmount();
        self.dispatch(events);
        self.visualizer
            .teardown(self.controller.element_mut(), &mut self.scheduler);
        self.mounted = false;
        tracing::debug!("page runtime unmounted");
    }

    fn dispatch(&mut self, events: Vec<MediaEvent>) {
        for event in events {
            tracing::trace!(?event, "media signal");
            self.visualizer
                .handle_event(event, self.controller.element_mut(), &mut self.scheduler);
        }
    }
}

impl<C: Canvas> PageRuntime<SimulatedMediaElement, FrameClock, C> {
    /// Steps one display frame: plays one refresh interval of audio, handles
    /// the resulting signals and runs every due frame callback. Returns the
    /// number of frames drawn.
    pub fn step_frame(&mut self) -> Result<usize> {
        let interval = self.scheduler.interval_seconds();
        self.controller.element_mut().advance(interval)?;
        self.sync();

        let tick = self.scheduler.advance();
        let mut drawn = 0;
        for handle in tick.due {
            if self.run_frame(handle, tick.time_seconds) {
                drawn += 1;
            }
        }
        Ok(drawn)
    }

    /// Steps as many frames as fit in `seconds`. Returns the frames drawn.
    pub fn advance(&mut self, seconds: f32) -> Result<usize> {
        let frames = (seconds / self.scheduler.interval_seconds()).round() as usize;
        let mut drawn = 0;
        for _ in 0..frames {
            drawn += self.step_frame()?;
        }
        Ok(drawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        audio::{deferred::DeferredMediaElement, sine_wave},
        render::RecordingCanvas,
        visualizer::{VineStyle, VisualizerState},
        AudioConfig,
    };

    type Runtime = PageRuntime<SimulatedMediaElement, FrameClock, RecordingCanvas>;

    fn runtime(blocked: bool, looping: bool, seconds: f32) -> Runtime {
        let media = SimulatedMediaElement::new(sine_wave(1_500.0, 0.6, seconds, 48_000), 48_000)
            .with_looping(looping)
            .with_autoplay_blocked(blocked);
        let visualizer = SpectrumVisualizer::new(AudioConfig::default(), Box::new(VineStyle));
        PageRuntime::new(
            media,
            visualizer,
            FrameClock::new(60.0),
            RecordingCanvas::new(1_280.0, 96.0),
        )
    }

    #[test]
    fn toggle_click_cycle() {
        let mut rt = runtime(true, true, 2.0);
        rt.mount();
        assert!(!rt.is_playing());
        assert_eq!(rt.advance(0.5).unwrap(), 0);

        rt.toggle_audio();
        assert!(rt.is_playing());
        assert!(rt.advance(0.5).unwrap() > 0);
        assert_eq!(rt.visualizer().state(), VisualizerState::Active);

        rt.toggle_audio();
        assert!(!rt.is_playing());
        let calls = rt.canvas().call_count();
        assert_eq!(rt.advance(1.0).unwrap(), 0);
        assert_eq!(rt.canvas().call_count(), calls);
    }

    #[test]
    fn blocked_autoplay_starts_on_first_gesture() {
        let mut rt = runtime(true, true, 2.0);
        rt.mount();
        assert!(rt.controller().awaiting_gesture());
        assert_eq!(rt.visualizer().state(), VisualizerState::Idle);

        rt.user_gesture();
        assert!(rt.is_playing());
        assert_eq!(rt.visualizer().state(), VisualizerState::Active);
        assert_eq!(rt.advance(0.25).unwrap(), 15);
    }

    #[test]
    fn natural_end_stops_drawing() {
        let mut rt = runtime(false, false, 0.5);
        rt.mount();
        assert!(rt.is_playing());
        rt.advance(1.0).unwrap();
        assert!(!rt.is_playing());
        assert!(rt.visualizer().pending_frame().is_none());

        let frames = rt.visualizer().frames_drawn();
        rt.advance(0.5).unwrap();
        assert_eq!(rt.visualizer().frames_drawn(), frames);
    }

    #[test]
    fn external_stop_is_reflected() {
        let mut rt = runtime(false, true, 1.0);
        rt.mount();
        rt.advance(0.1).unwrap();
        rt.media_mut().stop_externally();
        rt.sync();
        assert!(!rt.is_playing());
        assert!(rt.visualizer().pending_frame().is_none());
    }

    #[test]
    fn analyser_built_once_across_cycles() {
        let mut rt = runtime(false, true, 1.0);
        rt.mount();
        for _ in 0..5 {
            rt.advance(0.1).unwrap();
            rt.toggle_audio();
            rt.advance(0.1).unwrap();
            rt.toggle_audio();
        }
        assert_eq!(rt.visualizer().graph_constructions(), 1);
    }

    #[test]
    fn unmount_cleans_up() {
        let mut rt = runtime(false, true, 1.0);
        rt.mount();
        rt.advance(0.1).unwrap();
        rt.unmount();
        assert!(!rt.is_mounted());
        assert!(!rt.is_playing());
        assert_eq!(rt.scheduler().pending_count(), 0);
        assert!(!rt.controller().element().has_source());
        assert_eq!(rt.visualizer().state(), VisualizerState::Idle);

        // Listeners are gone: gestures no longer reach the element.
        rt.user_gesture();
        assert!(!rt.is_playing());
        rt.unmount();
    }

    #[test]
    fn remount_draws_again() {
        let mut rt = runtime(false, true, 1.0);
        rt.mount();
        rt.advance(0.2).unwrap();
        rt.unmount();

        rt.mount();
        assert!(rt.is_mounted());
        assert!(rt.is_playing());
        assert_eq!(rt.visualizer().state(), VisualizerState::Active);
        let before = rt.visualizer().frames_drawn();
        assert!(rt.advance(0.5).unwrap() > 0);
        assert!(rt.visualizer().frames_drawn() > before);
        assert!(rt.controller().element().has_source());
        assert_eq!(rt.visualizer().graph_constructions(), 1);
    }

    #[test]
    fn graph_waits_for_late_play_signal() {
        let visualizer = SpectrumVisualizer::new(AudioConfig::default(), Box::new(VineStyle));
        let mut rt = PageRuntime::new(
            DeferredMediaElement::new(),
            visualizer,
            FrameClock::new(60.0),
            RecordingCanvas::new(1_280.0, 96.0),
        );
        rt.mount();
        rt.toggle_audio();
        assert!(!rt.is_playing());
        assert_eq!(rt.visualizer().state(), VisualizerState::Idle);
        assert_eq!(rt.visualizer().graph_constructions(), 0);
        assert!(!rt.controller().element().has_source());

        rt.media_mut().resolve_play();
        assert!(!rt.is_playing());
        assert_eq!(rt.visualizer().graph_constructions(), 0);

        rt.sync();
        assert!(rt.is_playing());
        assert_eq!(rt.visualizer().state(), VisualizerState::Active);
        assert_eq!(rt.visualizer().graph_constructions(), 1);
        assert!(rt.controller().element().has_source());
        assert!(rt.visualizer().pending_frame().is_some());
    }
}
