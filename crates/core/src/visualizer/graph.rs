use crate::{
    audio::MediaElement, AnalysisHandle, AudioConfig, Result, SiteError, SpectrumAnalyser,
};

/// Lifecycle of the analysis context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    Running,
    /// Parked by the host to save power; resumes on demand.
    Suspended,
    Closed,
}

/// Audio processing graph: media source → analyser → destination.
///
/// The analyser only observes the signal. Output reaching the destination
/// is the same whether or not the graph is attached.
#[derive(Debug)]
pub struct AudioGraph {
    state: ContextState,
    analyser: AnalysisHandle,
    owns_source: bool,
}

impl AudioGraph {
    /// Builds the analyser and wires the media element through it.
    ///
    /// A media element that already feeds a source node is treated as wired;
    /// the graph is still returned but never disconnects that source.
    pub fn attach<M: MediaElement>(config: &AudioConfig, media: &mut M) -> Result<Self> {
        let analyser = AnalysisHandle::new(SpectrumAnalyser::new(config)?);
        let owns_source = match media.connect_source(analyser.clone()) {
            Ok(()) => true,
            Err(SiteError::SourceAlreadyConnected) => {
                tracing::debug!("audio source already connected");
                false
            }
            Err(err) => return Err(err),
        };

        tracing::debug!(
            fft_size = config.fft_size,
            smoothing = config.smoothing,
            "audio graph attached"
        );
        Ok(Self {
            state: ContextState::Running,
            analyser,
            owns_source,
        })
    }

    pub fn state(&self) -> ContextState {
        self.state
    }

    pub fn analyser(&self) -> &AnalysisHandle {
        &self.analyser
    }

    pub fn owns_source(&self) -> bool {
        self.owns_source
    }

    pub fn suspend(&mut self) {
        if self.state == ContextState::Running {
            self.state = ContextState::Suspended;
        }
    }

    pub fn resume(&mut self) -> Result<()> {
        match self.state {
            ContextState::Closed => Err(SiteError::ContextClosed),
            ContextState::Suspended => {
                tracing::debug!("resuming suspended audio context");
                self.state = ContextState::Running;
                Ok(())
            }
            ContextState::Running => Ok(()),
        }
    }

    /// Detaches the source this graph connected and closes the context.
    pub fn close<M: MediaElement>(&mut self, media: &mut M) {
        if self.owns_source {
            media.disconnect_source();
            self.owns_source = false;
        }
        self.state = ContextState::Closed;
    }
}
