/// Result alias that carries the custom [`SiteError`] type.
pub type Result<T> = std::result::Result<T, SiteError>;

/// Common error type for the core crate.
///
/// None of these variants are ever shown to a visitor. The page runtime logs
/// them and carries on with whatever still works, so the worst outcome is a
/// silent, fully static page.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Free-form message for failures that do not deserve their own variant.
    #[error("{0}")]
    Message(String),
    /// A caller handed over data the operation cannot work with.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Configuration loaded from disk failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The media element refused to start, usually because of the host's
    /// autoplay policy.
    #[error("playback rejected: {0}")]
    PlaybackRejected(String),
    /// A media element can feed exactly one source node.
    #[error("media element is already connected to a source node")]
    SourceAlreadyConnected,
    /// The audio context was closed and cannot be resumed.
    #[error("audio context has been closed")]
    ContextClosed,
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Wrapper around JSON (de)serialisation errors.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    /// Formatting into an in-memory buffer failed while exporting a frame.
    #[error("{0}")]
    Fmt(#[from] std::fmt::Error),
    /// The page template could not be rendered.
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
    /// Failure reported by the FFT backend.
    #[error("fft failure: {0}")]
    Fft(#[from] realfft::FftError),
}

impl SiteError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for SiteError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for SiteError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
