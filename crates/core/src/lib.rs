//! Core library for the résumé site.
//!
//! Static content tables are turned into animated sections, a background
//! track drives a frequency-spectrum visualizer, and a seeded decorative
//! layer fills the backdrop. Host facilities (the media element, the frame
//! scheduler and the 2D canvas) sit behind traits so the whole page can be
//! run and inspected without a browser.

pub mod analysis;
pub mod assets;
pub mod atmosphere;
pub mod audio;
pub mod config;
pub mod content;
pub mod error;
pub mod motion;
pub mod page;
pub mod render;
pub mod section;
pub mod sections;
pub mod timeline;
pub mod visualizer;

pub use analysis::{AnalysisHandle, SpectrumAnalyser};
pub use assets::{AssetManifest, StaticAsset};
pub use atmosphere::Atmosphere;
pub use audio::{MediaElement, MediaEvent, PlaybackController, SimulatedMediaElement};
pub use config::{AppConfig, AudioConfig, VisualizerStyleKind};
pub use content::ContentStore;
pub use error::{Result, SiteError};
pub use page::{Page, PageRuntime};
pub use render::{Canvas, RecordingCanvas};
pub use timeline::{FrameClock, FrameHandle, FrameScheduler};
pub use visualizer::{SpectrumVisualizer, VisualizerState};
