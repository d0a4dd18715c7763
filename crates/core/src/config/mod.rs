use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Result, SiteError};

/// Top-level configuration structure for the site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub audio: AudioConfig,
    pub visualizer: VisualizerConfig,
    pub viewport: ViewportConfig,
    pub assets: AssetConfig,
    pub atmosphere: AtmosphereConfig,
}

impl AppConfig {
    /// Reads a JSON configuration file. Missing fields fall back to their
    /// defaults; the result is validated before it is returned.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.audio.validate()?;
        self.visualizer.validate()?;
        self.viewport.validate()?;
        self.assets.validate()
    }
}

/// Parameters of the analysis node placed between the audio source and the
/// output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub sample_rate: u32,
    /// Transform size. Must be a power of two between 32 and 32768.
    pub fft_size: usize,
    /// Weight of the previous frame in the exponential moving average.
    pub smoothing: f32,
    pub min_decibels: f32,
    pub max_decibels: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48_000,
            fft_size: 128,
            smoothing: 0.8,
            min_decibels: -100.0,
            max_decibels: -30.0,
        }
    }
}

impl AudioConfig {
    pub const MIN_FFT_SIZE: usize = 32;
    pub const MAX_FFT_SIZE: usize = 32_768;

    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(SiteError::InvalidConfig(
                "audio.sample_rate must be positive".to_string(),
            ));
        }
        if !self.fft_size.is_power_of_two()
            || !(Self::MIN_FFT_SIZE..=Self::MAX_FFT_SIZE).contains(&self.fft_size)
        {
            return Err(SiteError::InvalidConfig(format!(
                "audio.fft_size must be a power of two in {}..={}, got {}",
                Self::MIN_FFT_SIZE,
                Self::MAX_FFT_SIZE,
                self.fft_size
            )));
        }
        if !(0.0..=1.0).contains(&self.smoothing) {
            return Err(SiteError::InvalidConfig(format!(
                "audio.smoothing must lie in [0, 1], got {}",
                self.smoothing
            )));
        }
        if self.min_decibels >= self.max_decibels {
            return Err(SiteError::InvalidConfig(
                "audio.min_decibels must be below audio.max_decibels".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of frequency bins produced per analysis frame.
    pub fn frequency_bin_count(&self) -> usize {
        self.fft_size / 2
    }
}

/// Presentational variant used by the spectrum visualizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualizerStyleKind {
    #[default]
    Vine,
    Bars,
}

impl VisualizerStyleKind {
    pub fn css_class(self) -> &'static str {
        match self {
            VisualizerStyleKind::Vine => "vine",
            VisualizerStyleKind::Bars => "bars",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub style: VisualizerStyleKind,
    /// Height of the band pinned to the bottom of the viewport, in pixels.
    /// The band always spans the full viewport width.
    pub height: u32,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            style: VisualizerStyleKind::Vine,
            height: 96,
        }
    }
}

impl VisualizerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.height == 0 {
            return Err(SiteError::InvalidConfig(
                "visualizer height must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
    /// Viewports narrower than this are treated as mobile.
    pub mobile_breakpoint: u32,
    /// Sections reveal once they are this many pixels inside the viewport.
    pub reveal_margin: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            mobile_breakpoint: 768,
            reveal_margin: 50.0,
        }
    }
}

impl ViewportConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SiteError::InvalidConfig(
                "viewport dimensions must be positive".to_string(),
            ));
        }
        if self.reveal_margin < 0.0 {
            return Err(SiteError::InvalidConfig(
                "viewport.reveal_margin must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_narrow(&self) -> bool {
        self.width < self.mobile_breakpoint
    }
}

/// Fixed paths of the static assets the page loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub audio_path: String,
    pub document_path: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            audio_path: "/audio.mp3".to_string(),
            document_path: "/cv.pdf".to_string(),
        }
    }
}

impl AssetConfig {
    pub fn validate(&self) -> Result<()> {
        for (field, path) in [
            ("assets.audio_path", &self.audio_path),
            ("assets.document_path", &self.document_path),
        ] {
            if !path.starts_with('/') {
                return Err(SiteError::InvalidConfig(format!(
                    "{field} must be an absolute path, got `{path}`"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtmosphereConfig {
    /// Seed for the decorative layout. `None` draws one from the OS.
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        config.validate().unwrap();
        assert_eq!(config.audio.frequency_bin_count(), 64);
        assert_eq!(config.visualizer.style, VisualizerStyleKind::Vine);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "visualizer": { "style": "bars" } }"#).unwrap();
        assert_eq!(config.visualizer.style, VisualizerStyleKind::Bars);
        assert_eq!(config.visualizer.height, 96);
        assert_eq!(config.audio.fft_size, 128);
        assert_eq!(config.assets.document_path, "/cv.pdf");
    }

    #[test]
    fn rejects_non_power_of_two_fft() {
        let audio = AudioConfig {
            fft_size: 100,
            ..Default::default()
        };
        let err = audio.validate().unwrap_err();
        assert!(format!("{err}").contains("fft_size"));
    }

    #[test]
    fn rejects_smoothing_out_of_range() {
        let audio = AudioConfig {
            smoothing: 1.5,
            ..Default::default()
        };
        assert!(audio.validate().is_err());
    }

    #[test]
    fn rejects_relative_asset_paths() {
        let assets = AssetConfig {
            audio_path: "audio.mp3".to_string(),
            ..Default::default()
        };
        assert!(assets.validate().is_err());
    }

    #[test]
    fn narrow_viewport_detection() {
        let viewport = ViewportConfig {
            width: 600,
            ..Default::default()
        };
        assert!(viewport.is_narrow());
        assert!(!ViewportConfig::default().is_narrow());
    }
}
