use serde::{Deserialize, Serialize};

use crate::{config::AssetConfig, Result, SiteError};

/// A file served verbatim from the site root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticAsset {
    pub path: String,
    pub media_type: String,
}

impl StaticAsset {
    /// Describes the file at `path`, guessing its media type from the
    /// extension.
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        if !path.starts_with('/') {
            return Err(SiteError::msg(format!(
                "static asset `{path}` must be referenced by an absolute path"
            )));
        }
        let media_type = media_type_for(&path).to_string();
        Ok(Self { path, media_type })
    }

    /// File name relative to the site root.
    pub fn file_name(&self) -> &str {
        self.path.trim_start_matches('/')
    }
}

/// The two fixed assets the page references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Background track, looped indefinitely.
    pub audio: StaticAsset,
    pub document: StaticAsset,
}

impl AssetManifest {
    pub fn from_config(config: &AssetConfig) -> Result<Self> {
        let manifest = Self {
            audio: StaticAsset::new(config.audio_path.clone())?,
            document: StaticAsset::new(config.document_path.clone())?,
        };
        if !manifest.audio.media_type.starts_with("audio/") {
            tracing::warn!(
                path = %manifest.audio.path,
                media_type = %manifest.audio.media_type,
                "background track does not look like audio"
            );
        }
        Ok(manifest)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StaticAsset> {
        [&self.audio, &self.document].into_iter()
    }
}

fn media_type_for(path: &str) -> &'static str {
    let extension = path
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "mp3" => "audio/mpeg",
        "ogg" | "oga" => "audio/ogg",
        "wav" => "audio/wav",
        "m4a" => "audio/mp4",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_manifest_points_at_site_root() {
        let manifest = AssetManifest::from_config(&AssetConfig::default()).unwrap();
        assert_eq!(manifest.audio.path, "/audio.mp3");
        assert_eq!(manifest.audio.media_type, "audio/mpeg");
        assert_eq!(manifest.document.path, "/cv.pdf");
        assert_eq!(manifest.document.media_type, "application/pdf");
        assert_eq!(manifest.iter().count(), 2);
    }

    #[test]
    fn relative_paths_are_rejected() {
        let config = AssetConfig {
            audio_path: "audio.mp3".to_string(),
            ..Default::default()
        };
        let err = AssetManifest::from_config(&config).unwrap_err();
        assert!(format!("{err}").contains("audio.mp3"));
    }

    #[test]
    fn unknown_extensions_fall_back_to_octet_stream() {
        let asset = StaticAsset::new("/files/Resume.PDF").unwrap();
        assert_eq!(asset.media_type, "application/pdf");
        assert_eq!(asset.file_name(), "files/Resume.PDF");
        assert_eq!(
            StaticAsset::new("/blob").unwrap().media_type,
            "application/octet-stream"
        );
    }
}
