//! Invitation configuration.
//!
//! Everything has a default, so an empty JSON object is a valid file:
//!
//! ```json
//! {
//!   "backend_url": "https://boda.example.com",
//!   "audio": { "url": "https://example.com/romantic.mp3", "volume": 0.3 },
//!   "wedding": {
//!     "couple": { "bride": "Sofi", "groom": "Criss" },
//!     "date": "2026-04-15",
//!     "ceremony_time": "18:30:00",
//!     "venue": { "name": "Por anunciar", "address": "Próximamente" },
//!     "contact": { "email": "novios@example.com", "phone": "+1 555 0100" }
//!   }
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::content::{default_gallery, default_story, GalleryItem, StoryMilestone, WeddingDetails};
use crate::error::{InviteError, InviteResult};
use crate::reveal::DEFAULT_REVEAL_DELAY;

/// Background music settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Streamable audio source
    pub url: String,
    /// 0.0 – 1.0
    pub volume: f32,
    pub looping: bool,
    /// `preload` attribute of the audio element
    pub preload: String,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            url: "https://www.bensound.com/bensound-music/bensound-romantic.mp3".to_string(),
            volume: 0.3,
            looping: true,
            preload: "metadata".to_string(),
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InviteConfig {
    /// RSVP backend, without the `/api` prefix
    pub backend_url: String,
    pub audio: AudioConfig,
    pub reveal_delay_ms: u64,
    pub wedding: WeddingDetails,
    pub story: Vec<StoryMilestone>,
    pub gallery: Vec<GalleryItem>,
    /// Fallback filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for InviteConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8001".to_string(),
            audio: AudioConfig::default(),
            reveal_delay_ms: DEFAULT_REVEAL_DELAY.as_millis() as u64,
            wedding: WeddingDetails::default(),
            story: default_story(),
            gallery: default_gallery(),
            log_level: "info".to_string(),
        }
    }
}

impl InviteConfig {
    /// Load and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> InviteResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: InviteConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        info!(path = %path.display(), "Loaded invitation configuration");
        Ok(config)
    }

    /// Load `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> InviteResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("No configuration file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Apply command-line or environment overrides.
    pub fn with_overrides(mut self, backend_url: Option<String>, music_url: Option<String>) -> Self {
        if let Some(url) = backend_url {
            self.backend_url = url;
        }
        if let Some(url) = music_url {
            self.audio.url = url;
        }
        self
    }

    pub fn validate(&self) -> InviteResult<()> {
        Url::parse(&self.backend_url)?;
        Url::parse(&self.audio.url)?;

        if !(0.0..=1.0).contains(&self.audio.volume) {
            return Err(InviteError::Config(format!(
                "audio volume must be between 0.0 and 1.0, got {}",
                self.audio.volume
            )));
        }
        if self.wedding.couple.bride.trim().is_empty() || self.wedding.couple.groom.trim().is_empty() {
            return Err(InviteError::Config("couple names must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use tempfile::NamedTempFile;

    fn write_config(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = InviteConfig::default();
        config.validate().unwrap();
        assert_eq!(config.reveal_delay(), Duration::from_millis(800));
        assert_eq!(config.audio.volume, 0.3);
        assert!(config.audio.looping);
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let file = write_config("{}");
        let config = InviteConfig::load(file.path()).unwrap();
        assert_eq!(config, InviteConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let file = write_config(
            r#"{"backend_url": "https://boda.example.com", "audio": {"volume": 0.5}, "reveal_delay_ms": 1200}"#,
        );
        let config = InviteConfig::load(file.path()).unwrap();
        assert_eq!(config.backend_url, "https://boda.example.com");
        assert_eq!(config.audio.volume, 0.5);
        assert_eq!(config.audio.preload, "metadata");
        assert_eq!(config.reveal_delay(), Duration::from_millis(1200));
    }

    #[test]
    fn test_volume_out_of_range_rejected() {
        let file = write_config(r#"{"audio": {"volume": 1.5}}"#);
        assert!(matches!(
            InviteConfig::load(file.path()),
            Err(InviteError::Config(_))
        ));
    }

    #[test]
    fn test_bad_backend_url_rejected() {
        let file = write_config(r#"{"backend_url": "localhost without scheme"}"#);
        assert!(matches!(InviteConfig::load(file.path()), Err(InviteError::Url(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let file = write_config("{ not json");
        assert!(matches!(
            InviteConfig::load(file.path()),
            Err(InviteError::Serialization(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let config = InviteConfig::default().with_overrides(
            Some("https://api.example.com".to_string()),
            None,
        );
        assert_eq!(config.backend_url, "https://api.example.com");
        assert_eq!(config.audio.url, AudioConfig::default().url);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            InviteConfig::load_or_default(Some(Path::new("/nonexistent/invite.json"))),
            Err(InviteError::Io(_))
        ));
    }
}
