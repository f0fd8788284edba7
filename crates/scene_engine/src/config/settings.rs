//! # Engine Settings
//!
//! Settings for the scene and overlay subsystems. Every field has a default
//! so partial files load cleanly.

use serde::{Deserialize, Serialize};

use super::Config;
use crate::component::Layouts;

/// Top-level settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Default log filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// Scene settings
    pub scene: SceneSettings,
    /// HTML overlay settings
    pub overlay: OverlaySettings,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            scene: SceneSettings::default(),
            overlay: OverlaySettings::default(),
        }
    }
}

impl Config for EngineSettings {}

/// Scene settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Raw layout mask given to components created through the scene
    pub default_layout_mask: u32,
}

impl SceneSettings {
    /// Default layout mask as typed flags
    pub fn layout_mask(&self) -> Layouts {
        Layouts::from_raw(self.default_layout_mask)
    }
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            default_layout_mask: Layouts::EVERYTHING.bits(),
        }
    }
}

/// HTML overlay settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    /// Script accessor naming the event currently being dispatched
    pub event_accessor: String,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            event_accessor: "event".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings = EngineSettings::from_toml_str(
            r#"
            log_level = "debug"

            [scene]
            default_layout_mask = 1
            "#,
        )
        .unwrap();

        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.scene.layout_mask(), Layouts::DEFAULT);
        assert_eq!(settings.overlay, OverlaySettings::default());
    }

    #[test]
    fn test_ron_settings() {
        let settings =
            EngineSettings::from_ron_str(r#"(overlay: (event_accessor: "Module.lastEvent"))"#).unwrap();

        assert_eq!(settings.overlay.event_accessor, "Module.lastEvent");
        assert_eq!(settings.scene.layout_mask(), Layouts::EVERYTHING);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let path = path.to_string_lossy().into_owned();

        let mut settings = EngineSettings::default();
        settings.scene.default_layout_mask = (Layouts::DEFAULT | Layouts::PICKING).bits();
        settings.save_to_file(&path).unwrap();
        let loaded = EngineSettings::load_from_file(&path).unwrap();

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = EngineSettings::default().save_to_file("settings.json").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }
}
