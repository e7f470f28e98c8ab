//! Demo settings
//!
//! Persisted in LocalStorage on web; read from the JSON file named by
//! `DOMINO_SETTINGS` on native.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Physics ===
    /// Build rigid bodies for every domino (false = purely visual scene)
    pub physics_enabled: bool,
    /// World gravity
    pub gravity: [f32; 3],

    // === Trigger ===
    /// Registry index pushed by "start"
    pub trigger_index: usize,
    /// Impulse applied by "start"
    pub trigger_impulse: [f32; 3],

    // === Camera ===
    pub camera_position: [f32; 3],
    pub camera_target: [f32; 3],
    /// Vertical field of view in degrees
    pub camera_fov_deg: f32,

    // === Rendering ===
    /// Stored only; the lit pipeline has no shadow pass
    pub shadows: bool,
    /// Upper bound on device pixel ratio
    pub max_pixel_ratio: f64,

    // === Headless (native) ===
    /// Frames simulated by the native runner
    pub headless_frames: u32,
    /// Frame at which the native runner fires "start"
    pub headless_trigger_frame: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            physics_enabled: true,
            gravity: GRAVITY,

            trigger_index: TRIGGER_INDEX,
            trigger_impulse: TRIGGER_IMPULSE,

            camera_position: [3.0, 3.0, 3.0],
            camera_target: [0.0, 0.0, 0.0],
            camera_fov_deg: 75.0,

            shadows: true,
            max_pixel_ratio: 2.0,

            headless_frames: 600,
            headless_trigger_frame: 60,
        }
    }
}

impl Settings {
    pub fn gravity(&self) -> Vec3 {
        Vec3::from(self.gravity)
    }

    pub fn trigger_impulse(&self) -> Vec3 {
        Vec3::from(self.trigger_impulse)
    }

    /// Parse settings; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "domino_cascade_settings";

    /// Environment variable naming a settings file (native)
    pub const ENV_VAR: &'static str = "DOMINO_SETTINGS";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from the file named by `DOMINO_SETTINGS`, if any
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path);
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}; using defaults", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {}; using defaults", path, e);
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_scene() {
        let s = Settings::default();
        assert!(s.physics_enabled);
        assert_eq!(s.trigger_index, 18);
        assert_eq!(s.trigger_impulse(), Vec3::new(0.0, 0.0, -2.0));
        assert_eq!(s.gravity(), Vec3::new(0.0, -9.81, 0.0));
        assert_eq!(s.camera_fov_deg, 75.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{ "physics_enabled": false, "trigger_index": 3 }"#).unwrap();
        assert!(!s.physics_enabled);
        assert_eq!(s.trigger_index, 3);
        assert_eq!(s.camera_position, [3.0, 3.0, 3.0]);
    }

    #[test]
    fn test_json_round_trip() {
        let mut s = Settings::default();
        s.headless_frames = 42;
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), s);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }
}
