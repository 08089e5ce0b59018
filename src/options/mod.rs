//! Camera control options with TOML preset support.
//!
//! Tunables (sensitivities, zoom floor, fit field of view) serialize to/from
//! TOML so hosts can keep per-viewport presets on disk.

mod camera;

use std::path::Path;

pub use camera::{CameraOptions, ZOOM_FALLOFF};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitError;

/// Top-level options container. Sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `pan_sensitivity`) work.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Orbit camera control parameters.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// JSON Schema rendered as a pretty-printed string.
    pub fn json_schema_string() -> Result<String, OrbitError> {
        serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| OrbitError::OptionsParse(e.to_string()))
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, OrbitError> {
        toml::from_str(content)
            .map_err(|e| OrbitError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrbitError> {
        let content = std::fs::read_to_string(path).map_err(OrbitError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrbitError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrbitError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrbitError::Io)?;
        }
        std::fs::write(path, content).map_err(OrbitError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
zoom_distance_floor = 100.0
zoom_to_object = false
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.camera.zoom_distance_floor, 100.0);
        assert!(!opts.camera.zoom_to_object);
        // Everything else should be default
        assert_eq!(opts.camera.pan_sensitivity, 0.05);
        assert_eq!(opts.camera.rotate_sensitivity, 0.01);
        assert_eq!(opts.camera.fit_fov_horizontal, 60.0);
        assert_eq!(opts.camera.fit_fov_vertical, 35.0);
        assert_eq!(opts.camera.min_zoom_radius, 0.01);
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = Options::from_toml_str("[camera]\npan_sensitivity = \"x\"")
            .unwrap_err();
        assert!(matches!(err, OrbitError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presets").join("cad.toml");
        let mut opts = Options::default();
        opts.camera.rotate_sensitivity = 0.02;
        opts.camera.zoom_distance_floor = 500.0;
        opts.save(&path).unwrap();
        assert_eq!(Options::load(&path).unwrap(), opts);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Options::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, OrbitError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let camera = &schema_value["properties"]["camera"]["properties"];

        assert!(camera.get("pan_sensitivity").is_some());
        assert!(camera.get("zoom_to_object").is_some());
        assert!(camera.get("min_zoom_radius").is_some());
        assert!(camera.get("fit_fov_horizontal").is_none());
        assert!(Options::json_schema_string().unwrap().contains("Camera"));
    }
}
