use serde::{Deserialize, Serialize};

use crate::api::error::StageError;
use crate::api::types::Viewport;
use crate::extensions::easing::Easing;

/// Configuration for a stage, provided by the host.
/// Every field has a default, so a partial JSON document is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Initial viewport width in pixels (default: 1280).
    pub viewport_width: f32,
    /// Initial viewport height in pixels (default: 720).
    pub viewport_height: f32,
    /// Reference frame rate. A frame-scaled delta of 1.0 equals `1 / frame_rate` seconds.
    pub frame_rate: f32,
    /// Seconds per transition phase (covering, then revealing). Default: 0.4.
    pub phase_duration: f32,
    /// Easing for the covering phase.
    pub cover_easing: Easing,
    /// Easing for the revealing phase.
    pub reveal_easing: Easing,
    /// Seed for random transition selection.
    pub seed: u64,
    /// Attach the FPS diagnostics overlay.
    pub show_fps: bool,
    /// Seconds between FPS samples (default: 0.5).
    pub fps_sample_interval: f32,
    /// Overlay wire capacity in instances (default: 64).
    pub max_overlay_instances: usize,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 720.0,
            frame_rate: 60.0,
            phase_duration: 0.4,
            cover_easing: Easing::QuadIn,
            reveal_easing: Easing::QuadOut,
            seed: 42,
            show_fps: true,
            fps_sample_interval: 0.5,
            max_overlay_instances: 64,
        }
    }
}

impl StageConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, StageError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<(), StageError> {
        let positive = [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("frame_rate", self.frame_rate),
            ("phase_duration", self.phase_duration),
            ("fps_sample_interval", self.fps_sample_interval),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(StageError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        // softWipe is the largest geometry: one solid fill plus its feather bands.
        let needed = crate::transition::effect::MAX_OVERLAY_INSTANCES;
        if self.max_overlay_instances < needed {
            return Err(StageError::InvalidConfig(format!(
                "max_overlay_instances must be at least {needed}, got {}",
                self.max_overlay_instances
            )));
        }
        Ok(())
    }

    /// Initial viewport.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height)
    }

    /// Phase duration converted to frame-scaled delta units.
    pub fn phase_duration_frames(&self) -> f32 {
        self.phase_duration * self.frame_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = StageConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.phase_duration_frames() - 24.0).abs() < 0.001);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config = StageConfig::from_json(r#"{ "phase_duration": 0.25, "seed": 7 }"#).unwrap();
        assert_eq!(config.phase_duration, 0.25);
        assert_eq!(config.seed, 7);
        assert_eq!(config.viewport_width, 1280.0);
        assert_eq!(config.cover_easing, Easing::QuadIn);
    }

    #[test]
    fn easing_names_parse() {
        let config = StageConfig::from_json(
            r#"{ "cover_easing": "cubic_in", "reveal_easing": "sine_out" }"#,
        )
        .unwrap();
        assert_eq!(config.cover_easing, Easing::CubicIn);
        assert_eq!(config.reveal_easing, Easing::SineOut);
    }

    #[test]
    fn rejects_zero_duration() {
        let err = StageConfig::from_json(r#"{ "phase_duration": 0.0 }"#).unwrap_err();
        assert!(matches!(err, StageError::InvalidConfig(_)), "got {err:?}");
    }

    #[test]
    fn rejects_tiny_overlay_capacity() {
        let err = StageConfig::from_json(r#"{ "max_overlay_instances": 2 }"#).unwrap_err();
        assert!(matches!(err, StageError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = StageConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, StageError::Config(_)));
    }
}
