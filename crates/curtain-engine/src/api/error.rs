use thiserror::Error;

/// Failure reported by a scene lifecycle hook.
///
/// The manager logs these and keeps the transition running; a failing scene
/// never leaves the overlay stuck on screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// `on_enter` could not build the scene's content.
    #[error("scene `{scene}` failed to build its content: {reason}")]
    Build { scene: String, reason: String },
    /// `on_exit` could not release the scene's content.
    #[error("scene `{scene}` failed to release its content: {reason}")]
    Release { scene: String, reason: String },
    /// `update` or `on_resize` failed.
    #[error("scene `{scene}` failed to update: {reason}")]
    Update { scene: String, reason: String },
}

impl SceneError {
    pub fn build(scene: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Build { scene: scene.into(), reason: reason.into() }
    }

    pub fn release(scene: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Release { scene: scene.into(), reason: reason.into() }
    }

    pub fn update(scene: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Update { scene: scene.into(), reason: reason.into() }
    }
}

/// Engine-level errors.
#[derive(Debug, Error)]
pub enum StageError {
    /// A scene change was requested while another transition was in flight.
    /// The request was dropped.
    #[error("a scene transition is already in flight; request dropped")]
    TransitionInFlight,
    /// Configuration values out of range.
    #[error("invalid stage config: {0}")]
    InvalidConfig(String),
    /// Configuration JSON could not be parsed.
    #[error("failed to parse stage config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_error_message_names_scene() {
        let err = SceneError::build("menu", "no font");
        assert_eq!(err.to_string(), "scene `menu` failed to build its content: no font");
    }

    #[test]
    fn config_error_converts_from_serde() {
        let parse: Result<u32, _> = serde_json::from_str("not json");
        let err: StageError = parse.unwrap_err().into();
        assert!(matches!(err, StageError::Config(_)));
    }
}
