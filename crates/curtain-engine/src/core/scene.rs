use crate::api::error::SceneError;
use crate::api::types::Viewport;
use crate::input::queue::InputEvent;
use crate::transition::effect::TransitionKind;

/// One screen of visual content driven by the [`SceneManager`](crate::core::manager::SceneManager).
///
/// Lifecycle: constructed by the caller → `on_enter` when it becomes active →
/// `update` every frame while active → `on_exit` once when replaced → dropped.
/// A scene is never re-entered.
pub trait Scene {
    /// Name used in log output.
    fn name(&self) -> &str {
        "scene"
    }

    /// Build all visible content. Not the constructor's job: a scene may be
    /// constructed while its predecessor is still on screen.
    fn on_enter(&mut self, ctx: &mut SceneContext) -> Result<(), SceneError>;

    /// Release content and stop every timer or animation the scene started.
    /// Called exactly once.
    fn on_exit(&mut self) -> Result<(), SceneError>;

    /// Advance one frame. `delta` is frame-scaled (1.0 = one frame at the
    /// reference rate), so per-frame changes must be multiplied by it.
    fn update(&mut self, ctx: &mut SceneContext, delta: f32) -> Result<(), SceneError>;

    /// Resize capability, if the scene has one.
    fn as_resizable(&mut self) -> Option<&mut dyn Resizable> {
        None
    }
}

/// Optional capability: rebuild content when the host viewport changes.
/// Scenes without it keep their layout on resize.
pub trait Resizable {
    fn on_resize(&mut self, ctx: &mut SceneContext) -> Result<(), SceneError>;
}

/// A scene change asked for by a scene.
pub struct SceneRequest {
    pub scene: Box<dyn Scene>,
    pub kind: Option<TransitionKind>,
}

/// What a scene can see and ask for while one of its hooks runs.
pub struct SceneContext {
    viewport: Viewport,
    frame_rate: f32,
    input: Vec<InputEvent>,
    requests: Vec<SceneRequest>,
}

impl SceneContext {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            frame_rate: 60.0,
            input: Vec::new(),
            requests: Vec::new(),
        }
    }

    /// Reference rate used by [`seconds`](Self::seconds).
    pub fn with_frame_rate(mut self, frame_rate: f32) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    /// Convert a frame-scaled delta to seconds.
    pub fn seconds(&self, delta: f32) -> f32 {
        delta.max(0.0) / self.frame_rate
    }

    /// Current host viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Input delivered for this frame.
    pub fn input(&self) -> &[InputEvent] {
        &self.input
    }

    /// Ids of `InputEvent::Command` events delivered this frame.
    pub fn commands(&self) -> impl Iterator<Item = u32> + '_ {
        self.input.iter().filter_map(|event| match event {
            InputEvent::Command { id } => Some(*id),
            _ => None,
        })
    }

    /// Ask the manager to transition to `scene` once this hook returns.
    /// `None` picks a random transition. Subject to the usual busy rule.
    pub fn request_scene(&mut self, scene: impl Scene + 'static, kind: Option<TransitionKind>) {
        self.requests.push(SceneRequest {
            scene: Box::new(scene),
            kind,
        });
    }

    pub(crate) fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub(crate) fn set_input(&mut self, input: Vec<InputEvent>) {
        self.input = input;
    }

    pub(crate) fn take_requests(&mut self) -> Vec<SceneRequest> {
        std::mem::take(&mut self.requests)
    }
}

impl std::fmt::Debug for SceneContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneContext")
            .field("viewport", &self.viewport)
            .field("frame_rate", &self.frame_rate)
            .field("input", &self.input)
            .field("requests", &self.requests.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Blank;

    impl Scene for Blank {
        fn on_enter(&mut self, _ctx: &mut SceneContext) -> Result<(), SceneError> {
            Ok(())
        }

        fn on_exit(&mut self) -> Result<(), SceneError> {
            Ok(())
        }

        fn update(&mut self, _ctx: &mut SceneContext, _delta: f32) -> Result<(), SceneError> {
            Ok(())
        }
    }

    #[test]
    fn scenes_are_not_resizable_by_default() {
        let mut scene = Blank;
        assert!(scene.as_resizable().is_none());
        assert_eq!(scene.name(), "scene");
    }

    #[test]
    fn commands_filters_input() {
        let mut ctx = SceneContext::new(Viewport::default());
        ctx.set_input(vec![
            InputEvent::PointerDown { x: 1.0, y: 1.0 },
            InputEvent::Command { id: 3 },
            InputEvent::KeyDown { key_code: 13 },
            InputEvent::Command { id: 0 },
        ]);
        assert_eq!(ctx.commands().collect::<Vec<_>>(), vec![3, 0]);
    }

    #[test]
    fn seconds_use_the_reference_rate() {
        let ctx = SceneContext::new(Viewport::default()).with_frame_rate(30.0);
        assert!((ctx.seconds(3.0) - 0.1).abs() < 1e-6);
        assert_eq!(ctx.seconds(-1.0), 0.0);
    }

    #[test]
    fn requests_are_taken_once() {
        let mut ctx = SceneContext::new(Viewport::default());
        ctx.request_scene(Blank, Some(TransitionKind::Wipe));
        let requests = ctx.take_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].kind, Some(TransitionKind::Wipe));
        assert!(ctx.take_requests().is_empty());
    }
}
