use crate::api::config::StageConfig;
use crate::api::error::{SceneError, StageError};
use crate::api::types::{SceneId, Viewport};
use crate::core::rng::Rng;
use crate::core::scene::{Scene, SceneContext};
use crate::core::time::FrameClock;
use crate::diagnostics::fps::FpsCounter;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::stage::{Stage, StageNode};
use crate::transition::{SceneTransition, TransitionEvent, TransitionKind};

struct ActiveScene {
    id: SceneId,
    scene: Box<dyn Scene>,
}

/// Single owner of the active scene.
///
/// Scene changes go through a two-phase overlay transition: the new scene waits
/// in the pending slot until the overlay fully covers the screen, then the
/// scenes are swapped and the overlay reveals the new one. While a transition
/// is in flight further change requests are dropped, never queued.
pub struct SceneManager {
    config: StageConfig,
    viewport: Viewport,
    clock: FrameClock,
    stage: Stage,
    transition: SceneTransition,
    diagnostics: Option<FpsCounter>,
    current: Option<ActiveScene>,
    pending: Option<Box<dyn Scene>>,
    ctx: SceneContext,
    input: InputQueue,
    rng: Rng,
    next_scene_id: u32,
}

impl SceneManager {
    pub fn new(config: StageConfig) -> Result<Self, StageError> {
        config.validate()?;
        let viewport = config.viewport();

        let mut stage = Stage::new();
        stage.attach(StageNode::TransitionOverlay);
        let diagnostics = if config.show_fps {
            stage.attach(StageNode::Diagnostics);
            Some(FpsCounter::new(config.fps_sample_interval))
        } else {
            None
        };

        Ok(Self {
            viewport,
            clock: FrameClock::new(config.frame_rate),
            stage,
            transition: SceneTransition::new(viewport, &config),
            diagnostics,
            current: None,
            pending: None,
            ctx: SceneContext::new(viewport).with_frame_rate(config.frame_rate),
            input: InputQueue::new(),
            rng: Rng::new(config.seed),
            next_scene_id: 1,
            config,
        })
    }

    /// Transition to `next`. `None` picks one of the six kinds uniformly at random.
    ///
    /// Dropped with a warning while another transition is in flight; the
    /// returned error only reports that, it is never fatal.
    pub fn change_scene(
        &mut self,
        next: Box<dyn Scene>,
        kind: Option<TransitionKind>,
    ) -> Result<TransitionKind, StageError> {
        if self.pending.is_some() || self.transition.is_active() {
            log::warn!(
                "change_scene: dropping `{}`, a {:?} transition is in flight",
                next.name(),
                self.transition.kind()
            );
            return Err(StageError::TransitionInFlight);
        }

        let kind = kind.unwrap_or_else(|| self.random_kind());
        log::info!("change_scene: `{}` via {:?}", next.name(), kind);
        self.pending = Some(next);
        self.transition.start(kind);
        Ok(kind)
    }

    fn random_kind(&mut self) -> TransitionKind {
        self.rng
            .pick(&TransitionKind::ALL)
            .copied()
            .unwrap_or(TransitionKind::Fade)
    }

    /// Per-frame tick: scene, then transition, then diagnostics.
    pub fn update(&mut self, delta: f32) {
        let seconds = self.clock.advance(delta);

        self.ctx.set_input(self.input.drain());
        if let Some(active) = &mut self.current {
            if let Err(err) = active.scene.update(&mut self.ctx, delta) {
                log_hook_error(&err);
            }
        }
        self.ctx.set_input(Vec::new());

        for request in self.ctx.take_requests() {
            // Rejections are already logged by change_scene.
            let _ = self.change_scene(request.scene, request.kind);
        }

        match self.transition.update(delta) {
            Some(TransitionEvent::Midpoint) => self.swap_scenes(),
            Some(TransitionEvent::Completed) | None => {}
        }

        if let Some(fps) = &mut self.diagnostics {
            fps.tick(seconds);
        }
    }

    /// Runs once per transition, while the overlay covers the whole screen.
    fn swap_scenes(&mut self) {
        if let Some(mut old) = self.current.take() {
            if let Err(err) = old.scene.on_exit() {
                log_hook_error(&err);
            }
            self.stage.detach(StageNode::Scene(old.id));
            log::debug!("scene `{}` exited", old.scene.name());
        }

        if let Some(scene) = self.pending.take() {
            let id = SceneId(self.next_scene_id);
            self.next_scene_id += 1;
            self.stage.attach(StageNode::Scene(id));

            let mut active = ActiveScene { id, scene };
            if let Err(err) = active.scene.on_enter(&mut self.ctx) {
                log_hook_error(&err);
            }
            log::info!("scene `{}` entered", active.scene.name());
            self.current = Some(active);
        }

        // Scene roots were attached on top; put the overlays back above them.
        self.stage.bring_to_front(StageNode::TransitionOverlay);
        self.stage.bring_to_front(StageNode::Diagnostics);
    }

    /// Follow a host viewport change and forward it to a resizable scene.
    pub fn resize(&mut self, width: f32, height: f32) {
        let viewport = Viewport::new(width, height);
        log::debug!("resize: {}x{}", width, height);
        self.viewport = viewport;
        self.ctx.set_viewport(viewport);
        self.transition.resize(viewport);

        if let Some(active) = &mut self.current {
            if let Some(resizable) = active.scene.as_resizable() {
                if let Err(err) = resizable.on_resize(&mut self.ctx) {
                    log_hook_error(&err);
                }
            }
        }
    }

    /// Queue input for the active scene's next update.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Tear everything down: cancel the transition, drop the pending scene,
    /// exit the current one.
    pub fn shutdown(&mut self) {
        self.transition.reset();
        if let Some(pending) = self.pending.take() {
            log::debug!("shutdown: discarding pending `{}`", pending.name());
        }
        if let Some(mut active) = self.current.take() {
            if let Err(err) = active.scene.on_exit() {
                log_hook_error(&err);
            }
            self.stage.detach(StageNode::Scene(active.id));
        }
    }

    // ---- Accessors ----

    pub fn viewport_width(&self) -> f32 {
        self.viewport.width
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport.height
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The active scene, if any.
    pub fn current_scene(&self) -> Option<&dyn Scene> {
        self.current.as_ref().map(|active| active.scene.as_ref())
    }

    pub fn current_scene_id(&self) -> Option<SceneId> {
        self.current.as_ref().map(|active| active.id)
    }

    pub fn has_pending_scene(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_active()
    }

    pub fn transition(&self) -> &SceneTransition {
        &self.transition
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn diagnostics(&self) -> Option<&FpsCounter> {
        self.diagnostics.as_ref()
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }
}

fn log_hook_error(err: &SceneError) {
    log::error!("{}", err);
}
