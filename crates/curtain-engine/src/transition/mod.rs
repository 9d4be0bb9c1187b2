//! Full-screen overlay that conceals scene swaps.
//!
//! `SceneTransition` pairs a [`PhaseDriver`] with the geometry table in
//! [`effect`]. The manager starts it, feeds it frame deltas, and swaps scenes
//! when `update` reports [`TransitionEvent::Midpoint`].

pub mod driver;
pub mod effect;

pub use driver::{DriverStep, PhaseDriver, TransitionPhase};
pub use effect::{
    overlay_geometry, CircleClip, OverlayFill, OverlayGeometry, OverlayRect, TransitionKind,
};

use crate::api::config::StageConfig;
use crate::api::types::Viewport;

/// Something the manager must react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    /// The screen is fully covered; swap scenes now.
    Midpoint,
    /// The overlay finished revealing and is hidden again.
    Completed,
}

/// The overlay animator.
///
/// Idle → Covering (progress 0 → 1) → Midpoint → Revealing (1 → 2) → Idle.
#[derive(Debug)]
pub struct SceneTransition {
    driver: PhaseDriver,
    kind: TransitionKind,
    viewport: Viewport,
    visible: bool,
    geometry: OverlayGeometry,
}

impl SceneTransition {
    pub fn new(viewport: Viewport, config: &StageConfig) -> Self {
        Self {
            driver: PhaseDriver::new(
                config.phase_duration_frames(),
                config.cover_easing,
                config.reveal_easing,
            ),
            kind: TransitionKind::Fade,
            viewport,
            visible: false,
            geometry: OverlayGeometry::default(),
        }
    }

    /// Begin covering with `kind`.
    ///
    /// Returns `false` and changes nothing if a transition is already active.
    pub fn start(&mut self, kind: TransitionKind) -> bool {
        if self.is_active() {
            log::warn!("transition start ignored: {:?} already in flight", self.kind);
            return false;
        }
        self.kind = kind;
        self.driver.start();
        self.visible = true;
        self.rebuild_geometry();
        log::info!("transition: starting {:?}", kind);
        true
    }

    /// Advance by a frame-scaled delta and recompute the overlay.
    pub fn update(&mut self, delta: f32) -> Option<TransitionEvent> {
        match self.driver.advance(delta) {
            DriverStep::Idle => None,
            DriverStep::Advanced => {
                self.rebuild_geometry();
                None
            }
            DriverStep::Midpoint => {
                self.rebuild_geometry();
                Some(TransitionEvent::Midpoint)
            }
            DriverStep::Completed => {
                self.visible = false;
                self.geometry = OverlayGeometry::default();
                log::info!("transition: {:?} complete", self.kind);
                Some(TransitionEvent::Completed)
            }
        }
    }

    /// Force back to idle from any state. Nothing fires for the cancelled cycle.
    pub fn reset(&mut self) {
        self.driver.cancel();
        self.visible = false;
        self.geometry = OverlayGeometry::default();
    }

    /// Follow a host viewport change.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if self.is_active() {
            self.rebuild_geometry();
        }
    }

    fn rebuild_geometry(&mut self) {
        self.geometry = overlay_geometry(self.kind, self.driver.progress(), self.viewport);
    }

    /// True for the whole [0, 2] span of a transition.
    pub fn is_active(&self) -> bool {
        self.driver.is_running()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn progress(&self) -> f32 {
        self.driver.progress()
    }

    pub fn phase(&self) -> TransitionPhase {
        self.driver.phase()
    }

    /// Kind of the current (or last) transition.
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// Overlay drawing instructions for this frame. Empty while hidden.
    pub fn geometry(&self) -> &OverlayGeometry {
        &self.geometry
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}
