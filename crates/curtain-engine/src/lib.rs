pub mod api;
pub mod core;
pub mod transition;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod extensions;
pub mod diagnostics;

// Re-export key types at crate root for convenience
pub use api::config::StageConfig;
pub use api::error::{SceneError, StageError};
pub use api::types::{SceneId, Viewport};
pub use core::manager::SceneManager;
pub use core::scene::{Resizable, Scene, SceneContext, SceneRequest};
pub use core::rng::Rng;
pub use core::time::FrameClock;
pub use transition::{SceneTransition, TransitionEvent, TransitionKind, TransitionPhase};
pub use transition::effect::OverlayGeometry;
pub use renderer::overlay::{OverlayBuffer, OverlayInstance};
pub use renderer::stage::{Stage, StageNode};
pub use bridge::protocol::{FrameHeader, OverlayLayout};
pub use input::queue::{InputEvent, InputQueue};
pub use diagnostics::{FpsCounter, FpsRating};
pub use extensions::Easing;
