pub mod overlay;
pub mod stage;

// Re-export key types for convenient access
pub use overlay::{OverlayBuffer, OverlayInstance};
pub use stage::{Stage, StageNode};
