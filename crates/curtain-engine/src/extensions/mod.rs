// extensions/mod.rs
//
// Optional helpers that sit beside the scene lifecycle.
// Scenes opt in; the transition driver uses the easing curves.

pub mod easing;

pub use easing::{ease, lerp, Easing};
