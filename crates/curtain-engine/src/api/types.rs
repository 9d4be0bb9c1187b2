use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Handle for a scene root attached to the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneId(pub u32);

/// Host viewport size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Size as a vector (width, height).
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Center point of the viewport.
    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Distance from the center to any corner.
    pub fn corner_distance(&self) -> f32 {
        self.center().length()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_distance_is_half_diagonal() {
        let vp = Viewport::new(800.0, 600.0);
        assert!((vp.corner_distance() - 500.0).abs() < 0.001);
    }

    #[test]
    fn center_is_half_size() {
        let vp = Viewport::new(100.0, 40.0);
        assert_eq!(vp.center(), Vec2::new(50.0, 20.0));
    }
}
