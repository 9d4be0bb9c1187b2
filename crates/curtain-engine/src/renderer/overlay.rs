use bytemuck::{Pod, Zeroable};

use crate::transition::effect::OverlayGeometry;

/// Instance kind: a black rectangle fill.
pub const KIND_FILL: f32 = 0.0;
/// Instance kind: circle clip applied to all fills (x, y = center, width = radius).
pub const KIND_CIRCLE_CLIP: f32 = 1.0;

/// One overlay drawing instruction as read by the host renderer.
/// 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct OverlayInstance {
    /// `KIND_FILL` or `KIND_CIRCLE_CLIP`.
    pub kind: f32,
    pub x: f32,
    pub y: f32,
    /// Rect width, or clip radius.
    pub width: f32,
    pub height: f32,
    pub alpha: f32,
    pub _reserved: [f32; 2],
}

impl OverlayInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Flat instance list rebuilt from the transition's geometry once per frame.
pub struct OverlayBuffer {
    instances: Vec<OverlayInstance>,
    capacity: usize,
}

impl OverlayBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Replace contents with `geometry`. The clip, if any, is written first.
    /// Fills beyond capacity are dropped with a warning.
    pub fn fill_from(&mut self, geometry: &OverlayGeometry) {
        self.instances.clear();
        if let Some(clip) = geometry.clip {
            self.push(OverlayInstance {
                kind: KIND_CIRCLE_CLIP,
                x: clip.center.x,
                y: clip.center.y,
                width: clip.radius,
                height: clip.radius,
                alpha: 1.0,
                _reserved: [0.0; 2],
            });
        }
        for fill in &geometry.fills {
            self.push(OverlayInstance {
                kind: KIND_FILL,
                x: fill.rect.origin.x,
                y: fill.rect.origin.y,
                width: fill.rect.size.x,
                height: fill.rect.size.y,
                alpha: fill.alpha,
                _reserved: [0.0; 2],
            });
        }
    }

    fn push(&mut self, instance: OverlayInstance) {
        if self.instances.len() >= self.capacity {
            log::warn!("overlay buffer full ({} instances); dropping instance", self.capacity);
            return;
        }
        self.instances.push(instance);
    }

    pub fn instances(&self) -> &[OverlayInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Instances as raw floats.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for host-side reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}
