/// Overlay buffer layout shared with the host renderer.
/// Must stay in sync with the host's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Overlay instances: max_overlay_instances × 8 floats]
/// ```
///
/// The header is rewritten every frame; capacity is fixed at init.

use crate::api::config::StageConfig;
use crate::renderer::overlay::OverlayInstance;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_OVERLAY_VISIBLE: usize = 2;
pub const HEADER_PROGRESS: usize = 3;
pub const HEADER_EFFECT_KIND: usize = 4;
pub const HEADER_INSTANCE_COUNT: usize = 5;
pub const HEADER_MAX_INSTANCES: usize = 6;
pub const HEADER_VIEWPORT_WIDTH: usize = 7;
pub const HEADER_VIEWPORT_HEIGHT: usize = 8;
pub const HEADER_FPS: usize = 9;
// 10..16 reserved

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLayout {
    /// Maximum overlay instances.
    pub max_instances: usize,
    /// Size of the instance section in floats.
    pub instance_data_floats: usize,
    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl OverlayLayout {
    pub fn new(max_instances: usize) -> Self {
        let instance_data_floats = max_instances * OverlayInstance::FLOATS;
        let instance_data_offset = HEADER_FLOATS;
        let buffer_total_floats = instance_data_offset + instance_data_floats;
        Self {
            max_instances,
            instance_data_floats,
            instance_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &StageConfig) -> Self {
        Self::new(config.max_overlay_instances)
    }
}

/// Per-frame values written into the header.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameHeader {
    pub frame: u32,
    pub visible: bool,
    pub progress: f32,
    pub effect_kind: u8,
    pub instance_count: u32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub fps: u32,
}

/// Write `header` plus `instances` into `out`, which must be
/// `layout.buffer_total_floats` long. Instances beyond capacity are dropped.
pub fn write_frame(
    layout: &OverlayLayout,
    header: &FrameHeader,
    instances: &[OverlayInstance],
    out: &mut [f32],
) {
    debug_assert_eq!(out.len(), layout.buffer_total_floats);
    let count = instances.len().min(layout.max_instances);

    out[..HEADER_FLOATS].fill(0.0);
    out[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
    out[HEADER_FRAME_COUNTER] = header.frame as f32;
    out[HEADER_OVERLAY_VISIBLE] = if header.visible { 1.0 } else { 0.0 };
    out[HEADER_PROGRESS] = header.progress;
    out[HEADER_EFFECT_KIND] = header.effect_kind as f32;
    out[HEADER_INSTANCE_COUNT] = count as f32;
    out[HEADER_MAX_INSTANCES] = layout.max_instances as f32;
    out[HEADER_VIEWPORT_WIDTH] = header.viewport_width;
    out[HEADER_VIEWPORT_HEIGHT] = header.viewport_height;
    out[HEADER_FPS] = header.fps as f32;

    let start = layout.instance_data_offset;
    let floats: &[f32] = bytemuck::cast_slice(&instances[..count]);
    out[start..start + floats.len()].copy_from_slice(floats);
}
