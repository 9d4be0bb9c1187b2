use curtain_engine::bridge::protocol::{write_frame, FrameHeader};
use curtain_engine::{
    InputEvent, OverlayBuffer, OverlayLayout, Scene, SceneManager, StageConfig, StageError,
};

/// Generic stage runner that wires the scene manager to a browser host.
///
/// Each concrete app creates a `thread_local!` StageRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct StageRunner<S: Scene + 'static> {
    manager: SceneManager,
    /// Root scene, handed to the manager on `init`.
    root: Option<S>,
    overlay: OverlayBuffer,
    layout: OverlayLayout,
    /// Header plus overlay instances, read by the host every frame.
    frame_buffer: Vec<f32>,
    frame: u32,
    initialized: bool,
}

impl<S: Scene + 'static> StageRunner<S> {
    pub fn new(root: S, config: StageConfig) -> Result<Self, StageError> {
        let layout = OverlayLayout::from_config(&config);
        let overlay = OverlayBuffer::with_capacity(config.max_overlay_instances);
        let frame_buffer = vec![0.0; layout.buffer_total_floats];
        let manager = SceneManager::new(config)?;

        Ok(Self {
            manager,
            root: Some(root),
            overlay,
            layout,
            frame_buffer,
            frame: 0,
            initialized: false,
        })
    }

    /// Start the root scene. Call once after construction.
    pub fn init(&mut self) {
        let Some(root) = self.root.take() else {
            log::warn!("init: already initialized");
            return;
        };
        if let Err(err) = self.manager.change_scene(Box::new(root), None) {
            log::error!("init: {}", err);
            return;
        }
        self.initialized = true;
        self.write_buffers();
    }

    /// Run one frame: update the manager, then rebuild the overlay buffers.
    pub fn tick(&mut self, delta: f32) {
        if !self.initialized {
            return;
        }
        self.manager.update(delta);
        self.frame = self.frame.wrapping_add(1);
        self.write_buffers();
    }

    fn write_buffers(&mut self) {
        let transition = self.manager.transition();
        if transition.is_visible() {
            self.overlay.fill_from(transition.geometry());
        } else {
            self.overlay.clear();
        }

        let viewport = self.manager.viewport();
        let header = FrameHeader {
            frame: self.frame,
            visible: transition.is_visible(),
            progress: transition.progress(),
            effect_kind: transition.kind().as_u8(),
            instance_count: self.overlay.instance_count(),
            viewport_width: viewport.width,
            viewport_height: viewport.height,
            fps: self.fps(),
        };
        write_frame(
            &self.layout,
            &header,
            self.overlay.instances(),
            &mut self.frame_buffer,
        );
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            log::warn!("resize: ignoring {}x{}", width, height);
            return;
        }
        self.manager.resize(width, height);
        self.write_buffers();
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.manager.push_input(event);
    }

    pub fn manager(&self) -> &SceneManager {
        &self.manager
    }

    // ---- Pointer accessors for host reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame_buffer.as_ptr()
    }

    pub fn frame_buffer(&self) -> &[f32] {
        &self.frame_buffer
    }

    pub fn overlay_ptr(&self) -> *const f32 {
        self.overlay.instances_ptr()
    }

    pub fn overlay_count(&self) -> u32 {
        self.overlay.instance_count()
    }

    pub fn overlay_visible(&self) -> bool {
        self.manager.transition().is_visible()
    }

    pub fn viewport_width(&self) -> f32 {
        self.manager.viewport_width()
    }

    pub fn viewport_height(&self) -> f32 {
        self.manager.viewport_height()
    }

    pub fn fps(&self) -> u32 {
        self.manager.diagnostics().map_or(0, |fps| fps.fps())
    }

    // ---- Capacity accessors ----

    pub fn max_overlay_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
