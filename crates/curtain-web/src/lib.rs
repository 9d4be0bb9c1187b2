pub mod runner;

pub use runner::StageRunner;

/// Generate all `#[wasm_bindgen]` exports for a stage.
///
/// Generates:
/// - `thread_local!` storage for the StageRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (stage_init, stage_tick, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod menu;
/// use menu::MainMenu;
///
/// curtain_web::export_stage!(MainMenu, "my-app");
/// ```
///
/// # Arguments
///
/// - `$scene_type`: The root scene type; it must implement `curtain_engine::Scene`
///   and provide `fn new() -> Self`
/// - `$stage_name`: A string literal used in the initialization log message
///
/// `stage_init` takes the `StageConfig` as JSON; an empty string means defaults.
#[macro_export]
macro_rules! export_stage {
    ($scene_type:ty, $stage_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::StageRunner<$scene_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::StageRunner<$scene_type>) -> R) -> Option<R> {
            RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
                Some(runner) => Some(f(runner)),
                None => {
                    log::error!("{}: not initialized, call stage_init() first", $stage_name);
                    None
                }
            })
        }

        #[wasm_bindgen]
        pub fn stage_init(config_json: &str) {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let config = if config_json.trim().is_empty() {
                Ok(curtain_engine::StageConfig::default())
            } else {
                curtain_engine::StageConfig::from_json(config_json)
            };
            let runner = config.and_then(|config| {
                $crate::StageRunner::new(<$scene_type>::new(), config)
            });
            let runner = match runner {
                Ok(runner) => runner,
                Err(err) => {
                    log::error!("{}: {}", $stage_name, err);
                    return;
                }
            };

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $stage_name);
        }

        #[wasm_bindgen]
        pub fn stage_tick(delta: f32) {
            with_runner(|r| r.tick(delta));
        }

        #[wasm_bindgen]
        pub fn stage_resize(width: f32, height: f32) {
            with_runner(|r| r.resize(width, height));
        }

        #[wasm_bindgen]
        pub fn stage_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(curtain_engine::InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn stage_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(curtain_engine::InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn stage_key_down(key_code: u32) {
            with_runner(|r| r.push_input(curtain_engine::InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn stage_command(id: u32) {
            with_runner(|r| r.push_input(curtain_engine::InputEvent::Command { id }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_frame_ptr() -> *const f32 {
            with_runner(|r| r.frame_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_overlay_ptr() -> *const f32 {
            with_runner(|r| r.overlay_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_overlay_count() -> u32 {
            with_runner(|r| r.overlay_count()).unwrap_or_default()
        }

        #[wasm_bindgen]
        pub fn get_overlay_visible() -> bool {
            with_runner(|r| r.overlay_visible()).unwrap_or_default()
        }

        #[wasm_bindgen]
        pub fn get_viewport_width() -> f32 {
            with_runner(|r| r.viewport_width()).unwrap_or_default()
        }

        #[wasm_bindgen]
        pub fn get_viewport_height() -> f32 {
            with_runner(|r| r.viewport_height()).unwrap_or_default()
        }

        #[wasm_bindgen]
        pub fn get_fps() -> u32 {
            with_runner(|r| r.fps()).unwrap_or_default()
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_overlay_instances() -> u32 {
            with_runner(|r| r.max_overlay_instances()).unwrap_or_default()
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats()).unwrap_or_default()
        }
    };
}
