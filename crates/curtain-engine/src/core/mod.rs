pub mod manager;
pub mod rng;
pub mod scene;
pub mod time;

pub use manager::SceneManager;
pub use scene::{Resizable, Scene, SceneContext, SceneRequest};
