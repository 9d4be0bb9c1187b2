pub mod config;
pub mod error;
pub mod types;

pub use config::StageConfig;
pub use error::{SceneError, StageError};
pub use types::{SceneId, Viewport};
