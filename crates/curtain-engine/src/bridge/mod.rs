pub mod protocol;

pub use protocol::{write_frame, FrameHeader, OverlayLayout};
