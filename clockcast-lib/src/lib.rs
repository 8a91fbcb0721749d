pub mod cipher;
pub mod constants;
pub mod error;
pub mod net;
pub mod packet;
pub mod session;

// Re-export the frame types for easy access
pub use packet::{FrameView, TimePacket};
