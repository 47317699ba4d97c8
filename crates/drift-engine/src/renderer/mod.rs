pub mod commands;
pub mod framebuffer;
pub mod traits;

// Re-export key types for convenient access
pub use commands::{CommandBuffer, CommandKind, DrawCommand};
pub use framebuffer::Framebuffer;
pub use traits::DrawTarget;
