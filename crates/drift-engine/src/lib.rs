pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::config::{ResizePolicy, SnowConfig};
pub use api::types::Rgb;
pub use components::particle::Particle;
pub use core::rng::{RandomSource, Rng};
pub use core::scene::SnowScene;
pub use renderer::commands::{CommandBuffer, CommandKind, DrawCommand};
pub use renderer::framebuffer::Framebuffer;
pub use renderer::traits::DrawTarget;
pub use systems::drift::DriftSurface;
pub use systems::particles::{Kinematics, ParticleField, StepOutcome, StepStats};
pub use systems::render::{draw_frame, Palette};
