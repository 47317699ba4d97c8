pub mod drift;
pub mod particles;
pub mod render;
