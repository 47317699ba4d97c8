//! Drawing contract between the simulation and its host.
//!
//! The engine never touches a screen. Each frame the host hands the scene a
//! `DrawTarget` and the render pass issues three kinds of primitive against it.
//! Backends in this crate: `CommandBuffer` (recorded for a JS canvas) and
//! `Framebuffer` (software RGBA raster).

use crate::api::types::Rgb;

/// Surface capability supplied by the host for one frame.
///
/// # Example Implementation
///
/// ```ignore
/// struct CanvasTarget<'a> {
///     ctx: &'a web_sys::CanvasRenderingContext2d,
/// }
///
/// impl DrawTarget for CanvasTarget<'_> {
///     fn clear(&mut self, color: Rgb) { /* fill_rect over the canvas */ }
///     fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb) { /* arc + fill */ }
///     fn fill_column_rect(&mut self, x0: f32, x1: f32, y_top: f32, y_bottom: f32, color: Rgb) {
///         /* fill_rect(x0, y_top, x1 - x0, y_bottom - y_top) */
///     }
/// }
/// ```
pub trait DrawTarget {
    /// Fill the whole surface.
    fn clear(&mut self, color: Rgb);

    /// Fill a disc centered at (x, y).
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb);

    /// Fill the axis-aligned rectangle spanning [x0, x1) horizontally and
    /// [y_top, y_bottom) vertically.
    fn fill_column_rect(&mut self, x0: f32, x1: f32, y_top: f32, y_bottom: f32, color: Rgb);
}
