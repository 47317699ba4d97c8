use crate::api::types::Rgb;
use crate::components::particle::Particle;
use crate::renderer::traits::DrawTarget;
use crate::systems::drift::DriftSurface;

/// Colors used by the frame pass.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Rgb,
    pub snow: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::BACKGROUND,
            snow: Rgb::SNOW,
        }
    }
}

/// Draw one frame: clear, every particle as a disc, then the drift as one
/// filled column per pixel from its surface height down to `floor`.
pub fn draw_frame<'a, T: DrawTarget + ?Sized>(
    target: &mut T,
    particles: impl IntoIterator<Item = &'a Particle>,
    drift: &DriftSurface,
    floor: f32,
    palette: &Palette,
) {
    target.clear(palette.background);

    for p in particles {
        let pos = p.pos();
        target.fill_circle(pos.x, pos.y, p.radius(), p.color());
    }

    for (column, &top) in drift.heights().iter().enumerate() {
        let x0 = column as f32;
        target.fill_column_rect(x0, x0 + 1.0, top, floor, palette.snow);
    }
}
