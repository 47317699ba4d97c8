use glam::Vec2;

use crate::api::config::SnowConfig;
use crate::api::types::Rgb;
use crate::core::rng::RandomSource;

/// A single falling snowflake.
///
/// Radius, fall speed, color and wander phase are fixed at creation.
/// Only the position moves, and only through the simulation step.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub(crate) pos: Vec2,
    radius: f32,
    speed: f32,
    color: Rgb,
    phase: f32,
}

impl Particle {
    pub fn new(pos: Vec2, radius: f32, speed: f32, color: Rgb, phase: f32) -> Self {
        Self { pos, radius, speed, color, phase }
    }

    /// Create a particle anywhere inside the viewport.
    ///
    /// Draw order: x, y, radius, speed, phase, grey level, blue tint.
    pub fn random<R: RandomSource + ?Sized>(
        width: f32,
        height: f32,
        config: &SnowConfig,
        rng: &mut R,
    ) -> Self {
        let x = rng.range(0.0, width);
        let y = rng.range(0.0, height);
        let radius = rng.range(config.radius_range.0, config.radius_range.1);
        let speed = rng.range(config.speed_range.0, config.speed_range.1);
        let phase = rng.range(0.0, std::f32::consts::TAU);
        let color = snow_tone(config, rng);
        Self::new(Vec2::new(x, y), radius, speed, color, phase)
    }

    /// Move the particle back above the top edge at a random column.
    /// Radius, speed, color and phase are kept.
    pub fn respawn<R: RandomSource + ?Sized>(&mut self, width: f32, rng: &mut R) {
        self.pos = Vec2::new(rng.range(0.0, width), -self.radius);
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }
}

/// Grey level with a faint blue cast: red and green drop by the tint, blue keeps the grey.
fn snow_tone<R: RandomSource + ?Sized>(config: &SnowConfig, rng: &mut R) -> Rgb {
    let (lo, hi) = config.grey_range;
    let grey = uniform_u8(lo, hi, rng);
    let tint = uniform_u8(0, config.blue_tint_max, rng);
    let rg = grey.saturating_sub(tint);
    Rgb::new(rg, rg, grey)
}

/// Uniform integer in [lo, hi].
fn uniform_u8<R: RandomSource + ?Sized>(lo: u8, hi: u8, rng: &mut R) -> u8 {
    let span = (hi as f32 - lo as f32) + 1.0;
    let offset = (rng.next_unit() * span) as u32;
    (lo as u32 + offset).min(hi as u32) as u8
}
