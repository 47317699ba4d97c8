use serde::{Deserialize, Serialize};

use super::types::Rgb;

/// What the scene does when the viewport changes size after the drift
/// surface has been allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizePolicy {
    /// Keep the original dimensions and heightfield. Later resizes are dropped.
    #[default]
    Ignore,
    /// Resample the heightfield to the new width and rescale it to the new floor.
    Resample,
}

/// Tunables for the snow scene, provided by the host.
/// Loaded from JSON at runtime; every field falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnowConfig {
    /// Number of falling particles (fixed population).
    pub particle_count: usize,
    /// Diffusion passes run after every simulation step (default: 4).
    pub relax_passes: u32,
    /// Seed for the default random source.
    pub seed: u64,
    /// Min/max particle radius in pixels.
    pub radius_range: (f32, f32),
    /// Min/max fall speed in pixels per frame.
    pub speed_range: (f32, f32),
    /// Min/max grey level of a particle.
    pub grey_range: (u8, u8),
    /// Upper bound of the offset subtracted from red and green.
    pub blue_tint_max: u8,
    /// Floor of the depth speed factor.
    pub min_speed_factor: f32,
    /// Peak horizontal wander in pixels at the bottom edge.
    pub wander_amplitude: f32,
    /// Vertical distance (pixels) per radian of wander oscillation.
    pub wander_wavelength: f32,
    /// Height removed at the center of a deposit, per pixel of radius.
    pub deposit_gain: f32,
    /// Fraction (1/n) of a slope moved per diffusion transfer.
    pub diffusion_divisor: f32,
    /// Slopes at or below this many pixels are left alone.
    pub diffusion_tolerance: f32,
    /// Clear color.
    pub background: Rgb,
    /// Drift fill color.
    pub snow_color: Rgb,
    /// Behavior on resize after first allocation.
    pub resize_policy: ResizePolicy,
}

impl Default for SnowConfig {
    fn default() -> Self {
        Self {
            particle_count: 150,
            relax_passes: 4,
            seed: 42,
            radius_range: (2.0, 6.0),
            speed_range: (4.0, 9.0),
            grey_range: (200, 255),
            blue_tint_max: 30,
            min_speed_factor: 0.1,
            wander_amplitude: 30.0,
            wander_wavelength: 50.0,
            deposit_gain: 18.0,
            diffusion_divisor: 128.0,
            diffusion_tolerance: 1.0,
            background: Rgb::BACKGROUND,
            snow_color: Rgb::SNOW,
            resize_policy: ResizePolicy::Ignore,
        }
    }
}

impl SnowConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::validated)
    }

    /// Repair values the simulation cannot use instead of rejecting them.
    pub fn validated(mut self) -> Self {
        self.radius_range = ordered(self.radius_range);
        self.speed_range = ordered(self.speed_range);
        if self.grey_range.0 > self.grey_range.1 {
            self.grey_range = (self.grey_range.1, self.grey_range.0);
        }
        if self.radius_range.0 <= 0.0 {
            self.radius_range.0 = f32::EPSILON;
            self.radius_range.1 = self.radius_range.1.max(f32::EPSILON);
        }
        if self.speed_range.0 <= 0.0 {
            self.speed_range.0 = f32::EPSILON;
            self.speed_range.1 = self.speed_range.1.max(f32::EPSILON);
        }
        self.min_speed_factor = self.min_speed_factor.clamp(f32::EPSILON, 1.0);
        if self.wander_wavelength <= 0.0 {
            self.wander_wavelength = Self::default().wander_wavelength;
        }
        self.diffusion_divisor = self.diffusion_divisor.max(1.0);
        self.diffusion_tolerance = self.diffusion_tolerance.max(0.0);
        self
    }
}

fn ordered((lo, hi): (f32, f32)) -> (f32, f32) {
    if lo > hi { (hi, lo) } else { (lo, hi) }
}
