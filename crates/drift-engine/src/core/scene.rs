use crate::api::config::{ResizePolicy, SnowConfig};
use crate::components::particle::Particle;
use crate::core::rng::{RandomSource, Rng};
use crate::renderer::traits::DrawTarget;
use crate::systems::drift::DriftSurface;
use crate::systems::particles::{Kinematics, ParticleField, StepStats};
use crate::systems::render::{draw_frame, Palette};

/// The whole snow scene: falling particles over an accumulating drift.
///
/// The host owns the frame loop. Per frame it calls `simulate` (or `step`)
/// once and then `render`, never interleaving the two.
pub struct SnowScene<R: RandomSource = Rng> {
    config: SnowConfig,
    palette: Palette,
    width: u32,
    height: u32,
    field: ParticleField,
    drift: DriftSurface,
    rng: R,
    frames: u64,
}

impl SnowScene<Rng> {
    /// Create a scene seeded from `config.seed`.
    pub fn new(config: SnowConfig) -> Self {
        let rng = Rng::new(config.seed);
        Self::with_rng(config, rng)
    }
}

impl Default for SnowScene<Rng> {
    fn default() -> Self {
        Self::new(SnowConfig::default())
    }
}

impl<R: RandomSource> SnowScene<R> {
    /// Create a scene drawing randomness from `rng`.
    pub fn with_rng(config: SnowConfig, rng: R) -> Self {
        let config = config.validated();
        let drift = DriftSurface::new()
            .with_deposit_gain(config.deposit_gain)
            .with_diffusion(config.diffusion_divisor, config.diffusion_tolerance);
        Self {
            palette: Palette {
                background: config.background,
                snow: config.snow_color,
            },
            field: ParticleField::new(Kinematics::from(&config)),
            drift,
            width: 0,
            height: 0,
            rng,
            frames: 0,
            config,
        }
    }

    /// Viewport size notification from the host.
    ///
    /// The first nonzero size allocates the drift and fills the sky with
    /// particles. Later sizes follow `config.resize_policy`.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("snow: zero-sized viewport {}x{}, nothing to do", width, height);
            return;
        }

        if !self.drift.is_allocated() {
            self.width = width;
            self.height = height;
            self.drift.allocate(width, height);
            let count = self.config.particle_count;
            self.initialize(width, height, count);
            log::info!(
                "snow: allocated {} drift columns, {} particles ({}x{})",
                self.drift.width(),
                self.field.len(),
                width,
                height
            );
            return;
        }

        if (width, height) == (self.width, self.height) {
            return;
        }

        match self.config.resize_policy {
            ResizePolicy::Ignore => {
                log::debug!(
                    "snow: resize to {}x{} ignored, keeping {}x{}",
                    width,
                    height,
                    self.width,
                    self.height
                );
            }
            ResizePolicy::Resample => {
                self.drift.resample(width, height);
                self.width = width;
                self.height = height;
                log::debug!("snow: drift resampled to {}x{}", width, height);
            }
        }
    }

    /// Populate the sky with `count` particles spread over the viewport.
    /// No-op if either dimension is zero.
    pub fn initialize(&mut self, width: u32, height: u32, count: usize) {
        self.field
            .initialize(width, height, count, &self.config, &mut self.rng);
    }

    /// Advance one frame against an explicit viewport: move particles,
    /// then run the configured number of diffusion passes.
    pub fn step(&mut self, width: u32, height: u32) -> StepStats {
        if width == 0 || height == 0 || !self.drift.is_allocated() {
            return StepStats::default();
        }
        let stats = self
            .field
            .step(width, height, &mut self.drift, &mut self.rng);
        self.drift.relax(self.config.relax_passes);
        self.frames += 1;
        stats
    }

    /// Advance one frame at the current viewport size.
    ///
    /// Motion is expressed per frame, so `_dt` does not scale it; hosts are
    /// expected to call this once per display refresh.
    pub fn simulate(&mut self, _dt: f32) -> StepStats {
        self.step(self.width, self.height)
    }

    /// Draw the current state: background, particles, then the drift.
    pub fn render<T: DrawTarget + ?Sized>(&self, target: &mut T) {
        draw_frame(
            target,
            self.field.particles(),
            &self.drift,
            self.height as f32,
            &self.palette,
        );
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_allocated(&self) -> bool {
        self.drift.is_allocated()
    }

    pub fn particles(&self) -> &[Particle] {
        self.field.particles()
    }

    /// Read-only access to the drift heightfield.
    pub fn drift(&self) -> &DriftSurface {
        &self.drift
    }

    pub fn config(&self) -> &SnowConfig {
        &self.config
    }

    /// Frames simulated since allocation.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
