//! Falling particle population and its per-frame kinematics.

use crate::api::config::SnowConfig;
use crate::components::particle::Particle;
use crate::core::rng::RandomSource;
use crate::systems::drift::DriftSurface;

/// Per-frame motion tunables, lifted out of `SnowConfig`.
#[derive(Debug, Clone, Copy)]
pub struct Kinematics {
    pub min_speed_factor: f32,
    pub wander_amplitude: f32,
    pub wander_wavelength: f32,
}

impl Default for Kinematics {
    fn default() -> Self {
        Self {
            min_speed_factor: 0.1,
            wander_amplitude: 30.0,
            wander_wavelength: 50.0,
        }
    }
}

impl From<&SnowConfig> for Kinematics {
    fn from(config: &SnowConfig) -> Self {
        Self {
            min_speed_factor: config.min_speed_factor,
            wander_amplitude: config.wander_amplitude,
            wander_wavelength: config.wander_wavelength,
        }
    }
}

/// What happened to a particle during one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Still falling.
    Falling,
    /// Touched the drift, deposited snow and respawned at the top.
    Landed,
    /// Fell past the bottom edge without touching the drift and respawned.
    Escaped,
}

/// Per-step tallies, mostly for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub landed: usize,
    pub escaped: usize,
}

/// Fixed-size population of falling particles.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
    kinematics: Kinematics,
}

impl ParticleField {
    pub fn new(kinematics: Kinematics) -> Self {
        Self {
            particles: Vec::new(),
            kinematics,
        }
    }

    /// Fill the field with `count` particles scattered over the whole viewport,
    /// so the first frame already shows falling snow. No-op on a zero-sized viewport.
    pub fn initialize<R: RandomSource + ?Sized>(
        &mut self,
        width: u32,
        height: u32,
        count: usize,
        config: &SnowConfig,
        rng: &mut R,
    ) {
        if width == 0 || height == 0 {
            return;
        }
        let (w, h) = (width as f32, height as f32);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle::random(w, h, config, rng));
        }
    }

    /// Add an already-built particle.
    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Advance every particle by one frame against `surface`.
    pub fn step<R: RandomSource + ?Sized>(
        &mut self,
        width: u32,
        height: u32,
        surface: &mut DriftSurface,
        rng: &mut R,
    ) -> StepStats {
        let mut stats = StepStats::default();
        if width == 0 || height == 0 {
            return stats;
        }
        let (w, h) = (width as f32, height as f32);
        for p in &mut self.particles {
            match advance(p, w, h, &self.kinematics, surface, rng) {
                StepOutcome::Falling => {}
                StepOutcome::Landed => stats.landed += 1,
                StepOutcome::Escaped => stats.escaped += 1,
            }
        }
        stats
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Depth cue: full speed at the top edge, slowing towards the bottom, never below `min`.
pub fn speed_factor(y: f32, height: f32, min: f32) -> f32 {
    (1.0 - y / height).clamp(min, 1.0)
}

fn advance<R: RandomSource + ?Sized>(
    p: &mut Particle,
    width: f32,
    height: f32,
    k: &Kinematics,
    surface: &mut DriftSurface,
    rng: &mut R,
) -> StepOutcome {
    let radius = p.radius();

    p.pos.y += p.speed() * speed_factor(p.pos.y, height, k.min_speed_factor);

    // Sideways drift grows as the flake nears the ground.
    let wander = (p.pos.y / k.wander_wavelength + p.phase()).sin()
        * k.wander_amplitude
        * (p.pos.y / height);
    p.pos.x += wander;

    let column = p.pos.x.round() as isize;
    let ground = surface.height_at(column, height);

    let outcome = if p.pos.y + radius > ground {
        surface.deposit(column, radius);
        p.respawn(width, rng);
        StepOutcome::Landed
    } else if p.pos.y > height + radius {
        p.respawn(width, rng);
        StepOutcome::Escaped
    } else {
        StepOutcome::Falling
    };

    if p.pos.x < -radius {
        p.pos.x = width + radius;
    } else if p.pos.x > width + radius {
        p.pos.x = -radius;
    }

    outcome
}
