//! field/ - Ambient decorative particle field
//!
//! Free-floating points steered by position-keyed noise, rendered by the
//! host into a 2D canvas. Fully independent of the body registry; the host
//! drives it from the same frame callback but may pause it (pause skips
//! ticking, it never tears the pool down).

mod facade;
mod flow;
mod particle;

pub use facade::ParticleField;
pub use flow::FlowField;
pub use particle::Particle;

use crate::physics::vec2::Vec2;

/// Hard cap on the pool, base particles included
pub const MAX_PARTICLES: usize = 300;
/// Transient spawns accepted between two ticks
pub const SPAWN_BUDGET_PER_FRAME: usize = 50;

const DEFAULT_ACCELERATION: f32 = 0.08;
const DEFAULT_DAMPING: f32 = 0.98;

/// The particle field
pub struct FieldCore {
    width: f32,
    height: f32,
    flow: FlowField,

    // Pool: base particles first, transients after in spawn order, so FIFO
    // eviction is a drain at the transient front
    particles: Vec<Particle>,
    base_len: usize,

    // Settings
    acceleration: f32,
    damping: f32,

    // State
    paused: bool,
    frame: u64,
    spawned_since_tick: usize,
    rng_state: u32,

    // Output: packed [x, y] per particle, refreshed every active tick
    positions: Vec<f32>,
}

impl FieldCore {
    /// Create a field covering a `width` x `height` raster surface with
    /// `base_count` free-floating particles scattered deterministically
    /// from `seed`.
    pub fn new(width: f32, height: f32, base_count: usize, seed: u32) -> Self {
        let base_len = base_count.min(MAX_PARTICLES);
        let mut rng_state = if seed == 0 { 0x9E3779B9 } else { seed };

        let mut particles = Vec::with_capacity(base_len);
        for _ in 0..base_len {
            let x = rand_unit(&mut rng_state) * width;
            let y = rand_unit(&mut rng_state) * height;
            particles.push(Particle::new(Vec2::new(x, y), Vec2::zero()));
        }

        let mut field = Self {
            width,
            height,
            flow: FlowField::new(seed),
            particles,
            base_len,
            acceleration: DEFAULT_ACCELERATION,
            damping: DEFAULT_DAMPING,
            paused: false,
            frame: 0,
            spawned_since_tick: 0,
            rng_state,
            positions: Vec::with_capacity(MAX_PARTICLES * 2),
        };
        field.publish_positions();
        field
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stop ticking without touching particle state
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Steering force per tick; clamped to a sane visual range
    pub fn set_acceleration(&mut self, acceleration: f32) {
        if acceleration.is_finite() {
            self.acceleration = acceleration.clamp(0.0, 2.0);
        }
    }

    /// Velocity decay per tick
    pub fn set_damping(&mut self, damping: f32) {
        if damping.is_finite() {
            self.damping = damping.clamp(0.0, 1.0);
        }
    }

    pub fn set_noise_scale(&mut self, scale: f64) {
        self.flow.set_scale(scale);
    }

    /// Resize the raster surface; existing particles are clamped into the
    /// new bounds rather than respawned.
    pub fn resize(&mut self, width: f32, height: f32) {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return;
        }
        self.width = width;
        self.height = height;
        for p in self.particles.iter_mut() {
            p.pos.x = p.pos.x.clamp(0.0, width);
            p.pos.y = p.pos.y.clamp(0.0, height);
        }
        self.publish_positions();
    }

    /// Advance every particle by one tick. Paused fields skip entirely:
    /// no state change, no republish.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }
        self.spawned_since_tick = 0;

        let flow = &self.flow;
        let (width, height) = (self.width, self.height);
        let acceleration = self.acceleration;
        let damping = self.damping;

        for p in self.particles.iter_mut() {
            // Heading comes from the particle's own position, not time: a
            // particle that has not moved keeps its steering.
            let angle = flow.steering_angle(p.pos.x, p.pos.y);
            p.vel.x += angle.cos() * acceleration;
            p.vel.y += angle.sin() * acceleration;
            p.vel = p.vel * damping;
            p.pos = p.pos + p.vel;

            // At-edge reset to the opposite extreme (not the relative-offset
            // wrap bodies get).
            if p.pos.x < 0.0 {
                p.pos.x = width;
            } else if p.pos.x > width {
                p.pos.x = 0.0;
            }
            if p.pos.y < 0.0 {
                p.pos.y = height;
            } else if p.pos.y > height {
                p.pos.y = 0.0;
            }
        }

        self.publish_positions();
        self.frame += 1;
    }

    /// Append up to `count` transient particles around (x, y) with jittered
    /// velocities. Rate-limited per frame; past the pool cap the oldest
    /// transients are evicted first. Returns how many were accepted.
    pub fn spawn_burst(&mut self, x: f32, y: f32, count: usize) -> usize {
        if !x.is_finite() || !y.is_finite() {
            return 0;
        }

        let budget = SPAWN_BUDGET_PER_FRAME.saturating_sub(self.spawned_since_tick);
        let accepted = count.min(budget);

        for _ in 0..accepted {
            let vx = (rand_unit(&mut self.rng_state) - 0.5) * 4.0;
            let vy = (rand_unit(&mut self.rng_state) - 0.5) * 4.0;
            let px = x.clamp(0.0, self.width);
            let py = y.clamp(0.0, self.height);
            self.particles.push(Particle::new(Vec2::new(px, py), Vec2::new(vx, vy)));
        }
        self.spawned_since_tick += accepted;

        if self.particles.len() > MAX_PARTICLES {
            let excess = self.particles.len() - MAX_PARTICLES;
            // Oldest transients sit right after the base pool.
            self.particles.drain(self.base_len..self.base_len + excess);
        }

        accepted
    }

    // === OUTPUT ABI ===

    /// Pointer to packed [x0, y0, x1, y1, ..] particle positions
    pub fn positions_ptr(&self) -> *const f32 {
        self.positions.as_ptr()
    }

    pub fn positions_len_elements(&self) -> usize {
        self.positions.len()
    }

    pub fn positions_len_bytes(&self) -> usize {
        self.positions.len() * std::mem::size_of::<f32>()
    }

    fn publish_positions(&mut self) {
        self.positions.clear();
        for p in self.particles.iter() {
            self.positions.push(p.pos.x);
            self.positions.push(p.pos.y);
        }
    }
}

/// Random number generator (xorshift32), mapped to [0, 1)
#[inline]
fn rand_unit(state: &mut u32) -> f32 {
    *state ^= *state << 13;
    *state ^= *state >> 17;
    *state ^= *state << 5;
    (*state >> 8) as f32 * (1.0 / 16777216.0)
}
