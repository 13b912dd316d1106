use noise::{NoiseFn, Perlin};

/// Default sampling scale: screen pixels to noise-space units. Small enough
/// that neighbouring particles see similar headings and drift in streams.
const DEFAULT_NOISE_SCALE: f64 = 0.008;

/// Position-keyed steering field. The noise is sampled at the particle's own
/// coordinates, so the field is static over time and two particles at the
/// same spot always steer the same way.
pub struct FlowField {
    noise: Perlin,
    scale: f64,
}

impl FlowField {
    pub fn new(seed: u32) -> Self {
        Self {
            noise: Perlin::new(seed),
            scale: DEFAULT_NOISE_SCALE,
        }
    }

    /// Heading in radians for a particle at (x, y)
    pub fn steering_angle(&self, x: f32, y: f32) -> f32 {
        let sample = self
            .noise
            .get([x as f64 * self.scale, y as f64 * self.scale]);
        (sample * std::f64::consts::TAU) as f32
    }

    pub fn set_scale(&mut self, scale: f64) {
        if scale.is_finite() && scale > 0.0 {
            self.scale = scale;
        }
    }
}
