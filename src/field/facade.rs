use wasm_bindgen::prelude::*;

use super::FieldCore;

#[wasm_bindgen]
pub struct ParticleField {
    core: FieldCore,
}

#[wasm_bindgen]
impl ParticleField {
    /// Create a field sized to the canvas with `base_count` particles
    /// scattered from `seed`
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, base_count: usize, seed: u32) -> Self {
        Self {
            core: FieldCore::new(width, height, base_count, seed),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> usize {
        self.core.particle_count()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    /// Advance one frame; call from the requestAnimationFrame callback
    pub fn tick(&mut self) {
        self.core.tick();
    }

    /// Freeze the field in place (e.g. while the tab section is hidden)
    pub fn pause(&mut self) {
        self.core.pause();
    }

    pub fn resume(&mut self) {
        self.core.resume();
    }

    pub fn is_paused(&self) -> bool {
        self.core.is_paused()
    }

    /// Burst transient particles at (x, y), e.g. on click. Returns how many
    /// the per-frame budget accepted.
    pub fn spawn_burst(&mut self, x: f32, y: f32, count: usize) -> usize {
        self.core.spawn_burst(x, y, count)
    }

    /// Resize the field to a new canvas size, keeping the pool
    pub fn resize(&mut self, width: f32, height: f32) {
        self.core.resize(width, height);
    }

    // === SETTINGS ===

    pub fn set_acceleration(&mut self, acceleration: f32) {
        self.core.set_acceleration(acceleration);
    }

    pub fn set_damping(&mut self, damping: f32) {
        self.core.set_damping(damping);
    }

    pub fn set_noise_scale(&mut self, scale: f64) {
        self.core.set_noise_scale(scale);
    }

    // === OUTPUT (JS reads positions straight out of wasm memory) ===

    /// Pointer to packed [x0, y0, x1, y1, ..] particle positions
    pub fn positions_ptr(&self) -> *const f32 {
        self.core.positions_ptr()
    }

    pub fn positions_len_elements(&self) -> usize {
        self.core.positions_len_elements()
    }

    pub fn positions_len_bytes(&self) -> usize {
        self.core.positions_len_bytes()
    }
}
