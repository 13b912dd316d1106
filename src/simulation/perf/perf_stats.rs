use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) tick_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) collide_ms: f64,
    pub(super) body_count: u32,
    pub(super) pair_checks: u32,
    pub(super) collisions_resolved: u32,
    pub(super) wraps: u32,
    pub(super) attracted: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn collide_ms(&self) -> f64 { self.collide_ms }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn pair_checks(&self) -> u32 { self.pair_checks }
    #[wasm_bindgen(getter)]
    pub fn collisions_resolved(&self) -> u32 { self.collisions_resolved }
    #[wasm_bindgen(getter)]
    pub fn wraps(&self) -> u32 { self.wraps }
    #[wasm_bindgen(getter)]
    pub fn attracted(&self) -> u32 { self.attracted }
}
