use wasm_bindgen::prelude::*;

use super::perf_stats::PerfStats;
use super::SceneCore;

/// One-call snapshot of the output buffer layout, so the JS host can set up
/// its typed-array views without a round of individual getters.
#[wasm_bindgen]
pub struct FrameLayout {
    positions_ptr: u32,
    positions_len_elements: u32,
    positions_len_bytes: u32,
    ids_ptr: u32,
    ids_len_elements: u32,
    ids_len_bytes: u32,
}

#[wasm_bindgen]
impl FrameLayout {
    #[wasm_bindgen(getter)]
    pub fn positions_ptr(&self) -> u32 { self.positions_ptr }
    #[wasm_bindgen(getter)]
    pub fn positions_len_elements(&self) -> u32 { self.positions_len_elements }
    #[wasm_bindgen(getter)]
    pub fn positions_len_bytes(&self) -> u32 { self.positions_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn ids_ptr(&self) -> u32 { self.ids_ptr }
    #[wasm_bindgen(getter)]
    pub fn ids_len_elements(&self) -> u32 { self.ids_len_elements }
    #[wasm_bindgen(getter)]
    pub fn ids_len_bytes(&self) -> u32 { self.ids_len_bytes }
}

#[wasm_bindgen]
pub struct Scene {
    core: SceneCore,
}

#[wasm_bindgen]
impl Scene {
    /// Create a scene for the given viewport dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            core: SceneCore::new(viewport_width, viewport_height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn viewport_width(&self) -> f32 {
        self.core.viewport().width
    }

    #[wasm_bindgen(getter)]
    pub fn viewport_height(&self) -> f32 {
        self.core.viewport().height
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.core.body_count()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    /// Report a viewport resize; wrapping uses the new bounds from the next
    /// tick on. Non-finite or non-positive dimensions are ignored.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.core.set_viewport(width, height);
    }

    /// Override the simulation constants from a JSON object
    pub fn load_tunables(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_tunables_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === INPUT COMMANDS (drag/throw glue on the JS side calls these) ===

    /// Release an entity into free flight at (x, y) with velocity (vx, vy)
    /// and a fixed width/height extent
    #[allow(clippy::too_many_arguments)]
    pub fn throw(
        &mut self,
        id: u32,
        x: f32,
        y: f32,
        vx: f32,
        vy: f32,
        width: f32,
        height: f32,
    ) -> Result<(), JsValue> {
        self.core
            .throw(id, x, y, vx, vy, width, height)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    /// Suspend simulation of an entity while the host drags it.
    /// Returns true if a body was removed.
    pub fn grab(&mut self, id: u32) -> bool {
        self.core.grab(id)
    }

    /// Pull an entity toward (x, y) on the next tick
    pub fn attract(&mut self, id: u32, target_x: f32, target_y: f32) -> Result<(), JsValue> {
        self.core
            .attract(id, target_x, target_y)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    /// Drop every body and return to the idle state
    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === RUN STATE ===

    pub fn start(&mut self) {
        self.core.start();
    }

    pub fn stop(&mut self) {
        self.core.stop();
    }

    pub fn is_running(&self) -> bool {
        self.core.is_running()
    }

    /// Advance one frame; call from the requestAnimationFrame callback
    pub fn tick(&mut self) {
        self.core.tick();
    }

    // === OUTPUT (JS reads positions straight out of wasm memory) ===

    pub fn body_x(&self, id: u32) -> Option<f32> {
        self.core.body(id).map(|b| b.pos.x)
    }

    pub fn body_y(&self, id: u32) -> Option<f32> {
        self.core.body(id).map(|b| b.pos.y)
    }

    /// Pointer to packed [x0, y0, x1, y1, ..] body positions
    pub fn positions_ptr(&self) -> *const f32 {
        self.core.positions_ptr()
    }

    pub fn positions_len_elements(&self) -> usize {
        self.core.positions_len_elements()
    }

    pub fn positions_len_bytes(&self) -> usize {
        self.core.positions_len_bytes()
    }

    /// Pointer to the entity id matching each position pair
    pub fn ids_ptr(&self) -> *const u32 {
        self.core.ids_ptr()
    }

    pub fn ids_len_elements(&self) -> usize {
        self.core.ids_len_elements()
    }

    pub fn ids_len_bytes(&self) -> usize {
        self.core.ids_len_bytes()
    }

    pub fn frame_layout(&self) -> FrameLayout {
        FrameLayout {
            positions_ptr: self.core.positions_ptr() as u32,
            positions_len_elements: self.core.positions_len_elements() as u32,
            positions_len_bytes: self.core.positions_len_bytes() as u32,
            ids_ptr: self.core.ids_ptr() as u32,
            ids_len_elements: self.core.ids_len_elements() as u32,
            ids_len_bytes: self.core.ids_len_bytes() as u32,
        }
    }
}
