//! Scene - the thrown-shape simulation
//!
//! Orchestration only: integration, wrapping and collision live in physics/.
//! The wasm facade is in facade.rs; the host drives `tick` from its
//! display-refresh callback and copies published positions onto the visual
//! elements.

use crate::physics::body::Body;
use crate::physics::bounds::Viewport;
use crate::physics::registry::{BodyRegistry, EntityId};
use crate::physics::vec2::Vec2;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "init/tunables.rs"]
mod tunables;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
mod facade;
mod scheduler;

pub use facade::{FrameLayout, Scene};
pub use perf_stats::PerfStats;
pub use scheduler::RunState;
pub use tunables::Tunables;

use perf_timer::PerfTimer;
use scheduler::Scheduler;

/// The simulation scene
pub struct SceneCore {
    registry: BodyRegistry,
    viewport: Viewport,
    tunables: Tunables,
    scheduler: Scheduler,

    // Attraction targets consumed by the next tick (entity -> target point)
    attractions: Vec<(EntityId, Vec2)>,

    // Output: packed [x, y] per body plus the matching ids, refreshed every
    // running tick for the host's presentation-sync layer
    positions: Vec<f32>,
    position_ids: Vec<u32>,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SceneCore {
    /// Create a scene for the given viewport dimensions
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        init::create_scene_core(viewport_width, viewport_height)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        settings::set_viewport(self, width, height);
    }

    pub fn tunables(&self) -> &Tunables {
        &self.tunables
    }

    pub fn set_tunables(&mut self, tunables: Tunables) {
        settings::set_tunables(self, tunables);
    }

    pub fn load_tunables_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_tunables_json(self, json)
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn body_count(&self) -> usize {
        self.registry.len()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn body(&self, id: EntityId) -> Option<&Body> {
        self.registry.get(id)
    }

    /// Release an entity into free flight with the given kinematics.
    /// Re-throwing a registered entity overwrites its body.
    #[allow(clippy::too_many_arguments)]
    pub fn throw(
        &mut self,
        id: EntityId,
        x: f32,
        y: f32,
        vx: f32,
        vy: f32,
        width: f32,
        height: f32,
    ) -> Result<(), String> {
        commands::throw(self, id, x, y, vx, vy, width, height)
    }

    /// Take an entity back out of the simulation (the host is dragging it).
    /// Unknown ids are a no-op; returns whether a body was removed.
    pub fn grab(&mut self, id: EntityId) -> bool {
        commands::grab(self, id)
    }

    /// Pull an entity toward a target point on the next tick instead of
    /// integrating it freely. The host re-sends the target while the pull
    /// lasts (it decays to free flight otherwise).
    pub fn attract(&mut self, id: EntityId, target_x: f32, target_y: f32) -> Result<(), String> {
        commands::attract(self, id, target_x, target_y)
    }

    /// Drop every body and return the scene to its initial idle state
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    // === RUN STATE ===

    pub fn start(&mut self) {
        self.scheduler.start();
    }

    /// Explicit teardown handle: a stopped scene ticks as a no-op
    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    pub fn run_state(&self) -> RunState {
        self.scheduler.state()
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Advance the simulation by one frame. Does nothing while idle; an
    /// empty registry makes it a no-op tick.
    pub fn tick(&mut self) {
        step::tick(self);
    }

    // === OUTPUT ABI (read by the JS host from wasm memory) ===

    /// Pointer to packed [x0, y0, x1, y1, ..] body positions
    pub fn positions_ptr(&self) -> *const f32 {
        self.positions.as_ptr()
    }

    pub fn positions_len_elements(&self) -> usize {
        self.positions.len()
    }

    pub fn positions_len_bytes(&self) -> usize {
        self.positions.len() * std::mem::size_of::<f32>()
    }

    /// Pointer to the entity id matching each position pair
    pub fn ids_ptr(&self) -> *const u32 {
        self.position_ids.as_ptr()
    }

    pub fn ids_len_elements(&self) -> usize {
        self.position_ids.len()
    }

    pub fn ids_len_bytes(&self) -> usize {
        self.position_ids.len() * std::mem::size_of::<u32>()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
