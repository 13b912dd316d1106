use crate::physics::bounds::Viewport;
use crate::physics::registry::BodyRegistry;

use super::perf_stats::PerfStats;
use super::scheduler::Scheduler;
use super::tunables::Tunables;
use super::SceneCore;

pub(super) fn create_scene_core(viewport_width: f32, viewport_height: f32) -> SceneCore {
    SceneCore {
        registry: BodyRegistry::new(),
        viewport: Viewport::new(viewport_width, viewport_height),
        tunables: Tunables::default(),
        scheduler: Scheduler::new(),
        attractions: Vec::new(),
        positions: Vec::new(),
        position_ids: Vec::new(),
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
