use crate::physics::bounds::Viewport;

use super::perf_stats::PerfStats;
use super::tunables::Tunables;
use super::SceneCore;

pub(super) fn set_viewport(scene: &mut SceneCore, width: f32, height: f32) {
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return;
    }
    scene.viewport = Viewport::new(width, height);
}

pub(super) fn set_tunables(scene: &mut SceneCore, tunables: Tunables) {
    scene.tunables = tunables;
}

pub(super) fn load_tunables_json(scene: &mut SceneCore, json: &str) -> Result<(), String> {
    scene.tunables = Tunables::from_json(json)?;
    Ok(())
}

pub(super) fn enable_perf_metrics(scene: &mut SceneCore, enabled: bool) {
    scene.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(scene: &SceneCore) -> PerfStats {
    scene.perf_stats.clone()
}
