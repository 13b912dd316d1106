use crate::physics::body::Body;
use crate::physics::registry::EntityId;
use crate::physics::vec2::Vec2;

use super::{step, SceneCore};

#[allow(clippy::too_many_arguments)]
pub(super) fn throw(
    scene: &mut SceneCore,
    id: EntityId,
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    width: f32,
    height: f32,
) -> Result<(), String> {
    let body = Body::new(Vec2::new(x, y), Vec2::new(vx, vy), Vec2::new(width, height))?;
    scene.registry.insert(id, body);
    Ok(())
}

pub(super) fn grab(scene: &mut SceneCore, id: EntityId) -> bool {
    scene.attractions.retain(|(aid, _)| *aid != id);
    scene.registry.remove(id)
}

pub(super) fn attract(
    scene: &mut SceneCore,
    id: EntityId,
    target_x: f32,
    target_y: f32,
) -> Result<(), String> {
    if !target_x.is_finite() || !target_y.is_finite() {
        return Err(format!("non-finite attraction target: ({target_x}, {target_y})"));
    }
    // A target for an entity the host already grabbed is stale input, not an
    // error: drop it silently.
    if !scene.registry.contains(id) {
        return Ok(());
    }

    let target = Vec2::new(target_x, target_y);
    if let Some(entry) = scene.attractions.iter_mut().find(|(aid, _)| *aid == id) {
        entry.1 = target;
    } else {
        scene.attractions.push((id, target));
    }
    Ok(())
}

pub(super) fn clear(scene: &mut SceneCore) {
    scene.registry.clear();
    scene.attractions.clear();
    scene.frame = 0;
    scene.scheduler.stop();
    step::publish_positions(scene);
}
