use crate::physics::body::Body;
use crate::physics::vec2::Vec2;
use crate::physics::{bounds, collision, integrator};

use super::tunables::Tunables;
use super::{PerfTimer, SceneCore};

pub(super) fn tick(scene: &mut SceneCore) {
    if !scene.scheduler.is_running() {
        return;
    }

    let perf_on = scene.perf_enabled;
    if perf_on {
        scene.perf_stats.reset();
        scene.perf_stats.body_count = scene.registry.len() as u32;
    }
    let tick_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // The entry list is frozen for the whole tick: commands only run between
    // frames, so indexing 0..n is the per-tick snapshot.
    let n = scene.registry.len();
    let tun = scene.tunables;
    let view = scene.viewport;

    // === PASS 1: INTEGRATE + WRAP ===
    // An attraction target replaces free flight for that body this tick.
    let t0 = if perf_on { Some(PerfTimer::start()) } else { None };
    let mut wraps = 0u32;
    let mut attracted = 0u32;
    {
        let registry = &mut scene.registry;
        let attractions = &scene.attractions;
        for i in 0..n {
            let (id, body) = registry.entry_at_mut(i);
            match attractions.iter().find(|(aid, _)| *aid == id) {
                Some((_, target)) => {
                    attract_step(body, *target, i, &tun);
                    attracted += 1;
                }
                None => integrator::integrate(body, tun.flight_damping),
            }
            if bounds::wrap(body, view) {
                wraps += 1;
            }
        }
    }
    scene.attractions.clear();
    if let Some(t) = t0 {
        scene.perf_stats.integrate_ms = t.elapsed_ms();
    }

    // === PASS 2: COLLISIONS ===
    // Every unordered pair once, over the post-integration positions.
    let t0 = if perf_on { Some(PerfTimer::start()) } else { None };
    let mut pair_checks = 0u32;
    let mut resolved = 0u32;
    for i in 0..n {
        for j in (i + 1)..n {
            pair_checks += 1;
            let (a, b) = scene.registry.pair_mut(i, j);
            if collision::overlaps(a, b) {
                collision::resolve_pair(a, b, tun.collision_separation);
                resolved += 1;
            }
        }
    }
    if let Some(t) = t0 {
        scene.perf_stats.collide_ms = t.elapsed_ms();
    }

    publish_positions(scene);

    if perf_on {
        scene.perf_stats.wraps = wraps;
        scene.perf_stats.attracted = attracted;
        scene.perf_stats.pair_checks = pair_checks;
        scene.perf_stats.collisions_resolved = resolved;
        if let Some(start) = tick_start {
            scene.perf_stats.tick_ms = start.elapsed_ms();
        }
    }

    scene.frame += 1;
}

/// Gravity-gun pull toward the target, mirrored for odd registry slots so
/// the shapes fan out instead of stacking. Velocity is damped before the
/// position add, unlike free flight; kept to match the shipped motion.
fn attract_step(body: &mut Body, target: Vec2, slot: usize, tun: &Tunables) {
    let direction = if slot % 2 == 0 { 1.0 } else { -1.0 };
    let dx = target.x * direction - body.pos.x;
    let dy = target.y * direction - body.pos.y;

    body.vel.x += dx * tun.attract_strength;
    body.vel.y += dy * tun.attract_strength;
    body.vel = body.vel * tun.attract_damping;
    body.pos = body.pos + body.vel;
}

pub(super) fn publish_positions(scene: &mut SceneCore) {
    scene.positions.clear();
    scene.position_ids.clear();
    for (id, body) in scene.registry.iter() {
        scene.position_ids.push(*id);
        scene.positions.push(body.pos.x);
        scene.positions.push(body.pos.y);
    }
}
