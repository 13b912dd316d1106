use super::*;

fn scene_with(bodies: &[(u32, f32, f32, f32, f32)]) -> SceneCore {
    let mut scene = SceneCore::new(800.0, 600.0);
    for &(id, x, y, vx, vy) in bodies {
        scene.throw(id, x, y, vx, vy, 40.0, 40.0).unwrap();
    }
    scene.start();
    scene
}

#[test]
fn idle_scene_ignores_ticks() {
    let mut scene = SceneCore::new(800.0, 600.0);
    scene.throw(1, 100.0, 100.0, 5.0, 0.0, 40.0, 40.0).unwrap();

    scene.tick();

    assert_eq!(scene.frame(), 0);
    assert_eq!(scene.body(1).unwrap().pos.x, 100.0);
}

#[test]
fn tick_on_empty_registry_is_a_noop() {
    let mut scene = SceneCore::new(800.0, 600.0);
    scene.start();

    scene.tick();

    assert_eq!(scene.frame(), 1);
    assert_eq!(scene.positions_len_elements(), 0);
}

#[test]
fn running_tick_integrates_and_publishes() {
    let mut scene = scene_with(&[(1, 100.0, 100.0, 10.0, -5.0)]);

    scene.tick();

    let body = scene.body(1).unwrap();
    assert_eq!(body.pos.x, 110.0);
    assert_eq!(body.pos.y, 95.0);
    assert!((body.vel.x - 9.92).abs() < 1e-5);

    assert_eq!(scene.ids_len_elements(), 1);
    assert_eq!(scene.positions_len_elements(), 2);
    // Published positions mirror the body.
    let published = unsafe { std::slice::from_raw_parts(scene.positions_ptr(), 2) };
    assert_eq!(published, &[110.0, 95.0]);
}

#[test]
fn overlapping_bodies_swap_velocities_and_separate() {
    // Deep horizontal overlap, mirrored velocities.
    let mut scene = scene_with(&[(1, 100.0, 100.0, 5.0, 0.0), (2, 120.0, 100.0, -5.0, 0.0)]);

    scene.tick();

    let a = *scene.body(1).unwrap();
    let b = *scene.body(2).unwrap();
    // Velocities were exchanged after integration damped them.
    assert!((a.vel.x - -5.0 * 0.992).abs() < 1e-4);
    assert!((b.vel.x - 5.0 * 0.992).abs() < 1e-4);
    // 6 px shove each: integration put them at 105 and 115.
    assert_eq!(a.pos.x, 99.0);
    assert_eq!(b.pos.x, 121.0);
    assert_eq!(b.pos.x - a.pos.x, 22.0); // 10 px gap + 12 px total separation
}

#[test]
fn collisions_use_post_integration_positions() {
    // Separated at tick start; velocity carries body 1 into body 2 before
    // the collision pass runs.
    let mut scene = scene_with(&[(1, 40.0, 100.0, 30.0, 0.0), (2, 100.0, 100.0, 0.0, 0.0)]);

    scene.tick();

    let a = scene.body(1).unwrap();
    // Body 1 inherited body 2's rest velocity: the swap happened.
    assert_eq!(a.vel.x, 0.0);
}

#[test]
fn wrap_happens_within_the_same_tick() {
    let mut scene = SceneCore::new(800.0, 600.0);
    scene.throw(1, -41.0, 100.0, 0.0, 0.0, 40.0, 40.0).unwrap();
    scene.start();

    scene.tick();

    assert_eq!(scene.body(1).unwrap().pos.x, 800.0);
}

#[test]
fn throw_rejects_non_finite_kinematics() {
    let mut scene = SceneCore::new(800.0, 600.0);
    assert!(scene.throw(1, f32::NAN, 0.0, 0.0, 0.0, 40.0, 40.0).is_err());
    assert!(scene.throw(1, 0.0, 0.0, f32::INFINITY, 0.0, 40.0, 40.0).is_err());
    assert_eq!(scene.body_count(), 0);
}

#[test]
fn rethrow_overwrites_the_existing_body() {
    let mut scene = scene_with(&[(1, 100.0, 100.0, 5.0, 0.0)]);
    scene.throw(1, 300.0, 300.0, -2.0, 0.0, 40.0, 40.0).unwrap();

    assert_eq!(scene.body_count(), 1);
    assert_eq!(scene.body(1).unwrap().pos.x, 300.0);
}

#[test]
fn grab_suspends_simulation_for_that_entity() {
    let mut scene = scene_with(&[(1, 100.0, 100.0, 5.0, 0.0), (2, 500.0, 100.0, 0.0, 0.0)]);

    assert!(scene.grab(1));
    assert!(!scene.grab(1)); // second grab: no-op
    assert!(!scene.grab(42)); // never registered: no-op

    scene.tick();
    assert_eq!(scene.body_count(), 1);
    assert!(scene.body(1).is_none());
    assert!(scene.body(2).is_some());
}

#[test]
fn attract_pulls_toward_target_for_one_tick() {
    let mut scene = scene_with(&[(1, 100.0, 100.0, 0.0, 0.0)]);
    scene.attract(1, 200.0, 100.0).unwrap();

    scene.tick();

    // Slot 0 chases the target directly: strength 0.1, damping 0.9.
    // v = (100 * 0.1) * 0.9 = 9, so x moves 100 -> 109.
    let body = scene.body(1).unwrap();
    assert!((body.pos.x - 109.0).abs() < 1e-4);
    assert_eq!(body.pos.y, 100.0);

    // The target was consumed; the next tick is free flight.
    let vx_before = scene.body(1).unwrap().vel.x;
    scene.tick();
    let body = scene.body(1).unwrap();
    assert!((body.vel.x - vx_before * 0.992).abs() < 1e-4);
}

#[test]
fn odd_slot_chases_the_mirrored_target() {
    let mut scene = scene_with(&[(1, 0.0, 0.0, 0.0, 0.0), (2, 0.0, 500.0, 0.0, 0.0)]);
    scene.attract(2, 200.0, 0.0).unwrap();

    scene.tick();

    // Slot 1 targets (-200, 0): it accelerates left.
    assert!(scene.body(2).unwrap().vel.x < 0.0);
}

#[test]
fn attract_rejects_non_finite_target_and_ignores_missing_entity() {
    let mut scene = scene_with(&[(1, 100.0, 100.0, 0.0, 0.0)]);
    assert!(scene.attract(1, f32::NAN, 0.0).is_err());
    // Stale target for a grabbed entity: dropped silently.
    assert!(scene.attract(99, 10.0, 10.0).is_ok());
}

#[test]
fn clear_resets_to_initial_idle_state() {
    let mut scene = scene_with(&[(1, 100.0, 100.0, 5.0, 0.0)]);
    scene.tick();
    assert_eq!(scene.frame(), 1);

    scene.clear();

    assert_eq!(scene.body_count(), 0);
    assert_eq!(scene.frame(), 0);
    assert!(!scene.is_running());
    assert_eq!(scene.run_state(), RunState::Idle);
    assert_eq!(scene.positions_len_elements(), 0);
}

#[test]
fn stop_and_restart_resume_where_left_off() {
    let mut scene = scene_with(&[(1, 100.0, 100.0, 10.0, 0.0)]);
    scene.tick();
    let x_after_one = scene.body(1).unwrap().pos.x;

    scene.stop();
    scene.tick();
    scene.tick();
    assert_eq!(scene.body(1).unwrap().pos.x, x_after_one);

    scene.start();
    scene.tick();
    assert!(scene.body(1).unwrap().pos.x > x_after_one);
}

#[test]
fn perf_stats_populate_when_enabled() {
    let mut scene = scene_with(&[(1, 100.0, 100.0, 5.0, 0.0), (2, 120.0, 100.0, -5.0, 0.0)]);
    scene.enable_perf_metrics(true);

    scene.tick();

    let stats = scene.get_perf_stats();
    assert_eq!(stats.body_count, 2);
    assert_eq!(stats.pair_checks, 1);
    assert_eq!(stats.collisions_resolved, 1);
    assert!(stats.tick_ms >= 0.0);
}

#[test]
fn tunables_json_overrides_take_effect() {
    let mut scene = scene_with(&[(1, 100.0, 100.0, 10.0, 0.0)]);
    scene
        .load_tunables_json(r#"{ "flight_damping": 0.5 }"#)
        .unwrap();

    scene.tick();

    assert_eq!(scene.body(1).unwrap().vel.x, 5.0);
}
