use super::body::Body;

/// Advance one body by one tick: position by velocity, then damp velocity.
///
/// Runs before wrapping and collision resolution. Always succeeds for the
/// finite input the registry guarantees.
#[inline]
pub fn integrate(body: &mut Body, damping: f32) {
    body.pos = body.pos + body.vel;
    body.vel = body.vel * damping;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::vec2::Vec2;

    #[test]
    fn zero_velocity_is_a_fixed_point() {
        let mut body =
            Body::new(Vec2::new(40.0, 60.0), Vec2::zero(), Vec2::new(10.0, 10.0)).unwrap();
        integrate(&mut body, 0.992);
        assert_eq!(body.pos, Vec2::new(40.0, 60.0));
        assert_eq!(body.vel, Vec2::zero());
    }

    #[test]
    fn one_tick_moves_by_velocity_then_damps() {
        let mut body =
            Body::new(Vec2::new(100.0, 100.0), Vec2::new(10.0, -5.0), Vec2::new(10.0, 10.0))
                .unwrap();
        integrate(&mut body, 0.992);
        assert_eq!(body.pos, Vec2::new(110.0, 95.0));
        assert!((body.vel.x - 9.92).abs() < 1e-5, "vx = {}", body.vel.x);
        assert!((body.vel.y - -4.96).abs() < 1e-5, "vy = {}", body.vel.y);
    }
}
