use crate::physics::vec2::Vec2;

/// A single field particle. No extent and no identity: the host draws the
/// whole pool as points and never addresses one individually.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }
}
