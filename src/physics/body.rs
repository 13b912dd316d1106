use super::vec2::Vec2;

/// One simulated entity: a released or thrown element in free flight.
///
/// `extent` is fixed at creation; position and velocity are mutated only by
/// the per-frame tick or by a re-registration (a fresh throw of the same
/// entity replaces the whole body).
#[derive(Clone, Copy, Debug)]
pub struct Body {
    /// Top-left corner in viewport pixels
    pub pos: Vec2,
    /// Velocity (pixels per tick)
    pub vel: Vec2,
    /// Width and height in pixels
    pub extent: Vec2,
}

impl Body {
    /// Build a body from raw kinematics.
    ///
    /// This is the validation boundary: non-finite positions or velocities
    /// and non-positive extents are rejected here so NaN can never enter the
    /// integration loop. Once a body exists, it is trusted.
    pub fn new(pos: Vec2, vel: Vec2, extent: Vec2) -> Result<Self, String> {
        if !pos.is_finite() || !vel.is_finite() {
            return Err(format!(
                "non-finite kinematics: pos=({}, {}) vel=({}, {})",
                pos.x, pos.y, vel.x, vel.y
            ));
        }
        if !extent.is_finite() || extent.x <= 0.0 || extent.y <= 0.0 {
            return Err(format!("invalid extent: ({}, {})", extent.x, extent.y));
        }
        Ok(Self { pos, vel, extent })
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.extent.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.extent.y
    }
}
