use serde::Deserialize;

/// Simulation constants. The compiled-in defaults match the shipped site;
/// hosts may override the lot from JSON at startup.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tunables {
    /// Velocity decay per tick for bodies in free flight
    pub flight_damping: f32,
    /// Horizontal shove per body when a pair overlaps (px)
    pub collision_separation: f32,
    /// Pull strength toward the target in attraction mode
    pub attract_strength: f32,
    /// Velocity decay per tick while attracted
    pub attract_damping: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Tunables {
            flight_damping: 0.992,
            collision_separation: 6.0,
            attract_strength: 0.1,
            attract_damping: 0.9,
        }
    }
}

impl Tunables {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let tunables: Tunables =
            serde_json::from_str(json).map_err(|e| format!("invalid tunables: {e}"))?;
        tunables.validate()?;
        Ok(tunables)
    }

    fn validate(&self) -> Result<(), String> {
        for (name, damping) in [
            ("flight_damping", self.flight_damping),
            ("attract_damping", self.attract_damping),
        ] {
            if !damping.is_finite() || damping <= 0.0 || damping >= 1.0 {
                return Err(format!("{name} must be in (0, 1), got {damping}"));
            }
        }
        if !self.collision_separation.is_finite() || self.collision_separation < 0.0 {
            return Err(format!(
                "collision_separation must be >= 0, got {}",
                self.collision_separation
            ));
        }
        if !self.attract_strength.is_finite() || self.attract_strength < 0.0 {
            return Err(format!(
                "attract_strength must be >= 0, got {}",
                self.attract_strength
            ));
        }
        Ok(())
    }
}
