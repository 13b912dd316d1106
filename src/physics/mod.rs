//! physics/ - Kinematics of thrown bodies
//!
//! Pure state and math, no host types. Each concern in its own module:
//! integration, viewport wrapping, pairwise collision, the body registry.

pub mod body;
pub mod bounds;
pub mod collision;
pub mod integrator;
pub mod registry;
pub mod vec2;
