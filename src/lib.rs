//! Momenta Engine - 2D physics core for interactive portfolio backgrounds
//!
//! Two independent subsystems behind one wasm module:
//! - simulation/  - draggable shapes: free flight, toroidal wrap, collisions
//! - field/       - ambient noise-steered particle backdrop
//! - physics/     - the shared math both are built on
//!
//! The JS host owns the DOM and the requestAnimationFrame loop; this crate
//! owns all state and motion, and publishes positions as flat buffers the
//! host reads straight out of wasm memory.

pub mod field;
pub mod physics;
pub mod simulation;

// Re-export main types
pub use field::ParticleField;
pub use physics::body::Body;
pub use physics::bounds::Viewport;
pub use physics::registry::{BodyRegistry, EntityId};
pub use physics::vec2::Vec2;
pub use simulation::{FrameLayout, PerfStats, RunState, Scene, SceneCore, Tunables};

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Momenta WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
