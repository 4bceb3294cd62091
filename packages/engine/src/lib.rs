//! Bounce Engine - bouncing-circle motion core in WASM
//!
//! A fixed set of circles waits until every one has been given a color, then
//! moves in straight lines and reflects off the arena walls. Each tick returns
//! the bodies to draw and one reflection event per bounced axis, which the host
//! turns into a sound cue.
//!
//! Layout:
//! - domain/      - colors, scene config, errors
//! - systems/     - bodies and the wall-reflection update
//! - simulation/  - the aggregate, its gate, render buffers and the JS facade

pub mod domain;
pub mod systems;
pub mod simulation;
pub mod logging;

pub use systems::motion;
pub use systems::motion_system;

use wasm_bindgen::prelude::*;

#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

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

    logging::init();
    log::info!("bounce engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Palette for the color picker, as JSON
#[wasm_bindgen]
pub fn palette_manifest_json() -> String {
    domain::palette::palette_manifest_json()
}

// Re-export main types
pub use domain::error::SimError;
pub use domain::palette::{Color, PaletteColor, PALETTE};
pub use domain::scene::{RenderStyle, SceneConfig};
pub use motion::{Arena, Body, Vec2};
pub use motion_system::{Axis, ReflectionEvent};
pub use simulation::{
    Phase, SessionId, SessionPool, SharedSimulation, Simulation, SimulationCore, TickOutcome,
    TickSnapshot,
};
