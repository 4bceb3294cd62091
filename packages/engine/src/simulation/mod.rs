//! Simulation - the bouncing-circle aggregate
//!
//! `SimulationCore` owns the arena, the ordered bodies and the start gate.
//! It starts in `Phase::Selecting`, where `tick()` changes nothing, and moves
//! to `Phase::Running` exactly once, when the last uncolored body gets a color.
//!
//! Split by concern:
//! - commands: color assignment and the gate
//! - step: the per-frame tick
//! - render: flat transfer buffers for the JS renderer
//! - shared: lock-guarded handles for multi-viewer hosts

use crate::domain::error::SimError;
use crate::domain::palette::Color;
use crate::domain::scene::{validate_arena, validate_body, RenderStyle, SceneConfig};
use crate::motion::{Arena, Body};
use crate::motion_system::{MotionSystem, ReflectionEvent};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;
mod shared;

pub use facade::{AbiLayout, Simulation};
pub use perf_stats::PerfStats;
pub use shared::{SessionId, SessionPool, SharedSimulation, TickSnapshot};

use perf_timer::PerfTimer;

/// Start-gate state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for colors; `assigned` only ever grows.
    Selecting { assigned: usize },
    /// Every body is colored and moving. Terminal.
    Running,
}

/// Read-only view returned by `tick()`
#[derive(Clone, Copy, Debug)]
pub struct TickOutcome<'a> {
    pub bodies: &'a [Body],
    pub events: &'a [ReflectionEvent],
}

pub(crate) struct RenderBuffers {
    /// `[x, y, radius]` per body
    body_buffer: Vec<f32>,
    /// `0xAARRGGBB` per body, 0 while uncolored
    color_buffer: Vec<u32>,
    /// `(body << 1) | axis` per reflection of the last tick
    event_buffer: Vec<u32>,
}

pub(crate) struct AbiLayoutData {
    pub(crate) bodies_ptr: *const f32,
    pub(crate) bodies_len_elements: usize,
    pub(crate) bodies_len_bytes: usize,
    pub(crate) colors_ptr: *const u32,
    pub(crate) colors_len_elements: usize,
    pub(crate) colors_len_bytes: usize,
    pub(crate) events_ptr: *const u32,
    pub(crate) events_len_elements: usize,
    pub(crate) events_len_bytes: usize,
}

/// The simulation state for one session
pub struct SimulationCore {
    arena: Arena,
    motion: MotionSystem,
    phase: Phase,
    style: RenderStyle,

    // State
    frame: u64,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Create a simulation over a fixed body sequence.
    ///
    /// Bodies that already carry a color count toward the gate. With no
    /// uncolored body left (including the empty sequence) it starts running.
    /// Fails on a non-positive arena or a body with a bad radius, position or
    /// velocity, the same checks a scene file goes through.
    pub fn new(arena: Arena, bodies: Vec<Body>) -> Result<Self, SimError> {
        validate_arena(&arena)?;
        for (i, body) in bodies.iter().enumerate() {
            validate_body(i, body)?;
        }
        Ok(init::create_simulation_core(arena, bodies, RenderStyle::default()))
    }

    pub fn from_scene(config: &SceneConfig) -> Result<Self, SimError> {
        let scene = config.build()?;
        log::info!(
            "scene loaded: {}x{} arena, {} bodies",
            scene.arena.width,
            scene.arena.height,
            scene.bodies.len()
        );
        Ok(init::create_simulation_core(scene.arena, scene.bodies, scene.style))
    }

    pub fn from_scene_json(json: &str) -> Result<Self, SimError> {
        let config = SceneConfig::from_json(json)?;
        Self::from_scene(&config)
    }

    pub fn arena(&self) -> Arena { self.arena }

    pub fn style(&self) -> RenderStyle { self.style }

    pub fn phase(&self) -> Phase { self.phase }

    pub fn started(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn body_count(&self) -> usize { self.motion.body_count() }

    pub fn assigned_count(&self) -> usize {
        match self.phase {
            Phase::Selecting { assigned } => assigned,
            Phase::Running => self.motion.body_count(),
        }
    }

    pub fn bodies(&self) -> &[Body] { self.motion.bodies() }

    /// Reflection events of the most recent tick (empty while selecting).
    pub fn last_events(&self) -> &[ReflectionEvent] { self.motion.events() }

    /// Ticks performed while running.
    pub fn frame(&self) -> u64 { self.frame }

    /// Give body `index` its color. Returns the number of colored bodies.
    ///
    /// Coloring the last uncolored body starts the simulation.
    pub fn assign_color(&mut self, index: usize, color: Color) -> Result<usize, SimError> {
        commands::assign_color(self, index, color)
    }

    /// Like `assign_color`, parsing a palette name or `#RRGGBB` literal.
    pub fn assign_color_str(&mut self, index: usize, color: &str) -> Result<usize, SimError> {
        commands::assign_color_str(self, index, color)
    }

    /// Advance one frame. A no-op until every body has a color.
    pub fn tick(&mut self) -> TickOutcome<'_> {
        step::tick(self)
    }

    /// Enable or disable per-tick perf metrics
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Rewrite the transfer buffers from the current body state.
    /// Runs after every `tick` and `assign_color`.
    pub(crate) fn refresh_render_buffers(&mut self) {
        render_extract::refresh_render_buffers(self);
    }

    pub fn body_buffer(&self) -> &[f32] { &self.render.body_buffer }

    pub fn color_buffer(&self) -> &[u32] { &self.render.color_buffer }

    pub fn event_buffer(&self) -> &[u32] { &self.render.event_buffer }

    pub(crate) fn abi_layout_data(&self) -> AbiLayoutData {
        render_extract::abi_layout_data(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
