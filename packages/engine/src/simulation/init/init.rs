use crate::domain::scene::RenderStyle;
use crate::motion::{Arena, Body};
use crate::motion_system::MotionSystem;

use super::perf_stats::PerfStats;
use super::{Phase, RenderBuffers, SimulationCore};

pub(super) fn create_simulation_core(arena: Arena, bodies: Vec<Body>, style: RenderStyle) -> SimulationCore {
    let len = bodies.len();
    let preset = bodies.iter().filter(|b| b.is_colored()).count();
    let phase = if preset == len {
        Phase::Running
    } else {
        Phase::Selecting { assigned: preset }
    };

    let mut sim = SimulationCore {
        arena,
        motion: MotionSystem::new(bodies),
        phase,
        style,
        frame: 0,

        render: RenderBuffers {
            body_buffer: Vec::with_capacity(len * 3),
            color_buffer: Vec::with_capacity(len),
            event_buffer: Vec::with_capacity(len * 2),
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    };
    sim.refresh_render_buffers();
    sim
}
