use super::{Phase, PerfTimer, SimulationCore, TickOutcome};

pub(super) fn tick(sim: &mut SimulationCore) -> TickOutcome<'_> {
    if sim.phase != Phase::Running {
        // Selecting: bodies are drawn where they are, nothing moves.
        sim.motion.clear_events();
        sim.refresh_render_buffers();
        return TickOutcome {
            bodies: sim.motion.bodies(),
            events: sim.motion.events(),
        };
    }

    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
    }
    let tick_start = if perf_on { Some(PerfTimer::start()) } else { None };

    sim.motion.update(&sim.arena);
    sim.frame += 1;

    if perf_on {
        sim.perf_stats.bodies_moved = sim.motion.body_count() as u32;
        sim.perf_stats.reflections = sim.motion.events().len() as u32;
        sim.perf_stats.frame = sim.frame;
        if let Some(start) = tick_start {
            sim.perf_stats.tick_ms = start.elapsed_ms();
        }
    }
    sim.refresh_render_buffers();

    TickOutcome {
        bodies: sim.motion.bodies(),
        events: sim.motion.events(),
    }
}
