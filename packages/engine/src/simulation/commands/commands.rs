use crate::domain::error::SimError;
use crate::domain::palette::Color;

use super::{Phase, SimulationCore};

/// Validate that `index` can still take a color; returns the current assigned count.
fn check_assignable(sim: &SimulationCore, index: usize) -> Result<usize, SimError> {
    let len = sim.motion.body_count();
    if index >= len {
        return Err(SimError::InvalidIndex { index, len });
    }

    let assigned = match sim.phase {
        Phase::Running => return Err(SimError::AlreadyAssigned { index }),
        Phase::Selecting { assigned } => assigned,
    };

    if sim.motion.bodies()[index].is_colored() {
        return Err(SimError::AlreadyAssigned { index });
    }

    Ok(assigned)
}

pub(super) fn assign_color(sim: &mut SimulationCore, index: usize, color: Color) -> Result<usize, SimError> {
    let assigned = check_assignable(sim, index)?;

    let len = sim.motion.body_count();
    let Some(body) = sim.motion.body_mut(index) else {
        return Err(SimError::InvalidIndex { index, len });
    };
    body.color = Some(color);

    let assigned = assigned + 1;
    log::debug!("body {} colored {} ({}/{})", index, color.to_hex(), assigned, len);

    if assigned == len {
        sim.phase = Phase::Running;
        log::info!("all {} bodies colored, motion started", len);
    } else {
        sim.phase = Phase::Selecting { assigned };
    }
    sim.refresh_render_buffers();

    Ok(assigned)
}

pub(super) fn assign_color_str(sim: &mut SimulationCore, index: usize, color: &str) -> Result<usize, SimError> {
    // Index and write-once errors take precedence over a bad color value.
    check_assignable(sim, index)?;
    let color = Color::parse(color)?;
    assign_color(sim, index, color)
}
