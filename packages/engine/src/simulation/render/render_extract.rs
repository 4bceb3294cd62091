use crate::motion_system::Axis;

use super::{AbiLayoutData, SimulationCore};

pub(super) fn refresh_render_buffers(sim: &mut SimulationCore) {
    let render = &mut sim.render;
    render.body_buffer.clear();
    render.color_buffer.clear();
    render.event_buffer.clear();

    for body in sim.motion.bodies() {
        let pos = body.pos();
        render.body_buffer.push(pos.x as f32);
        render.body_buffer.push(pos.y as f32);
        render.body_buffer.push(body.radius() as f32);
        // 0 tells the renderer to skip the circle
        render.color_buffer.push(body.color().map(|c| c.argb()).unwrap_or(0));
    }

    for ev in sim.motion.events() {
        let axis = match ev.axis {
            Axis::Horizontal => 0,
            Axis::Vertical => 1,
        };
        render.event_buffer.push(((ev.body as u32) << 1) | axis);
    }
}

pub(super) fn abi_layout_data(sim: &SimulationCore) -> AbiLayoutData {
    let render = &sim.render;
    AbiLayoutData {
        bodies_ptr: render.body_buffer.as_ptr(),
        bodies_len_elements: render.body_buffer.len(),
        bodies_len_bytes: render.body_buffer.len() * std::mem::size_of::<f32>(),
        colors_ptr: render.color_buffer.as_ptr(),
        colors_len_elements: render.color_buffer.len(),
        colors_len_bytes: render.color_buffer.len() * std::mem::size_of::<u32>(),
        events_ptr: render.event_buffer.as_ptr(),
        events_len_elements: render.event_buffer.len(),
        events_len_bytes: render.event_buffer.len() * std::mem::size_of::<u32>(),
    }
}
