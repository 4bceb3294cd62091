use wasm_bindgen::prelude::*;

use crate::motion::{Arena, Body, Vec2};

use super::perf_stats::PerfStats;
use super::SimulationCore;

#[wasm_bindgen]
pub struct AbiLayout {
    bodies_ptr: u32,
    bodies_len_elements: u32,
    bodies_len_bytes: u32,
    colors_ptr: u32,
    colors_len_elements: u32,
    colors_len_bytes: u32,
    events_ptr: u32,
    events_len_elements: u32,
    events_len_bytes: u32,
}

#[wasm_bindgen]
impl AbiLayout {
    #[wasm_bindgen(getter)]
    pub fn bodies_ptr(&self) -> u32 { self.bodies_ptr }
    #[wasm_bindgen(getter)]
    pub fn bodies_len_elements(&self) -> u32 { self.bodies_len_elements }
    #[wasm_bindgen(getter)]
    pub fn bodies_len_bytes(&self) -> u32 { self.bodies_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn colors_ptr(&self) -> u32 { self.colors_ptr }
    #[wasm_bindgen(getter)]
    pub fn colors_len_elements(&self) -> u32 { self.colors_len_elements }
    #[wasm_bindgen(getter)]
    pub fn colors_len_bytes(&self) -> u32 { self.colors_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn events_ptr(&self) -> u32 { self.events_ptr }
    #[wasm_bindgen(getter)]
    pub fn events_len_elements(&self) -> u32 { self.events_len_elements }
    #[wasm_bindgen(getter)]
    pub fn events_len_bytes(&self) -> u32 { self.events_len_bytes }
}

/// JS-facing handle for one session.
///
/// Typical frame loop:
/// ```js
/// const n = sim.tick();
/// for (let i = 0; i < n; i++) { cue.currentTime = 0; cue.play(); }
/// draw(new Float32Array(memory.buffer, sim.bodies_ptr(), sim.bodies_len()),
///      new Uint32Array(memory.buffer, sim.colors_ptr(), sim.colors_len()));
/// requestAnimationFrame(frame);
/// ```
#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Reference demo: one radius-50 circle at (150, 150) moving (4, 4)
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Result<Simulation, JsValue> {
        let body = Body::new(Vec2::new(150.0, 150.0), Vec2::new(4.0, 4.0), 50.0);
        let core = SimulationCore::new(Arena::new(width, height), vec![body])
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = fromSceneJson)]
    pub fn from_scene_json(json: String) -> Result<Simulation, JsValue> {
        let core = SimulationCore::from_scene_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 { self.core.arena().width }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 { self.core.arena().height }

    #[wasm_bindgen(getter)]
    pub fn started(&self) -> bool { self.core.started() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.core.body_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn assigned_count(&self) -> u32 { self.core.assigned_count() as u32 }

    /// Outline color as `0xAARRGGBB`
    #[wasm_bindgen(getter)]
    pub fn stroke_color(&self) -> u32 { self.core.style().stroke_color.argb() }

    #[wasm_bindgen(getter)]
    pub fn stroke_width(&self) -> f64 { self.core.style().stroke_width }

    /// Color body `index` with a palette name or `#RRGGBB`.
    /// Returns the number of colored bodies; the last one starts the motion.
    pub fn assign_color(&mut self, index: u32, color: String) -> Result<u32, JsValue> {
        let assigned = self
            .core
            .assign_color_str(index as usize, &color)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(assigned as u32)
    }

    /// Advance one frame and refresh the transfer buffers.
    /// Returns the number of reflection events (one cue each).
    pub fn tick(&mut self) -> u32 {
        self.core.tick().events.len() as u32
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Pointer to `[x, y, radius]` f32 triples
    pub fn bodies_ptr(&self) -> *const f32 {
        self.core.body_buffer().as_ptr()
    }

    pub fn bodies_len(&self) -> usize {
        self.core.body_buffer().len()
    }

    /// Pointer to per-body `0xAARRGGBB` colors (0 = not chosen yet)
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.color_buffer().as_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.color_buffer().len()
    }

    /// Pointer to last tick's events, packed `(body << 1) | axis`
    pub fn events_ptr(&self) -> *const u32 {
        self.core.event_buffer().as_ptr()
    }

    pub fn events_len(&self) -> usize {
        self.core.event_buffer().len()
    }

    pub fn abi_layout(&self) -> AbiLayout {
        let data = self.core.abi_layout_data();
        AbiLayout {
            bodies_ptr: data.bodies_ptr as u32,
            bodies_len_elements: data.bodies_len_elements as u32,
            bodies_len_bytes: data.bodies_len_bytes as u32,
            colors_ptr: data.colors_ptr as u32,
            colors_len_elements: data.colors_len_elements as u32,
            colors_len_bytes: data.colors_len_bytes as u32,
            events_ptr: data.events_ptr as u32,
            events_len_elements: data.events_len_elements as u32,
            events_len_bytes: data.events_len_bytes as u32,
        }
    }
}

impl Simulation {
    pub fn from_core(core: SimulationCore) -> Self {
        Self { core }
    }

    pub fn core(&self) -> &SimulationCore {
        &self.core
    }
}

