use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) tick_ms: f64,
    pub(super) bodies_moved: u32,
    pub(super) reflections: u32,
    pub(super) frame: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn bodies_moved(&self) -> u32 { self.bodies_moved }
    #[wasm_bindgen(getter)]
    pub fn reflections(&self) -> u32 { self.reflections }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
