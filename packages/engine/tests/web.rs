//! Browser-only checks; run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use bounce_engine::Simulation;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn invalid_color_is_reported_as_js_error() {
    let mut sim = Simulation::new(800.0, 600.0).unwrap();
    let err = sim.assign_color(0, String::new()).unwrap_err();
    assert!(err.as_string().unwrap().contains("invalid color"));
    assert!(!sim.started());
}

#[wasm_bindgen_test]
fn bad_scene_json_is_reported_as_js_error() {
    assert!(Simulation::from_scene_json("{}".to_string()).is_err());
}

#[wasm_bindgen_test]
fn second_assignment_is_reported_as_js_error() {
    let mut sim = Simulation::new(800.0, 600.0).unwrap();
    sim.assign_color(0, "Blue".to_string()).unwrap();
    let err = sim.assign_color(0, "Red".to_string()).unwrap_err();
    assert!(err.as_string().unwrap().contains("already has a color"));
}

#[wasm_bindgen_test]
fn degenerate_arena_is_reported_as_js_error() {
    for (w, h) in [(f64::NAN, 600.0), (0.0, 600.0), (800.0, -600.0)] {
        let err = Simulation::new(w, h).err().unwrap();
        assert!(err.as_string().unwrap().contains("must be positive"));
    }
}
