use std::fs;

use bounce_engine::{Axis, PaletteColor, SimulationCore, PALETTE};

#[test]
fn shipped_scenes_parse_and_start_after_coloring() {
    for name in ["scenes/duck.json", "scenes/rainbow.json"] {
        let json = fs::read_to_string(name).expect("scene file should exist");
        let mut sim = SimulationCore::from_scene_json(&json).expect("scene should parse");

        assert!(sim.body_count() > 0);
        assert!(!sim.started());

        let n = sim.body_count();
        for (i, p) in PALETTE.iter().cycle().take(n).enumerate() {
            sim.assign_color(i, p.color()).unwrap();
        }
        assert!(sim.started());
        assert_eq!(sim.style().stroke_color, PaletteColor::Green.color());
    }
}

#[test]
fn rainbow_scene_keeps_bodies_near_the_arena() {
    let json = fs::read_to_string("scenes/rainbow.json").unwrap();
    let mut sim = SimulationCore::from_scene_json(&json).unwrap();
    for i in 0..sim.body_count() {
        sim.assign_color_str(i, "Violet").unwrap();
    }

    let mut horizontal = 0;
    let mut vertical = 0;
    for _ in 0..2_000 {
        let out = sim.tick();
        for ev in out.events {
            match ev.axis {
                Axis::Horizontal => horizontal += 1,
                Axis::Vertical => vertical += 1,
            }
        }
        for b in out.bodies {
            let v = b.velocity();
            let p = b.pos();
            // Overshoot is bounded by one tick of travel past the wall.
            assert!(p.x + b.radius() <= 800.0 + 2.0 * v.x.abs());
            assert!(p.x - b.radius() >= -2.0 * v.x.abs());
            assert!(p.y + b.radius() <= 600.0 + 2.0 * v.y.abs());
            assert!(p.y - b.radius() >= -2.0 * v.y.abs());
        }
    }
    assert!(horizontal > 0);
    assert!(vertical > 0);
}
