use bounce_engine::Simulation;

#[test]
fn perf_smoke_tick() {
    let mut sim = Simulation::new(800.0, 600.0).unwrap();
    sim.enable_perf_metrics(true);

    // Not started yet: the circle is drawn in place, uncolored.
    assert_eq!(sim.tick(), 0);
    assert_eq!(sim.colors_len(), 1);
    assert_eq!(sim.core().color_buffer(), &[0]);

    assert_eq!(sim.assign_color(0, "Red".to_string()).ok(), Some(1));
    assert!(sim.started());

    let mut cues = 0;
    for _ in 0..1_000 {
        cues += sim.tick();
    }
    assert!(cues > 0);
    assert_eq!(sim.frame(), 1_000);

    let stats = sim.get_perf_stats();
    assert!(stats.tick_ms() >= 0.0);
    assert_eq!(stats.bodies_moved(), 1);

    let layout = sim.abi_layout();
    assert_eq!(layout.bodies_len_elements(), 3);
    assert_eq!(layout.colors_len_elements(), 1);
    assert_eq!(sim.core().color_buffer(), &[0xFFFF0000]);
}
