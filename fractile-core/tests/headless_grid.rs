use fractile_core::{FrameConfig, IterateMap, IterationResult, Viewport};

/// Sweep every pixel of a frame and collect raw iteration results.
fn sweep(config: &FrameConfig) -> Vec<IterationResult> {
    let mapper = config.mapper();
    let len = config.buffer_len();
    let mut results = Vec::with_capacity(len / 4);
    for index in (0..len).step_by(4) {
        let seed = mapper.index_to_plane(index);
        results.push(config.map.iterate(seed, config.max_iterations));
    }
    results
}

#[test]
fn default_view_contains_both_outcomes() {
    let config =
        FrameConfig::new(Viewport::default(), 100, 50, 256, IterateMap::Mandelbrot).unwrap();

    let results = sweep(&config);
    assert_eq!(results.len(), 100 * 50);

    let escaped = results
        .iter()
        .filter(|r| matches!(r, IterationResult::Escaped { .. }))
        .count();
    let captured = results
        .iter()
        .filter(|r| matches!(r, IterationResult::Captured))
        .count();

    assert!(escaped > 0, "should have escaped points");
    assert!(captured > 0, "should have captured points");
    assert_eq!(escaped + captured, 5_000);
}

#[test]
fn sweep_is_deterministic() {
    let config = FrameConfig::new(Viewport::default(), 80, 40, 128, IterateMap::Mandelbrot).unwrap();
    assert_eq!(
        sweep(&config),
        sweep(&config),
        "identical configs must produce identical results"
    );
}

#[test]
fn zoomed_view_still_terminates_everywhere() {
    // Deep-ish zoom onto the seahorse valley boundary: plenty of slow
    // orbits, but the budget bounds every pixel.
    let mut viewport = Viewport::default();
    for _ in 0..6 {
        viewport = viewport.zoomed_to(fractile_core::Complex::new(-0.75, 0.1));
    }
    let config = FrameConfig::new(viewport, 64, 64, 500, IterateMap::Mandelbrot).unwrap();
    let results = sweep(&config);
    assert_eq!(results.len(), 64 * 64);
}

#[test]
fn alternate_maps_render_distinct_sets() {
    let config = FrameConfig::new(Viewport::default(), 64, 32, 128, IterateMap::Mandelbrot).unwrap();
    let mandelbrot = sweep(&config);
    let cubic = sweep(&FrameConfig {
        map: IterateMap::Cubic,
        ..config
    });
    let ship = sweep(&FrameConfig {
        map: IterateMap::BurningShip,
        ..config
    });
    assert_ne!(mandelbrot, cubic);
    assert_ne!(mandelbrot, ship);
}
