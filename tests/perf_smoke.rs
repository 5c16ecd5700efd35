use granula_engine::materials::MAT_SAND;
use granula_engine::World;

#[test]
fn perf_smoke_step() {
    let mut world = World::new(128, 64);
    world.enable_perf_metrics(true);
    for x in (6..122).step_by(12) {
        world.insert(x, 8, MAT_SAND).unwrap();
    }
    world.step();
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.moved() > 0);
    assert_eq!(stats.grid_cells(), 128 * 64);
}
