use powdergrid_engine::systems::behaviors::SAND;
use powdergrid_engine::World;

#[test]
fn perf_smoke_step() {
    let mut world = World::new(128, 64).unwrap();
    world.enable_perf_metrics(true);
    for x in 0..128 {
        for y in 0..32 {
            assert!(world.place(x, y, SAND));
        }
    }
    let stats = world.step().unwrap();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.non_empty_cells(), 128 * 32);
    assert_eq!(world.last_stats(), stats);
}
