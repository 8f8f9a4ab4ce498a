use powdergrid_engine::systems::behaviors::{SAND, WALL, WATER};
use powdergrid_engine::{mat_sand, version, World};

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn world_from_config_json() {
    let world = World::with_config_json(r#"{ "width": 40, "height": 24, "chunk_size": 8 }"#).unwrap();
    assert_eq!(world.width(), 40);
    assert_eq!(world.height(), 24);
    assert_eq!(world.chunk_size(), 8);
    assert_eq!((world.chunks_x(), world.chunks_y()), (5, 3));
    assert_eq!(world.total_chunks(), 15);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn brush_and_step() {
    let mut world = World::new(32, 32).unwrap();
    assert_eq!(mat_sand(), SAND);
    assert!(!world.place(32, 0, SAND));
    assert!(!world.place(0, 0, 999));

    for x in 0..32 {
        assert!(world.place(x, 31, WALL));
    }
    assert_eq!(world.paint(16, 10, 2, SAND), 13);
    assert_eq!(world.non_empty_count(), 45);

    world.step_n(40).unwrap();
    assert_eq!(world.frame(), 40);
    assert_eq!(world.non_empty_count(), 45);
    assert_eq!(world.material_at(16, 30), SAND);
    assert_eq!(world.material_at(-1, 0), 0);
    assert!(world.temperature_at(0, 99).is_nan());

    assert!(world.erase_circle(16, 30, 1) > 0);
    world.clear();
    assert_eq!(world.non_empty_count(), 0);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn redraw_and_manifest() {
    let mut world = World::new(64, 32).unwrap();
    assert_eq!(world.take_redraw_chunks(), vec![0, 0, 1, 0]);
    assert!(world.take_redraw_chunks().is_empty());

    assert!(world.place(40, 5, WATER));
    assert_eq!(world.take_redraw_chunks(), vec![1, 0]);

    let manifest = world.materials_manifest_json();
    assert!(manifest.contains("\"name\":\"water\""));
    assert!(manifest.contains("\"density\":null"));
    assert!(world.last_stats_json().contains("\"frame\":0"));
    assert!(!version().is_empty());
    assert_eq!(world.materials_len(), 64 * 32);
    assert!(!world.materials_ptr().is_null());
}
