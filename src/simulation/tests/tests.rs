use std::cell::RefCell;

use super::*;
use crate::core::error::{BehaviorError, BehaviorResult, ConfigError};
use crate::domain::materials::{MaterialDescriptor, EMPTY};
use crate::simulation::surface::Surface;
use crate::systems::behaviors::{reference_registry, SAND, STEAM, WALL};

const PROBE: MaterialId = 10;
const SABOTEUR: MaterialId = 11;
const SCRIBBLER: MaterialId = 12;
const BELL: MaterialId = 13;
const FLAKY: MaterialId = 14;

thread_local! {
    static VISITS: RefCell<Vec<(i32, i32)>> = RefCell::new(Vec::new());
}

fn record_visit(x: i32, y: i32, _s: &mut Surface<'_>) -> BehaviorResult {
    VISITS.with(|v| v.borrow_mut().push((x, y)));
    Ok(())
}

fn sabotage(x: i32, y: i32, s: &mut Surface<'_>) -> BehaviorResult {
    s.set(0, 0, WALL);
    s.swap(x, y, x, y + 1);
    s.mark_powered(x, y);
    Err(BehaviorError::Message("boom".to_string()))
}

fn scribble(_x: i32, _y: i32, s: &mut Surface<'_>) -> BehaviorResult {
    s.set(7, 7, 999);
    Ok(())
}

fn ring(x: i32, _y: i32, s: &mut Surface<'_>) -> BehaviorResult {
    s.wake_area(x, 0);
    Ok(())
}

fn flake(x: i32, y: i32, s: &mut Surface<'_>) -> BehaviorResult {
    s.wake_area(6, 1);
    s.mark_updated(x, y + 1);
    Err(BehaviorError::Message("flaked".to_string()))
}

fn test_registry() -> MaterialRegistry {
    let mut registry = reference_registry().unwrap();
    registry
        .register_all([
            MaterialDescriptor::new(PROBE, "probe", f32::INFINITY).with_update(record_visit),
            MaterialDescriptor::new(SABOTEUR, "saboteur", 5.0).with_update(sabotage),
            MaterialDescriptor::new(SCRIBBLER, "scribbler", 5.0).with_update(scribble),
            MaterialDescriptor::new(BELL, "bell", f32::INFINITY).with_update(ring),
            MaterialDescriptor::new(FLAKY, "flaky", 5.0).with_update(flake),
        ])
        .unwrap();
    registry
}

fn engine(width: u32, height: u32, chunk_size: u32) -> Engine {
    Engine::new(
        EngineConfig::new(width, height).with_chunk_size(chunk_size),
        test_registry(),
    )
    .unwrap()
}

#[test]
fn new_engine_is_empty_and_fully_awake() {
    let engine = engine(64, 32, 16);
    assert_eq!(engine.frame(), 0);
    assert_eq!(engine.grid().non_empty_count(), 0);
    assert_eq!(engine.total_chunks(), 8);
    assert_eq!(engine.active_chunk_count(), 8);
    assert!(engine.temperatures().iter().all(|&t| t == 20.0));
}

#[test]
fn invalid_config_is_rejected() {
    let registry = reference_registry().unwrap();
    let err = Engine::new(EngineConfig::new(16, 16).with_chunk_size(12), registry)
        .err()
        .unwrap();
    assert!(matches!(err, EngineError::Config(ConfigError::InvalidChunkSize(12))));
}

#[test]
fn scan_runs_bottom_up_and_alternates_direction() {
    let mut engine = engine(8, 8, 4);
    for y in 0..8 {
        for x in 0..8 {
            engine.place(x, y, PROBE).unwrap();
        }
    }

    let expected = |go_right: bool| {
        let columns: [i32; 2] = if go_right { [0, 1] } else { [1, 0] };
        let mut order = Vec::new();
        for cy in [1, 0] {
            for cx in columns {
                for y in (cy * 4..cy * 4 + 4).rev() {
                    let xs: Vec<i32> = (cx * 4..cx * 4 + 4).collect();
                    if go_right {
                        order.extend(xs.iter().map(|&x| (x, y)));
                    } else {
                        order.extend(xs.iter().rev().map(|&x| (x, y)));
                    }
                }
            }
        }
        order
    };

    engine.step().unwrap();
    let first = VISITS.with(|v| v.take());
    assert_eq!(first, expected(true));

    engine.step().unwrap();
    let second = VISITS.with(|v| v.take());
    assert_eq!(second, expected(false));
}

#[test]
fn chunk_woken_earlier_in_the_tick_is_scanned_in_the_same_tick() {
    let mut engine = Engine::new(
        EngineConfig::new(8, 8).with_chunk_size(4).with_wake_ttl(1),
        test_registry(),
    )
    .unwrap();
    engine.place(1, 6, BELL).unwrap();
    engine.place(1, 1, PROBE).unwrap();

    engine.step().unwrap();
    engine.step().unwrap();
    assert_eq!(engine.active_chunk_count(), 0);
    VISITS.with(|v| v.take());

    // Bottom chunk rows go first: the bell wakes the top chunk before the
    // scan gets there, and the probe in it runs this very tick.
    engine.wake_area(1, 6).unwrap();
    assert!(!engine.chunks().is_active(0, 0));
    let stats = engine.step().unwrap();

    assert_eq!(VISITS.with(|v| v.take()), vec![(1, 1)]);
    assert_eq!(stats.chunks_scanned(), 2);
}

#[test]
fn failed_update_is_rolled_back_and_scan_continues() {
    let mut engine = engine(4, 4, 4);
    engine.place(1, 1, SABOTEUR).unwrap();
    engine.place(3, 0, SAND).unwrap();

    let stats = engine.step().unwrap();

    assert_eq!(stats.behavior_failures(), 1);
    assert_eq!(stats.writes_rolled_back(), 3);
    assert_eq!(engine.grid().get(1, 1), SABOTEUR);
    assert_eq!(engine.grid().get(1, 2), EMPTY);
    assert_eq!(engine.grid().get(0, 0), EMPTY);

    // The acting cell stays processed; the marks the behavior made do not.
    let origin = engine.grid().cell_index(1, 1);
    let target = engine.grid().cell_index(1, 2);
    assert!(engine.scratch.is_updated(origin));
    assert!(!engine.scratch.is_updated(target));
    assert!(!engine.scratch.is_powered(origin));

    // Sand scanned after the failure still fell.
    assert_eq!(engine.grid().get(3, 1), SAND);
    assert_eq!(engine.grid().get(3, 0), EMPTY);
}

#[test]
fn failed_update_keeps_its_wakes_and_other_cells_updated_marks() {
    let mut engine = Engine::new(
        EngineConfig::new(8, 8).with_chunk_size(4).with_wake_ttl(1),
        test_registry(),
    )
    .unwrap();
    // Sand in the bottom-right chunk is scanned before the flaky cell.
    engine.place(5, 5, SAND).unwrap();
    engine.place(1, 2, FLAKY).unwrap();

    let stats = engine.step().unwrap();
    assert_eq!(stats.behavior_failures(), 1);

    let idx = |e: &Engine, x, y| e.grid().cell_index(x, y);
    assert_eq!(engine.grid().get(5, 6), SAND);
    assert!(engine.scratch.is_updated(idx(&engine, 5, 5)));
    assert!(engine.scratch.is_updated(idx(&engine, 5, 6)));
    assert!(engine.scratch.is_updated(idx(&engine, 1, 2)));
    assert!(!engine.scratch.is_updated(idx(&engine, 1, 3)));

    // The wake survived the rollback and kept the chunk through decay.
    assert!(engine.chunks().is_active(1, 0));
    assert!(engine.chunks().is_active(1, 1));
    assert!(!engine.chunks().is_active(0, 1));
}

#[test]
fn unknown_material_aborts_the_tick() {
    let mut engine = engine(4, 4, 4);
    engine.grid_mut().set_material(2, 2, 99);

    let err = engine.step().unwrap_err();
    assert!(matches!(err, EngineError::UnknownMaterial { id: 99, x: 2, y: 2 }));
    assert_eq!(engine.frame(), 0);

    let err = engine.validate().unwrap_err();
    assert!(matches!(err, EngineError::UnknownMaterial { id: 99, x: 2, y: 2 }));

    engine.erase(2, 2).unwrap();
    assert!(engine.validate().is_ok());
    assert!(engine.step().is_ok());
}

#[test]
#[should_panic(expected = "material 999 written at (7, 7) is not registered")]
fn behavior_cannot_write_unregistered_material_into_sleeping_chunk() {
    let mut engine = Engine::new(
        EngineConfig::new(8, 8).with_chunk_size(4).with_wake_ttl(1),
        test_registry(),
    )
    .unwrap();
    engine.step().unwrap();
    assert_eq!(engine.active_chunk_count(), 0);

    // Only the scribbler's chunk is awake; (7, 7) lies in a sleeping one.
    engine.place(0, 0, SCRIBBLER).unwrap();
    assert!(!engine.chunks().is_active(1, 1));
    engine.step().unwrap();
}

#[test]
fn inert_materials_cost_no_dispatch() {
    let mut engine = engine(4, 4, 4);
    engine.place(0, 3, WALL).unwrap();
    let stats = engine.step().unwrap();
    assert_eq!(stats.cells_visited(), 16);
    assert_eq!(stats.behaviors_run(), 0);
    assert_eq!(stats.chunks_scanned(), 1);
}

#[test]
fn step_n_advances_frames() {
    let mut engine = engine(8, 8, 4);
    let stats = engine.step_n(3).unwrap();
    assert_eq!(engine.frame(), 3);
    assert_eq!(stats.frame(), 2);
    assert_eq!(engine.last_stats(), stats);
}

#[test]
fn place_validates_coordinates_and_ids() {
    let mut engine = engine(4, 4, 4);
    assert!(matches!(
        engine.place(-1, 0, SAND),
        Err(EngineError::OutOfBounds { x: -1, y: 0, width: 4, height: 4 })
    ));
    assert!(matches!(
        engine.place(0, 0, 42),
        Err(EngineError::UnknownMaterial { id: 42, .. })
    ));

    engine.place(2, 2, STEAM).unwrap();
    assert_eq!(engine.grid().temp(2, 2), 100.0);

    engine.erase(2, 2).unwrap();
    assert_eq!(engine.grid().get(2, 2), EMPTY);
    assert_eq!(engine.grid().temp(2, 2), 20.0);
    assert!(engine.erase(4, 0).is_err());
}

#[test]
fn paint_circle_fills_only_empty_cells() {
    let mut engine = engine(9, 9, 4);
    engine.place(4, 4, WALL).unwrap();

    assert_eq!(engine.paint_circle(4, 4, 1, SAND).unwrap(), 4);
    assert_eq!(engine.grid().get(4, 4), WALL);
    assert_eq!(engine.grid().get(4, 3), SAND);
    assert_eq!(engine.grid().non_empty_count(), 5);

    // Clipped at the border.
    assert_eq!(engine.paint_circle(0, 0, 1, SAND).unwrap(), 3);

    assert_eq!(engine.erase_circle(4, 4, 1), 5);
    assert_eq!(engine.grid().non_empty_count(), 3);
}

#[test]
fn brush_accepts_any_radius_and_center() {
    let mut engine = engine(16, 16, 8);

    assert_eq!(engine.paint_circle(8, 8, 50_000, SAND).unwrap(), 256);
    assert_eq!(engine.erase_circle(8, 8, i32::MAX), 256);
    assert_eq!(engine.grid().non_empty_count(), 0);

    assert_eq!(engine.paint_circle(8, 8, i32::MIN, SAND).unwrap(), 0);
    assert_eq!(engine.paint_circle(i32::MAX, i32::MIN, i32::MAX, SAND).unwrap(), 0);
    assert_eq!(engine.erase_circle(i32::MIN, i32::MAX, i32::MAX), 0);

    // Center off the left edge: only the part of the disc inside the grid.
    assert_eq!(engine.paint_circle(-3, 8, 5, SAND).unwrap(), 17);
    assert_eq!(engine.grid().get(0, 4), SAND);
    assert_eq!(engine.grid().get(2, 8), SAND);
    assert_eq!(engine.grid().get(3, 8), EMPTY);
}

#[test]
fn clear_empties_and_wakes_everything() {
    let config = EngineConfig::new(16, 16).with_chunk_size(8).with_wake_ttl(1);
    let mut engine = Engine::new(config, reference_registry().unwrap()).unwrap();
    engine.place(3, 3, WALL).unwrap();
    engine.step().unwrap();
    assert_eq!(engine.active_chunk_count(), 0);

    engine.clear();
    assert_eq!(engine.grid().non_empty_count(), 0);
    assert_eq!(engine.active_chunk_count(), 4);
}

#[test]
fn redraw_chunks_follow_edits() {
    let mut engine = engine(8, 8, 4);
    let mut out = Vec::new();
    engine.take_redraw_chunks(&mut out);
    assert_eq!(out.len(), 4);

    engine.place(5, 1, WALL).unwrap();
    engine.take_redraw_chunks(&mut out);
    assert_eq!(out, vec![(1, 0)]);
}

#[test]
fn perf_metrics_time_the_step() {
    let mut engine = engine(16, 16, 8);
    let stats = engine.step().unwrap();
    assert_eq!(stats.step_ms(), 0.0);

    engine.enable_perf_metrics(true);
    engine.paint_circle(8, 4, 3, SAND).unwrap();
    let stats = engine.step().unwrap();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.behaviors_run() > 0);
    assert!(stats.to_json().contains("\"behaviors_run\""));
}

#[test]
fn engines_can_share_a_registry() {
    let first = engine(8, 8, 4);
    let shared = first.shared_registry();
    let second = Engine::with_shared_registry(EngineConfig::new(4, 4).with_chunk_size(4), shared).unwrap();
    assert_eq!(second.registry().by_name("probe"), Some(PROBE));
}
