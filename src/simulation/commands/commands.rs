use crate::core::error::EngineError;
use crate::domain::materials::{MaterialId, EMPTY};

use super::Engine;

/// Host-facing edits validate their input instead of panicking: coordinates
/// and ids come from outside the engine.
fn checked_index(engine: &Engine, x: i32, y: i32) -> Result<usize, EngineError> {
    if !engine.grid.in_bounds(x, y) {
        return Err(EngineError::OutOfBounds {
            x,
            y,
            width: engine.grid.width(),
            height: engine.grid.height(),
        });
    }
    Ok(engine.grid.cell_index(x, y))
}

fn checked_material(engine: &Engine, id: MaterialId, x: i32, y: i32) -> Result<Option<f32>, EngineError> {
    match engine.registry.lookup(id) {
        Some(descriptor) => Ok(descriptor.default_temperature),
        None => Err(EngineError::UnknownMaterial {
            id,
            x: x.max(0) as u32,
            y: y.max(0) as u32,
        }),
    }
}

fn touch(engine: &mut Engine, x: i32, y: i32) {
    engine.chunks.wake(x as u32, y as u32);
    engine.chunks.mark_redraw(x as u32, y as u32);
}

pub(super) fn place(engine: &mut Engine, x: i32, y: i32, id: MaterialId) -> Result<(), EngineError> {
    let idx = checked_index(engine, x, y)?;
    let default_temp = checked_material(engine, id, x, y)?;

    engine.grid.set_material_idx(idx, id);
    if let Some(temp) = default_temp {
        engine.grid.set_temp(x, y, temp);
    }
    touch(engine, x, y);
    Ok(())
}

pub(super) fn erase(engine: &mut Engine, x: i32, y: i32) -> Result<(), EngineError> {
    let idx = checked_index(engine, x, y)?;
    engine.grid.set_material_idx(idx, EMPTY);
    engine.grid.set_temp(x, y, engine.config.ambient_temperature);
    touch(engine, x, y);
    Ok(())
}

/// Visit every in-grid cell within `radius` of `(cx, cy)`.
///
/// The scan is clipped to the grid and done in `i64`, so any host radius or
/// center is accepted; a negative radius visits nothing.
fn for_each_in_circle(
    engine: &Engine,
    cx: i32,
    cy: i32,
    radius: i32,
    mut f: impl FnMut(i32, i32),
) {
    if radius < 0 {
        return;
    }
    let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius));
    let width = i64::from(engine.grid.width());
    let height = i64::from(engine.grid.height());

    let (x0, x1) = ((cx - r).max(0), (cx + r).min(width - 1));
    let (y0, y1) = ((cy - r).max(0), (cy + r).min(height - 1));
    let r2 = r * r;
    for y in y0..=y1 {
        let dy = y - cy;
        for x in x0..=x1 {
            let dx = x - cx;
            if dx * dx + dy * dy <= r2 {
                f(x as i32, y as i32);
            }
        }
    }
}

pub(super) fn paint_circle(
    engine: &mut Engine,
    cx: i32,
    cy: i32,
    radius: i32,
    id: MaterialId,
) -> Result<usize, EngineError> {
    checked_material(engine, id, cx, cy)?;

    let mut targets = Vec::new();
    for_each_in_circle(engine, cx, cy, radius, |x, y| {
        if engine.grid.is_empty(x, y) {
            targets.push((x, y));
        }
    });
    for &(x, y) in &targets {
        place(engine, x, y, id)?;
    }
    Ok(targets.len())
}

pub(super) fn erase_circle(engine: &mut Engine, cx: i32, cy: i32, radius: i32) -> usize {
    let mut targets = Vec::new();
    for_each_in_circle(engine, cx, cy, radius, |x, y| {
        if !engine.grid.is_empty(x, y) {
            targets.push((x, y));
        }
    });
    let ambient = engine.config.ambient_temperature;
    for &(x, y) in &targets {
        engine.grid.set_material(x, y, EMPTY);
        engine.grid.set_temp(x, y, ambient);
        touch(engine, x, y);
    }
    targets.len()
}

pub(super) fn set_temperature(engine: &mut Engine, x: i32, y: i32, temp: f32) -> Result<(), EngineError> {
    checked_index(engine, x, y)?;
    engine.grid.set_temp(x, y, temp);
    engine.chunks.wake(x as u32, y as u32);
    Ok(())
}

pub(super) fn wake_area(engine: &mut Engine, x: i32, y: i32) -> Result<(), EngineError> {
    checked_index(engine, x, y)?;
    engine.chunks.wake(x as u32, y as u32);
    Ok(())
}

pub(super) fn clear(engine: &mut Engine) {
    engine.grid.clear(engine.config.ambient_temperature);
    engine.chunks.reset();
}
