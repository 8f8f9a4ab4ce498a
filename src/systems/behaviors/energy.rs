//! Heat sources and a minimal power network.
//!
//! Power lives in the engine's tick-scoped powered set: a battery raises it
//! on its neighbours, wire passes it on to wire scanned later in the same
//! tick. Nothing carries over between ticks.

use crate::core::error::BehaviorResult;
use crate::simulation::surface::Surface;

use super::WIRE;

const NEIGHBORS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Heater output per tick and the temperature it stops at.
const HEATER_STEP: f32 = 2.0;
const HEATER_MAX: f32 = 400.0;

/// Heat a powered wire gains per tick and its ceiling.
const WIRE_HEAT: f32 = 1.0;
const WIRE_MAX: f32 = 150.0;

pub fn update_heater(x: i32, y: i32, s: &mut Surface<'_>) -> BehaviorResult {
    for (dx, dy) in NEIGHBORS {
        let (nx, ny) = (x + dx, y + dy);
        if !s.in_bounds(nx, ny) || s.is_empty(nx, ny) {
            continue;
        }
        let temp = s.temp(nx, ny);
        if temp < HEATER_MAX {
            s.set_temp(nx, ny, (temp + HEATER_STEP).min(HEATER_MAX));
        }
    }
    Ok(())
}

/// A battery is a permanent source: it keeps its own chunk awake.
pub fn update_battery(x: i32, y: i32, s: &mut Surface<'_>) -> BehaviorResult {
    for (dx, dy) in NEIGHBORS {
        let (nx, ny) = (x + dx, y + dy);
        if s.in_bounds(nx, ny) {
            s.mark_powered(nx, ny);
        }
    }
    s.wake_area(x, y);
    Ok(())
}

pub fn update_wire(x: i32, y: i32, s: &mut Surface<'_>) -> BehaviorResult {
    if !s.is_powered(x, y) {
        return Ok(());
    }
    for (dx, dy) in NEIGHBORS {
        let (nx, ny) = (x + dx, y + dy);
        if s.in_bounds(nx, ny) && s.get(nx, ny) == WIRE {
            s.mark_powered(nx, ny);
        }
    }
    let temp = s.temp(x, y);
    if temp < WIRE_MAX {
        s.set_temp(x, y, (temp + WIRE_HEAT).min(WIRE_MAX));
    }
    Ok(())
}
