//! Gases are inverted liquids: they rise through anything denser that can
//! move, drift with the wind, and cool down until they condense.

use crate::core::error::BehaviorResult;
use crate::simulation::surface::Surface;

use super::{BOILING_POINT, WATER};

/// Temperature lost per tick.
const COOLING: f32 = 0.5;
/// Minimum age before a cooled gas cell condenses.
const CONDENSE_AGE: i32 = 90;

pub fn update_gas(x: i32, y: i32, s: &mut Surface<'_>) -> BehaviorResult {
    let age = s.age(x, y).saturating_add(1);
    s.set_age(x, y, age);
    s.add_temp(x, y, -COOLING);

    if age > CONDENSE_AGE && s.temp(x, y) < BOILING_POINT {
        s.set(x, y, WATER);
        s.wake_area(x, y);
        return Ok(());
    }

    let density = s.density(x, y);
    let drift = wind_drift(s);
    let attempts = [(drift, -1), (0, -1), (-drift, -1), (drift, 0)];
    for (dx, dy) in attempts {
        if try_rise(s, x, y, x + dx, y + dy, density) {
            return Ok(());
        }
    }
    Ok(())
}

/// Sideways step for this tick: follows the wind with probability
/// `wind_strength`, otherwise random.
fn wind_drift(s: &mut Surface<'_>) -> i32 {
    let wind = s.wind();
    if wind != 0.0 && s.chance(s.wind_strength()) {
        wind.signum() as i32
    } else {
        s.random_dir()
    }
}

/// Move into an empty cell, or bubble up through a denser movable one.
fn try_rise(s: &mut Surface<'_>, x: i32, y: i32, tx: i32, ty: i32, density: f32) -> bool {
    if !s.in_bounds(tx, ty) {
        return false;
    }
    let target = s.density(tx, ty);
    let movable = target < density || (ty < y && target > density && target.is_finite());
    if movable {
        s.swap(x, y, tx, ty);
    }
    movable
}
