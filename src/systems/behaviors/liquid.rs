//! Liquids fall like powders, then scan sideways for somewhere lower to go.
//!
//! A liquid at or above `BOILING_POINT` turns into steam in place.

use crate::core::error::BehaviorResult;
use crate::simulation::surface::Surface;

use super::common::fall;
use super::{BOILING_POINT, STEAM};

/// How far a liquid cell may travel sideways in one tick.
const DISPERSION: i32 = 4;

pub fn update_liquid(x: i32, y: i32, s: &mut Surface<'_>) -> BehaviorResult {
    if s.temp(x, y) >= BOILING_POINT {
        s.set(x, y, STEAM);
        s.wake_area(x, y);
        return Ok(());
    }

    let density = s.density(x, y);
    if fall(s, x, y, density) {
        return Ok(());
    }

    let dir = s.random_dir();
    for dx in [dir, -dir] {
        if let Some(tx) = scan_sideways(s, x, y, dx, density) {
            s.swap(x, y, tx, y);
            return Ok(());
        }
    }
    Ok(())
}

/// Walk up to `DISPERSION` cells in direction `dx` through lighter cells.
/// Stops early above a drop so liquid pours over edges.
fn scan_sideways(s: &Surface<'_>, x: i32, y: i32, dx: i32, density: f32) -> Option<i32> {
    let mut found = None;
    for step in 1..=DISPERSION {
        let tx = x + dx * step;
        if !s.in_bounds(tx, y) || s.density(tx, y) >= density {
            break;
        }
        found = Some(tx);
        if s.in_bounds(tx, y + 1) && s.density(tx, y + 1) < density {
            break;
        }
    }
    found
}
