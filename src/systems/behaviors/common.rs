use crate::simulation::surface::Surface;

/// Swap the cell at `(x, y)` with `(x + dx, y + dy)` when the target is in
/// bounds and strictly lighter than `density`.
#[inline]
pub fn try_displace(s: &mut Surface<'_>, x: i32, y: i32, dx: i32, dy: i32, density: f32) -> bool {
    let tx = x + dx;
    let ty = y + dy;
    if !s.in_bounds(tx, ty) {
        return false;
    }
    if s.density(tx, ty) < density {
        s.swap(x, y, tx, ty);
        return true;
    }
    false
}

/// Immovable cell, with the world border counting as one.
#[inline]
pub fn is_solid_cell(s: &Surface<'_>, x: i32, y: i32) -> bool {
    !s.in_bounds(x, y) || s.density(x, y) == f32::INFINITY
}

/// "Corner cutting" guard for diagonal moves: a 1px staircase of solids is
/// only watertight if nothing slips between two solids touching diagonally.
#[inline]
pub(super) fn is_corner_blocked(s: &Surface<'_>, x: i32, y: i32, dx: i32, dy: i32) -> bool {
    debug_assert!(dx != 0 && dy != 0);
    is_solid_cell(s, x + dx, y) && is_solid_cell(s, x, y + dy)
}

/// Fall straight down, then diagonally in a random order.
#[inline]
pub(super) fn fall(s: &mut Surface<'_>, x: i32, y: i32, density: f32) -> bool {
    if try_displace(s, x, y, 0, 1, density) {
        return true;
    }
    let dir = s.random_dir();
    for dx in [dir, -dir] {
        if !is_corner_blocked(s, x, y, dx, 1) && try_displace(s, x, y, dx, 1, density) {
            return true;
        }
    }
    false
}
