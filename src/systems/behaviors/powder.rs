//! Powders fall, roll off slopes and sink through anything lighter.

use crate::core::error::BehaviorResult;
use crate::simulation::surface::Surface;

use super::common::fall;

pub fn update_powder(x: i32, y: i32, s: &mut Surface<'_>) -> BehaviorResult {
    let density = s.density(x, y);
    fall(s, x, y, density);
    Ok(())
}
