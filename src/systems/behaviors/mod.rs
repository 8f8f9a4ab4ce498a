//! Reference materials - a small palette of behaviors written against the
//! mutation surface.
//!
//! Each behavior is a plain `fn` so it drops straight into a
//! `MaterialDescriptor`. Gravity points toward +y (row 0 is the top).

mod common;
mod energy;
mod gas;
mod liquid;
mod powder;

pub use common::{is_solid_cell, try_displace};
pub use energy::{update_battery, update_heater, update_wire};
pub use gas::update_gas;
pub use liquid::update_liquid;
pub use powder::update_powder;

use crate::core::error::RegistryError;
use crate::domain::materials::{MaterialDescriptor, MaterialId, MaterialRegistry};

pub const WALL: MaterialId = 1;
pub const SAND: MaterialId = 2;
pub const WATER: MaterialId = 3;
pub const STEAM: MaterialId = 4;
pub const HEATER: MaterialId = 5;
pub const BATTERY: MaterialId = 6;
pub const WIRE: MaterialId = 7;

/// Liquids turn to gas at or above this temperature.
pub const BOILING_POINT: f32 = 100.0;

/// Descriptors for the reference palette, in id order.
pub fn reference_materials() -> Vec<MaterialDescriptor> {
    vec![
        MaterialDescriptor::new(WALL, "wall", f32::INFINITY)
            .with_category("solid")
            .with_description("Immovable and inert."),
        MaterialDescriptor::new(SAND, "sand", 2.0)
            .with_update(update_powder)
            .with_category("powder")
            .with_description("Falls, piles up and sinks through liquids."),
        MaterialDescriptor::new(WATER, "water", 1.0)
            .with_update(update_liquid)
            .with_category("liquid")
            .with_description("Flows sideways and boils into steam."),
        MaterialDescriptor::new(STEAM, "steam", 0.1)
            .with_update(update_gas)
            .with_category("gas")
            .with_description("Rises, drifts with the wind and condenses once cool.")
            .with_default_temperature(BOILING_POINT),
        MaterialDescriptor::new(HEATER, "heater", f32::INFINITY)
            .with_update(update_heater)
            .with_category("machine")
            .with_description("Warms its neighbours."),
        MaterialDescriptor::new(BATTERY, "battery", f32::INFINITY)
            .with_update(update_battery)
            .with_category("electric")
            .with_description("Powers adjacent cells every tick."),
        MaterialDescriptor::new(WIRE, "wire", f32::INFINITY)
            .with_update(update_wire)
            .with_category("electric")
            .with_description("Carries power to other wire and heats while powered."),
    ]
}

pub fn register_reference_materials(registry: &mut MaterialRegistry) -> Result<(), RegistryError> {
    registry.register_all(reference_materials())
}

/// Fresh registry holding empty plus the reference palette.
pub fn reference_registry() -> Result<MaterialRegistry, RegistryError> {
    let mut registry = MaterialRegistry::new();
    register_reference_materials(&mut registry)?;
    Ok(registry)
}
