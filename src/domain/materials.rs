//! Material Registry - dense id -> descriptor table.
//!
//! Filled once at startup, then frozen behind an `Arc` by the engine.
//! Lookup is a single bounds-checked vector index, no hashing on the hot path.

use crate::core::error::{BehaviorResult, RegistryError};
use crate::simulation::surface::Surface;

/// Material id stored in every cell (0 = empty).
pub type MaterialId = u16;

pub const EMPTY: MaterialId = 0;

/// Density reported for empty cells. Every registered material must be heavier.
pub const EMPTY_DENSITY: f32 = 0.0;

/// Behavior entry point: `update(x, y, surface)` for the cell at `(x, y)`.
pub type UpdateFn = fn(x: i32, y: i32, surface: &mut Surface<'_>) -> BehaviorResult;

/// Immutable description of one material.
#[derive(Clone, Debug)]
pub struct MaterialDescriptor {
    pub id: MaterialId,
    /// `f32::INFINITY` marks an immovable solid.
    pub density: f32,
    /// `None` for inert materials (walls, empty); the scheduler skips them.
    pub update: Option<UpdateFn>,
    pub name: String,
    pub category: String,
    pub description: String,
    /// Temperature given to freshly placed cells by `Engine::place`.
    pub default_temperature: Option<f32>,
}

impl MaterialDescriptor {
    pub fn new(id: MaterialId, name: impl Into<String>, density: f32) -> Self {
        Self {
            id,
            density,
            update: None,
            name: name.into(),
            category: String::new(),
            description: String::new(),
            default_temperature: None,
        }
    }

    pub fn with_update(mut self, update: UpdateFn) -> Self {
        self.update = Some(update);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_default_temperature(mut self, temp: f32) -> Self {
        self.default_temperature = Some(temp);
        self
    }

    #[inline]
    pub fn is_immovable(&self) -> bool {
        self.density == f32::INFINITY
    }

    fn empty() -> Self {
        Self::new(EMPTY, "empty", EMPTY_DENSITY)
            .with_category("empty")
            .with_description("Nothing. Lighter than every registered material.")
    }
}

/// Registry of all materials, indexed directly by id.
#[derive(Clone, Debug)]
pub struct MaterialRegistry {
    table: Vec<Option<MaterialDescriptor>>,
    count: usize,
}

impl MaterialRegistry {
    /// Registry holding only the built-in empty material at id 0.
    pub fn new() -> Self {
        Self {
            table: vec![Some(MaterialDescriptor::empty())],
            count: 1,
        }
    }

    /// Add a descriptor. A taken id is rejected and the existing entry is kept.
    pub fn register(&mut self, descriptor: MaterialDescriptor) -> Result<(), RegistryError> {
        let idx = descriptor.id as usize;

        if let Some(Some(existing)) = self.table.get(idx) {
            return Err(RegistryError::DuplicateId {
                id: descriptor.id,
                existing: existing.name.clone(),
            });
        }

        // NaN fails this comparison too.
        if !(descriptor.density > EMPTY_DENSITY) {
            return Err(RegistryError::InvalidDensity {
                id: descriptor.id,
                name: descriptor.name,
                density: descriptor.density,
            });
        }

        if idx >= self.table.len() {
            self.table.resize(idx + 1, None);
        }
        self.table[idx] = Some(descriptor);
        self.count += 1;
        Ok(())
    }

    /// Register several descriptors, stopping at the first error.
    pub fn register_all<I>(&mut self, descriptors: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = MaterialDescriptor>,
    {
        for descriptor in descriptors {
            self.register(descriptor)?;
        }
        Ok(())
    }

    #[inline]
    pub fn lookup(&self, id: MaterialId) -> Option<&MaterialDescriptor> {
        self.table.get(id as usize).and_then(Option::as_ref)
    }

    #[inline]
    pub fn contains(&self, id: MaterialId) -> bool {
        self.lookup(id).is_some()
    }

    #[inline]
    pub fn density(&self, id: MaterialId) -> Option<f32> {
        self.lookup(id).map(|d| d.density)
    }

    pub fn by_name(&self, name: &str) -> Option<MaterialId> {
        self.iter().find(|d| d.name == name).map(|d| d.id)
    }

    /// Number of registered materials, empty included.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Never true: the empty material is registered by `new` and cannot be
    /// removed. Kept alongside `len` for collection-style callers.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Descriptors in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &MaterialDescriptor> + '_ {
        self.table.iter().filter_map(Option::as_ref)
    }

    pub fn ids(&self) -> impl Iterator<Item = MaterialId> + '_ {
        self.iter().map(|d| d.id)
    }
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        Self::new()
    }
}
