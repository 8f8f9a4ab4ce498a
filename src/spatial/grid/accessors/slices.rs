use super::super::*;

impl Grid {
    // === Read-only views for renderers and JS interop ===
    pub fn materials(&self) -> &[MaterialId] {
        &self.materials
    }

    pub fn temperatures(&self) -> &[f32] {
        &self.temperature
    }

    pub fn ages(&self) -> &[i32] {
        &self.age
    }

    pub fn materials_ptr(&self) -> *const MaterialId {
        self.materials.as_ptr()
    }

    pub fn temperature_ptr(&self) -> *const f32 {
        self.temperature.as_ptr()
    }
}
