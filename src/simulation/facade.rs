use wasm_bindgen::prelude::*;

use super::perf_stats::PerfStats;
use super::WorldCore;

/// JS-facing wrapper around the simulation core.
///
/// The renderer reads the current buffer straight out of wasm memory via
/// the pointer getters; the next buffer is internal and never exposed.
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: WorldCore::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Cells eligible to change on the next tick (for debugging/stats)
    pub fn active_cells(&self) -> usize {
        self.core.active_cells()
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.core.set_gravity(gravity);
    }

    /// Reseed the tie-break generator (reproducible runs).
    pub fn set_seed(&mut self, seed: u32) {
        self.core.set_seed(seed);
    }

    /// Ticks per second the host should drive `step()` at; pacing is the
    /// host's job and independent of its render loop.
    pub fn tick_rate(&self) -> u32 {
        self.core.settings().tick_rate
    }

    /// Display units per cell for the host's pixel -> cell mapping.
    pub fn cell_size(&self) -> u32 {
        self.core.settings().cell_size
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn load_settings_json(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_settings_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn settings_json(&self) -> String {
        self.core.settings_json()
    }

    /// Brush-insert a disc of `material` around the center cell. Returns
    /// the number of cells filled.
    pub fn insert(&mut self, cx: i32, cy: i32, material: u8) -> Result<u32, JsValue> {
        self.core
            .insert(cx, cy, material)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Insert into a single cell
    pub fn insert_cell(&mut self, x: i32, y: i32, material: u8) -> Result<bool, JsValue> {
        self.core
            .insert_cell(x, y, material)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Brush-erase a disc around the center cell. Returns the number of
    /// cells cleared.
    pub fn erase(&mut self, cx: i32, cy: i32) -> u32 {
        self.core.erase(cx, cy)
    }

    /// Erase a single cell
    pub fn erase_cell(&mut self, x: i32, y: i32) -> bool {
        self.core.erase_cell(x, y)
    }

    /// Clear all cells
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Advance the simulation by one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Get pointer to the material plane (for JS rendering)
    pub fn materials_ptr(&self) -> *const u8 {
        self.core.materials_ptr()
    }

    /// Get pointer to the attribute plane (for JS rendering)
    pub fn attributes_ptr(&self) -> *const f32 {
        self.core.attributes_ptr()
    }

    /// Cells per plane
    pub fn cells_len(&self) -> usize {
        self.core.cells_len()
    }

    pub fn materials_byte_len(&self) -> usize {
        self.core.materials_byte_len()
    }

    pub fn attributes_byte_len(&self) -> usize {
        self.core.attributes_byte_len()
    }
}
