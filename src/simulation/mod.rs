//! World - the simulation core and its orchestration.
//!
//! `WorldCore` owns the double-buffered cell grid, the velocity plane and
//! both active-cell sets; the tick algorithm, brush commands and settings
//! live in submodules and borrow it. The wasm-facing `World` facade wraps
//! `WorldCore` and exposes the current buffer to the renderer - never the
//! build target.
//!
//! Single-threaded by design: one tick runs to completion, edits apply
//! strictly between ticks, and the only randomness is the seeded tie-break
//! generator, so a fixed seed and edit schedule reproduce bit-identical
//! grids.

use crate::domain::materials::{MaterialId, MATERIAL_COUNT};
use crate::spatial::active::ActiveSet;
use crate::spatial::grid::{Grid, Snapshot};

#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/random.rs"]
mod random;
#[path = "init/settings.rs"]
mod settings;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "step/step.rs"]
mod step;
mod facade;

pub use commands::EditError;
pub use facade::World;
pub use perf_stats::PerfStats;
pub use settings::EngineSettings;

use perf_timer::PerfTimer;

/// The simulation core
pub struct WorldCore {
    grid: Grid,             // current generation, visible to the renderer
    back: Grid,             // next generation, private build target
    active: ActiveSet,      // cells that may change this tick
    next_active: ActiveSet, // cells that may change next tick

    // Settings
    settings: EngineSettings,
    brush_radii: [i32; MATERIAL_COUNT],

    // State
    particle_count: u32,
    frame: u64,
    rng_state: u32,
    tint_counter: u8,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a new world with given dimensions and default settings.
    pub fn new(width: u32, height: u32) -> Self {
        init::create_world_core(width, height, EngineSettings::default())
    }

    /// Create a new world with explicit settings.
    pub fn with_settings(width: u32, height: u32, settings: EngineSettings) -> Self {
        init::create_world_core(width, height, settings)
    }

    /// Replace the settings from a JSON document and reset the world.
    pub fn load_settings_json(&mut self, json: &str) -> Result<(), String> {
        let parsed = EngineSettings::from_json(json)?;
        *self = init::create_world_core(self.grid.width(), self.grid.height(), parsed);
        Ok(())
    }

    pub fn settings_json(&self) -> String {
        self.settings.to_json()
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.grid.width(), self.grid.height())
    }

    pub fn particle_count(&self) -> u32 { self.particle_count }

    pub fn frame(&self) -> u64 { self.frame }

    /// Number of cells eligible to change on the next tick.
    pub fn active_cells(&self) -> usize {
        self.active.len()
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        settings::set_gravity(self, gravity);
    }

    pub fn gravity(&self) -> f32 {
        self.settings.gravity
    }

    /// Reseed the tie-break generator.
    pub fn set_seed(&mut self, seed: u32) {
        settings::set_seed(self, seed);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Brush-insert a disc of `material` around the center cell. Returns
    /// the number of cells filled; out-of-range disc offsets are clipped.
    pub fn insert(&mut self, cx: i32, cy: i32, material: MaterialId) -> Result<u32, EditError> {
        commands::insert(self, cx, cy, material)
    }

    /// Insert into a single cell.
    pub fn insert_cell(&mut self, x: i32, y: i32, material: MaterialId) -> Result<bool, EditError> {
        commands::insert_cell(self, x, y, material)
    }

    /// Brush-erase a disc around the center cell. Returns the number of
    /// cells cleared.
    pub fn erase(&mut self, cx: i32, cy: i32) -> u32 {
        commands::erase(self, cx, cy)
    }

    /// Erase a single cell.
    pub fn erase_cell(&mut self, x: i32, y: i32) -> bool {
        commands::erase_cell(self, x, y)
    }

    /// Clear all cells
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    /// Advance the simulation by one tick.
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Read-only view of the current buffer for the renderer.
    pub fn snapshot(&self) -> Snapshot<'_> {
        self.grid.snapshot()
    }

    // === Raw pointers for JS interop (current buffer only) ===

    pub fn materials_ptr(&self) -> *const MaterialId {
        self.grid.materials_ptr()
    }

    pub fn attributes_ptr(&self) -> *const f32 {
        self.grid.attributes_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.grid.size()
    }

    pub fn materials_byte_len(&self) -> usize {
        self.grid.size()
    }

    pub fn attributes_byte_len(&self) -> usize {
        self.grid.size() * std::mem::size_of::<f32>()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
