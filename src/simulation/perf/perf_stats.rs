use wasm_bindgen::prelude::*;

/// Per-step metrics snapshot (zeros when perf is disabled).
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) active_cells: u32,
    pub(super) next_active_cells: u32,
    pub(super) processed: u32,
    pub(super) moved: u32,
    pub(super) contended: u32,
    pub(super) particle_count: u32,
    pub(super) grid_cells: u32,
    pub(super) memory_bytes: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }

    /// Cells drained at the start of the step.
    #[wasm_bindgen(getter)]
    pub fn active_cells(&self) -> u32 { self.active_cells }

    /// Cells marked for the following step.
    #[wasm_bindgen(getter)]
    pub fn next_active_cells(&self) -> u32 { self.next_active_cells }

    #[wasm_bindgen(getter)]
    pub fn processed(&self) -> u32 { self.processed }

    #[wasm_bindgen(getter)]
    pub fn moved(&self) -> u32 { self.moved }

    /// Cells that stayed put only because another cell claimed their target
    /// first.
    #[wasm_bindgen(getter)]
    pub fn contended(&self) -> u32 { self.contended }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }

    #[wasm_bindgen(getter)]
    pub fn grid_cells(&self) -> u32 { self.grid_cells }

    /// Rough footprint of the SoA buffers in bytes.
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
}
