//! Granula Engine - cellular sandbox simulation in WASM
//!
//! Architecture:
//! - core/       - shared utilities (safety macros)
//! - spatial/    - cell grid storage and the active-cell set
//! - domain/     - material identities and movement rules
//! - simulation/ - orchestration, brush commands, public facade

#[macro_use]
pub mod core;
pub mod spatial;
pub mod domain;
pub mod simulation;

// Short paths for the types embedders touch most.
pub use domain::materials;
pub use spatial::active;
pub use spatial::grid;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Granula WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::materials::MaterialId;
pub use simulation::{EditError, EngineSettings, PerfStats, World, WorldCore};

// Export material constants for JS
#[wasm_bindgen]
pub fn mat_empty() -> u8 { materials::MAT_EMPTY }
#[wasm_bindgen]
pub fn mat_sand() -> u8 { materials::MAT_SAND }
#[wasm_bindgen]
pub fn mat_water() -> u8 { materials::MAT_WATER }
#[wasm_bindgen]
pub fn mat_stone() -> u8 { materials::MAT_STONE }
