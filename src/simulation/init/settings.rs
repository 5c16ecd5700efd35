//! Engine configuration.
//!
//! `EngineSettings` is the JSON-facing bundle (camelCase keys) the host
//! loads at startup or swaps at runtime; the free functions below are the
//! runtime field setters `WorldCore` delegates to.

use serde::{Deserialize, Serialize};

use crate::domain::materials::{MATERIAL_DATA, MAT_SAND, MAT_STONE, MAT_WATER, MaterialId};

use super::perf_stats::PerfStats;
use super::{random, WorldCore};

/// Engine settings bundle.
///
/// `cell_size` and `tick_rate` are host-facing: the engine stores them so
/// the embedder can map pixels to cells and pace `step()` calls
/// independently of its render loop, but neither changes tick semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineSettings {
    /// Display units per cell (pixel -> cell mapping only).
    pub cell_size: u32,
    /// Velocity gained per tick by gravity-affected materials.
    pub gravity: f32,
    /// Simulation ticks per second, decoupled from the render frame rate.
    pub tick_rate: u32,
    /// Per-material brush radius overrides.
    pub brush_radii: BrushRadii,
    /// Disc radius used by erase.
    pub erase_radius: i32,
    /// Seed for the tie-break generator (0 picks the built-in default).
    pub seed: u32,
}

/// Optional per-material brush radius overrides; unset entries fall back to
/// the material table defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrushRadii {
    pub sand: Option<i32>,
    pub water: Option<i32>,
    pub stone: Option<i32>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            cell_size: 4,
            gravity: 0.2,
            tick_rate: 60,
            brush_radii: BrushRadii::default(),
            erase_radius: 6,
            seed: random::DEFAULT_SEED,
        }
    }
}

impl EngineSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Effective brush radius for a material after overrides.
    pub fn brush_radius_for(&self, material: MaterialId) -> i32 {
        let default = MATERIAL_DATA
            .get(material as usize)
            .map_or(0, |props| props.brush_radius);
        let overridden = match material {
            MAT_SAND => self.brush_radii.sand,
            MAT_WATER => self.brush_radii.water,
            MAT_STONE => self.brush_radii.stone,
            _ => None,
        };
        overridden.unwrap_or(default).max(0)
    }
}

pub(super) fn set_gravity(world: &mut WorldCore, gravity: f32) {
    // Gravity pulls toward +y only; a non-finite or negative value would
    // corrupt the velocity plane.
    if gravity.is_finite() {
        world.settings.gravity = gravity.max(0.0);
    }
}

pub(super) fn set_seed(world: &mut WorldCore, seed: u32) {
    world.settings.seed = seed;
    world.rng_state = random::seed_state(seed);
}

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}
