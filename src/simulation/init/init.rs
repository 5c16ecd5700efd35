use crate::domain::materials::{MATERIAL_COUNT, MaterialId};
use crate::spatial::active::ActiveSet;
use crate::spatial::grid::Grid;

use super::perf_stats::PerfStats;
use super::{random, EngineSettings, WorldCore};

pub(super) fn create_world_core(width: u32, height: u32, settings: EngineSettings) -> WorldCore {
    let cells = (width as usize) * (height as usize);

    let mut brush_radii = [0i32; MATERIAL_COUNT];
    for (id, radius) in brush_radii.iter_mut().enumerate() {
        *radius = settings.brush_radius_for(id as MaterialId);
    }

    WorldCore {
        grid: Grid::new(width, height),
        back: Grid::new(width, height),
        active: ActiveSet::new(cells),
        next_active: ActiveSet::new(cells),
        rng_state: random::seed_state(settings.seed),
        brush_radii,
        settings,
        particle_count: 0,
        frame: 0,
        tint_counter: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
