//! Tick algorithm - one discrete update of every active cell.
//!
//! Double-buffer discipline: the next buffer starts as a full copy of the
//! current one, then moved-from and moved-to cells are overwritten.
//! Candidate occupancy is read from the current buffer; claims are checked
//! against the next buffer, so every next-buffer cell has at most one
//! writer per tick. The active set drains in ascending index order -
//! row-major, top-to-bottom - so upper cells resolve before lower ones
//! claim a contested target.

use crate::domain::materials::{self, CandidateGroup, MaterialId, MAT_EMPTY, MAT_WATER};
use crate::spatial::active::ActiveSet;

use super::random::coin_flip;
use super::{PerfTimer, WorldCore};

enum Outcome {
    Moved,
    Blocked,
    BlockedContended,
    Skipped,
}

pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    let timer = perf_on.then(PerfTimer::start);
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.active_cells = world.active.len() as u32;
        world.perf_stats.grid_cells = world.grid.size() as u32;
        world.perf_stats.particle_count = world.particle_count;
        // Two buffers, material(1) + attribute(4) + velocity(4) bytes per cell.
        world.perf_stats.memory_bytes = (world.grid.size() as u32).saturating_mul(2 * 9);
    }

    world.back.copy_from(&world.grid);

    // Take the drained set out of the struct so iterating it doesn't alias
    // the mutable borrows below; it is recycled afterwards as the build
    // target for the following tick.
    let drained = std::mem::replace(&mut world.active, ActiveSet::new(0));

    let mut processed: u32 = 0;
    let mut moved: u32 = 0;
    let mut contended: u32 = 0;

    for idx in drained.iter() {
        match update_cell(world, idx) {
            Outcome::Moved => {
                processed += 1;
                moved += 1;
            }
            Outcome::BlockedContended => {
                processed += 1;
                contended += 1;
            }
            Outcome::Blocked => processed += 1,
            Outcome::Skipped => {}
        }
    }

    // Publish the new generation: O(1) buffer swap, then install the newly
    // marked set.
    std::mem::swap(&mut world.grid, &mut world.back);
    let mut recycled = drained;
    recycled.clear();
    world.active = std::mem::replace(&mut world.next_active, recycled);

    world.frame += 1;

    if perf_on {
        world.perf_stats.processed = processed;
        world.perf_stats.moved = moved;
        world.perf_stats.contended = contended;
        world.perf_stats.next_active_cells = world.active.len() as u32;
        if let Some(t) = timer {
            world.perf_stats.step_ms = t.elapsed_ms();
        }
    }
}

fn update_cell(world: &mut WorldCore, idx: usize) -> Outcome {
    let (x, y) = world.grid.coords(idx);
    let material = world.grid.material_at(x, y);
    if material == MAT_EMPTY {
        // Stale marker left by an edit; drops out here.
        return Outcome::Skipped;
    }
    let policy = materials::rule_for(material);
    if policy.candidates.is_empty() {
        // Immobile materials settle out of the set.
        return Outcome::Skipped;
    }

    // Accumulate gravity, capped so the implied reach never leaves the grid.
    let cap = (world.grid.height() - 1 - y) as f32;
    let mut velocity = world.grid.velocity_at(x, y);
    if policy.gravity {
        velocity = (velocity + world.settings.gravity).min(cap);
    }

    let mut contended = false;

    for group in policy.candidates {
        match *group {
            CandidateGroup::Fall => {
                if let Some(ty) = fall_target(world, x, y, velocity, &mut contended) {
                    let landing_cap = (world.grid.height() - 1 - ty) as f32;
                    commit_move(world, x, y, x, ty, material, velocity.min(landing_cap));
                    return Outcome::Moved;
                }
            }
            CandidateGroup::Mirrored { dx, dy } => {
                let first = if coin_flip(&mut world.rng_state) { -dx } else { dx };
                for sx in [first, -first] {
                    let (tx, ty) = (x as i32 + sx, y as i32 + dy);
                    // The current buffer decides candidacy...
                    if !world.grid.is_empty(tx, ty) {
                        continue;
                    }
                    // ...the next buffer decides whether it is claimed.
                    if !world.back.is_empty(tx, ty) {
                        contended = true;
                        continue;
                    }
                    let (tx, ty) = (tx as u32, ty as u32);
                    let landing_cap = (world.grid.height() - 1 - ty) as f32;
                    commit_move(
                        world,
                        x,
                        y,
                        tx,
                        ty,
                        material,
                        policy.base_fall_speed.min(landing_cap),
                    );
                    return Outcome::Moved;
                }
            }
        }
    }

    // Blocked. The full copy already kept the cell in place; stop it from
    // banking speed it cannot use.
    world.back.set_velocity(x, y, policy.base_fall_speed.min(cap));

    // Water stays fluid; a cell that lost a contested target gets another
    // try next tick. Everything else settles out of the set.
    if material == MAT_WATER || contended {
        world.next_active.mark(idx);
    }
    if contended {
        Outcome::BlockedContended
    } else {
        Outcome::Blocked
    }
}

/// Walk the fall column through contiguously empty current-buffer cells up
/// to the velocity reach, then back up from the deepest one until a cell
/// not yet claimed in the next buffer is found. Returns the landing row.
fn fall_target(
    world: &WorldCore,
    x: u32,
    y: u32,
    velocity: f32,
    contended: &mut bool,
) -> Option<u32> {
    let bottom = world.grid.height() - 1;
    let reach = (y + velocity.floor() as u32).min(bottom);
    if reach <= y {
        return None;
    }

    let mut deepest = None;
    for ty in (y + 1)..=reach {
        if !world.grid.is_empty(x as i32, ty as i32) {
            break;
        }
        deepest = Some(ty);
    }

    let mut ty = deepest?;
    loop {
        if world.back.is_empty(x as i32, ty as i32) {
            return Some(ty);
        }
        *contended = true;
        if ty == y + 1 {
            return None;
        }
        ty -= 1;
    }
}

fn commit_move(
    world: &mut WorldCore,
    x: u32,
    y: u32,
    tx: u32,
    ty: u32,
    material: MaterialId,
    velocity: f32,
) {
    debug_assert!(
        world.back.is_empty(tx as i32, ty as i32),
        "target claimed twice in one tick"
    );

    let attribute = world.grid.attribute_at(x, y);
    world.back.clear_cell(x, y);
    world.back.set_cell(tx, ty, material, attribute, velocity);
    world.next_active.mark(world.back.index(tx, ty));

    wake_vacated_neighbors(world, x, y);
}

/// The vacated cell is a newly reachable target for its mobile neighbors.
/// Immobile neighbors are left alone - movement never re-activates them.
fn wake_vacated_neighbors(world: &mut WorldCore, x: u32, y: u32) {
    for dy in -1..=1i32 {
        for dx in -1..=1i32 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let (nx, ny) = (x as i32 + dx, y as i32 + dy);
            if !world.grid.in_bounds(nx, ny) {
                continue;
            }
            let neighbor = world.grid.material_at(nx as u32, ny as u32);
            if neighbor == MAT_EMPTY || !materials::is_mobile(neighbor) {
                continue;
            }
            world.next_active.mark(world.grid.index(nx as u32, ny as u32));
        }
    }
}
