//! Material definitions - identities, per-material properties and movement
//! policies.
//!
//! Materials are plain u8 ids indexing a static property table; dispatch is
//! a table lookup, not virtual methods, and a material's behavior is fully
//! described by its ordered candidate groups. A cell and its grid slot are
//! the same thing - there is no particle object to fall out of sync with
//! the lattice.

pub type MaterialId = u8;

pub const MAT_EMPTY: MaterialId = 0;
pub const MAT_SAND: MaterialId = 1;
pub const MAT_WATER: MaterialId = 2;
pub const MAT_STONE: MaterialId = 3;

pub const MATERIAL_COUNT: usize = 4;

/// One step of a movement policy, tried in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateGroup {
    /// Straight down, extended by the cell's accumulated velocity.
    Fall,
    /// A mirrored pair `(+dx, dy)` / `(-dx, dy)`, tried in coin-flip order
    /// per cell per tick.
    Mirrored { dx: i32, dy: i32 },
}

/// Movement policy for one material.
#[derive(Debug)]
pub struct MovementPolicy {
    /// Candidate groups in priority order. Empty means the material never
    /// moves.
    pub candidates: &'static [CandidateGroup],
    /// Whether the material accumulates fall velocity each tick.
    pub gravity: bool,
    /// Velocity assigned on insert, on a sideways move, and whenever the
    /// cell is blocked.
    pub base_fall_speed: f32,
}

/// Static per-material properties.
#[derive(Debug)]
pub struct MaterialProps {
    pub name: &'static str,
    /// Default brush radius; settings may override it.
    pub brush_radius: i32,
    pub policy: MovementPolicy,
}

pub const MATERIAL_DATA: [MaterialProps; MATERIAL_COUNT] = [
    MaterialProps {
        name: "empty",
        brush_radius: 0,
        policy: MovementPolicy {
            candidates: &[],
            gravity: false,
            base_fall_speed: 0.0,
        },
    },
    MaterialProps {
        name: "sand",
        brush_radius: 6,
        policy: MovementPolicy {
            candidates: &[
                CandidateGroup::Fall,
                CandidateGroup::Mirrored { dx: 1, dy: 1 },
            ],
            gravity: true,
            base_fall_speed: 1.0,
        },
    },
    MaterialProps {
        name: "water",
        brush_radius: 5,
        policy: MovementPolicy {
            candidates: &[
                CandidateGroup::Fall,
                CandidateGroup::Mirrored { dx: 1, dy: 0 },
            ],
            gravity: true,
            base_fall_speed: 1.0,
        },
    },
    MaterialProps {
        name: "stone",
        brush_radius: 4,
        policy: MovementPolicy {
            candidates: &[],
            gravity: false,
            base_fall_speed: 0.0,
        },
    },
];

#[inline]
pub fn is_valid_material_id(id: MaterialId) -> bool {
    (id as usize) < MATERIAL_COUNT
}

#[inline]
pub fn is_particle(id: MaterialId) -> bool {
    id != MAT_EMPTY && is_valid_material_id(id)
}

#[inline]
pub fn props(id: MaterialId) -> Option<&'static MaterialProps> {
    MATERIAL_DATA.get(id as usize)
}

/// Movement policy lookup. An unknown id maps to the immobile empty policy;
/// callers validate ids at the edit boundary, so this only matters for
/// defensive reads.
#[inline]
pub fn rule_for(id: MaterialId) -> &'static MovementPolicy {
    debug_assert!(is_valid_material_id(id));
    match MATERIAL_DATA.get(id as usize) {
        Some(props) => &props.policy,
        None => &MATERIAL_DATA[MAT_EMPTY as usize].policy,
    }
}

/// True for materials whose candidate list is non-empty.
#[inline]
pub fn is_mobile(id: MaterialId) -> bool {
    !rule_for(id).candidates.is_empty()
}
