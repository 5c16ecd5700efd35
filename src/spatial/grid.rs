//! Grid - Structure of Arrays cell storage with a parallel velocity plane.
//!
//! One material byte, one cosmetic attribute and one vertical velocity per
//! cell, each in its own contiguous array. The simulation owns two of these
//! (the current and the next generation) and exchanges them with an O(1)
//! buffer swap at the end of every tick; the next buffer is a private build
//! target and is never handed out.
//!
//! Reads are either checked (`cell`, returning `GridOutOfBounds` for a bad
//! coordinate) or preceded by an explicit `in_bounds` test. There is no
//! silent default for out-of-range access and no wraparound.

use std::error::Error;
use std::fmt;

use crate::domain::materials::{MaterialId, MAT_EMPTY};

/// Checked access outside `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOutOfBounds {
    pub x: i32,
    pub y: i32,
}

impl fmt::Display for GridOutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) is outside the grid", self.x, self.y)
    }
}

impl Error for GridOutOfBounds {}

/// A single cell, assembled from the SoA planes on read.
///
/// `attribute` is a cosmetic tint seed; it is 0 whenever `material` is
/// `MAT_EMPTY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub material: MaterialId,
    pub attribute: f32,
}

impl Cell {
    #[must_use]
    pub fn empty() -> Self {
        Self { material: MAT_EMPTY, attribute: 0.0 }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.material == MAT_EMPTY
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}

/// SoA grid - all cell data in separate arrays.
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    pub materials: Vec<MaterialId>, // material id (0 = empty)
    pub attributes: Vec<f32>,       // cosmetic tint seed
    pub velocity: Vec<f32>,         // vertical speed, rows per tick
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);

        Self {
            width,
            height,
            size,
            materials: vec![MAT_EMPTY; size],
            attributes: vec![0.0; size],
            velocity: vec![0.0; size],
        }
    }

    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let x = (idx as u32) % self.width;
        let y = (idx as u32) / self.width;
        (x, y)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// True when the coordinate is in bounds and holds no material.
    #[inline]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        if !self.in_bounds(x, y) { return false; }
        self.materials[self.index(x as u32, y as u32)] == MAT_EMPTY
    }

    // === Checked access ===

    /// Read one cell, failing on an out-of-range coordinate.
    pub fn cell(&self, x: i32, y: i32) -> Result<Cell, GridOutOfBounds> {
        if !self.in_bounds(x, y) {
            return Err(GridOutOfBounds { x, y });
        }
        let idx = self.index(x as u32, y as u32);
        Ok(Cell {
            material: self.materials[idx],
            attribute: self.attributes[idx],
        })
    }

    // === Plane access ===
    // Callers bounds-check before using the u32 accessors; debug builds
    // still catch a bad index through `fast!`.

    #[inline]
    pub fn material_at(&self, x: u32, y: u32) -> MaterialId {
        let idx = self.index(x, y);
        *fast!(self.materials, [idx])
    }

    #[inline]
    pub fn attribute_at(&self, x: u32, y: u32) -> f32 {
        let idx = self.index(x, y);
        *fast!(self.attributes, [idx])
    }

    #[inline]
    pub fn velocity_at(&self, x: u32, y: u32) -> f32 {
        let idx = self.index(x, y);
        *fast!(self.velocity, [idx])
    }

    #[inline]
    pub fn set_velocity(&mut self, x: u32, y: u32, v: f32) {
        let idx = self.index(x, y);
        fast!(self.velocity, [idx] = v);
    }

    // === Set cell with all planes ===
    pub fn set_cell(&mut self, x: u32, y: u32, material: MaterialId, attribute: f32, velocity: f32) {
        let idx = self.index(x, y);
        fast!(self.materials, [idx] = material);
        fast!(self.attributes, [idx] = attribute);
        fast!(self.velocity, [idx] = velocity);
    }

    // === Clear single cell ===
    // Material, attribute and velocity reset together; an empty cell never
    // carries stale scalar state.
    pub fn clear_cell(&mut self, x: u32, y: u32) {
        let idx = self.index(x, y);
        fast!(self.materials, [idx] = MAT_EMPTY);
        fast!(self.attributes, [idx] = 0.0);
        fast!(self.velocity, [idx] = 0.0);
    }

    // === Whole-buffer ops ===

    /// Overwrite every plane with `other`'s contents. Both grids must have
    /// the same dimensions.
    pub fn copy_from(&mut self, other: &Grid) {
        debug_assert_eq!(self.size, other.size);
        self.materials.copy_from_slice(&other.materials);
        self.attributes.copy_from_slice(&other.attributes);
        self.velocity.copy_from_slice(&other.velocity);
    }

    /// Clear the entire grid.
    pub fn clear(&mut self) {
        self.materials.fill(MAT_EMPTY);
        self.attributes.fill(0.0);
        self.velocity.fill(0.0);
    }

    // === Read-only view for the renderer ===
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            width: self.width,
            height: self.height,
            materials: &self.materials,
            attributes: &self.attributes,
        }
    }

    // === Raw pointers for JS interop ===
    pub fn materials_ptr(&self) -> *const MaterialId {
        self.materials.as_ptr()
    }

    pub fn attributes_ptr(&self) -> *const f32 {
        self.attributes.as_ptr()
    }
}

/// Read-only view of one grid generation, handed to the renderer once per
/// tick.
pub struct Snapshot<'a> {
    width: u32,
    height: u32,
    materials: &'a [MaterialId],
    attributes: &'a [f32],
}

impl Snapshot<'_> {
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn materials(&self) -> &[MaterialId] {
        self.materials
    }

    pub fn attributes(&self) -> &[f32] {
        self.attributes
    }

    /// Read one cell, failing on an out-of-range coordinate.
    pub fn cell(&self, x: i32, y: i32) -> Result<Cell, GridOutOfBounds> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return Err(GridOutOfBounds { x, y });
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        Ok(Cell {
            material: self.materials[idx],
            attribute: self.attributes[idx],
        })
    }
}
