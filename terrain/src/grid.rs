/// Height field storage with a lazily rebuilt normal cache
use crate::error::TerrainError;
use crate::normals::compute_smoothed_normals;
use glam::Vec3;
use std::cell::{Cell, OnceCell};
use tracing::debug;

/// Dense grid of elevation samples indexed by `(x, z)`.
///
/// Heights live in one flat buffer at `z * width + x`. Normals are derived
/// from the whole field in a single pass on the first read after any
/// mutation; until then the cache is empty and the grid reports itself as
/// stale. Reads never require exclusive access.
#[derive(Debug, Clone)]
pub struct HeightGrid {
    width: usize,
    length: usize,
    heights: Vec<f32>,
    /// Empty while stale.
    normals: OnceCell<Vec<Vec3>>,
    recompute_count: Cell<u64>,
}

impl HeightGrid {
    /// Create a flat grid of `width x length` cells at height zero.
    pub fn new(width: usize, length: usize) -> Result<Self, TerrainError> {
        if width == 0 || length == 0 {
            return Err(TerrainError::InvalidDimensions { width, length });
        }

        Ok(Self {
            width,
            length,
            heights: vec![0.0; width * length],
            normals: OnceCell::new(),
            recompute_count: Cell::new(0),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Overwrite the height of one cell and invalidate every normal.
    pub fn set_height(&mut self, x: usize, z: usize, value: f32) -> Result<(), TerrainError> {
        let index = self.index(x, z)?;
        self.heights[index] = value;
        self.normals.take();
        Ok(())
    }

    /// Stored height of one cell.
    pub fn height(&self, x: usize, z: usize) -> Result<f32, TerrainError> {
        Ok(self.heights[self.index(x, z)?])
    }

    /// Smoothed normal of one cell, rebuilding the cache first if stale.
    pub fn normal(&self, x: usize, z: usize) -> Result<Vec3, TerrainError> {
        let index = self.index(x, z)?;
        Ok(self.cached_normals()[index])
    }

    /// Rebuild the normal cache if any height changed since the last build.
    pub fn compute_normals(&self) {
        self.cached_normals();
    }

    /// Whether the next normal read will trigger a full rebuild.
    pub fn normals_stale(&self) -> bool {
        self.normals.get().is_none()
    }

    /// Number of full normal passes performed over the grid's lifetime.
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count.get()
    }

    /// Row-major height buffer (`z * width + x`).
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Row-major normal buffer, rebuilt first if stale.
    pub fn normals(&self) -> &[Vec3] {
        self.cached_normals()
    }

    /// Lowest and highest stored height.
    pub fn min_max_height(&self) -> (f32, f32) {
        self.heights
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), &h| {
                (min.min(h), max.max(h))
            })
    }

    /// Height lookup for indices already known to be in range.
    pub(crate) fn height_unchecked(&self, x: usize, z: usize) -> f32 {
        self.heights[z * self.width + x]
    }

    /// Normal lookup for indices already known to be in range.
    pub(crate) fn normal_unchecked(&self, x: usize, z: usize) -> Vec3 {
        self.cached_normals()[z * self.width + x]
    }

    fn cached_normals(&self) -> &[Vec3] {
        self.normals.get_or_init(|| {
            self.recompute_count.set(self.recompute_count.get() + 1);
            debug!(
                "Recomputing {}x{} terrain normals (pass {})",
                self.width,
                self.length,
                self.recompute_count.get()
            );
            compute_smoothed_normals(&self.heights, self.width, self.length)
        })
    }

    fn index(&self, x: usize, z: usize) -> Result<usize, TerrainError> {
        if x >= self.width || z >= self.length {
            return Err(TerrainError::OutOfRange {
                x,
                z,
                width: self.width,
                length: self.length,
            });
        }
        Ok(z * self.width + x)
    }
}
