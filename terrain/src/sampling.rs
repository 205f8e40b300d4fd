/// Continuous-coordinate surface queries with bilinear interpolation
use crate::grid::HeightGrid;
use glam::Vec3;
use serde::Serialize;

/// Height and normal of the surface at an arbitrary `(x, z)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfaceSample {
    pub height: f32,
    pub normal: Vec3,
}

/// Grid cell enclosing a clamped continuous coordinate.
#[derive(Debug, Clone, Copy)]
struct CellSpan {
    x0: usize,
    x1: usize,
    z0: usize,
    z1: usize,
    frac_x: f32,
    frac_z: f32,
}

impl HeightGrid {
    /// Bilinearly interpolated height at `(x, z)`, clamped onto the grid.
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        let cell = self.cell_span(x, z);
        let h11 = self.height_unchecked(cell.x0, cell.z0);
        let h12 = self.height_unchecked(cell.x0, cell.z1);
        let h21 = self.height_unchecked(cell.x1, cell.z0);
        let h22 = self.height_unchecked(cell.x1, cell.z1);

        (1.0 - cell.frac_x) * ((1.0 - cell.frac_z) * h11 + cell.frac_z * h12)
            + cell.frac_x * ((1.0 - cell.frac_z) * h21 + cell.frac_z * h22)
    }

    /// Bilinearly interpolated normal at `(x, z)`, clamped onto the grid.
    pub fn normal_at(&self, x: f32, z: f32) -> Vec3 {
        let cell = self.cell_span(x, z);
        let n11 = self.normal_unchecked(cell.x0, cell.z0);
        let n12 = self.normal_unchecked(cell.x0, cell.z1);
        let n21 = self.normal_unchecked(cell.x1, cell.z0);
        let n22 = self.normal_unchecked(cell.x1, cell.z1);

        (1.0 - cell.frac_x) * ((1.0 - cell.frac_z) * n11 + cell.frac_z * n12)
            + cell.frac_x * ((1.0 - cell.frac_z) * n21 + cell.frac_z * n22)
    }

    /// Cached normal of the cell containing `(x, z)`, without interpolation.
    pub fn nearest_normal(&self, x: f32, z: f32) -> Vec3 {
        let x = clamp_axis(x, self.width()) as usize;
        let z = clamp_axis(z, self.length()) as usize;
        self.normal_unchecked(x, z)
    }

    pub fn sample(&self, x: f32, z: f32) -> SurfaceSample {
        SurfaceSample {
            height: self.height_at(x, z),
            normal: self.normal_at(x, z),
        }
    }

    fn cell_span(&self, x: f32, z: f32) -> CellSpan {
        let (x0, x1, frac_x) = axis_span(x, self.width());
        let (z0, z1, frac_z) = axis_span(z, self.length());
        CellSpan {
            x0,
            x1,
            z0,
            z1,
            frac_x,
            frac_z,
        }
    }
}

/// Clamp a coordinate into `[0, size - 1]`; NaN lands on the origin.
fn clamp_axis(coord: f32, size: usize) -> f32 {
    if coord.is_nan() {
        return 0.0;
    }
    coord.clamp(0.0, (size - 1) as f32)
}

/// Lower index, upper index and fraction along one axis.
/// The lower index backs off one cell at the far edge so the upper stays in
/// range; a one-sample axis collapses to a single index.
fn axis_span(coord: f32, size: usize) -> (usize, usize, f32) {
    let coord = clamp_axis(coord, size);
    let lower = (coord as usize).min(size.saturating_sub(2));
    let upper = (lower + 1).min(size - 1);
    (lower, upper, coord - lower as f32)
}
