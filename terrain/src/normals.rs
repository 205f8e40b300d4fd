/// Per-cell normal estimation with neighbour smoothing
use constants::terrain::{NORMAL_FALLOUT_RATIO, UP};
use glam::Vec3;

/// Estimate and smooth a normal for every cell of a row-major height field.
///
/// Each cell first gets a rough normal from the unit cross products of its
/// in-bounds edge pairs. The rough field is then blurred by adding each axis
/// neighbour's rough normal scaled by [`NORMAL_FALLOUT_RATIO`]. Results are not
/// renormalised; a zero sum falls back to straight up.
pub(crate) fn compute_smoothed_normals(heights: &[f32], width: usize, length: usize) -> Vec<Vec3> {
    let rough = rough_normals(heights, width, length);
    smooth_normals(&rough, width, length)
}

pub(crate) fn rough_normals(heights: &[f32], width: usize, length: usize) -> Vec<Vec3> {
    let mut rough = vec![Vec3::ZERO; width * length];

    for z in 0..length {
        for x in 0..width {
            let i = z * width + x;
            let h = heights[i];

            // Missing neighbours leave their edge at zero
            let out = if z > 0 {
                Vec3::new(0.0, heights[i - width] - h, -1.0)
            } else {
                Vec3::ZERO
            };
            let inward = if z < length - 1 {
                Vec3::new(0.0, heights[i + width] - h, 1.0)
            } else {
                Vec3::ZERO
            };
            let left = if x > 0 {
                Vec3::new(-1.0, heights[i - 1] - h, 0.0)
            } else {
                Vec3::ZERO
            };
            let right = if x < width - 1 {
                Vec3::new(1.0, heights[i + 1] - h, 0.0)
            } else {
                Vec3::ZERO
            };

            let mut sum = Vec3::ZERO;
            if x > 0 && z > 0 {
                sum += out.cross(left).normalize_or_zero();
            }
            if x > 0 && z < length - 1 {
                sum += left.cross(inward).normalize_or_zero();
            }
            if x < width - 1 && z < length - 1 {
                sum += inward.cross(right).normalize_or_zero();
            }
            if x < width - 1 && z > 0 {
                sum += right.cross(out).normalize_or_zero();
            }

            rough[i] = sum;
        }
    }

    rough
}

fn smooth_normals(rough: &[Vec3], width: usize, length: usize) -> Vec<Vec3> {
    let mut smoothed = vec![Vec3::ZERO; width * length];

    for z in 0..length {
        for x in 0..width {
            let i = z * width + x;
            let mut sum = rough[i];

            if x > 0 {
                sum += rough[i - 1] * NORMAL_FALLOUT_RATIO;
            }
            if x < width - 1 {
                sum += rough[i + 1] * NORMAL_FALLOUT_RATIO;
            }
            if z > 0 {
                sum += rough[i - width] * NORMAL_FALLOUT_RATIO;
            }
            if z < length - 1 {
                sum += rough[i + width] * NORMAL_FALLOUT_RATIO;
            }

            if sum.length() == 0.0 {
                sum = Vec3::from_array(UP);
            }

            smoothed[i] = sum;
        }
    }

    smoothed
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn flat_field_points_up_with_boundary_weights() {
        let heights = vec![0.0; 16];
        let rough = rough_normals(&heights, 4, 4);

        // Corners see one edge pair, border cells two, interior four
        assert_eq!(rough[0], Vec3::Y);
        assert_eq!(rough[1], Vec3::Y * 2.0);
        assert_eq!(rough[5], Vec3::Y * 4.0);

        let smoothed = smooth_normals(&rough, 4, 4);
        // corner: 1 + 0.5 * (2 + 2)
        assert!((smoothed[0] - Vec3::Y * 3.0).length() < EPS);
        // interior (1,1): 4 + 0.5 * (2 + 4 + 2 + 4)
        assert!((smoothed[5] - Vec3::Y * 10.0).length() < EPS);
    }

    #[test]
    fn single_cell_falls_back_to_up() {
        let normals = compute_smoothed_normals(&[3.0], 1, 1);
        assert_eq!(normals, vec![Vec3::new(0.0, 1.0, 0.0)]);
    }

    #[test]
    fn single_row_has_no_edge_pairs() {
        // Every pair needs both axes, so a 1-row strip has only zero rough normals
        let heights = [0.0, 5.0, -2.0, 1.0];
        let rough = rough_normals(&heights, 4, 1);
        assert!(rough.iter().all(|n| *n == Vec3::ZERO));

        let smoothed = compute_smoothed_normals(&heights, 4, 1);
        assert!(smoothed.iter().all(|n| *n == Vec3::Y));
    }

    #[test]
    fn slope_tilts_against_gradient() {
        // Rises along +x
        let heights: Vec<f32> = (0..9).map(|i| (i % 3) as f32).collect();
        let normals = compute_smoothed_normals(&heights, 3, 3);
        let centre = normals[4];
        assert!(centre.x < 0.0);
        assert!(centre.y > 0.0);
        assert!(centre.z.abs() < EPS);
        // A unit slope tilts the normal 45 degrees
        let direction = centre.normalize();
        assert!((direction.x + direction.y).abs() < EPS);
    }
}
