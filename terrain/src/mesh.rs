/// Triangle-strip vertex data for terrain rendering
use crate::grid::HeightGrid;
use glam::Vec3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

/// One vertex of the terrain surface, in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshVertex {
    pub position: Vec3,
    pub normal: Vec3,
}

/// Strip joining row `row` to row `row + 1`.
/// Vertices alternate between the two rows for each column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleStrip {
    pub row: usize,
    pub vertices: Vec<MeshVertex>,
}

/// Compact description of an exported mesh for manifests and logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshSummary {
    pub width: usize,
    pub length: usize,
    pub strip_count: usize,
    pub vertex_count: usize,
    pub min_height: f32,
    pub max_height: f32,
}

/// Full terrain surface as one strip per row pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainMesh {
    pub width: usize,
    pub length: usize,
    pub strips: Vec<TriangleStrip>,
}

impl TerrainMesh {
    /// Assemble strips for every row pair of the grid.
    /// Normals are refreshed first; strips are built in parallel from the
    /// immutable height and normal buffers.
    pub fn build(grid: &HeightGrid) -> Self {
        let width = grid.width();
        let length = grid.length();
        let heights = grid.heights();
        let normals = grid.normals();

        let strips: Vec<TriangleStrip> = (0..length.saturating_sub(1))
            .into_par_iter()
            .map(|z| {
                let mut vertices = Vec::with_capacity(width * 2);
                for x in 0..width {
                    for row in [z, z + 1] {
                        let i = row * width + x;
                        vertices.push(MeshVertex {
                            position: Vec3::new(x as f32, heights[i], row as f32),
                            normal: normals[i],
                        });
                    }
                }
                TriangleStrip { row: z, vertices }
            })
            .collect();

        info!(
            "Built terrain mesh: {} strips, {} vertices",
            strips.len(),
            strips.iter().map(|s| s.vertices.len()).sum::<usize>()
        );

        Self {
            width,
            length,
            strips,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.strips.iter().map(|s| s.vertices.len()).sum()
    }

    pub fn summary(&self) -> MeshSummary {
        let (min_height, max_height) = self
            .strips
            .iter()
            .flat_map(|s| s.vertices.iter())
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), v| {
                (min.min(v.position.y), max.max(v.position.y))
            });

        MeshSummary {
            width: self.width,
            length: self.length,
            strip_count: self.strips.len(),
            vertex_count: self.vertex_count(),
            min_height,
            max_height,
        }
    }
}
