//! Heightmap terrain model.
//!
//! A [`HeightGrid`] stores a dense field of elevation samples and a lazily
//! rebuilt grid of smoothed surface normals. Gameplay code places objects on
//! the surface through the continuous-coordinate queries in [`sampling`];
//! renderers pull whole rows through [`mesh`].

pub mod error;
pub mod grid;
pub mod loader;
pub mod mesh;
mod normals;
pub mod sampling;

pub use error::TerrainError;
pub use grid::HeightGrid;
pub use loader::{HeightmapLoader, height_for_intensity};
pub use mesh::{MeshSummary, MeshVertex, TerrainMesh, TriangleStrip};
pub use sampling::SurfaceSample;
