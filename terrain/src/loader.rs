/// Heightmap image to terrain conversion
use crate::error::TerrainError;
use crate::grid::HeightGrid;
use constants::terrain::{DEFAULT_HEIGHT_RANGE, MAX_INTENSITY};
use image::{GenericImageView, Pixel};
use std::path::Path;
use tracing::info;

/// Map an 8-bit intensity onto `[-height_range / 2, height_range / 2]`.
pub fn height_for_intensity(intensity: u8, height_range: f32) -> f32 {
    height_range * ((intensity as f32 / MAX_INTENSITY) - 0.5)
}

/// Builds terrains from grayscale heightmaps.
/// Only the first channel of each pixel contributes to the height.
pub struct HeightmapLoader {
    height_range: f32,
}

impl Default for HeightmapLoader {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT_RANGE)
    }
}

impl HeightmapLoader {
    /// Create a loader spreading intensities over `height_range` world units.
    pub fn new(height_range: f32) -> Self {
        Self { height_range }
    }

    pub fn height_range(&self) -> f32 {
        self.height_range
    }

    /// Decode a heightmap file and convert it into a terrain.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<HeightGrid, TerrainError> {
        let path = path.as_ref();
        info!("Loading heightmap {}", path.display());

        let image = image::open(path)?;
        self.terrain_from_image(&image.to_rgb8())
    }

    /// Convert an already decoded image into a terrain.
    ///
    /// Pixel `(x, y)` becomes cell `(x, z = y)`. Normals are computed before
    /// returning so the first reader does not pay for the rebuild.
    pub fn terrain_from_image<I>(&self, image: &I) -> Result<HeightGrid, TerrainError>
    where
        I: GenericImageView,
        I::Pixel: Pixel<Subpixel = u8>,
    {
        let (width, length) = image.dimensions();
        let mut grid = HeightGrid::new(width as usize, length as usize)?;

        for (x, z, pixel) in image.pixels() {
            let height = height_for_intensity(pixel.channels()[0], self.height_range);
            grid.set_height(x as usize, z as usize, height)?;
        }

        grid.compute_normals();

        let (min_height, max_height) = grid.min_max_height();
        info!(
            "Loaded {}x{} terrain, heights {:.2} to {:.2}",
            width, length, min_height, max_height
        );

        Ok(grid)
    }
}
