/// Floating pickups scattered over the terrain
use constants::gameplay::{
    COLLECTIBLE_HOVER, COLLECTIBLE_SPAWN_MIN, COLLECTIBLE_SPAWN_SPAN, PICKUP_HALF_EXTENT,
};
use glam::Vec3;
use rand::Rng;
use serde::Serialize;
use terrain::HeightGrid;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Collectible {
    pub position: Vec3,
    pub active: bool,
}

impl Collectible {
    /// Whether `(x, z)` lies strictly inside the square pickup area.
    pub fn covers(&self, x: f32, z: f32) -> bool {
        self.position.x - PICKUP_HALF_EXTENT < x
            && x < self.position.x + PICKUP_HALF_EXTENT
            && self.position.z - PICKUP_HALF_EXTENT < z
            && z < self.position.z + PICKUP_HALF_EXTENT
    }
}

/// Scatter a fresh wave of active collectibles hovering over the surface.
/// The spawn window is trimmed to the terrain footprint.
pub fn spawn_wave<R: Rng>(terrain: &HeightGrid, rng: &mut R, count: usize) -> Vec<Collectible> {
    let (x_min, x_max) = spawn_window(terrain.width());
    let (z_min, z_max) = spawn_window(terrain.length());

    (0..count)
        .map(|_| {
            let x = rng.random_range(x_min..=x_max);
            let z = rng.random_range(z_min..=z_max);
            Collectible {
                position: Vec3::new(x, terrain.height_at(x, z) + COLLECTIBLE_HOVER, z),
                active: true,
            }
        })
        .collect()
}

fn spawn_window(size: usize) -> (f32, f32) {
    let edge = (size - 1) as f32;
    let min = COLLECTIBLE_SPAWN_MIN.min(edge);
    let max = (COLLECTIBLE_SPAWN_MIN + COLLECTIBLE_SPAWN_SPAN).min(edge);
    (min, max)
}
