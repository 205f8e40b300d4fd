pub mod camera;
pub mod gameplay;
pub mod terrain;
