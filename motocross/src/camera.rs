/// Selectable camera rigs following the vehicle
use crate::vehicle::Vehicle;
use constants::camera::{
    CHASE_DISTANCE, CHASE_HEIGHT, OVERHEAD_DISTANCE, OVERHEAD_HEIGHT, SIDE_HEIGHT, SIDE_OFFSET_X,
};
use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraMode {
    /// Behind the vehicle, tilting with the terrain.
    #[default]
    Chase,
    /// Offset to the side at a fixed height.
    Side,
    /// High above, looking down along the heading.
    Overhead,
}

/// Look-at parameters handed to the renderer each frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraView {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Extra rotation about x applied before the look-at (radians).
    pub pitch: f32,
}

impl CameraMode {
    pub fn view(self, vehicle: &Vehicle) -> CameraView {
        let position = vehicle.position;
        let look = vehicle.look;

        match self {
            CameraMode::Chase => {
                let lift = Vec3::Y * CHASE_HEIGHT;
                CameraView {
                    eye: position - look * CHASE_DISTANCE + lift,
                    target: position + look * CHASE_DISTANCE + lift,
                    up: Vec3::Y,
                    // Counter the vehicle pitch so the horizon follows the slope
                    pitch: -vehicle.pitch,
                }
            }
            CameraMode::Side => {
                let eye = position + Vec3::new(-SIDE_OFFSET_X, SIDE_HEIGHT, 0.0);
                CameraView {
                    eye,
                    target: eye + look,
                    up: Vec3::Y,
                    pitch: 0.0,
                }
            }
            CameraMode::Overhead => CameraView {
                eye: position - look * OVERHEAD_DISTANCE + Vec3::Y * OVERHEAD_HEIGHT,
                target: position + look * OVERHEAD_DISTANCE,
                up: Vec3::Y,
                pitch: 0.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle() -> Vehicle {
        let mut vehicle = Vehicle::new(20.0, 30.0);
        vehicle.position.y = 4.0;
        vehicle.pitch = 0.4;
        vehicle
    }

    #[test]
    fn chase_sits_behind_and_counters_pitch() {
        let view = CameraMode::Chase.view(&vehicle());
        assert_eq!(view.eye, Vec3::new(17.0, 6.0, 30.0));
        assert_eq!(view.target, Vec3::new(23.0, 6.0, 30.0));
        assert_eq!(view.pitch, -0.4);
    }

    #[test]
    fn side_view_is_offset_and_level() {
        let view = CameraMode::Side.view(&vehicle());
        assert_eq!(view.eye, Vec3::new(15.0, 9.0, 30.0));
        assert_eq!(view.target, Vec3::new(16.0, 9.0, 30.0));
        assert_eq!(view.pitch, 0.0);
    }

    #[test]
    fn overhead_looks_down_past_the_vehicle() {
        let view = CameraMode::Overhead.view(&vehicle());
        assert_eq!(view.eye, Vec3::new(10.0, 54.0, 30.0));
        assert_eq!(view.target, Vec3::new(30.0, 4.0, 30.0));
        assert!(view.target.y < view.eye.y);
    }

    #[test]
    fn default_mode_is_chase() {
        assert_eq!(CameraMode::default(), CameraMode::Chase);
    }
}
