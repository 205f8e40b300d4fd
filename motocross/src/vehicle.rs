/// Physics-free vehicle that rides the terrain surface
use constants::gameplay::{
    PITCH_TRIGGER_DELTA, VEHICLE_RIDE_HEIGHT, VEHICLE_ROLL_RATE, VEHICLE_SPEED,
    VEHICLE_TURN_RATE,
};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use terrain::HeightGrid;

/// Held controls for one tick. Each axis is expected in `[-1, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputState {
    /// Forward (+1) or reverse (-1).
    pub throttle: f32,
    /// Left (+1) or right (-1).
    pub steer: f32,
    pub roll: f32,
}

impl InputState {
    pub fn clamped(self) -> Self {
        Self {
            throttle: self.throttle.clamp(-1.0, 1.0),
            steer: self.steer.clamp(-1.0, 1.0),
            roll: self.roll.clamp(-1.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vehicle {
    pub position: Vec3,
    /// Committed heading in radians.
    pub angle: f32,
    /// Heading change accumulated while steering is held.
    pub delta_angle: f32,
    /// Unit travel direction on the ground plane (y = 0).
    pub look: Vec3,
    pub pitch: f32,
    pub roll: f32,
}

impl Vehicle {
    pub fn new(x: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, 0.0, z),
            angle: 0.0,
            delta_angle: 0.0,
            look: look_direction(0.0),
            pitch: 0.0,
            roll: 0.0,
        }
    }

    pub fn heading(&self) -> f32 {
        self.angle + self.delta_angle
    }

    /// Turn while steering is held; letting go commits the turn.
    pub fn steer(&mut self, steer: f32) {
        if steer != 0.0 {
            self.delta_angle += steer * VEHICLE_TURN_RATE;
            self.look = look_direction(self.heading());
        } else if self.delta_angle != 0.0 {
            self.angle += self.delta_angle;
            self.delta_angle = 0.0;
        }
    }

    pub fn drive(&mut self, throttle: f32) {
        if throttle != 0.0 {
            self.position.x += throttle * self.look.x * VEHICLE_SPEED;
            self.position.z += throttle * self.look.z * VEHICLE_SPEED;
        }
    }

    pub fn lean(&mut self, roll: f32) {
        if roll != 0.0 {
            self.roll += roll * VEHICLE_ROLL_RATE;
        }
    }

    /// Ride the surface, keeping the vehicle on the terrain footprint.
    ///
    /// Pitch only changes when the ride height moved by more than
    /// [`PITCH_TRIGGER_DELTA`] since the previous tick; it takes the angle
    /// between the local surface normal and straight up, signed by whether
    /// the vehicle climbed or descended.
    pub fn settle(&mut self, terrain: &HeightGrid) {
        let previous_y = self.position.y;
        self.place_on(terrain);

        let normal = terrain.nearest_normal(self.position.x, self.position.z);
        let tilt = (normal.y / normal.length()).clamp(-1.0, 1.0).acos();

        if previous_y < self.position.y - PITCH_TRIGGER_DELTA {
            self.pitch = tilt;
        } else if previous_y > self.position.y + PITCH_TRIGGER_DELTA {
            self.pitch = -tilt;
        }
    }

    /// Drop onto the surface without touching pitch.
    pub fn place_on(&mut self, terrain: &HeightGrid) {
        let max_x = (terrain.width() - 1) as f32;
        let max_z = (terrain.length() - 1) as f32;
        self.position.x = self.position.x.clamp(0.0, max_x);
        self.position.z = self.position.z.clamp(0.0, max_z);
        self.position.y =
            terrain.height_at(self.position.x, self.position.z) + VEHICLE_RIDE_HEIGHT;
    }
}

/// Ground-plane direction for a heading; heading 0 faces +x, positive turns toward -z.
fn look_direction(heading: f32) -> Vec3 {
    Vec3::new(heading.cos(), 0.0, -heading.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn slope(width: usize, length: usize, rise_per_cell: f32) -> HeightGrid {
        let mut grid = HeightGrid::new(width, length).unwrap();
        for z in 0..length {
            for x in 0..width {
                grid.set_height(x, z, x as f32 * rise_per_cell).unwrap();
            }
        }
        grid
    }

    #[test]
    fn drives_along_heading() {
        let mut vehicle = Vehicle::new(5.0, 5.0);
        vehicle.drive(1.0);
        assert!((vehicle.position.x - 5.5).abs() < EPS);
        assert!((vehicle.position.z - 5.0).abs() < EPS);

        vehicle.drive(-1.0);
        vehicle.drive(-1.0);
        assert!((vehicle.position.x - 4.5).abs() < EPS);
    }

    #[test]
    fn steering_accumulates_then_commits_on_release() {
        let mut vehicle = Vehicle::new(0.0, 0.0);
        for _ in 0..10 {
            vehicle.steer(1.0);
        }
        assert!((vehicle.delta_angle - 0.5).abs() < EPS);
        assert_eq!(vehicle.angle, 0.0);
        assert!((vehicle.look.x - 0.5f32.cos()).abs() < EPS);
        assert!((vehicle.look.z + 0.5f32.sin()).abs() < EPS);

        vehicle.steer(0.0);
        assert!((vehicle.angle - 0.5).abs() < EPS);
        assert_eq!(vehicle.delta_angle, 0.0);
        assert!((vehicle.heading() - 0.5).abs() < EPS);
    }

    #[test]
    fn quarter_turn_left_heads_toward_negative_z() {
        let mut vehicle = Vehicle::new(10.0, 10.0);
        let ticks = (std::f32::consts::FRAC_PI_2 / VEHICLE_TURN_RATE).round() as usize;
        for _ in 0..ticks {
            vehicle.steer(1.0);
        }
        vehicle.drive(1.0);
        assert!(vehicle.position.z < 10.0);
        assert!((vehicle.position.x - 10.0).abs() < 0.05);
    }

    #[test]
    fn leaning_accumulates_roll() {
        let mut vehicle = Vehicle::new(0.0, 0.0);
        vehicle.lean(-1.0);
        vehicle.lean(-1.0);
        assert!((vehicle.roll + 0.02).abs() < EPS);
    }

    #[test]
    fn rides_interpolated_surface() {
        let terrain = slope(8, 8, 1.0);
        let mut vehicle = Vehicle::new(2.5, 3.0);
        vehicle.settle(&terrain);
        assert!((vehicle.position.y - (2.5 + VEHICLE_RIDE_HEIGHT)).abs() < EPS);
    }

    #[test]
    fn climbing_pitches_up_and_descending_pitches_down() {
        let terrain = slope(10, 10, 1.0);
        let mut vehicle = Vehicle::new(2.0, 4.0);
        vehicle.place_on(&terrain);

        vehicle.drive(1.0);
        vehicle.settle(&terrain);
        // A 45 degree slope
        assert!((vehicle.pitch - std::f32::consts::FRAC_PI_4).abs() < 1e-3);

        vehicle.drive(-1.0);
        vehicle.settle(&terrain);
        assert!((vehicle.pitch + std::f32::consts::FRAC_PI_4).abs() < 1e-3);
    }

    #[test]
    fn small_height_changes_keep_pitch() {
        let terrain = slope(10, 10, 0.1);
        let mut vehicle = Vehicle::new(2.0, 4.0);
        vehicle.place_on(&terrain);
        vehicle.pitch = 0.3;
        vehicle.drive(1.0);
        vehicle.settle(&terrain);
        assert_eq!(vehicle.pitch, 0.3);
    }

    #[test]
    fn stays_on_terrain_footprint() {
        let terrain = slope(4, 6, 0.0);
        let mut vehicle = Vehicle::new(-3.0, 40.0);
        vehicle.settle(&terrain);
        assert_eq!(vehicle.position.x, 0.0);
        assert_eq!(vehicle.position.z, 5.0);
    }

    #[test]
    fn input_is_clamped_to_unit_range() {
        let input = InputState {
            throttle: 3.0,
            steer: -7.0,
            roll: 0.25,
        }
        .clamped();
        assert_eq!(input.throttle, 1.0);
        assert_eq!(input.steer, -1.0);
        assert_eq!(input.roll, 0.25);
    }
}
