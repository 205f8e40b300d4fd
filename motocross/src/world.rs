/// Explicit game state advanced by the driver loop
use crate::camera::{CameraMode, CameraView};
use crate::collectible::{Collectible, spawn_wave};
use crate::vehicle::{InputState, Vehicle};
use constants::gameplay::{
    CLOCK_FIRST_TICK_SECS, CLOCK_INTERVAL_SECS, PICKUP_SCORE, PICKUP_TIME_BONUS,
    SPAWN_FIRST_SECS, SPAWN_INTERVAL_SECS, VEHICLE_START,
};
use rand::rngs::StdRng;
use terrain::HeightGrid;
use tracing::{debug, info};

/// Discrete, edge-triggered key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    SelectCamera(CameraMode),
    ToggleLight,
    Quit,
}

impl KeyEvent {
    /// Keyboard binding: `1`-`3` pick a camera, `l` toggles the headlight, Esc quits.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '1' => Some(KeyEvent::SelectCamera(CameraMode::Chase)),
            '2' => Some(KeyEvent::SelectCamera(CameraMode::Side)),
            '3' => Some(KeyEvent::SelectCamera(CameraMode::Overhead)),
            'l' => Some(KeyEvent::ToggleLight),
            '\u{1b}' => Some(KeyEvent::Quit),
            _ => None,
        }
    }
}

/// Wall-clock schedule for the countdown and collectible waves.
#[derive(Debug, Clone)]
struct GameClock {
    elapsed: f32,
    next_countdown: f32,
    next_spawn: f32,
}

impl GameClock {
    fn new() -> Self {
        Self {
            elapsed: 0.0,
            next_countdown: CLOCK_FIRST_TICK_SECS,
            next_spawn: SPAWN_FIRST_SECS,
        }
    }
}

/// Everything a session mutates between frames.
pub struct World {
    pub vehicle: Vehicle,
    pub camera: CameraMode,
    pub collectibles: Vec<Collectible>,
    pub score: u32,
    pub collected: u32,
    pub time_left: i32,
    pub light_on: bool,
    quit_requested: bool,
    clock: GameClock,
    collectible_count: usize,
    rng: StdRng,
}

impl World {
    /// Place the vehicle at its start position on `terrain`.
    pub fn new(terrain: &HeightGrid, starting_time: i32, collectible_count: usize, rng: StdRng) -> Self {
        let mut vehicle = Vehicle::new(VEHICLE_START.0, VEHICLE_START.1);
        vehicle.place_on(terrain);

        Self {
            vehicle,
            camera: CameraMode::default(),
            collectibles: Vec::new(),
            score: 0,
            collected: 0,
            time_left: starting_time,
            light_on: false,
            quit_requested: false,
            clock: GameClock::new(),
            collectible_count,
            rng,
        }
    }

    pub fn handle_key(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::SelectCamera(mode) => {
                debug!("Camera -> {:?}", mode);
                self.camera = mode;
            }
            KeyEvent::ToggleLight => {
                self.light_on = !self.light_on;
                debug!("Headlight {}", if self.light_on { "on" } else { "off" });
            }
            KeyEvent::Quit => self.quit_requested = true,
        }
    }

    /// Advance the vehicle one step under `input` and resolve pickups.
    pub fn tick(&mut self, terrain: &HeightGrid, input: InputState) {
        let input = input.clamped();

        self.vehicle.steer(input.steer);
        self.vehicle.drive(input.throttle);
        self.vehicle.settle(terrain);
        self.vehicle.lean(input.roll);

        let vehicle = &self.vehicle;
        debug!(
            "x:{:.3} y:{:.3} z:{:.3} rot:{:.3} pitch:{:.3} roll:{:.3}",
            vehicle.position.x,
            vehicle.position.y,
            vehicle.position.z,
            vehicle.angle,
            vehicle.pitch,
            vehicle.roll
        );

        self.collect_pickups();
    }

    /// Advance the game clock by `dt` seconds, running any countdown steps
    /// and collectible waves that fall due.
    pub fn advance_clock(&mut self, terrain: &HeightGrid, dt: f32) {
        self.clock.elapsed += dt;

        while self.clock.elapsed >= self.clock.next_countdown {
            self.time_left -= 1;
            self.clock.next_countdown += CLOCK_INTERVAL_SECS;
        }

        while self.clock.elapsed >= self.clock.next_spawn {
            self.collectibles = spawn_wave(terrain, &mut self.rng, self.collectible_count);
            self.clock.next_spawn += SPAWN_INTERVAL_SECS;
            info!(
                "Spawned {} collectibles at t={:.1}s",
                self.collectibles.len(),
                self.clock.elapsed
            );
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed
    }

    pub fn is_time_up(&self) -> bool {
        self.time_left <= 0
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn camera_view(&self) -> CameraView {
        self.camera.view(&self.vehicle)
    }

    pub fn active_collectibles(&self) -> impl Iterator<Item = &Collectible> {
        self.collectibles.iter().filter(|c| c.active)
    }

    fn collect_pickups(&mut self) {
        let (x, z) = (self.vehicle.position.x, self.vehicle.position.z);

        for item in self.collectibles.iter_mut() {
            if item.active && item.covers(x, z) {
                item.active = false;
                self.score += PICKUP_SCORE;
                self.time_left += PICKUP_TIME_BONUS;
                self.collected += 1;
                info!(
                    "Collected pickup at ({:.1}, {:.1}): score {} time left {}",
                    item.position.x, item.position.z, self.score, self.time_left
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use rand::SeedableRng;

    fn flat_world(size: usize) -> (HeightGrid, World) {
        let terrain = HeightGrid::new(size, size).unwrap();
        let world = World::new(&terrain, 20, 10, StdRng::seed_from_u64(1));
        (terrain, world)
    }

    #[test]
    fn starts_at_spawn_point_on_surface() {
        let mut terrain = HeightGrid::new(100, 100).unwrap();
        for z in 0..100 {
            for x in 0..100 {
                terrain.set_height(x, z, 2.0).unwrap();
            }
        }
        let world = World::new(&terrain, 20, 10, StdRng::seed_from_u64(1));
        assert_eq!(world.vehicle.position, Vec3::new(50.0, 2.5, 50.0));
        assert_eq!(world.vehicle.pitch, 0.0);
        assert_eq!(world.camera, CameraMode::Chase);
        assert!(world.collectibles.is_empty());
    }

    #[test]
    fn key_bindings() {
        assert_eq!(
            KeyEvent::from_key('3'),
            Some(KeyEvent::SelectCamera(CameraMode::Overhead))
        );
        assert_eq!(KeyEvent::from_key('l'), Some(KeyEvent::ToggleLight));
        assert_eq!(KeyEvent::from_key('\u{1b}'), Some(KeyEvent::Quit));
        assert_eq!(KeyEvent::from_key('x'), None);
    }

    #[test]
    fn keys_toggle_state() {
        let (_, mut world) = flat_world(64);
        world.handle_key(KeyEvent::SelectCamera(CameraMode::Side));
        world.handle_key(KeyEvent::ToggleLight);
        assert_eq!(world.camera, CameraMode::Side);
        assert!(world.light_on);

        world.handle_key(KeyEvent::ToggleLight);
        assert!(!world.light_on);
        assert!(!world.quit_requested());
        world.handle_key(KeyEvent::Quit);
        assert!(world.quit_requested());
    }

    #[test]
    fn countdown_starts_after_two_seconds() {
        let (terrain, mut world) = flat_world(64);
        world.advance_clock(&terrain, 1.5);
        assert_eq!(world.time_left, 20);
        world.advance_clock(&terrain, 0.5);
        assert_eq!(world.time_left, 19);
        world.advance_clock(&terrain, 3.0);
        assert_eq!(world.time_left, 16);
    }

    #[test]
    fn waves_spawn_at_five_then_every_ten_seconds() {
        let (terrain, mut world) = flat_world(64);
        world.advance_clock(&terrain, 4.5);
        assert!(world.collectibles.is_empty());

        world.advance_clock(&terrain, 0.75);
        assert_eq!(world.active_collectibles().count(), 10);

        world.collectibles[0].active = false;
        world.advance_clock(&terrain, 9.0);
        assert_eq!(world.active_collectibles().count(), 9);
        world.advance_clock(&terrain, 1.0);
        assert_eq!(world.active_collectibles().count(), 10);
    }

    #[test]
    fn driving_through_a_pickup_scores_once() {
        let (terrain, mut world) = flat_world(100);
        world.collectibles = vec![Collectible {
            position: Vec3::new(51.0, 2.0, 50.0),
            active: true,
        }];

        let forward = InputState {
            throttle: 1.0,
            ..Default::default()
        };
        world.tick(&terrain, forward);
        assert_eq!(world.score, 10);
        assert_eq!(world.time_left, 25);
        assert_eq!(world.collected, 1);

        world.tick(&terrain, forward);
        assert_eq!(world.score, 10);
        assert_eq!(world.active_collectibles().count(), 0);
    }

    #[test]
    fn time_up_when_clock_runs_out() {
        let terrain = HeightGrid::new(32, 32).unwrap();
        let mut world = World::new(&terrain, 2, 0, StdRng::seed_from_u64(5));
        world.advance_clock(&terrain, 2.5);
        assert!(!world.is_time_up());
        world.advance_clock(&terrain, 0.5);
        assert!(world.is_time_up());
    }

    #[test]
    fn camera_view_follows_mode() {
        let (_, mut world) = flat_world(100);
        let chase = world.camera_view();
        world.handle_key(KeyEvent::SelectCamera(CameraMode::Overhead));
        let overhead = world.camera_view();
        assert!(overhead.eye.y > chase.eye.y);
    }
}
