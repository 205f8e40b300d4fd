/// Fixed-step session driver feeding scripted input into the world
use crate::camera::{CameraMode, CameraView};
use crate::config::{ConfigError, SessionConfig};
use crate::vehicle::{InputState, Vehicle};
use crate::world::{KeyEvent, World};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use terrain::{HeightGrid, HeightmapLoader, TerrainError};
use tracing::{info, warn};

/// Hold `input` for `ticks` updates, optionally pressing `key` first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    pub ticks: u32,
    #[serde(default)]
    pub input: InputState,
    #[serde(default)]
    pub key: Option<char>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputScript {
    pub frames: Vec<InputFrame>,
}

impl InputScript {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Short lap exercising throttle, steering, leaning and every camera.
    pub fn demo() -> Self {
        let drive = |ticks, throttle, steer, roll, key| InputFrame {
            ticks,
            input: InputState {
                throttle,
                steer,
                roll,
            },
            key,
        };

        Self {
            frames: vec![
                drive(200, 1.0, 0.0, 0.0, None),
                drive(40, 1.0, 1.0, 0.0, Some('2')),
                drive(200, 1.0, 0.0, -1.0, None),
                drive(60, 1.0, -1.0, 0.0, Some('l')),
                drive(200, 1.0, 0.0, 1.0, Some('3')),
                drive(120, -1.0, 0.0, 0.0, Some('1')),
            ],
        }
    }

    pub fn total_ticks(&self) -> u64 {
        self.frames.iter().map(|f| f.ticks as u64).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    TimeUp,
    Quit,
    ScriptEnded,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub outcome: Outcome,
    pub ticks: u64,
    pub elapsed_secs: f32,
    pub score: u32,
    pub collected: u32,
    pub time_left: i32,
    pub light_on: bool,
    pub camera: CameraMode,
    pub camera_view: CameraView,
    pub vehicle: Vehicle,
}

/// A terrain plus the world riding on it.
pub struct Session {
    terrain: HeightGrid,
    world: World,
    tick_secs: f32,
}

impl Session {
    /// Load the configured heightmap and set up a fresh world on it.
    pub fn from_config(config: &SessionConfig) -> Result<Self, TerrainError> {
        let terrain = HeightmapLoader::new(config.height_range).load(&config.heightmap)?;
        Ok(Self::new(terrain, config))
    }

    pub fn new(terrain: HeightGrid, config: &SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let world = World::new(
            &terrain,
            config.starting_time,
            config.collectible_count,
            rng,
        );

        Self {
            terrain,
            world,
            tick_secs: config.tick_secs,
        }
    }

    pub fn terrain(&self) -> &HeightGrid {
        &self.terrain
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// One scheduler step: keys, vehicle update, then the game clock.
    pub fn step(&mut self, input: InputState, key: Option<KeyEvent>) {
        if let Some(event) = key {
            self.world.handle_key(event);
        }
        self.world.tick(&self.terrain, input);
        self.world.advance_clock(&self.terrain, self.tick_secs);
    }

    /// Play `script` until it ends, the clock runs out, or quit is pressed.
    pub fn run(&mut self, script: &InputScript) -> RunSummary {
        let total = script.total_ticks();
        info!(
            "Running {} scripted ticks ({} frames) at {:.3}s per tick",
            total,
            script.frames.len(),
            self.tick_secs
        );

        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.cyan/blue}] {pos}/{len} ticks ({percent}%) {msg}")
                .unwrap()
                .progress_chars("▉▊▋▌▍▎▏ "),
        );
        pb.set_message("Riding");

        let mut ticks = 0u64;
        let mut outcome = Outcome::ScriptEnded;

        'frames: for frame in &script.frames {
            let mut key = frame.key.and_then(|c| {
                let event = KeyEvent::from_key(c);
                if event.is_none() {
                    warn!("Ignoring unbound key {:?}", c);
                }
                event
            });

            for _ in 0..frame.ticks {
                if self.world.is_time_up() {
                    outcome = Outcome::TimeUp;
                    break 'frames;
                }

                self.step(frame.input, key.take());
                ticks += 1;
                pb.inc(1);

                if self.world.quit_requested() {
                    outcome = Outcome::Quit;
                    break 'frames;
                }
            }
        }

        if outcome == Outcome::ScriptEnded && self.world.is_time_up() {
            outcome = Outcome::TimeUp;
        }

        pb.finish_with_message("Ride finished");
        info!(
            "Session ended ({:?}) after {} ticks: score {}, {} collected, {}s left",
            outcome, ticks, self.world.score, self.world.collected, self.world.time_left
        );

        RunSummary {
            outcome,
            ticks,
            elapsed_secs: self.world.elapsed(),
            score: self.world.score,
            collected: self.world.collected,
            time_left: self.world.time_left,
            light_on: self.world.light_on,
            camera: self.world.camera,
            camera_view: self.world.camera_view(),
            vehicle: self.world.vehicle,
        }
    }
}
