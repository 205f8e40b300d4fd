/// Vehicle and scoring tuning for the motocross session

/// Starting vehicle position on the terrain (x, z)
pub const VEHICLE_START: (f32, f32) = (50.0, 50.0);

/// Height the vehicle rides above the sampled surface
pub const VEHICLE_RIDE_HEIGHT: f32 = 0.5;

/// Distance moved per tick at full throttle
pub const VEHICLE_SPEED: f32 = 0.5;

/// Heading change per tick while steering (radians)
pub const VEHICLE_TURN_RATE: f32 = 0.05;

/// Roll change per tick while leaning (radians)
pub const VEHICLE_ROLL_RATE: f32 = 0.01;

/// Vertical change between ticks that re-evaluates pitch from the surface normal
pub const PITCH_TRIGGER_DELTA: f32 = 0.2;

/// Number of collectibles spawned per wave
pub const COLLECTIBLE_COUNT: usize = 10;

/// Collectibles spawn uniformly in [min, min + span) on both x and z
pub const COLLECTIBLE_SPAWN_MIN: f32 = 10.0;
pub const COLLECTIBLE_SPAWN_SPAN: f32 = 180.0;

/// Height collectibles float above the sampled surface
pub const COLLECTIBLE_HOVER: f32 = 2.0;

/// Half-extent of the square pickup area around a collectible
pub const PICKUP_HALF_EXTENT: f32 = 1.0;

pub const PICKUP_SCORE: u32 = 10;
pub const PICKUP_TIME_BONUS: i32 = 5;

/// Seconds on the clock when a session starts
pub const STARTING_TIME: i32 = 20;

/// Game clock: first decrement after 2s, then once per second
pub const CLOCK_FIRST_TICK_SECS: f32 = 2.0;
pub const CLOCK_INTERVAL_SECS: f32 = 1.0;

/// Collectible waves: first after 5s, then every 10s
pub const SPAWN_FIRST_SECS: f32 = 5.0;
pub const SPAWN_INTERVAL_SECS: f32 = 10.0;

/// Fixed update step driven by the external scheduler (seconds)
pub const TICK_SECS: f32 = 0.025;
