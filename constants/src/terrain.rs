/// Shared configuration for heightmap terrain processing

/// Weight applied to each axis neighbour's raw normal during smoothing
pub const NORMAL_FALLOUT_RATIO: f32 = 0.5;

/// Default vertical span of a loaded heightmap (heights land in -15..15)
pub const DEFAULT_HEIGHT_RANGE: f32 = 30.0;

/// Largest 8-bit intensity a heightmap pixel can carry
pub const MAX_INTENSITY: f32 = 255.0;

/// Default heightmap file looked up next to the working directory
pub const DEFAULT_HEIGHTMAP_PATH: &str = "heightmap.bmp";

/// Unit up vector, used as the floor for degenerate smoothed normals
pub const UP: [f32; 3] = [0.0, 1.0, 0.0];
