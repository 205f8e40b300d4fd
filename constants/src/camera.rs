/// Camera rig offsets for the three selectable views

/// Chase view: eye sits this many look-lengths behind the vehicle
pub const CHASE_DISTANCE: f32 = 3.0;
pub const CHASE_HEIGHT: f32 = 2.0;

/// Side view: fixed offset along -x, raised
pub const SIDE_OFFSET_X: f32 = 5.0;
pub const SIDE_HEIGHT: f32 = 5.0;

/// Overhead view: high orbit looking down at the vehicle
pub const OVERHEAD_DISTANCE: f32 = 10.0;
pub const OVERHEAD_HEIGHT: f32 = 50.0;
