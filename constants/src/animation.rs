/// Angular frequency of the breathing scale oscillation (rad/s)
pub const BREATHING_FREQUENCY: f32 = 1.5;

/// Relative amplitude of the breathing oscillation on the body's Y scale
pub const BREATHING_AMPLITUDE: f32 = 0.01;

/// Angular frequency of the vertical bob (rad/s)
pub const BOB_FREQUENCY: f32 = 0.5;

/// Bob displacement in world units
pub const BOB_AMPLITUDE: f32 = 0.05;
