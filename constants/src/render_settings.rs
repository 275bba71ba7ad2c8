use bevy::prelude::*;

/// Initial camera placement, looking at the world origin
pub const CAMERA_START_POSITION: Vec3 = Vec3::new(0.0, 5.0, 15.0);
pub const CAMERA_FOV_DEGREES: f32 = 45.0;

/// Orbit clamps: dolly distance and polar angle measured from +Y
pub const ORBIT_MIN_DISTANCE: f32 = 5.0;
pub const ORBIT_MAX_DISTANCE: f32 = 50.0;
pub const ORBIT_MIN_POLAR: f32 = 0.2;
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::FRAC_PI_2 - 0.1;

/// Orbit input sensitivities
pub const ORBIT_ROTATE_SPEED: f32 = 0.005;
pub const ORBIT_PAN_SPEED: f32 = 0.0015;
pub const ORBIT_ZOOM_STEP: f32 = 0.95;
pub const ORBIT_SMOOTHING: f32 = 12.0;

/// Sky colour used for both the clear colour and the distance fog (#87ceeb)
pub const SKY_COLOUR: Color = Color::srgb(0.529, 0.808, 0.922);
pub const FOG_START: f32 = 30.0;
pub const FOG_END: f32 = 100.0;

pub const AMBIENT_BRIGHTNESS: f32 = 500.0;
pub const SUN_POSITION: Vec3 = Vec3::new(10.0, 20.0, 10.0);
pub const SUN_ILLUMINANCE: f32 = 15_000.0;
pub const SHADOW_MAX_DISTANCE: f32 = 50.0;

/// Hover marker drawn above a creature
pub const HOVER_MARKER_RADIUS: f32 = 0.2;
pub const DEFAULT_LABEL_HEIGHT: f32 = 2.0;
