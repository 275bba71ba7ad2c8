use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::render_settings::{
    ORBIT_PAN_SPEED, ORBIT_ROTATE_SPEED, ORBIT_SMOOTHING, ORBIT_ZOOM_STEP,
};

use crate::engine::assets::scene_config::{CameraConfig, SceneConfig};
use crate::tools::interaction::CameraInputGate;

/// Orbit state around a focus point. Angles are spherical: `azimuth` around
/// +Y measured from +Z, `polar` down from +Y.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub focus_point: Vec3,
    pub distance: f32,
    pub azimuth: f32,
    pub polar: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar: f32,
    pub max_polar: f32,
}

pub fn orbit_translation(focus: Vec3, distance: f32, azimuth: f32, polar: f32) -> Vec3 {
    focus
        + distance
            * Vec3::new(
                polar.sin() * azimuth.sin(),
                polar.cos(),
                polar.sin() * azimuth.cos(),
            )
}

impl OrbitCamera {
    pub fn from_config(config: &CameraConfig) -> Self {
        let focus_point = Vec3::from(config.target);
        let offset = Vec3::from(config.position) - focus_point;
        let distance = offset.length().max(f32::EPSILON);

        let mut camera = Self {
            focus_point,
            distance,
            azimuth: offset.x.atan2(offset.z),
            polar: (offset.y / distance).clamp(-1.0, 1.0).acos(),
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            min_polar: config.min_polar,
            max_polar: config.max_polar,
        };
        camera.clamp();
        camera
    }

    fn clamp(&mut self) {
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
        self.polar = self.polar.clamp(self.min_polar, self.max_polar);
    }

    pub fn translation(&self) -> Vec3 {
        orbit_translation(self.focus_point, self.distance, self.azimuth, self.polar)
    }

    pub fn target_transform(&self) -> Transform {
        Transform::from_translation(self.translation()).looking_at(self.focus_point, Vec3::Y)
    }

    /// Rotate by a mouse drag in pixels.
    pub fn orbit(&mut self, delta: Vec2) {
        self.azimuth -= delta.x * ORBIT_ROTATE_SPEED;
        self.polar -= delta.y * ORBIT_ROTATE_SPEED;
        self.clamp();
    }

    /// Move the focus point in the view plane, scaled by distance.
    pub fn pan(&mut self, delta: Vec2) {
        let view = self.target_transform();
        let scale = self.distance * ORBIT_PAN_SPEED;
        self.focus_point += (view.left() * delta.x + view.up() * delta.y) * scale;
    }

    /// Positive steps move closer.
    pub fn zoom(&mut self, steps: f32) {
        self.distance *= ORBIT_ZOOM_STEP.powf(steps);
        self.clamp();
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

/// Snap the orbit state and the camera to the configured start view.
pub fn reset_orbit_camera(
    mut commands: Commands,
    config: Res<SceneConfig>,
    mut camera_query: Query<(&mut Transform, &mut Projection), With<Camera3d>>,
) {
    let orbit = OrbitCamera::from_config(&config.camera);
    if let Ok((mut transform, mut projection)) = camera_query.single_mut() {
        *transform = orbit.target_transform();
        *projection = Projection::Perspective(PerspectiveProjection {
            fov: config.camera.fov_degrees.to_radians(),
            ..default()
        });
    }
    commands.insert_resource(orbit);
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    camera_gate: Res<CameraInputGate>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    // Drags that began on a creature or a panel belong to the pointer, not the camera
    if !camera_gate.captured && !camera_gate.over_ui && mouse_delta != Vec2::ZERO {
        if mouse_button.pressed(MouseButton::Left) {
            orbit.orbit(mouse_delta);
        } else if mouse_button.pressed(MouseButton::Right) {
            orbit.pan(mouse_delta);
        }
    }

    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }
    if !camera_gate.over_ui && scroll_accum.abs() > f32::EPSILON {
        orbit.zoom(scroll_accum);
    }

    let target = orbit.target_transform();
    let lerp_speed = (ORBIT_SMOOTHING * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform
        .translation
        .lerp(target.translation, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target.rotation, lerp_speed);
}
