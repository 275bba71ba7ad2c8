use bevy::prelude::*;
use constants::animation::{
    BOB_AMPLITUDE, BOB_FREQUENCY, BREATHING_AMPLITUDE, BREATHING_FREQUENCY,
};

/// Breathing oscillation on the body group's Y scale.
#[derive(Component, Debug, Clone, Copy)]
pub struct Breathing {
    pub base_scale_y: f32,
}

/// Vertical bob of the fixed body root.
#[derive(Component, Debug, Clone, Copy)]
pub struct Bob {
    pub base_y: f32,
}

pub fn breathing_scale_y(elapsed: f32, base_scale_y: f32) -> f32 {
    base_scale_y * (1.0 + (elapsed * BREATHING_FREQUENCY).sin() * BREATHING_AMPLITUDE)
}

pub fn bob_height(elapsed: f32, base_y: f32) -> f32 {
    base_y + (elapsed * BOB_FREQUENCY).sin() * BOB_AMPLITUDE
}

// Both systems recompute from the base value every frame
pub fn breathe_creatures(time: Res<Time>, mut bodies: Query<(&Breathing, &mut Transform)>) {
    let elapsed = time.elapsed_secs();
    for (breathing, mut transform) in &mut bodies {
        transform.scale.y = breathing_scale_y(elapsed, breathing.base_scale_y);
    }
}

pub fn bob_creatures(time: Res<Time>, mut roots: Query<(&Bob, &mut Transform)>) {
    let elapsed = time.elapsed_secs();
    for (bob, mut transform) in &mut roots {
        transform.translation.y = bob_height(elapsed, bob.base_y);
    }
}
