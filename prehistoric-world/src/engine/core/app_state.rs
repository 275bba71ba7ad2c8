use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
    Failed,
}

#[derive(Component)]
pub struct FpsText;

/// Marks every entity that belongs to the mounted scene so it can be torn
/// down in one sweep when the scene unmounts.
#[derive(Component)]
pub struct SceneEntity;

// Leave the loading gate once the configuration is loaded and validated
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.is_ready() {
        info!("→ Scene configuration ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}

pub fn despawn_scene(mut commands: Commands, scene_entities: Query<Entity, With<SceneEntity>>) {
    let mut count = 0;
    for entity in &scene_entities {
        commands.entity(entity).despawn();
        count += 1;
    }
    info!("Unmounted scene ({count} root entities)");
}
