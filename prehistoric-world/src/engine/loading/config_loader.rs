use bevy::asset::AssetLoadFailedEvent;
use bevy::prelude::*;

use crate::engine::assets::creature_catalog::{CREATURE_CATALOG, validate_catalog};
use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::core::error::{SceneError, SceneFailure};
use crate::engine::loading::progress::LoadingProgress;

pub const SCENE_CONFIG_PATH: &str = "scene_config.json";

#[derive(Resource, Default)]
pub struct ConfigLoader {
    handle: Option<Handle<SceneConfig>>,
    /// Set once the asset server reports the current load as finished.
    arrived: bool,
}

// Start the loading process. Runs on every entry into the loading gate, and
// later passes make the asset server read the file again.
pub fn start_loading(
    mut config_loader: ResMut<ConfigLoader>,
    mut loading_progress: ResMut<LoadingProgress>,
    asset_server: Res<AssetServer>,
) {
    loading_progress.reset();
    config_loader.arrived = false;

    let previous_failed = config_loader
        .handle
        .as_ref()
        .map(|handle| asset_server.load_state(handle.id()).is_failed());

    match previous_failed {
        // A failed path is retried by loading it again
        None | Some(true) => {
            config_loader.handle = Some(asset_server.load(SCENE_CONFIG_PATH));
            info!("Loading scene configuration from: {}", SCENE_CONFIG_PATH);
        }
        Some(false) => {
            asset_server.reload(SCENE_CONFIG_PATH);
            info!("Reloading scene configuration from: {}", SCENE_CONFIG_PATH);
        }
    }
    loading_progress.config_requested = true;
}

/// Wait for the configuration asset, validate it and publish it as a resource.
pub fn load_scene_config_system(
    mut loading_progress: ResMut<LoadingProgress>,
    mut failure: ResMut<SceneFailure>,
    mut commands: Commands,
    mut config_loader: ResMut<ConfigLoader>,
    mut asset_events: EventReader<AssetEvent<SceneConfig>>,
    mut failed_events: EventReader<AssetLoadFailedEvent<SceneConfig>>,
    configs: Res<Assets<SceneConfig>>,
) {
    let Some(id) = config_loader.handle.as_ref().map(Handle::id) else {
        return;
    };

    for event in failed_events.read() {
        if event.id == id {
            failure.report(&SceneError::ConfigLoad {
                path: event.path.to_string(),
                reason: event.error.to_string(),
            });
        }
    }
    let arrivals = asset_events
        .read()
        .filter(|event| event.is_loaded_with_dependencies(id) || event.is_modified(id))
        .count();
    if arrivals > 0 {
        config_loader.arrived = true;
    }

    if !config_loader.arrived || loading_progress.config_validated || failure.message().is_some() {
        return;
    }
    let Some(config) = configs.get(id) else {
        return;
    };
    loading_progress.config_loaded = true;

    match config.validate() {
        Ok(()) => {
            info!("✓ Scene configuration loaded successfully");
            commands.insert_resource(config.clone());
            loading_progress.config_validated = true;
        }
        Err(err) => failure.report(&err),
    }
}

/// Check the static catalog once per loading pass.
pub fn validate_catalog_system(
    mut loading_progress: ResMut<LoadingProgress>,
    mut failure: ResMut<SceneFailure>,
) {
    if loading_progress.catalog_validated || failure.message().is_some() {
        return;
    }

    match validate_catalog(CREATURE_CATALOG) {
        Ok(()) => loading_progress.catalog_validated = true,
        Err(err) => failure.report(&err),
    }
}
