use bevy::prelude::*;

use crate::engine::assets::creature_catalog::CREATURE_CATALOG;
use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::core::error::{SceneError, SceneFailure};
use crate::engine::creatures::assembler::spawn_creatures;
use crate::engine::scene::props::spawn_props;
use crate::engine::scene::terrain::spawn_terrain;
use crate::tools::help_overlay::spawn_help_overlay;

/// Entities mounted by one pass of the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountSummary {
    pub props: usize,
    pub creatures: usize,
}

/// Build the whole scene in one go. Any error aborts the mount; the caller
/// routes it to the fallback screen and the partial scene is swept on exit.
pub fn compose_scene(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    config: &SceneConfig,
) -> Result<MountSummary, SceneError> {
    spawn_terrain(commands, meshes, materials, &config.terrain)?;
    let props = spawn_props(commands, meshes, materials, config);
    let creatures = spawn_creatures(commands, meshes, materials, CREATURE_CATALOG)?.len();
    spawn_help_overlay(commands);

    Ok(MountSummary { props, creatures })
}

pub fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut failure: ResMut<SceneFailure>,
    config: Res<SceneConfig>,
) {
    match compose_scene(&mut commands, &mut meshes, &mut materials, &config) {
        Ok(summary) => info!(
            "Mounted scene: terrain, {} props, {} creatures",
            summary.props, summary.creatures
        ),
        Err(err) => failure.report(&err),
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;

    use super::*;
    use crate::engine::core::app_state::SceneEntity;
    use crate::engine::creatures::assembler::CreatureRoot;
    use crate::engine::scene::terrain::Terrain;

    fn scene_world(config: SceneConfig) -> World {
        let mut world = World::new();
        world.init_resource::<Assets<Mesh>>();
        world.init_resource::<Assets<StandardMaterial>>();
        world.init_resource::<SceneFailure>();
        world.insert_resource(config);
        world
    }

    #[test]
    fn default_config_mounts_everything() {
        let config = SceneConfig {
            prop_seed: Some(11),
            ..SceneConfig::default()
        };
        let scattered: usize = config
            .trees
            .iter()
            .chain(&config.rocks)
            .map(|c| c.count as usize)
            .sum();
        let expected_props = scattered + config.hills.len();
        let mut world = scene_world(config);

        world.run_system_once(spawn_scene).expect("scene mounts");

        assert!(world.resource::<SceneFailure>().message().is_none());
        assert_eq!(world.query::<&Terrain>().iter(&world).count(), 1);
        assert_eq!(world.query::<&CreatureRoot>().iter(&world).count(), 5);

        // terrain + props + creatures + help overlay
        let roots = world.query_filtered::<(), With<SceneEntity>>().iter(&world).count();
        assert_eq!(roots, 1 + expected_props + 5 + 1);
    }
}
