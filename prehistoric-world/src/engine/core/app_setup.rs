use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::pbr::{CascadeShadowConfigBuilder, DistanceFog, FogFalloff};
use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use bevy_rapier3d::prelude::{NoUserData, RapierPhysicsPlugin};
use constants::render_settings::{
    AMBIENT_BRIGHTNESS, CAMERA_FOV_DEGREES, FOG_END, FOG_START, SHADOW_MAX_DISTANCE, SKY_COLOUR,
    SUN_ILLUMINANCE, SUN_POSITION,
};
// Crate engine modules
use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::camera::orbit_camera::{OrbitCamera, camera_controller, reset_orbit_camera};
use crate::engine::core::app_state::{AppState, despawn_scene, transition_to_running};
use crate::engine::core::error::{SceneFailure, route_scene_failures};
use crate::engine::core::window_config::create_window_config;
use crate::engine::creatures::animation::{bob_creatures, breathe_creatures};
use crate::engine::loading::config_loader::{
    ConfigLoader, load_scene_config_system, start_loading, validate_catalog_system,
};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::composer::spawn_scene;
// Crate tools modules
use crate::tools::{
    error_fallback::{despawn_error_fallback, retry_button_interaction, spawn_error_fallback},
    info_panel::{close_button_interaction, refresh_info_panel},
    interaction::{CameraInputGate, release_camera_capture, sync_hover_markers, track_ui_hover},
    loading_screen::{despawn_loading_screen, spawn_loading_screen, update_loading_screen},
    selection::{SelectionEvent, SelectionState, apply_selection_events, reset_selection},
};

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::{fps_text_update_system, spawn_fps_overlay};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(MeshPickingPlugin)
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SceneConfig as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneConfig>::new(&["json"]));

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ConfigLoader>()
        .init_resource::<SceneFailure>()
        .init_resource::<SelectionState>()
        .init_resource::<CameraInputGate>()
        .init_resource::<OrbitCamera>()
        .add_event::<SelectionEvent>()
        .insert_resource(ClearColor(SKY_COLOUR))
        .insert_resource(AmbientLight {
            brightness: AMBIENT_BRIGHTNESS,
            ..default()
        });

    app.add_systems(Startup, setup);

    // Loading gate
    app.add_systems(OnEnter(AppState::Loading), (start_loading, spawn_loading_screen))
        .add_systems(
            Update,
            (
                load_scene_config_system,
                validate_catalog_system,
                update_loading_screen,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnExit(AppState::Loading), despawn_loading_screen);

    // Mounted scene
    app.add_systems(
        OnEnter(AppState::Running),
        (reset_selection, reset_orbit_camera, spawn_scene).chain(),
    )
    .add_systems(
        Update,
        (
            (track_ui_hover, camera_controller, release_camera_capture).chain(),
            breathe_creatures,
            bob_creatures,
            // Selection flow: pointer events -> state -> overlays
            (
                apply_selection_events,
                sync_hover_markers,
                refresh_info_panel,
                close_button_interaction,
            )
                .chain(),
        )
            .run_if(in_state(AppState::Running)),
    )
    .add_systems(OnExit(AppState::Running), despawn_scene);

    // Error boundary
    app.add_systems(OnEnter(AppState::Failed), spawn_error_fallback)
        .add_systems(
            Update,
            retry_button_interaction.run_if(in_state(AppState::Failed)),
        )
        .add_systems(OnExit(AppState::Failed), despawn_error_fallback)
        .add_systems(Update, route_scene_failures);

    // Add fps_text_update_system only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: SUN_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(SUN_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        CascadeShadowConfigBuilder {
            maximum_distance: SHADOW_MAX_DISTANCE,
            ..default()
        }
        .build(),
    ));
}

fn spawn_scene_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        OrbitCamera::default().target_transform(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        DistanceFog {
            color: SKY_COLOUR,
            falloff: FogFalloff::Linear {
                start: FOG_START,
                end: FOG_END,
            },
            ..default()
        },
    ));
}

// Startup system: camera, lights and native overlays live across reloads
fn setup(mut commands: Commands) {
    spawn_lighting(&mut commands);
    spawn_scene_camera(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    {
        spawn_fps_overlay(&mut commands);
    }
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
