use bevy::prelude::*;

use crate::engine::core::app_state::{AppState, SceneEntity};
use crate::engine::core::error::SceneFailure;

const BUTTON_IDLE: Color = Color::srgb(0.22, 0.24, 0.28);
const BUTTON_HOVER: Color = Color::srgb(0.26, 0.28, 0.32);
const BUTTON_PRESSED: Color = Color::srgb(0.18, 0.20, 0.24);

#[derive(Component)]
pub struct FallbackRoot;

#[derive(Component)]
pub struct RetryButton;

pub fn spawn_error_fallback(mut commands: Commands, failure: Res<SceneFailure>) {
    let message = failure.message().unwrap_or("unknown error").to_string();

    commands
        .spawn((
            FallbackRoot,
            Name::new("ErrorFallback"),
            BackgroundColor(Color::srgb(0.10, 0.11, 0.13)),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                padding: UiRect::all(Val::Px(24.0)),
                row_gap: Val::Px(12.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Something went wrong:"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.35, 0.35)),
            ));
            parent.spawn((
                Name::new("ErrorMessage"),
                Text::new(message),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));

            parent
                .spawn((
                    RetryButton,
                    Name::new("RetryButton"),
                    Button,
                    BackgroundColor(BUTTON_IDLE),
                    BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                    Node {
                        width: Val::Px(160.0),
                        height: Val::Px(36.0),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                ))
                .with_children(|btn| {
                    btn.spawn((
                        Text::new("Try again"),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                });
        });
}

// Try again performs a full reload: the page on wasm, the whole loading gate natively
pub fn retry_button_interaction(
    mut q: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>, With<RetryButton>),
    >,
    mut failure: ResMut<SceneFailure>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                *bg = BackgroundColor(BUTTON_PRESSED);
                full_reload(&mut failure, &mut next_state);
            }
            Interaction::Hovered => *bg = BackgroundColor(BUTTON_HOVER),
            Interaction::None => *bg = BackgroundColor(BUTTON_IDLE),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn full_reload(_failure: &mut SceneFailure, _next_state: &mut NextState<AppState>) {
    info!("Reloading page");
    let reloaded = web_sys::window().map(|window| window.location().reload());
    if !matches!(reloaded, Some(Ok(()))) {
        error!("Page reload failed: {reloaded:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn full_reload(failure: &mut SceneFailure, next_state: &mut NextState<AppState>) {
    info!("→ Retrying: tearing down and re-entering Loading state");
    failure.clear();
    next_state.set(AppState::Loading);
}

/// Leaving the failed state also sweeps anything a half-built scene left behind.
pub fn despawn_error_fallback(
    mut commands: Commands,
    roots: Query<Entity, Or<(With<FallbackRoot>, With<SceneEntity>)>>,
) {
    for entity in &roots {
        commands.entity(entity).despawn();
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use bevy::ecs::system::RunSystemOnce;

    use super::*;
    use crate::engine::core::error::SceneError;

    #[test]
    fn fallback_shows_message_verbatim() {
        let mut world = World::new();
        let mut failure = SceneFailure::default();
        failure.report(&SceneError::DuplicateCreatureId("trex".into()));
        world.insert_resource(failure);

        world.run_system_once(spawn_error_fallback).expect("fallback spawns");

        let texts: Vec<String> = world.query::<&Text>().iter(&world).map(|t| t.0.clone()).collect();
        assert!(texts.iter().any(|t| t == "Something went wrong:"));
        let message = "creature id 'trex' appears more than once in the catalog";
        assert!(texts.iter().any(|t| t == message));
        assert!(texts.iter().any(|t| t == "Try again"));
    }

    #[test]
    fn native_reload_clears_failure_and_restarts_loading() {
        let mut failure = SceneFailure::default();
        failure.report(&SceneError::TerrainCollider("degenerate".into()));
        let mut next_state = NextState::<AppState>::default();

        full_reload(&mut failure, &mut next_state);

        assert!(failure.message().is_none());
        assert!(matches!(next_state, NextState::Pending(AppState::Loading)));
    }

    #[test]
    fn leaving_failed_state_sweeps_scene_leftovers() {
        let mut world = World::new();
        world.spawn(FallbackRoot);
        world.spawn(SceneEntity);
        let survivor = world.spawn(Name::new("Camera")).id();

        world.run_system_once(despawn_error_fallback).expect("despawn runs");

        let leftovers = world
            .query_filtered::<(), Or<(With<FallbackRoot>, With<SceneEntity>)>>()
            .iter(&world)
            .count();
        assert_eq!(leftovers, 0);
        assert!(world.get_entity(survivor).is_ok());
    }
}
