use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Component)]
pub struct LoadingScreenRoot;

#[derive(Component)]
pub struct LoadingLabel;

#[derive(Component)]
pub struct LoadingBarFill;

pub fn loading_label(percent: f32) -> String {
    format!("Loading prehistoric world... {percent:.0}%")
}

pub fn spawn_loading_screen(mut commands: Commands) {
    commands
        .spawn((
            LoadingScreenRoot,
            Name::new("LoadingScreen"),
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Name::new("LoadingBar"),
                    BackgroundColor(Color::srgb_u8(0x8B, 0x45, 0x13)),
                    Node {
                        width: Val::Px(160.0),
                        height: Val::Px(6.0),
                        overflow: Overflow::clip(),
                        ..default()
                    },
                ))
                .with_children(|bar| {
                    bar.spawn((
                        LoadingBarFill,
                        BackgroundColor(Color::srgb_u8(0xf5, 0x9e, 0x0b)),
                        Node {
                            width: Val::Percent(0.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                    ));
                });

            parent.spawn((
                LoadingLabel,
                Text::new(loading_label(0.0)),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

pub fn update_loading_screen(
    loading_progress: Res<LoadingProgress>,
    mut labels: Query<&mut Text, With<LoadingLabel>>,
    mut fills: Query<&mut Node, With<LoadingBarFill>>,
) {
    if !loading_progress.is_changed() {
        return;
    }

    let percent = loading_progress.percent();
    for mut text in &mut labels {
        text.0 = loading_label(percent);
    }
    for mut node in &mut fills {
        node.width = Val::Percent(percent);
    }
}

pub fn despawn_loading_screen(
    mut commands: Commands,
    roots: Query<Entity, With<LoadingScreenRoot>>,
) {
    for entity in &roots {
        commands.entity(entity).despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_rounds_to_whole_percent() {
        assert_eq!(loading_label(0.0), "Loading prehistoric world... 0%");
        assert_eq!(loading_label(75.0), "Loading prehistoric world... 75%");
        assert_eq!(loading_label(99.6), "Loading prehistoric world... 100%");
    }
}
