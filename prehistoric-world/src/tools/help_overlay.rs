use bevy::prelude::*;

use crate::engine::core::app_state::SceneEntity;

pub const HELP_LINES: [&str; 2] = [
    "Click on a dinosaur to learn more about it",
    "Use mouse to orbit, zoom and pan",
];

// Usage hints in the bottom-left corner, mounted with the scene
pub fn spawn_help_overlay(commands: &mut Commands) {
    commands
        .spawn((
            SceneEntity,
            Name::new("HelpOverlay"),
            Interaction::default(),
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(16.0),
                left: Val::Px(16.0),
                padding: UiRect::all(Val::Px(12.0)),
                row_gap: Val::Px(4.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                ..default()
            },
        ))
        .with_children(|parent| {
            for line in HELP_LINES {
                parent.spawn((
                    Text::new(line),
                    TextFont {
                        font_size: 14.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            }
        });
}
