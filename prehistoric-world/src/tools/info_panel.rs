use bevy::prelude::*;

use crate::engine::assets::creature_catalog::CreatureRecord;
use crate::engine::core::app_state::SceneEntity;
use crate::tools::selection::{SelectionEvent, SelectionInput, SelectionState};

const PANEL_WIDTH: f32 = 320.0;
const AMBER_BORDER: Color = Color::srgb(0.851, 0.467, 0.024);
const AMBER_HEADER: Color = Color::srgb(0.573, 0.251, 0.055);
const AMBER_HOVER: Color = Color::srgb(0.706, 0.325, 0.035);
const AMBER_HEADING: Color = Color::srgb(0.984, 0.749, 0.141);

#[derive(Component)]
pub struct InfoPanelRoot;

#[derive(Component)]
pub struct CloseButton;

/// Heading and value pairs shown in the panel body, top to bottom.
pub fn info_rows(record: &CreatureRecord) -> Vec<(&'static str, String)> {
    vec![
        ("Origin", record.origin.to_string()),
        ("Kingdom", record.kingdom_label.to_string()),
        ("Species", record.species.to_string()),
        ("Diet", record.diet_label.to_string()),
        ("Prey", record.prey_summary()),
        ("Length", record.length_label.to_string()),
        ("Weight", record.weight_label.to_string()),
        ("Fun Fact", record.fun_fact.to_string()),
    ]
}

// Rebuild the panel whenever the selection changes
pub fn refresh_info_panel(
    mut commands: Commands,
    selection: Res<SelectionState>,
    panels: Query<Entity, With<InfoPanelRoot>>,
) {
    if !selection.is_changed() {
        return;
    }

    for entity in &panels {
        commands.entity(entity).despawn();
    }
    if let Some(record) = selection.selected() {
        spawn_info_panel(&mut commands, record);
    }
}

fn spawn_info_panel(commands: &mut Commands, record: &CreatureRecord) {
    commands
        .spawn((
            InfoPanelRoot,
            SceneEntity,
            Name::new("InfoPanel"),
            Interaction::default(),
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.8)),
            BorderColor(AMBER_BORDER),
            Node {
                width: Val::Px(PANEL_WIDTH),
                position_type: PositionType::Absolute,
                top: Val::Px(16.0),
                right: Val::Px(16.0),
                border: UiRect::all(Val::Px(2.0)),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::clip(),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Name::new("Header"),
                    BackgroundColor(AMBER_HEADER),
                    Node {
                        width: Val::Percent(100.0),
                        padding: UiRect::all(Val::Px(12.0)),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::SpaceBetween,
                        ..default()
                    },
                ))
                .with_children(|header| {
                    header.spawn((
                        Name::new("Title"),
                        Text::new(record.display_name),
                        TextFont {
                            font_size: 20.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));

                    header
                        .spawn((
                            CloseButton,
                            Name::new("CloseButton"),
                            Button,
                            BackgroundColor(AMBER_HEADER),
                            Node {
                                width: Val::Px(32.0),
                                height: Val::Px(32.0),
                                display: Display::Flex,
                                align_items: AlignItems::Center,
                                justify_content: JustifyContent::Center,
                                ..default()
                            },
                        ))
                        .with_children(|btn| {
                            btn.spawn((
                                Text::new("X"),
                                TextFont {
                                    font_size: 18.0,
                                    ..default()
                                },
                                TextColor(Color::WHITE),
                            ));
                        });
                });

            parent
                .spawn((
                    Name::new("Body"),
                    Node {
                        width: Val::Percent(100.0),
                        padding: UiRect::all(Val::Px(16.0)),
                        row_gap: Val::Px(12.0),
                        display: Display::Flex,
                        flex_direction: FlexDirection::Column,
                        ..default()
                    },
                ))
                .with_children(|body| {
                    for (heading, value) in info_rows(record) {
                        body.spawn(Node {
                            display: Display::Flex,
                            flex_direction: FlexDirection::Column,
                            row_gap: Val::Px(2.0),
                            ..default()
                        })
                        .with_children(|row| {
                            row.spawn((
                                Text::new(heading),
                                TextFont {
                                    font_size: 15.0,
                                    ..default()
                                },
                                TextColor(AMBER_HEADING),
                            ));
                            row.spawn((
                                Text::new(value),
                                TextFont {
                                    font_size: 14.0,
                                    ..default()
                                },
                                TextColor(Color::WHITE),
                            ));
                        });
                    }
                });
        });
}

// Close button clears the selection, highlights on hover
pub fn close_button_interaction(
    mut q: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>, With<CloseButton>),
    >,
    mut selection_events: EventWriter<SelectionEvent>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                selection_events.write(SelectionEvent(SelectionInput::Close));
                *bg = BackgroundColor(AMBER_HOVER);
            }
            Interaction::Hovered => *bg = BackgroundColor(AMBER_HOVER),
            Interaction::None => *bg = BackgroundColor(AMBER_HEADER),
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;

    use super::*;
    use crate::engine::assets::creature_catalog::find_creature;

    #[test]
    fn rows_follow_panel_order() {
        let trex = find_creature("trex").expect("trex in catalog");
        let rows = info_rows(trex);

        let headings: Vec<_> = rows.iter().map(|(heading, _)| *heading).collect();
        assert_eq!(
            headings,
            ["Origin", "Kingdom", "Species", "Diet", "Prey", "Length", "Weight", "Fun Fact"]
        );
        assert_eq!(rows[4].1, "Triceratops, Edmontosaurus, Ankylosaurus");
        assert_eq!(rows[2].1, "Tyrannosaurus rex");
    }

    #[test]
    fn panel_exists_only_while_viewing() {
        let mut world = World::new();
        world.insert_resource(SelectionState::Viewing(
            *find_creature("stegosaurus").expect("stegosaurus in catalog"),
        ));

        world.run_system_once(refresh_info_panel).expect("panel refresh runs");
        let panels = world.query_filtered::<(), With<InfoPanelRoot>>().iter(&world).count();
        assert_eq!(panels, 1);

        world.insert_resource(SelectionState::Idle);
        world.run_system_once(refresh_info_panel).expect("panel refresh runs");
        let panels = world.query_filtered::<(), With<InfoPanelRoot>>().iter(&world).count();
        assert_eq!(panels, 0);
        assert_eq!(world.query::<&CloseButton>().iter(&world).count(), 0);
    }
}
