use bevy::prelude::*;

use crate::engine::creatures::assembler::CreatureBody;
use crate::tools::selection::{SelectionEvent, SelectionInput};

/// Local hover flag of a creature body. Independent of the selection.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct CreatureHover {
    pub hovered: bool,
}

/// Small marker sphere floating above a hovered creature.
#[derive(Component)]
pub struct HoverMarker;

/// Set while a press that started on a creature or a UI panel is held, so
/// the orbit controller ignores the drag. `over_ui` also blocks zoom.
#[derive(Resource, Debug, Default)]
pub struct CameraInputGate {
    pub captured: bool,
    pub over_ui: bool,
}

pub fn on_creature_click(
    mut trigger: Trigger<Pointer<Click>>,
    bodies: Query<&CreatureBody>,
    mut selection_events: EventWriter<SelectionEvent>,
) {
    if trigger.event().button != PointerButton::Primary {
        return;
    }
    trigger.propagate(false);

    if let Ok(body) = bodies.get(trigger.target()) {
        selection_events.write(SelectionEvent(SelectionInput::Creature(body.record)));
    }
}

pub fn on_creature_pressed(
    mut trigger: Trigger<Pointer<Pressed>>,
    mut camera_gate: ResMut<CameraInputGate>,
) {
    trigger.propagate(false);
    camera_gate.captured = true;
}

pub fn on_creature_over(
    mut trigger: Trigger<Pointer<Over>>,
    mut hovers: Query<&mut CreatureHover>,
) {
    trigger.propagate(false);
    if let Ok(mut hover) = hovers.get_mut(trigger.target()) {
        hover.hovered = true;
    }
}

pub fn on_creature_out(
    mut trigger: Trigger<Pointer<Out>>,
    mut hovers: Query<&mut CreatureHover>,
) {
    trigger.propagate(false);
    if let Ok(mut hover) = hovers.get_mut(trigger.target()) {
        hover.hovered = false;
    }
}

pub fn on_terrain_click(
    trigger: Trigger<Pointer<Click>>,
    mut selection_events: EventWriter<SelectionEvent>,
) {
    if trigger.event().button == PointerButton::Primary {
        selection_events.write(SelectionEvent(SelectionInput::Terrain));
    }
}

/// Release the camera capture once every mouse button is up.
pub fn release_camera_capture(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut camera_gate: ResMut<CameraInputGate>,
) {
    let held =
        mouse_button.any_pressed([MouseButton::Left, MouseButton::Right, MouseButton::Middle]);
    if camera_gate.captured && !held {
        camera_gate.captured = false;
    }
}

// Panels carry an Interaction so the UI focus pass reports the pointer over them
pub fn track_ui_hover(
    nodes: Query<&Interaction, With<Node>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut camera_gate: ResMut<CameraInputGate>,
) {
    let over_ui = nodes.iter().any(|interaction| *interaction != Interaction::None);
    if camera_gate.over_ui != over_ui {
        camera_gate.over_ui = over_ui;
    }
    if over_ui && mouse_button.get_just_pressed().next().is_some() {
        camera_gate.captured = true;
    }
}

pub fn sync_hover_markers(
    bodies: Query<(&CreatureHover, &Children), Changed<CreatureHover>>,
    mut markers: Query<&mut Visibility, With<HoverMarker>>,
) {
    for (hover, children) in &bodies {
        for child in children.iter() {
            if let Ok(mut visibility) = markers.get_mut(child) {
                *visibility = if hover.hovered {
                    Visibility::Inherited
                } else {
                    Visibility::Hidden
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::ecs::event::Events;
    use bevy::ecs::system::RunSystemOnce;
    use bevy::picking::backend::HitData;
    use bevy::picking::pointer::{Location, PointerId};
    use bevy::render::camera::RenderTarget;
    use bevy::window::WindowRef;

    use super::*;
    use crate::engine::assets::creature_catalog::{CreatureRecord, find_creature};

    struct Rig {
        world: World,
        body: Entity,
        part: Entity,
        record: CreatureRecord,
    }

    // Root with a terrain-style click observer, a body with the creature
    // observers and one part mesh under the body.
    fn creature_rig() -> Rig {
        let mut world = World::new();
        world.init_resource::<Events<SelectionEvent>>();
        world.init_resource::<CameraInputGate>();
        // Pointer propagation queries `Window`; it must be registered as in a real app
        world.register_component::<bevy::window::Window>();

        let record = *find_creature("velociraptor").expect("velociraptor in catalog");
        let part = world.spawn(Name::new("Snout")).id();
        let mut body = world.spawn((CreatureBody { record }, CreatureHover::default()));
        body.add_child(part)
            .observe(on_creature_click)
            .observe(on_creature_pressed)
            .observe(on_creature_over)
            .observe(on_creature_out);
        let body = body.id();
        world.spawn_empty().add_child(body).observe(on_terrain_click);

        Rig { world, body, part, record }
    }

    fn pointer<E: std::fmt::Debug + Clone + Reflect>(target: Entity, event: E) -> Pointer<E> {
        let location = Location {
            target: RenderTarget::Window(WindowRef::Entity(Entity::PLACEHOLDER))
                .normalize(None)
                .expect("explicit window normalizes"),
            position: Vec2::ZERO,
        };
        Pointer::new(PointerId::Mouse, location, target, event)
    }

    fn hit() -> HitData {
        HitData::new(Entity::PLACEHOLDER, 1.0, None, None)
    }

    fn click(target: Entity, button: PointerButton) -> Pointer<Click> {
        pointer(
            target,
            Click {
                button,
                hit: hit(),
                duration: Duration::from_millis(80),
            },
        )
    }

    fn selection_inputs(world: &World) -> Vec<SelectionInput> {
        world
            .resource::<Events<SelectionEvent>>()
            .iter_current_update_events()
            .map(|SelectionEvent(input)| *input)
            .collect()
    }

    #[test]
    fn part_click_selects_the_owning_creature_only() {
        let mut rig = creature_rig();
        rig.world.trigger_targets(click(rig.part, PointerButton::Primary), rig.part);

        // Propagation stops at the body, so the ground observer stays silent
        assert_eq!(selection_inputs(&rig.world), vec![SelectionInput::Creature(rig.record)]);
    }

    #[test]
    fn secondary_clicks_do_not_select() {
        let mut rig = creature_rig();
        rig.world.trigger_targets(click(rig.part, PointerButton::Secondary), rig.part);
        rig.world.trigger_targets(click(rig.part, PointerButton::Middle), rig.part);

        assert!(selection_inputs(&rig.world).is_empty());
    }

    #[test]
    fn over_and_out_toggle_the_hover_flag() {
        let mut rig = creature_rig();

        rig.world.trigger_targets(pointer(rig.part, Over { hit: hit() }), rig.part);
        assert!(rig.world.get::<CreatureHover>(rig.body).expect("hover flag").hovered);

        rig.world.trigger_targets(pointer(rig.part, Out { hit: hit() }), rig.part);
        assert!(!rig.world.get::<CreatureHover>(rig.body).expect("hover flag").hovered);
        assert!(selection_inputs(&rig.world).is_empty());
    }

    #[test]
    fn press_on_a_creature_captures_camera_input() {
        let mut rig = creature_rig();
        let press = pointer(
            rig.part,
            Pressed {
                button: PointerButton::Primary,
                hit: hit(),
            },
        );
        rig.world.trigger_targets(press, rig.part);

        assert!(rig.world.resource::<CameraInputGate>().captured);
    }

    #[test]
    fn ground_click_reports_terrain() {
        let mut world = World::new();
        world.init_resource::<Events<SelectionEvent>>();
        let ground = world.spawn_empty().observe(on_terrain_click).id();

        world.trigger_targets(click(ground, PointerButton::Primary), ground);
        world.trigger_targets(click(ground, PointerButton::Secondary), ground);

        assert_eq!(selection_inputs(&world), vec![SelectionInput::Terrain]);
    }

    #[test]
    fn marker_follows_hover_flag() {
        let mut world = World::new();
        let marker = world.spawn((HoverMarker, Visibility::Hidden)).id();
        let body = world.spawn(CreatureHover { hovered: true }).add_child(marker).id();

        world.run_system_once(sync_hover_markers).expect("hover sync runs");
        assert_eq!(world.get::<Visibility>(marker), Some(&Visibility::Inherited));

        world.get_mut::<CreatureHover>(body).expect("hover flag").hovered = false;
        world.run_system_once(sync_hover_markers).expect("hover sync runs");
        assert_eq!(world.get::<Visibility>(marker), Some(&Visibility::Hidden));
    }

    #[test]
    fn capture_is_released_when_buttons_are_up() {
        let mut world = World::new();
        world.insert_resource(CameraInputGate {
            captured: true,
            ..default()
        });

        let mut buttons = ButtonInput::<MouseButton>::default();
        buttons.press(MouseButton::Left);
        world.insert_resource(buttons);
        world.run_system_once(release_camera_capture).expect("release runs");
        assert!(world.resource::<CameraInputGate>().captured);

        world.resource_mut::<ButtonInput<MouseButton>>().release(MouseButton::Left);
        world.run_system_once(release_camera_capture).expect("release runs");
        assert!(!world.resource::<CameraInputGate>().captured);
    }

    #[test]
    fn hovering_a_panel_gates_the_camera() {
        let mut world = World::new();
        world.init_resource::<CameraInputGate>();
        world.init_resource::<ButtonInput<MouseButton>>();
        let panel = world.spawn((Node::default(), Interaction::Hovered)).id();
        world.spawn((Node::default(), Interaction::None));

        world.run_system_once(track_ui_hover).expect("ui hover runs");
        let gate = world.resource::<CameraInputGate>();
        assert!(gate.over_ui);
        assert!(!gate.captured);

        world.resource_mut::<ButtonInput<MouseButton>>().press(MouseButton::Left);
        world.run_system_once(track_ui_hover).expect("ui hover runs");
        assert!(world.resource::<CameraInputGate>().captured);

        // Dragging off the panel keeps the capture until release
        *world.get_mut::<Interaction>(panel).expect("panel interaction") = Interaction::None;
        world.run_system_once(track_ui_hover).expect("ui hover runs");
        let gate = world.resource::<CameraInputGate>();
        assert!(!gate.over_ui);
        assert!(gate.captured);
    }
}
