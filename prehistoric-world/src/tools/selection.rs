use bevy::prelude::*;

use crate::engine::assets::creature_catalog::CreatureRecord;

/// Which creature, if any, the detail overlay is showing. The overlay is
/// visible exactly when this is `Viewing`.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Viewing(CreatureRecord),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionInput {
    Creature(CreatureRecord),
    /// Click on terrain or empty space. Never changes the state.
    Terrain,
    Close,
}

impl SelectionState {
    pub fn apply(self, input: SelectionInput) -> Self {
        match input {
            SelectionInput::Creature(record) => SelectionState::Viewing(record),
            SelectionInput::Terrain => self,
            SelectionInput::Close => SelectionState::Idle,
        }
    }

    pub fn selected(&self) -> Option<&CreatureRecord> {
        match self {
            SelectionState::Idle => None,
            SelectionState::Viewing(record) => Some(record),
        }
    }
}

#[derive(Event, Debug, Clone, Copy)]
pub struct SelectionEvent(pub SelectionInput);

pub fn apply_selection_events(
    mut events: EventReader<SelectionEvent>,
    mut state: ResMut<SelectionState>,
) {
    for SelectionEvent(input) in events.read() {
        let next = state.apply(*input);
        if next == *state {
            continue;
        }
        match next.selected() {
            Some(record) => info!("Selected creature: {}", record.display_name),
            None => info!("Selection cleared"),
        }
        *state = next;
    }
}

/// Every scene mount starts with nothing selected.
pub fn reset_selection(mut state: ResMut<SelectionState>) {
    *state = SelectionState::Idle;
}

#[cfg(test)]
mod tests {
    use bevy::ecs::event::Events;
    use bevy::ecs::system::RunSystemOnce;

    use super::*;
    use crate::engine::assets::creature_catalog::find_creature;

    fn record(id: &str) -> CreatureRecord {
        *find_creature(id).expect("creature in catalog")
    }

    #[test]
    fn click_close_sequence() {
        let trex = record("trex");
        let raptor = record("velociraptor");

        let state = SelectionState::default();
        assert!(state.selected().is_none());

        let state = state.apply(SelectionInput::Creature(trex));
        assert_eq!(state, SelectionState::Viewing(trex));
        assert_eq!(state.selected(), Some(&trex));

        let state = state.apply(SelectionInput::Creature(raptor));
        assert_eq!(state.selected().map(|r| r.id), Some("velociraptor"));

        let state = state.apply(SelectionInput::Creature(raptor));
        assert_eq!(state, SelectionState::Viewing(raptor));

        let state = state.apply(SelectionInput::Close);
        assert_eq!(state, SelectionState::Idle);
        assert!(state.selected().is_none());
    }

    #[test]
    fn terrain_clicks_change_nothing() {
        let idle = SelectionState::Idle;
        assert_eq!(idle.apply(SelectionInput::Terrain), idle);

        let viewing = SelectionState::Viewing(record("stegosaurus"));
        assert_eq!(viewing.apply(SelectionInput::Terrain), viewing);
    }

    #[test]
    fn close_while_idle_stays_idle() {
        assert_eq!(SelectionState::Idle.apply(SelectionInput::Close), SelectionState::Idle);
    }

    #[test]
    fn events_drive_the_resource_in_order() {
        let mut world = World::new();
        world.init_resource::<SelectionState>();
        world.init_resource::<Events<SelectionEvent>>();

        world.send_event(SelectionEvent(SelectionInput::Creature(record("trex"))));
        world.send_event(SelectionEvent(SelectionInput::Terrain));
        world.send_event(SelectionEvent(SelectionInput::Creature(record("brachiosaurus"))));
        world.run_system_once(apply_selection_events).expect("selection system runs");

        let state = *world.resource::<SelectionState>();
        assert_eq!(state.selected().map(|r| r.id), Some("brachiosaurus"));

        world.send_event(SelectionEvent(SelectionInput::Close));
        world.run_system_once(apply_selection_events).expect("selection system runs");
        assert_eq!(*world.resource::<SelectionState>(), SelectionState::Idle);

        world.insert_resource(SelectionState::Viewing(record("trex")));
        world.run_system_once(reset_selection).expect("reset runs");
        assert_eq!(*world.resource::<SelectionState>(), SelectionState::Idle);
    }
}
