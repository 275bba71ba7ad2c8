use bevy::prelude::*;
use thiserror::Error;

use super::app_state::AppState;

/// Failures that take down the whole scene. There is no partial recovery:
/// every variant ends in the fallback screen and a full reload.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SceneError {
    #[error("failed to load scene configuration '{path}': {reason}")]
    ConfigLoad { path: String, reason: String },

    #[error("invalid scene configuration: {0}")]
    InvalidConfig(String),

    #[error("creature id '{0}' appears more than once in the catalog")]
    DuplicateCreatureId(String),

    #[error("could not build terrain collider: {0}")]
    TerrainCollider(String),
}

/// The error currently shown by the fallback screen, if any.
#[derive(Resource, Debug, Default, Clone)]
pub struct SceneFailure {
    message: Option<String>,
}

impl SceneFailure {
    /// Record a failure. The first one wins until the next reload.
    pub fn report(&mut self, error: &SceneError) {
        error!("Scene failure: {error}");
        if self.message.is_none() {
            self.message = Some(error.to_string());
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn clear(&mut self) {
        self.message = None;
    }
}

/// Move to the failed state as soon as anything reports a failure.
pub fn route_scene_failures(
    failure: Res<SceneFailure>,
    state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if failure.message().is_some() && *state.get() != AppState::Failed {
        warn!("→ Transitioning to Failed state from {:?}", state.get());
        next_state.set(AppState::Failed);
    }
}
