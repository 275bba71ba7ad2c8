use bevy::prelude::*;

#[derive(Resource, Default, Debug, Clone)]
pub struct LoadingProgress {
    pub config_requested: bool,
    pub config_loaded: bool,
    pub config_validated: bool,
    pub catalog_validated: bool,
}

impl LoadingProgress {
    /// Completed loading steps as a percentage for the loading placeholder.
    pub fn percent(&self) -> f32 {
        let steps = [
            self.config_requested,
            self.config_loaded,
            self.config_validated,
            self.catalog_validated,
        ];
        let done = steps.iter().filter(|step| **step).count();
        done as f32 / steps.len() as f32 * 100.0
    }

    pub fn is_ready(&self) -> bool {
        self.config_validated && self.catalog_validated
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
