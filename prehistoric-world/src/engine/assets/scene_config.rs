use bevy::prelude::*;
use constants::render_settings::{
    CAMERA_FOV_DEGREES, CAMERA_START_POSITION, ORBIT_MAX_DISTANCE, ORBIT_MAX_POLAR,
    ORBIT_MIN_DISTANCE, ORBIT_MIN_POLAR,
};
use constants::terrain::{TERRAIN_SEGMENTS, TERRAIN_SIZE};
use serde::{Deserialize, Serialize};

use crate::engine::core::error::SceneError;

/// Upper bound on instances per prop cluster.
pub const MAX_CLUSTER_COUNT: u32 = 1000;

fn all_finite(values: &[f32; 3]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// Scene layout loaded from `scene_config.json`. Every field is optional in
/// the file and falls back to the built-in layout.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Asset, TypePath)]
#[serde(default)]
pub struct SceneConfig {
    pub terrain: TerrainConfig,
    pub camera: CameraConfig,
    pub trees: Vec<ClusterConfig>,
    pub rocks: Vec<ClusterConfig>,
    pub hills: Vec<HillConfig>,
    /// Seed for prop scattering. Unset means a fresh layout every mount.
    pub prop_seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub size: f32,
    pub segments: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub fov_degrees: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar: f32,
    pub max_polar: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfig {
    pub anchor: [f32; 3],
    pub count: u32,
    pub spread: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HillConfig {
    pub position: [f32; 3],
    pub scale: [f32; 3],
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            size: TERRAIN_SIZE,
            segments: TERRAIN_SEGMENTS,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: CAMERA_START_POSITION.to_array(),
            target: [0.0, 0.0, 0.0],
            fov_degrees: CAMERA_FOV_DEGREES,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            min_polar: ORBIT_MIN_POLAR,
            max_polar: ORBIT_MAX_POLAR,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        let cluster = |anchor: [f32; 3], count: u32, spread: f32| ClusterConfig {
            anchor,
            count,
            spread,
        };
        let hill = |position: [f32; 3], scale: [f32; 3]| HillConfig { position, scale };

        Self {
            terrain: TerrainConfig::default(),
            camera: CameraConfig::default(),
            trees: vec![
                cluster([-15.0, 0.0, -15.0], 5, 10.0),
                cluster([15.0, 0.0, -20.0], 7, 12.0),
                cluster([-20.0, 0.0, 10.0], 4, 8.0),
            ],
            rocks: vec![
                cluster([5.0, 0.0, 10.0], 8, 5.0),
                cluster([-10.0, 0.0, -5.0], 6, 4.0),
                cluster([20.0, 0.0, 5.0], 10, 7.0),
            ],
            hills: vec![
                hill([-20.0, 0.0, -20.0], [1.0, 1.0, 1.0]),
                hill([15.0, 0.0, -15.0], [0.8, 0.6, 0.8]),
                hill([-15.0, 0.0, 15.0], [1.2, 0.8, 1.2]),
            ],
            prop_seed: None,
        }
    }
}

impl SceneConfig {
    /// Reject layouts the scene cannot be built from.
    pub fn validate(&self) -> Result<(), SceneError> {
        let invalid = |reason: String| Err(SceneError::InvalidConfig(reason));

        if !(self.terrain.size.is_finite() && self.terrain.size > 0.0) {
            return invalid(format!("terrain size must be positive, got {}", self.terrain.size));
        }
        if self.terrain.segments == 0 || self.terrain.segments > 1024 {
            return invalid(format!(
                "terrain segments must be within 1..=1024, got {}",
                self.terrain.segments
            ));
        }

        let camera = &self.camera;
        if !(all_finite(&camera.position) && all_finite(&camera.target)) {
            return invalid(format!(
                "camera position {:?} and target {:?} must be finite",
                camera.position, camera.target
            ));
        }
        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return invalid(format!(
                "camera fov must be within (0, 180), got {}",
                camera.fov_degrees
            ));
        }
        if !(camera.min_distance > 0.0 && camera.min_distance <= camera.max_distance) {
            return invalid(format!(
                "camera distance clamp [{}, {}] is not a positive range",
                camera.min_distance, camera.max_distance
            ));
        }
        if !(camera.min_polar >= 0.0
            && camera.min_polar <= camera.max_polar
            && camera.max_polar <= std::f32::consts::PI)
        {
            return invalid(format!(
                "camera polar clamp [{}, {}] must lie within [0, pi]",
                camera.min_polar, camera.max_polar
            ));
        }

        for cluster in self.trees.iter().chain(self.rocks.iter()) {
            if !(cluster.spread.is_finite() && cluster.spread >= 0.0) {
                return invalid(format!(
                    "cluster spread must be non-negative, got {}",
                    cluster.spread
                ));
            }
            if cluster.count > MAX_CLUSTER_COUNT {
                return invalid(format!(
                    "cluster count must be at most {MAX_CLUSTER_COUNT}, got {}",
                    cluster.count
                ));
            }
            if !all_finite(&cluster.anchor) {
                return invalid(format!("cluster anchor {:?} must be finite", cluster.anchor));
            }
        }

        for hill in &self.hills {
            if !all_finite(&hill.position) {
                return invalid(format!("hill position {:?} must be finite", hill.position));
            }
            if !hill.scale.iter().all(|v| v.is_finite() && *v > 0.0) {
                return invalid(format!("hill scale {:?} must be positive", hill.scale));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIPPED_CONFIG: &str = include_str!("../../../assets/scene_config.json");

    #[test]
    fn shipped_config_matches_builtin_layout() {
        let parsed: SceneConfig = serde_json::from_str(SHIPPED_CONFIG).unwrap();
        assert_eq!(parsed, SceneConfig::default());
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: SceneConfig =
            serde_json::from_str(r#"{ "terrain": { "segments": 16 }, "prop_seed": 7 }"#).unwrap();
        assert_eq!(parsed.terrain.segments, 16);
        assert_eq!(parsed.terrain.size, TERRAIN_SIZE);
        assert_eq!(parsed.prop_seed, Some(7));
        assert_eq!(parsed.trees.len(), 3);
        assert_eq!(parsed.camera, CameraConfig::default());
    }

    #[test]
    fn invalid_layouts_are_rejected() {
        let mut config = SceneConfig::default();
        config.terrain.segments = 0;
        assert!(matches!(config.validate(), Err(SceneError::InvalidConfig(_))));

        let mut config = SceneConfig::default();
        config.camera.min_distance = 60.0;
        assert!(matches!(config.validate(), Err(SceneError::InvalidConfig(_))));

        let mut config = SceneConfig::default();
        config.rocks[0].spread = -1.0;
        assert!(matches!(config.validate(), Err(SceneError::InvalidConfig(_))));
    }

    fn rejected(config: &SceneConfig) -> bool {
        matches!(config.validate(), Err(SceneError::InvalidConfig(_)))
    }

    #[test]
    fn oversized_clusters_are_rejected_before_scattering() {
        let json = r#"{ "trees": [ { "anchor": [0, 0, 0], "count": 4294967295, "spread": 1 } ] }"#;
        let parsed: SceneConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.validate(),
            Err(SceneError::InvalidConfig(
                "cluster count must be at most 1000, got 4294967295".into()
            ))
        );

        let mut config = SceneConfig::default();
        config.rocks[2].count = MAX_CLUSTER_COUNT;
        assert!(config.validate().is_ok());
        config.rocks[2].count = MAX_CLUSTER_COUNT + 1;
        assert!(rejected(&config));
    }

    #[test]
    fn non_finite_positions_are_rejected() {
        let mut config = SceneConfig::default();
        config.trees[1].anchor[2] = f32::NAN;
        assert!(rejected(&config));

        let mut config = SceneConfig::default();
        config.hills[0].position[0] = f32::INFINITY;
        assert!(rejected(&config));

        let mut config = SceneConfig::default();
        config.hills[2].scale[1] = f32::NAN;
        assert!(rejected(&config));

        let mut config = SceneConfig::default();
        config.hills[1].scale[0] = 0.0;
        assert!(rejected(&config));

        let mut config = SceneConfig::default();
        config.camera.position[1] = f32::NEG_INFINITY;
        assert!(rejected(&config));

        let mut config = SceneConfig::default();
        config.camera.target[0] = f32::NAN;
        assert!(rejected(&config));
    }

    #[test]
    fn out_of_range_json_numbers_are_rejected() {
        // 1e39 overflows f32 and parses as infinity
        let parsed: SceneConfig =
            serde_json::from_str(r#"{ "camera": { "target": [1e39, 0, 0] } }"#).unwrap();
        assert!(!parsed.camera.target[0].is_finite());
        assert!(rejected(&parsed));
    }
}
