use std::collections::HashSet;
use std::f32::consts::{FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, PI};

use bevy::prelude::*;
use constants::render_settings::DEFAULT_LABEL_HEIGHT;

use crate::engine::core::error::SceneError;

/// Placement of a creature's body root in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreatureTransform {
    pub position: Vec3,
    /// Euler XYZ angles in radians.
    pub rotation: Vec3,
    pub scale: Vec3,
}

/// One entry of the creature catalog. Immutable for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreatureRecord {
    pub id: &'static str,
    pub display_name: &'static str,
    pub species: &'static str,
    pub origin: &'static str,
    pub kingdom_label: &'static str,
    pub diet_label: &'static str,
    pub prey_list: &'static [&'static str],
    pub length_label: &'static str,
    pub weight_label: &'static str,
    pub fun_fact: &'static str,
    pub transform: CreatureTransform,
    /// Half extents of the fixed cuboid collider, whose bottom sits on the ground.
    pub collider_half_extents: Vec3,
    pub label_height: Option<f32>,
    pub animates: bool,
}

impl CreatureRecord {
    /// Vertical offset of the hover marker above the body root.
    pub fn label_height(&self) -> f32 {
        self.label_height.unwrap_or(DEFAULT_LABEL_HEIGHT)
    }

    /// Collider centre relative to the body root.
    pub fn collider_offset(&self) -> Vec3 {
        Vec3::new(0.0, self.collider_half_extents.y, 0.0)
    }

    pub fn prey_summary(&self) -> String {
        self.prey_list.join(", ")
    }
}

pub const CREATURE_CATALOG: &[CreatureRecord] = &[
    CreatureRecord {
        id: "trex",
        display_name: "Tyrannosaurus Rex",
        species: "Tyrannosaurus rex",
        origin: "Late Cretaceous Period",
        kingdom_label: "Animalia",
        diet_label: "Carnivore",
        prey_list: &["Triceratops", "Edmontosaurus", "Ankylosaurus"],
        length_label: "40 feet (12 meters)",
        weight_label: "Up to 9 tons",
        fun_fact: "T-Rex had the strongest bite force of any land animal that ever lived, capable of exerting up to 12,800 pounds of force.",
        transform: CreatureTransform {
            position: Vec3::new(0.0, 0.0, 0.0),
            rotation: Vec3::new(0.0, FRAC_PI_4, 0.0),
            scale: Vec3::ONE,
        },
        collider_half_extents: Vec3::new(2.0, 2.0, 4.0),
        label_height: Some(5.0),
        animates: false,
    },
    CreatureRecord {
        id: "triceratops",
        display_name: "Triceratops",
        species: "Triceratops horridus",
        origin: "Late Cretaceous Period",
        kingdom_label: "Animalia",
        diet_label: "Herbivore",
        prey_list: &["Plants", "Shrubs", "Cycads"],
        length_label: "30 feet (9 meters)",
        weight_label: "Up to 12 tons",
        fun_fact: "Triceratops had one of the largest skulls of any land animal, measuring up to 8 feet long.",
        transform: CreatureTransform {
            position: Vec3::new(8.0, 0.0, 5.0),
            rotation: Vec3::new(0.0, -FRAC_PI_3, 0.0),
            scale: Vec3::ONE,
        },
        collider_half_extents: Vec3::new(2.0, 1.5, 3.0),
        label_height: Some(3.0),
        animates: true,
    },
    CreatureRecord {
        id: "velociraptor",
        display_name: "Velociraptor",
        species: "Velociraptor mongoliensis",
        origin: "Late Cretaceous Period",
        kingdom_label: "Animalia",
        diet_label: "Carnivore",
        prey_list: &["Small dinosaurs", "Mammals", "Lizards"],
        length_label: "6.8 feet (2 meters)",
        weight_label: "About 33 pounds (15 kg)",
        fun_fact: "Unlike in movies, real velociraptors were about the size of a turkey and covered in feathers.",
        transform: CreatureTransform {
            position: Vec3::new(-5.0, 0.0, -7.0),
            rotation: Vec3::new(0.0, FRAC_PI_6, 0.0),
            scale: Vec3::ONE,
        },
        collider_half_extents: Vec3::new(0.7, 0.7, 1.4),
        label_height: Some(1.5),
        animates: true,
    },
    CreatureRecord {
        id: "brachiosaurus",
        display_name: "Brachiosaurus",
        species: "Brachiosaurus altithorax",
        origin: "Late Jurassic Period",
        kingdom_label: "Animalia",
        diet_label: "Herbivore",
        prey_list: &["High tree foliage", "Conifers", "Ginkgoes"],
        length_label: "85 feet (26 meters)",
        weight_label: "Up to 50 tons",
        fun_fact: "Brachiosaurus could reach heights of 40-50 feet, allowing it to feed on treetops that other dinosaurs couldn't reach.",
        transform: CreatureTransform {
            position: Vec3::new(-15.0, 0.0, -15.0),
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        },
        collider_half_extents: Vec3::new(3.0, 6.0, 5.0),
        label_height: Some(12.0),
        animates: false,
    },
    CreatureRecord {
        id: "stegosaurus",
        display_name: "Stegosaurus",
        species: "Stegosaurus stenops",
        origin: "Late Jurassic Period",
        kingdom_label: "Animalia",
        diet_label: "Herbivore",
        prey_list: &["Low-growing plants", "Ferns", "Mosses"],
        length_label: "30 feet (9 meters)",
        weight_label: "Up to 5 tons",
        fun_fact: "Stegosaurus had a brain the size of a walnut - one of the smallest brain-to-body ratios of any dinosaur.",
        transform: CreatureTransform {
            position: Vec3::new(12.0, 0.0, -10.0),
            rotation: Vec3::new(0.0, -PI / 5.0, 0.0),
            scale: Vec3::ONE,
        },
        collider_half_extents: Vec3::new(2.0, 1.5, 3.0),
        label_height: Some(3.0),
        animates: true,
    },
];

/// Look up a record by its unique id.
pub fn find_creature(id: &str) -> Option<&'static CreatureRecord> {
    CREATURE_CATALOG.iter().find(|record| record.id == id)
}

/// Check the catalog invariant that every id is unique.
pub fn validate_catalog(records: &[CreatureRecord]) -> Result<(), SceneError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            return Err(SceneError::DuplicateCreatureId(record.id.to_string()));
        }
    }
    Ok(())
}
