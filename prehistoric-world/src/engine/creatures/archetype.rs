use super::parts::BodyPart;
use super::templates;

/// The closed set of creature body templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    PredatorBiped,
    HornedQuadruped,
    FeatheredBiped,
    LongNeckGiant,
    PlatedQuadruped,
}

impl Archetype {
    pub const ALL: [Archetype; 5] = [
        Archetype::PredatorBiped,
        Archetype::HornedQuadruped,
        Archetype::FeatheredBiped,
        Archetype::LongNeckGiant,
        Archetype::PlatedQuadruped,
    ];

    /// Exact, case-sensitive match on the catalog id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|archetype| archetype.id() == id)
    }

    pub fn id(self) -> &'static str {
        match self {
            Archetype::PredatorBiped => "trex",
            Archetype::HornedQuadruped => "triceratops",
            Archetype::FeatheredBiped => "velociraptor",
            Archetype::LongNeckGiant => "brachiosaurus",
            Archetype::PlatedQuadruped => "stegosaurus",
        }
    }

    // Fixed so skin speckles land in the same place on every mount
    fn speckle_seed(self) -> u64 {
        match self {
            Archetype::PredatorBiped => 0x7265_7801,
            Archetype::HornedQuadruped => 0x7472_6902,
            Archetype::FeatheredBiped => 0x7665_6c03,
            Archetype::LongNeckGiant => 0x6272_6104,
            Archetype::PlatedQuadruped => 0x7374_6505,
        }
    }
}

/// Full part list for an archetype. Pure: the same archetype always yields
/// the same parts.
pub fn assemble(archetype: Archetype) -> Vec<BodyPart> {
    let seed = archetype.speckle_seed();
    match archetype {
        Archetype::PredatorBiped => templates::predator_biped(),
        Archetype::HornedQuadruped => templates::horned_quadruped(seed),
        Archetype::FeatheredBiped => templates::feathered_biped(),
        Archetype::LongNeckGiant => templates::long_neck_giant(seed),
        Archetype::PlatedQuadruped => templates::plated_quadruped(seed),
    }
}

/// Parts for a catalog id. Unknown ids get an empty body.
pub fn parts_for_id(id: &str) -> Vec<BodyPart> {
    Archetype::from_id(id).map(assemble).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::creature_catalog::CREATURE_CATALOG;
    use crate::engine::creatures::parts::PartRole;

    fn count(parts: &[BodyPart], role: PartRole) -> usize {
        parts.iter().filter(|p| p.role == role).count()
    }

    #[test]
    fn every_catalog_creature_has_a_body() {
        for record in CREATURE_CATALOG {
            let archetype = Archetype::from_id(record.id).expect("catalog id maps to an archetype");
            assert_eq!(archetype.id(), record.id);
            assert!(!assemble(archetype).is_empty(), "{} assembled empty", record.id);
        }
    }

    #[test]
    fn unknown_ids_assemble_empty() {
        assert!(Archetype::from_id("mammoth").is_none());
        assert!(parts_for_id("mammoth").is_empty());
        assert!(parts_for_id("").is_empty());
        assert!(parts_for_id("TREX").is_empty());
    }

    #[test]
    fn assembly_is_deterministic() {
        for archetype in Archetype::ALL {
            assert_eq!(assemble(archetype), assemble(archetype));
        }
    }

    #[test]
    fn repetition_loops_produce_expected_counts() {
        let trex = assemble(Archetype::PredatorBiped);
        assert_eq!(count(&trex, PartRole::Tooth), 12);
        assert_eq!(count(&trex, PartRole::Claw), 8);
        assert_eq!(count(&trex, PartRole::BackRidge), 8);
        assert_eq!(count(&trex, PartRole::Speckle), 0);

        let triceratops = assemble(Archetype::HornedQuadruped);
        assert_eq!(count(&triceratops, PartRole::FrillStud), 8);
        assert_eq!(count(&triceratops, PartRole::Horn), 3);
        assert_eq!(count(&triceratops, PartRole::Leg), 4);
        assert_eq!(count(&triceratops, PartRole::Speckle), 20);

        let raptor = assemble(Archetype::FeatheredBiped);
        assert_eq!(count(&raptor, PartRole::Feather), 27);
        assert_eq!(count(&raptor, PartRole::Tooth), 6);

        let brachiosaurus = assemble(Archetype::LongNeckGiant);
        assert_eq!(count(&brachiosaurus, PartRole::Speckle), 30);

        let stegosaurus = assemble(Archetype::PlatedQuadruped);
        assert_eq!(count(&stegosaurus, PartRole::Plate), 9);
        assert_eq!(count(&stegosaurus, PartRole::PlateRib), 45);
        assert_eq!(count(&stegosaurus, PartRole::TailSpike), 2);
        assert_eq!(count(&stegosaurus, PartRole::Speckle), 25);
    }

    #[test]
    fn paired_parts_are_symmetric() {
        for archetype in Archetype::ALL {
            let parts = assemble(archetype);
            let eyes: Vec<_> = parts.iter().filter(|p| p.role == PartRole::Eye).collect();
            assert_eq!(eyes.len(), 2);
            assert_eq!(eyes[0].translation.x, -eyes[1].translation.x);
            assert_eq!(eyes[0].mirrored(), *eyes[1]);
        }
    }

    #[test]
    fn speckles_stay_inside_their_box() {
        let parts = assemble(Archetype::LongNeckGiant);
        for speckle in parts.iter().filter(|p| p.role == PartRole::Speckle) {
            assert!(speckle.translation.x.abs() <= 1.5);
            assert!((speckle.translation.y - 3.0).abs() <= 1.0);
            assert!(speckle.translation.z.abs() <= 2.0);
        }
    }
}
