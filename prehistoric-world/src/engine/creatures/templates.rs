//! Fixed part hierarchies for the five creature archetypes.
//!
//! Coordinates are body-local with +Z facing forward and the feet near y = 0.
//! Left-hand parts are produced by mirroring the right-hand ones.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6, FRAC_PI_8, PI};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::parts::PartRole::*;
use super::parts::{
    BodyPart, PartList, PartMaterial, PartShape, capsule, cone, cuboid, frustum, part, sphere,
};
use crate::engine::scene::props::{RngSource, UnitSource};

const DARK: PartMaterial = PartMaterial::new(0x111111, 0.5);
const IVORY: PartMaterial = PartMaterial::new(0xF8F8FF, 0.2);

/// Scatter `count` small studs inside a box of `extent` centred on `centre`.
fn speckles(
    list: &mut PartList,
    source: &mut impl UnitSource,
    count: usize,
    shape: PartShape,
    material: PartMaterial,
    centre: [f32; 3],
    extent: [f32; 3],
) {
    for _ in 0..count {
        let x = centre[0] + (source.unit() - 0.5) * extent[0];
        let y = centre[1] + (source.unit() - 0.5) * extent[1];
        let z = centre[2] + (source.unit() - 0.5) * extent[2];
        list.push(part(Speckle, shape, material, [x, y, z]));
    }
}

fn speckle_source(seed: u64) -> RngSource<ChaCha8Rng> {
    RngSource(ChaCha8Rng::seed_from_u64(seed))
}

pub(super) fn predator_biped() -> Vec<BodyPart> {
    const SKIN: PartMaterial = PartMaterial::new(0x8B4513, 0.8);
    const RIDGE: PartMaterial = PartMaterial::new(0x6B3E11, 0.8);

    let mut list = PartList::default();
    list.push(part(Torso, capsule(1.0, 2.5), SKIN, [0.0, 2.0, 0.0]))
        .push(part(Neck, capsule(0.7, 1.0), SKIN, [0.0, 2.8, 1.0]).rotated(FRAC_PI_6, 0.0, 0.0))
        .push(part(Head, cuboid(0.9, 1.0, 1.8), SKIN, [0.0, 3.5, 1.8]))
        .push(part(Jaw, cuboid(0.8, 0.4, 1.5), SKIN, [0.0, 3.1, 2.2]).rotated(0.1, 0.0, 0.0));

    for i in 0..6 {
        let x = -0.3 + i as f32 * 0.12;
        list.push(part(Tooth, cone(0.04, 0.15, 8), IVORY, [x, 3.3, 2.5]));
    }
    for i in 0..6 {
        let x = -0.3 + i as f32 * 0.12;
        list.push(part(Tooth, cone(0.04, 0.15, 8), IVORY, [x, 3.1, 2.5]).rotated(PI, 0.0, 0.0));
    }

    list.pair(part(Eye, sphere(0.12, 16), DARK, [0.35, 3.7, 2.3]))
        .pair(
            part(EyeRidge, cuboid(0.3, 0.08, 0.2), SKIN, [0.35, 3.85, 2.2]).rotated(0.3, 0.0, 0.0),
        )
        .pair(part(Leg, capsule(0.4, 2.0), SKIN, [0.6, 1.2, 0.2]))
        .pair(part(Foot, cuboid(0.6, 0.3, 1.0), SKIN, [0.6, 0.3, 0.3]));

    for i in 0..3 {
        let x = 0.6 + (i as f32 - 1.0) * 0.2;
        list.pair(part(Claw, cone(0.08, 0.25, 4), DARK, [x, 0.2, 0.8]));
    }

    list.pair(part(Arm, capsule(0.15, 0.6), SKIN, [0.8, 2.3, 0.5]).rotated(0.3, 0.0, -0.3))
        .pair(part(Hand, cuboid(0.2, 0.25, 0.3), SKIN, [1.0, 2.1, 0.7]).rotated(0.0, 0.0, -0.3))
        .pair(part(Claw, cone(0.05, 0.2, 4), DARK, [1.1, 2.1, 0.8]))
        .push(part(Tail, capsule(0.6, 3.0), SKIN, [0.0, 2.0, -1.5]).rotated(-0.1, 0.0, 0.0))
        .push(part(Tail, capsule(0.3, 2.0), SKIN, [0.0, 1.9, -3.0]).rotated(-0.15, 0.0, 0.0));

    for i in 0..8 {
        let z = -1.0 + i as f32 * 0.4;
        list.push(part(BackRidge, cuboid(0.1, 0.1, 0.1), RIDGE, [0.0, 2.5, z]));
    }

    list.into_parts()
}

pub(super) fn horned_quadruped(seed: u64) -> Vec<BodyPart> {
    const SKIN: PartMaterial = PartMaterial::new(0x8B6914, 0.8);
    const FRILL: PartMaterial = PartMaterial::new(0xA0522D, 0.8);
    const FRILL_INNER: PartMaterial = PartMaterial::new(0x8B4513, 0.8);
    const HORN: PartMaterial = PartMaterial::new(0xF5DEB3, 0.5);

    let mut list = PartList::default();
    list.push(part(Torso, capsule(1.2, 2.5), SKIN, [0.0, 1.5, 0.0]))
        .push(part(Neck, capsule(0.9, 0.8), SKIN, [0.0, 1.7, 1.2]).rotated(FRAC_PI_8, 0.0, 0.0))
        .push(part(Head, cuboid(1.8, 1.2, 1.5), SKIN, [0.0, 2.0, 2.0]).rotated(0.1, 0.0, 0.0))
        .push(
            part(Frill, frustum(2.0, 1.8, 0.2, 16), FRILL, [0.0, 2.3, 1.2])
                .rotated(FRAC_PI_6, 0.0, 0.0),
        )
        .push(
            part(Frill, frustum(1.9, 1.7, 0.2, 16), FRILL_INNER, [0.0, 2.4, 1.1])
                .rotated(FRAC_PI_6, 0.0, 0.0),
        );

    // Studs along the upper rim of the frill
    for i in 0..8 {
        let angle = i as f32 / 8.0 * PI + FRAC_PI_2;
        let at = [
            angle.cos() * 1.9,
            2.3 + angle.sin() * 0.2,
            1.2 + angle.sin() * 0.2,
        ];
        list.push(part(FrillStud, cuboid(0.2, 0.1, 0.1), FRILL, at).rotated(FRAC_PI_6, 0.0, 0.0));
    }

    list.push(part(Horn, cone(0.2, 1.2, 8), HORN, [0.0, 2.5, 2.8]).rotated(FRAC_PI_6, 0.0, 0.0))
        .pair(
            part(Horn, cone(0.15, 1.0, 8), HORN, [0.9, 2.5, 2.3])
                .rotated(FRAC_PI_6, FRAC_PI_8, 0.0),
        )
        .push(part(Beak, cone(0.5, 0.8, 4), SKIN, [0.0, 1.9, 2.8]))
        .pair(part(Eye, sphere(0.15, 16), DARK, [0.8, 2.2, 2.5]))
        .pair(part(Leg, capsule(0.4, 1.5), SKIN, [0.8, 0.9, 0.8]))
        .pair(part(Leg, capsule(0.4, 1.5), SKIN, [0.8, 0.9, -0.8]))
        .pair(part(Foot, frustum(0.5, 0.6, 0.4, 5), SKIN, [0.8, 0.3, 0.9]))
        .pair(part(Foot, frustum(0.5, 0.6, 0.4, 5), SKIN, [0.8, 0.3, -0.9]))
        .push(part(Tail, capsule(0.5, 2.0), SKIN, [0.0, 1.5, -1.5]).rotated(-0.2, 0.0, 0.0));

    speckles(
        &mut list,
        &mut speckle_source(seed),
        20,
        cuboid(0.1, 0.1, 0.1),
        FRILL,
        [0.0, 1.5, 0.0],
        [2.0, 0.8, 2.0],
    );

    list.into_parts()
}

pub(super) fn feathered_biped() -> Vec<BodyPart> {
    const SKIN: PartMaterial = PartMaterial::new(0x556B2F, 0.8);
    const FEATHER: PartMaterial = PartMaterial::new(0x6B8E23, 0.8);

    let mut list = PartList::default();
    list.push(part(Torso, capsule(0.4, 1.2), SKIN, [0.0, 1.0, 0.0]))
        .push(part(Neck, capsule(0.25, 0.6), SKIN, [0.0, 1.2, 0.6]).rotated(FRAC_PI_4, 0.0, 0.0))
        .push(part(Head, cone(0.2, 0.8, 8), SKIN, [0.0, 1.5, 1.0]).rotated(0.2, 0.0, 0.0))
        .push(part(Jaw, cone(0.15, 0.6, 8), SKIN, [0.0, 1.4, 1.2]).rotated(0.1, 0.0, 0.0))
        .pair(part(Eye, sphere(0.06, 16), DARK, [0.12, 1.55, 1.1]));

    for i in 0..6 {
        let x = -0.1 + i as f32 * 0.04;
        list.push(part(Tooth, cone(0.02, 0.08, 8), IVORY, [x, 1.45, 1.35]));
    }

    list.pair(part(Leg, capsule(0.15, 0.8), SKIN, [0.3, 0.7, 0.0]).rotated(0.3, 0.0, 0.0))
        .pair(part(Foot, cuboid(0.2, 0.1, 0.3), SKIN, [0.3, 0.3, 0.2]))
        .pair(part(Claw, cone(0.05, 0.2, 4), DARK, [0.3, 0.25, 0.35]))
        .pair(part(Arm, capsule(0.08, 0.5), SKIN, [0.3, 1.1, 0.3]).rotated(0.5, 0.0, -0.5))
        .pair(part(Hand, cuboid(0.15, 0.08, 0.2), SKIN, [0.4, 0.9, 0.5]).rotated(0.0, 0.0, -0.5));

    for i in 0..3 {
        let x = 0.4 + (i as f32 - 1.0) * 0.05;
        list.pair(part(Claw, cone(0.02, 0.15, 4), DARK, [x, 0.9, 0.6]));
    }

    list.push(part(Tail, capsule(0.2, 1.5), SKIN, [0.0, 1.0, -0.8]).rotated(-0.1, 0.0, 0.0))
        .push(part(Tail, capsule(0.1, 0.8), SKIN, [0.0, 0.9, -1.8]).rotated(-0.05, 0.0, 0.0));

    for i in 0..5 {
        let step = i as f32;
        list.push(
            part(
                Feather,
                cuboid(0.1, 0.02, 0.15),
                FEATHER,
                [0.0, 1.6 + step * 0.05, 0.9 - step * 0.05],
            )
            .rotated(0.5 + step * 0.1, 0.0, 0.0),
        );
    }
    for i in 0..6 {
        let step = i as f32;
        list.pair(
            part(
                Feather,
                cuboid(0.15, 0.02, 0.2),
                FEATHER,
                [0.35, 1.1 - step * 0.05, 0.3 + step * 0.05],
            )
            .rotated(0.5, 0.0, -0.5),
        );
    }
    for i in 0..10 {
        let step = i as f32;
        list.push(
            part(
                Feather,
                cuboid(0.2, 0.02, 0.15),
                FEATHER,
                [0.0, 1.0 - step * 0.05, -0.8 - step * 0.1],
            )
            .rotated(-0.1, 0.0, 0.0),
        );
    }

    list.into_parts()
}

pub(super) fn long_neck_giant(seed: u64) -> Vec<BodyPart> {
    const SKIN: PartMaterial = PartMaterial::new(0x5F9EA0, 0.8);
    const SHADE: PartMaterial = PartMaterial::new(0x4A777A, 0.8);

    let mut list = PartList::default();
    list.push(part(Torso, capsule(1.8, 3.5), SKIN, [0.0, 3.0, 0.0]))
        .push(part(Neck, capsule(0.7, 6.0), SKIN, [0.0, 5.0, 1.0]).rotated(PI / 3.5, 0.0, 0.0))
        .push(part(Head, capsule(0.6, 1.2), SKIN, [0.0, 8.5, 4.0]).rotated(PI / 2.2, 0.0, 0.0))
        .push(part(Snout, cuboid(0.8, 0.5, 1.0), SKIN, [0.0, 8.7, 4.7]).rotated(PI / 2.5, 0.0, 0.0))
        .pair(part(Nostril, sphere(0.1, 16), SHADE, [0.25, 8.9, 4.9]))
        .pair(part(Eye, sphere(0.15, 16), DARK, [0.4, 8.8, 4.3]))
        .pair(part(Leg, capsule(0.7, 3.5), SKIN, [1.2, 2.0, 1.2]))
        .pair(part(Foot, frustum(0.9, 1.1, 0.6, 5), SKIN, [1.2, 0.4, 1.2]))
        .pair(part(Leg, capsule(0.6, 3.0), SKIN, [1.2, 1.8, -1.5]))
        .pair(part(Foot, frustum(0.8, 1.0, 0.6, 5), SKIN, [1.2, 0.4, -1.5]))
        .push(part(Tail, capsule(0.8, 3.0), SKIN, [0.0, 3.0, -2.5]).rotated(-0.2, 0.0, 0.0))
        .push(part(Tail, capsule(0.4, 2.0), SKIN, [0.0, 2.8, -4.5]).rotated(-0.1, 0.0, 0.0));

    for i in 0..8 {
        let z = -1.0 + i as f32 * 0.4;
        list.push(part(BackRidge, cuboid(1.5, 0.1, 0.2), SHADE, [0.0, 3.5, z]));
    }

    speckles(
        &mut list,
        &mut speckle_source(seed),
        30,
        sphere(0.1, 8),
        SHADE,
        [0.0, 3.0, 0.0],
        [3.0, 2.0, 4.0],
    );

    list.into_parts()
}

pub(super) fn plated_quadruped(seed: u64) -> Vec<BodyPart> {
    const SKIN: PartMaterial = PartMaterial::new(0x8B8878, 0.8);
    const SPIKE: PartMaterial = PartMaterial::new(0xA9A9A9, 0.5);
    const PLATE: PartMaterial = PartMaterial::new(0xA9A9A9, 0.8);

    let mut list = PartList::default();
    list.push(part(Torso, capsule(1.2, 2.8), SKIN, [0.0, 1.5, 0.0]))
        .push(part(Neck, capsule(0.5, 0.8), SKIN, [0.0, 1.6, 1.3]).rotated(FRAC_PI_8, 0.0, 0.0))
        .push(part(Head, capsule(0.4, 0.9), SKIN, [0.0, 1.7, 2.0]).rotated(0.1, 0.0, 0.0))
        .push(part(Snout, cone(0.3, 0.6, 8), SKIN, [0.0, 1.6, 2.4]))
        .pair(part(Eye, sphere(0.08, 16), DARK, [0.25, 1.8, 2.2]))
        .pair(part(Leg, capsule(0.3, 1.6), SKIN, [0.8, 0.9, 0.8]))
        .pair(part(Leg, capsule(0.3, 1.6), SKIN, [0.8, 0.9, -0.8]))
        .pair(part(Foot, frustum(0.4, 0.5, 0.4, 5), SKIN, [0.8, 0.3, 0.8]))
        .pair(part(Foot, frustum(0.4, 0.5, 0.4, 5), SKIN, [0.8, 0.3, -0.8]))
        .push(part(Tail, capsule(0.5, 2.0), SKIN, [0.0, 1.5, -1.5]).rotated(-0.1, 0.0, 0.0))
        .pair(
            part(TailSpike, cone(0.2, 1.0, 4), SPIKE, [0.4, 1.5, -2.5])
                .rotated(0.0, 0.0, FRAC_PI_4),
        );

    // Plates peak mid-back; each carries a fan of ribs
    for i in 0..9 {
        let height = 0.8 + (i as f32 / 8.0 * PI).sin() * 0.6;
        let z = -1.2 + i as f32 * 0.4;
        list.push(
            part(Plate, cone(height, 1.2, 3), PLATE, [0.0, 2.2 + height / 2.0, z])
                .rotated(0.0, 0.0, FRAC_PI_2),
        );
        for j in 0..5 {
            let rib = j as f32;
            list.push(
                part(
                    PlateRib,
                    cuboid(0.05, 0.8 * (1.0 - rib / 5.0), 0.05),
                    SKIN,
                    [0.0, 2.2 + height * (rib + 1.0) / 6.0, z],
                )
                .rotated(0.0, 0.0, FRAC_PI_2),
            );
        }
    }

    speckles(
        &mut list,
        &mut speckle_source(seed),
        25,
        cuboid(0.1, 0.1, 0.1),
        PLATE,
        [0.0, 1.5, 0.0],
        [2.0, 0.8, 2.5],
    );

    list.into_parts()
}
