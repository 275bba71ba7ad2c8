use std::collections::HashMap;

use bevy::picking::Pickable;
use bevy::prelude::*;
use bevy_rapier3d::prelude::{Collider, RigidBody};

use constants::render_settings::HOVER_MARKER_RADIUS;

use super::animation::{Bob, Breathing};
use super::archetype::parts_for_id;
use super::parts::PartMaterial;
use crate::engine::assets::creature_catalog::{CreatureRecord, validate_catalog};
use crate::engine::core::app_state::SceneEntity;
use crate::engine::core::error::SceneError;
use crate::tools::interaction::{
    CreatureHover, HoverMarker, on_creature_click, on_creature_out, on_creature_over,
    on_creature_pressed,
};

/// Fixed body root placed at the creature's world position.
#[derive(Component, Debug)]
pub struct CreatureRoot {
    pub id: &'static str,
}

/// Rotated, scaled body group holding the visual parts. Pointer observers
/// live here.
#[derive(Component, Debug, Clone, Copy)]
pub struct CreatureBody {
    pub record: CreatureRecord,
}

/// Shared handles reused across every creature in one mount.
struct CreatureAssets {
    materials: HashMap<(u32, u32), Handle<StandardMaterial>>,
    marker_mesh: Handle<Mesh>,
    marker_material: Handle<StandardMaterial>,
}

impl CreatureAssets {
    fn new(meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) -> Self {
        Self {
            materials: HashMap::new(),
            marker_mesh: meshes.add(Sphere::new(HOVER_MARKER_RADIUS).mesh().uv(16, 16)),
            marker_material: materials.add(StandardMaterial {
                base_color: Color::WHITE,
                unlit: true,
                ..default()
            }),
        }
    }

    fn material(
        &mut self,
        materials: &mut Assets<StandardMaterial>,
        part_material: &PartMaterial,
    ) -> Handle<StandardMaterial> {
        self.materials
            .entry(part_material.key())
            .or_insert_with(|| {
                materials.add(StandardMaterial {
                    base_color: part_material.base_color(),
                    perceptual_roughness: part_material.roughness,
                    ..default()
                })
            })
            .clone()
    }
}

fn spawn_creature(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    assets: &mut CreatureAssets,
    record: &CreatureRecord,
) -> Entity {
    let placement = &record.transform;
    let half = record.collider_half_extents;

    let parts: Vec<_> = parts_for_id(record.id)
        .into_iter()
        .map(|part| {
            (
                Mesh3d(meshes.add(part.shape.mesh())),
                MeshMaterial3d(assets.material(materials, &part.material)),
                part.transform(),
            )
        })
        .collect();
    if parts.is_empty() {
        warn!("No body template for creature '{}', spawning collider only", record.id);
    }

    let body_transform = Transform::from_rotation(Quat::from_euler(
        EulerRot::XYZ,
        placement.rotation.x,
        placement.rotation.y,
        placement.rotation.z,
    ))
    .with_scale(placement.scale);

    let mut root = commands.spawn((
        CreatureRoot { id: record.id },
        SceneEntity,
        Name::new(record.display_name),
        Transform::from_translation(placement.position),
        Visibility::default(),
        RigidBody::Fixed,
    ));
    if record.animates {
        root.insert(Bob {
            base_y: placement.position.y,
        });
    }

    let marker_mesh = assets.marker_mesh.clone();
    let marker_material = assets.marker_material.clone();
    root.with_children(|root| {
        root.spawn((
            Name::new("Collider"),
            Collider::cuboid(half.x, half.y, half.z),
            Transform::from_translation(record.collider_offset()),
        ));

        root.spawn((
            CreatureBody { record: *record },
            CreatureHover::default(),
            Breathing {
                base_scale_y: placement.scale.y,
            },
            Name::new("Body"),
            body_transform,
            Visibility::default(),
        ))
        .with_children(|body| {
            for bundle in parts {
                body.spawn(bundle);
            }
            body.spawn((
                HoverMarker,
                Mesh3d(marker_mesh),
                MeshMaterial3d(marker_material),
                Transform::from_xyz(0.0, record.label_height(), 0.0),
                Visibility::Hidden,
                Pickable::IGNORE,
            ));
        })
        .observe(on_creature_click)
        .observe(on_creature_pressed)
        .observe(on_creature_over)
        .observe(on_creature_out);
    });

    root.id()
}

/// Spawn every creature of the catalog. The catalog is checked first so a
/// duplicate id fails the whole mount.
pub fn spawn_creatures(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    records: &[CreatureRecord],
) -> Result<Vec<Entity>, SceneError> {
    validate_catalog(records)?;

    let mut assets = CreatureAssets::new(meshes, materials);
    let roots = records
        .iter()
        .map(|record| spawn_creature(commands, meshes, materials, &mut assets, record))
        .collect::<Vec<_>>();

    info!(
        "Spawned {} creatures sharing {} materials",
        roots.len(),
        assets.materials.len()
    );
    Ok(roots)
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;

    use super::*;
    use crate::engine::assets::creature_catalog::{CREATURE_CATALOG, find_creature};

    fn spawn_into(
        world: &mut World,
        records: Vec<CreatureRecord>,
    ) -> Result<Vec<Entity>, SceneError> {
        world
            .run_system_once(
                move |mut commands: Commands,
                      mut meshes: ResMut<Assets<Mesh>>,
                      mut materials: ResMut<Assets<StandardMaterial>>| {
                    spawn_creatures(&mut commands, &mut meshes, &mut materials, &records)
                },
            )
            .expect("spawn system runs")
    }

    fn test_world() -> World {
        let mut world = World::new();
        world.init_resource::<Assets<Mesh>>();
        world.init_resource::<Assets<StandardMaterial>>();
        world
    }

    #[test]
    fn catalog_spawns_one_root_per_creature() {
        let mut world = test_world();
        let roots = spawn_into(&mut world, CREATURE_CATALOG.to_vec()).expect("catalog is valid");
        assert_eq!(roots.len(), 5);

        let bodies: Vec<CreatureBody> = world
            .query::<&CreatureBody>()
            .iter(&world)
            .copied()
            .collect();
        assert_eq!(bodies.len(), 5);

        let bobbing = world.query::<&Bob>().iter(&world).count();
        let animated = CREATURE_CATALOG.iter().filter(|r| r.animates).count();
        assert_eq!(bobbing, animated);
        assert_eq!(world.query::<&HoverMarker>().iter(&world).count(), 5);
    }

    #[test]
    fn root_and_body_carry_the_record_transform() {
        let mut world = test_world();
        let triceratops = *find_creature("triceratops").expect("triceratops in catalog");
        let roots = spawn_into(&mut world, vec![triceratops]).expect("single record is valid");

        let root = world.entity(roots[0]);
        assert_eq!(
            root.get::<Transform>().map(|t| t.translation),
            Some(triceratops.transform.position)
        );
        assert_eq!(root.get::<Bob>().map(|b| b.base_y), Some(0.0));

        let (body_transform, breathing) = world
            .query::<(&Transform, &Breathing)>()
            .single(&world)
            .expect("one body");
        assert_eq!(body_transform.scale, triceratops.transform.scale);
        assert_eq!(breathing.base_scale_y, triceratops.transform.scale.y);
    }

    #[test]
    fn duplicate_ids_fail_the_mount() {
        let mut world = test_world();
        let trex = *find_creature("trex").expect("trex in catalog");
        let result = spawn_into(&mut world, vec![trex, trex]);

        assert_eq!(result, Err(SceneError::DuplicateCreatureId("trex".into())));
        assert_eq!(world.query::<&CreatureRoot>().iter(&world).count(), 0);
    }

    #[test]
    fn unknown_id_gets_collider_and_marker_only() {
        let mut world = test_world();
        let mut stranger = *find_creature("trex").expect("trex in catalog");
        stranger.id = "mammoth";
        spawn_into(&mut world, vec![stranger]).expect("unique id is valid");

        assert_eq!(world.query::<&Collider>().iter(&world).count(), 1);
        assert_eq!(world.query::<&HoverMarker>().iter(&world).count(), 1);
        assert_eq!(world.query::<&Mesh3d>().iter(&world).count(), 1);
    }
}
