//! Decorative props: scattered tree and rock clusters plus fixed hills
use std::f32::consts::{FRAC_PI_2, TAU};

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use constants::terrain::{ROCK_SCALE_RANGE, TREE_SCALE_RANGE};

use crate::engine::assets::scene_config::{ClusterConfig, HillConfig, SceneConfig};
use crate::engine::core::app_state::SceneEntity;

/// Source of uniform samples in `[0, 1)` used for prop placement. Scripted
/// sources may also return exactly 1.0.
pub trait UnitSource {
    fn unit(&mut self) -> f32;
}

/// Adapter over any `rand` generator.
pub struct RngSource<R: Rng>(pub R);

impl<R: Rng> UnitSource for RngSource<R> {
    fn unit(&mut self) -> f32 {
        self.0.gen_range(0.0..1.0)
    }
}

impl RngSource<ChaCha8Rng> {
    /// Seeded when a seed is given, otherwise drawn from OS entropy.
    pub fn for_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(ChaCha8Rng::seed_from_u64(seed)),
            None => Self(ChaCha8Rng::from_entropy()),
        }
    }
}

/// Replays a fixed list of samples, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<f32>,
    cursor: usize,
}

impl FixedSequence {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl UnitSource for FixedSequence {
    fn unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropArchetype {
    Tree,
    Rock,
}

impl PropArchetype {
    pub fn scale_range(self) -> (f32, f32) {
        match self {
            PropArchetype::Tree => TREE_SCALE_RANGE,
            PropArchetype::Rock => ROCK_SCALE_RANGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropCluster {
    pub archetype: PropArchetype,
    pub anchor: Vec3,
    pub count: u32,
    pub spread: f32,
}

impl PropCluster {
    pub fn from_config(archetype: PropArchetype, config: &ClusterConfig) -> Self {
        Self {
            archetype,
            anchor: Vec3::from(config.anchor),
            count: config.count,
            spread: config.spread,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropInstance {
    pub archetype: PropArchetype,
    /// World position, the cluster anchor plus the scattered offset.
    pub position: Vec3,
    pub scale: f32,
    pub rotation_y: f32,
}

/// Scatter one cluster. Each instance draws x, z, scale and yaw in that order.
pub fn scatter_cluster(cluster: &PropCluster, source: &mut impl UnitSource) -> Vec<PropInstance> {
    let (min_scale, max_scale) = cluster.archetype.scale_range();
    (0..cluster.count)
        .map(|_| {
            let x = (source.unit() - 0.5) * cluster.spread;
            let z = (source.unit() - 0.5) * cluster.spread;
            let scale = min_scale + source.unit() * (max_scale - min_scale);
            // A sample of exactly 1.0 wraps to 0 so yaw stays in [0, TAU)
            let rotation_y = (source.unit() * TAU).rem_euclid(TAU);
            PropInstance {
                archetype: cluster.archetype,
                position: cluster.anchor + Vec3::new(x, 0.0, z),
                scale,
                rotation_y,
            }
        })
        .collect()
}

/// Every prop instance for a scene layout, trees first.
pub fn scatter_props(config: &SceneConfig, source: &mut impl UnitSource) -> Vec<PropInstance> {
    let trees = config
        .trees
        .iter()
        .map(|c| PropCluster::from_config(PropArchetype::Tree, c));
    let rocks = config
        .rocks
        .iter()
        .map(|c| PropCluster::from_config(PropArchetype::Rock, c));

    trees
        .chain(rocks)
        .flat_map(|cluster| scatter_cluster(&cluster, source))
        .collect()
}

/// Upper half of a UV sphere, open at the base and resting on `y = 0`.
pub fn dome_mesh(radius: f32, sectors: u32, stacks: u32) -> Mesh {
    let ring = sectors + 1;
    let mut positions = Vec::with_capacity((ring * (stacks + 1)) as usize);
    let mut normals = Vec::with_capacity(positions.capacity());
    let mut uvs = Vec::with_capacity(positions.capacity());

    for i in 0..=stacks {
        let polar = FRAC_PI_2 * i as f32 / stacks as f32;
        for j in 0..=sectors {
            let azimuth = TAU * j as f32 / sectors as f32;
            let normal = Vec3::new(
                polar.sin() * azimuth.cos(),
                polar.cos(),
                polar.sin() * azimuth.sin(),
            );
            positions.push((normal * radius).to_array());
            normals.push(normal.to_array());
            uvs.push([j as f32 / sectors as f32, i as f32 / stacks as f32]);
        }
    }

    let mut indices = Vec::with_capacity((sectors * stacks * 6) as usize);
    for i in 0..stacks {
        for j in 0..sectors {
            let a = i * ring + j;
            let b = a + ring;
            let c = b + 1;
            let d = a + 1;
            indices.extend_from_slice(&[a, d, b, b, d, c]);
        }
    }

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices))
}

struct PropPiece {
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
    transform: Transform,
}

/// Shared mesh and material handles for each prop shape, built once per mount.
struct PropKit {
    tree: Vec<PropPiece>,
    rock: Vec<PropPiece>,
    hill: Vec<PropPiece>,
}

fn material(
    materials: &mut Assets<StandardMaterial>,
    hex: &str,
    roughness: f32,
    metallic: f32,
) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: Srgba::hex(hex).map(Color::from).unwrap_or(Color::WHITE),
        perceptual_roughness: roughness,
        metallic,
        ..default()
    })
}

impl PropKit {
    fn new(meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) -> Self {
        let bark = material(materials, "#8B4513", 0.9, 0.0);
        let pine = material(materials, "#2E8B57", 0.8, 0.0);
        let leaf = material(materials, "#3CB371", 0.8, 0.0);

        let tree = vec![
            PropPiece {
                mesh: meshes.add(ConicalFrustum {
                    radius_top: 0.5,
                    radius_bottom: 0.8,
                    height: 4.0,
                }
                .mesh()
                .resolution(8)),
                material: bark,
                transform: Transform::from_xyz(0.0, 2.0, 0.0),
            },
            PropPiece {
                mesh: meshes.add(Cone::new(2.0, 6.0).mesh().resolution(8)),
                material: pine.clone(),
                transform: Transform::from_xyz(0.0, 5.0, 0.0),
            },
            PropPiece {
                mesh: meshes.add(Cone::new(2.5, 4.0).mesh().resolution(8)),
                material: leaf,
                transform: Transform::from_xyz(0.0, 4.0, 0.0),
            },
            PropPiece {
                mesh: meshes.add(Cone::new(3.0, 3.0).mesh().resolution(8)),
                material: pine,
                transform: Transform::from_xyz(0.0, 3.0, 0.0),
            },
        ];

        let boulder = |meshes: &mut Assets<Mesh>, radius: f32| {
            meshes.add(Sphere::new(radius).mesh().uv(7, 5))
        };
        let rotated = |x: f32, y: f32, z: f32, rotation: [f32; 3]| {
            Transform::from_xyz(x, y, z).with_rotation(Quat::from_euler(
                EulerRot::XYZ,
                rotation[0],
                rotation[1],
                rotation[2],
            ))
        };
        let rock = vec![
            PropPiece {
                mesh: boulder(meshes, 1.5),
                material: material(materials, "#777777", 0.8, 0.0),
                transform: rotated(0.0, 0.7, 0.0, [0.2, 0.5, 0.1]),
            },
            PropPiece {
                mesh: boulder(meshes, 0.7),
                material: material(materials, "#888888", 0.9, 0.0),
                transform: rotated(1.0, 0.4, 0.5, [0.1, 0.3, 0.2]),
            },
            PropPiece {
                mesh: boulder(meshes, 0.5),
                material: material(materials, "#666666", 0.9, 0.0),
                transform: rotated(-0.8, 0.3, -0.6, [0.3, 0.2, 0.1]),
            },
        ];

        let moss = material(materials, "#4a6d53", 0.9, 0.1);
        let meadow = material(materials, "#5d8a68", 0.9, 0.1);
        let dome = |meshes: &mut Assets<Mesh>, radius: f32| meshes.add(dome_mesh(radius, 16, 16));
        let hill = vec![
            PropPiece {
                mesh: dome(meshes, 5.0),
                material: moss.clone(),
                transform: Transform::IDENTITY,
            },
            PropPiece {
                mesh: dome(meshes, 2.0),
                material: meadow,
                transform: Transform::from_xyz(2.0, 0.5, 1.0),
            },
            PropPiece {
                mesh: dome(meshes, 1.5),
                material: moss,
                transform: Transform::from_xyz(-1.0, 0.2, -2.0),
            },
        ];

        Self { tree, rock, hill }
    }

    fn pieces(&self, archetype: PropArchetype) -> &[PropPiece] {
        match archetype {
            PropArchetype::Tree => &self.tree,
            PropArchetype::Rock => &self.rock,
        }
    }
}

fn spawn_group(commands: &mut Commands, name: String, transform: Transform, pieces: &[PropPiece]) {
    commands
        .spawn((SceneEntity, Name::new(name), transform, Visibility::default()))
        .with_children(|group| {
            for piece in pieces {
                group.spawn((
                    Mesh3d(piece.mesh.clone()),
                    MeshMaterial3d(piece.material.clone()),
                    piece.transform,
                ));
            }
        });
}

/// Spawn scattered trees and rocks plus the fixed hills. Returns the instance count.
pub fn spawn_props(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    config: &SceneConfig,
) -> usize {
    let kit = PropKit::new(meshes, materials);
    let mut source = RngSource::for_seed(config.prop_seed);
    let instances = scatter_props(config, &mut source);

    for (i, prop) in instances.iter().enumerate() {
        let transform = Transform::from_translation(prop.position)
            .with_rotation(Quat::from_rotation_y(prop.rotation_y))
            .with_scale(Vec3::splat(prop.scale));
        spawn_group(
            commands,
            format!("{:?} {i}", prop.archetype),
            transform,
            kit.pieces(prop.archetype),
        );
    }

    for (i, HillConfig { position, scale }) in config.hills.iter().enumerate() {
        let transform =
            Transform::from_translation(Vec3::from(*position)).with_scale(Vec3::from(*scale));
        spawn_group(commands, format!("Hill {i}"), transform, &kit.hill);
    }

    info!(
        "Scattered {} props and {} hills (seed: {:?})",
        instances.len(),
        config.hills.len(),
        config.prop_seed
    );
    instances.len() + config.hills.len()
}
