//! Procedural height-displaced terrain with per-vertex colour bands
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy_rapier3d::prelude::{Collider, RigidBody};

use constants::band::{BAND_MAP, BandInfo};
use constants::coordinate_system::transform_coordinates;
use constants::terrain::{
    HEIGHT_AMPLITUDE, HEIGHT_FREQUENCY, TERRAIN_BASE_COLOUR, TERRAIN_METALLIC, TERRAIN_OFFSET_Y,
    TERRAIN_ROUGHNESS,
};

use crate::engine::assets::scene_config::TerrainConfig;
use crate::engine::core::app_state::SceneEntity;
use crate::engine::core::error::SceneError;
use crate::tools::interaction::on_terrain_click;

#[derive(Component)]
pub struct Terrain;

/// Rolling height field, a pure function of the plane-local coordinates.
pub fn terrain_height(x: f32, y: f32) -> f32 {
    (x * HEIGHT_FREQUENCY).sin() * (y * HEIGHT_FREQUENCY).cos() * HEIGHT_AMPLITUDE
}

/// Colour band for a height. Thresholds are strict and checked highest first.
pub fn band_for_height(height: f32) -> &'static BandInfo {
    BAND_MAP
        .iter()
        .find(|band| band.threshold.is_none_or(|threshold| height > threshold))
        .unwrap_or(&BAND_MAP[BAND_MAP.len() - 1])
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainVertex {
    pub x: f32,
    pub y: f32,
    pub height: f32,
    pub rgb: [f32; 3],
}

impl TerrainVertex {
    pub fn world_position(&self) -> [f32; 3] {
        transform_coordinates(self.x, self.y, self.height)
    }
}

/// Plane-local terrain grid plus its triangulation.
#[derive(Debug, Clone)]
pub struct TerrainMesh {
    pub vertices: Vec<TerrainVertex>,
    pub indices: Vec<[u32; 3]>,
}

/// Build a `size x size` grid with `segments` cells per side.
///
/// Rows run from `y = +size/2` down to `-size/2`, columns from `x = -size/2`
/// to `+size/2`. Each cell contributes two counter-clockwise triangles, so the
/// surface faces up once the plane is laid flat.
pub fn generate_terrain(size: f32, segments: u32) -> TerrainMesh {
    let half = size / 2.0;
    let grid = segments + 1;
    let step = size / segments as f32;

    let mut vertices = Vec::with_capacity((grid * grid) as usize);
    for iy in 0..grid {
        let y = half - iy as f32 * step;
        for ix in 0..grid {
            let x = ix as f32 * step - half;
            let height = terrain_height(x, y);
            vertices.push(TerrainVertex {
                x,
                y,
                height,
                rgb: band_for_height(height).rgb,
            });
        }
    }

    let mut indices = Vec::with_capacity((segments * segments * 2) as usize);
    for iy in 0..segments {
        for ix in 0..segments {
            let a = ix + grid * iy;
            let b = ix + grid * (iy + 1);
            let c = (ix + 1) + grid * (iy + 1);
            let d = (ix + 1) + grid * iy;
            indices.push([a, b, d]);
            indices.push([b, c, d]);
        }
    }

    TerrainMesh { vertices, indices }
}

impl TerrainMesh {
    pub fn world_positions(&self) -> Vec<[f32; 3]> {
        self.vertices.iter().map(TerrainVertex::world_position).collect()
    }

    pub fn to_mesh(&self) -> Mesh {
        let colours: Vec<[f32; 4]> = self
            .vertices
            .iter()
            .map(|v| [v.rgb[0], v.rgb[1], v.rgb[2], 1.0])
            .collect();
        let indices: Vec<u32> = self.indices.iter().flatten().copied().collect();

        let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
            .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, self.world_positions())
            .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colours)
            .with_inserted_indices(Indices::U32(indices));
        mesh.compute_smooth_normals();
        mesh
    }

    /// Vertex count per colour band, in band order.
    pub fn band_coverage(&self) -> Vec<(&'static str, usize)> {
        BAND_MAP
            .iter()
            .map(|band| {
                let count = self
                    .vertices
                    .iter()
                    .filter(|v| std::ptr::eq(band_for_height(v.height), band))
                    .count();
                (band.name, count)
            })
            .collect()
    }

    /// Fixed trimesh collider with the exact render triangulation.
    pub fn collider(&self) -> Result<Collider, SceneError> {
        let vertices = self.world_positions().into_iter().map(Vec3::from).collect();
        Collider::trimesh(vertices, self.indices.clone())
            .map_err(|err| SceneError::TerrainCollider(format!("{err:?}")))
    }
}

pub fn spawn_terrain(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    config: &TerrainConfig,
) -> Result<Entity, SceneError> {
    let terrain = generate_terrain(config.size, config.segments);
    let collider = terrain.collider()?;

    let [r, g, b] = TERRAIN_BASE_COLOUR;
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(r, g, b),
        perceptual_roughness: TERRAIN_ROUGHNESS,
        metallic: TERRAIN_METALLIC,
        ..default()
    });

    let entity = commands
        .spawn((
            Terrain,
            SceneEntity,
            Name::new("Terrain"),
            Mesh3d(meshes.add(terrain.to_mesh())),
            MeshMaterial3d(material),
            Transform::from_xyz(0.0, TERRAIN_OFFSET_Y, 0.0),
            RigidBody::Fixed,
            collider,
        ))
        .observe(on_terrain_click)
        .id();

    info!(
        "Terrain generated: {} vertices, {} triangles, bands {:?}",
        terrain.vertices.len(),
        terrain.indices.len(),
        terrain.band_coverage()
    );
    Ok(entity)
}
