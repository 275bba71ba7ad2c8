/// Edge length of the square terrain plane in world units
pub const TERRAIN_SIZE: f32 = 100.0;

/// Subdivisions along each edge of the terrain plane
pub const TERRAIN_SEGMENTS: u32 = 128;

/// Spatial frequency of the rolling height field
pub const HEIGHT_FREQUENCY: f32 = 0.02;

/// Peak displacement of the height field, heights stay within [-A, A]
pub const HEIGHT_AMPLITUDE: f32 = 1.5;

/// Vertical offset applied to the whole terrain entity
pub const TERRAIN_OFFSET_Y: f32 = -0.1;

/// Base colour multiplied with the per-vertex band colours (#5d8a68)
pub const TERRAIN_BASE_COLOUR: [u8; 3] = [0x5d, 0x8a, 0x68];
pub const TERRAIN_ROUGHNESS: f32 = 0.9;
pub const TERRAIN_METALLIC: f32 = 0.1;

/// Uniform scale ranges for scattered props
pub const TREE_SCALE_RANGE: (f32, f32) = (0.8, 1.2);
pub const ROCK_SCALE_RANGE: (f32, f32) = (0.5, 1.0);
