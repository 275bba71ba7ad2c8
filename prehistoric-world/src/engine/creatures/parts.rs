use bevy::prelude::*;

/// What a primitive represents in a creature silhouette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartRole {
    Torso,
    Neck,
    Head,
    Jaw,
    Snout,
    Beak,
    Tooth,
    Eye,
    EyeRidge,
    Nostril,
    Horn,
    Frill,
    FrillStud,
    Arm,
    Hand,
    Leg,
    Foot,
    Claw,
    Tail,
    TailSpike,
    BackRidge,
    Feather,
    Plate,
    PlateRib,
    Speckle,
}

/// Primitive solid. Round shapes carry their radial segment count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartShape {
    /// Y-aligned capsule, `length` being the straight section between the caps.
    Capsule { radius: f32, length: f32 },
    Box { size: Vec3 },
    Cone { radius: f32, height: f32, segments: u32 },
    Sphere { radius: f32, segments: u32 },
    Frustum {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        segments: u32,
    },
}

pub fn capsule(radius: f32, length: f32) -> PartShape {
    PartShape::Capsule { radius, length }
}

pub fn cuboid(x: f32, y: f32, z: f32) -> PartShape {
    PartShape::Box {
        size: Vec3::new(x, y, z),
    }
}

pub fn cone(radius: f32, height: f32, segments: u32) -> PartShape {
    PartShape::Cone {
        radius,
        height,
        segments,
    }
}

pub fn sphere(radius: f32, segments: u32) -> PartShape {
    PartShape::Sphere { radius, segments }
}

pub fn frustum(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> PartShape {
    PartShape::Frustum {
        radius_top,
        radius_bottom,
        height,
        segments,
    }
}

impl PartShape {
    pub fn mesh(&self) -> Mesh {
        match *self {
            PartShape::Capsule { radius, length } => Capsule3d::new(radius, length)
                .mesh()
                .longitudes(16)
                .latitudes(8)
                .into(),
            PartShape::Box { size } => Cuboid::from_size(size).into(),
            PartShape::Cone {
                radius,
                height,
                segments,
            } => Cone::new(radius, height).mesh().resolution(segments).into(),
            PartShape::Sphere { radius, segments } => {
                Sphere::new(radius).mesh().uv(segments, segments)
            }
            PartShape::Frustum {
                radius_top,
                radius_bottom,
                height,
                segments,
            } => ConicalFrustum {
                radius_top,
                radius_bottom,
                height,
            }
            .mesh()
            .resolution(segments)
            .into(),
        }
    }
}

/// sRGB colour as `0xRRGGBB` plus PBR roughness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartMaterial {
    pub colour: u32,
    pub roughness: f32,
}

impl PartMaterial {
    pub const fn new(colour: u32, roughness: f32) -> Self {
        Self { colour, roughness }
    }

    pub fn base_color(&self) -> Color {
        let [_, r, g, b] = self.colour.to_be_bytes();
        Color::srgb_u8(r, g, b)
    }

    /// Hashable identity for sharing material handles.
    pub fn key(&self) -> (u32, u32) {
        (self.colour, self.roughness.to_bits())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPart {
    pub role: PartRole,
    pub shape: PartShape,
    pub translation: Vec3,
    /// Euler XYZ angles in radians.
    pub rotation: Vec3,
    pub material: PartMaterial,
}

pub fn part(role: PartRole, shape: PartShape, material: PartMaterial, at: [f32; 3]) -> BodyPart {
    BodyPart {
        role,
        shape,
        translation: Vec3::from(at),
        rotation: Vec3::ZERO,
        material,
    }
}

impl BodyPart {
    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = Vec3::new(x, y, z);
        self
    }

    /// Reflection across the x = 0 plane.
    pub fn mirrored(&self) -> Self {
        Self {
            translation: Vec3::new(-self.translation.x, self.translation.y, self.translation.z),
            rotation: Vec3::new(self.rotation.x, -self.rotation.y, -self.rotation.z),
            ..*self
        }
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.translation).with_rotation(Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        ))
    }
}

/// Ordered part list under construction.
#[derive(Debug, Default)]
pub struct PartList {
    parts: Vec<BodyPart>,
}

impl PartList {
    pub fn push(&mut self, part: BodyPart) -> &mut Self {
        self.parts.push(part);
        self
    }

    /// Push a part and its mirror image on the other side.
    pub fn pair(&mut self, part: BodyPart) -> &mut Self {
        self.parts.push(part);
        self.parts.push(part.mirrored());
        self
    }

    pub fn into_parts(self) -> Vec<BodyPart> {
        self.parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKIN: PartMaterial = PartMaterial::new(0x8B4513, 0.8);

    #[test]
    fn mirroring_reflects_across_the_centre_plane() {
        let arm =
            part(PartRole::Arm, capsule(0.15, 0.6), SKIN, [0.8, 2.3, 0.5]).rotated(0.3, 0.2, -0.3);
        let other = arm.mirrored();

        assert_eq!(other.translation, Vec3::new(-0.8, 2.3, 0.5));
        assert_eq!(other.rotation, Vec3::new(0.3, -0.2, 0.3));
        assert_eq!(other.shape, arm.shape);
        assert_eq!(other.mirrored(), arm);
    }

    #[test]
    fn pair_pushes_both_sides_in_order() {
        let mut list = PartList::default();
        list.push(part(PartRole::Torso, capsule(1.0, 2.5), SKIN, [0.0, 2.0, 0.0]))
            .pair(part(PartRole::Eye, sphere(0.12, 16), SKIN, [0.35, 3.7, 2.3]));
        let parts = list.into_parts();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1].translation.x, 0.35);
        assert_eq!(parts[2].translation.x, -0.35);
    }

    #[test]
    fn material_colour_is_decoded_from_hex() {
        let colour = SKIN.base_color().to_srgba();
        assert!((colour.red - 0x8B as f32 / 255.0).abs() < 1e-6);
        assert!((colour.green - 0x45 as f32 / 255.0).abs() < 1e-6);
        assert!((colour.blue - 0x13 as f32 / 255.0).abs() < 1e-6);
        assert_eq!(SKIN.key(), PartMaterial::new(0x8B4513, 0.8).key());
    }

    #[test]
    fn transform_applies_xyz_euler_rotation() {
        let tooth = part(PartRole::Tooth, cone(0.04, 0.15, 8), SKIN, [0.0, 3.1, 2.5])
            .rotated(std::f32::consts::PI, 0.0, 0.0);
        let tip = tooth.transform().rotation * Vec3::Y;
        assert!((tip - Vec3::NEG_Y).length() < 1e-5);
    }
}
