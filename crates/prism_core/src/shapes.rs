//! Scene-builder helpers for primitive shapes.
//!
//! These produce the literal vertex / texture-coordinate / index tables for
//! axis-aligned boxes and horizontal planes, centered on the object origin,
//! with triangles wound for outward-facing normals. The resulting
//! [`GeometryObject`]s are positioned by the `center` argument and can then
//! be moved with the transform methods.

use prism_math::{Vec2, Vec3};

use crate::color::Color;
use crate::material::MaterialId;
use crate::mesh::{GeometryError, GeometryObject};

/// Vertex positions, texture coordinates, and indices for an axis-aligned
/// box of the given side length, centered at the origin.
///
/// The box uses 4 vertices per face (24 total) so each face can carry its
/// own texture coordinates and colors.
pub fn aligned_box(side: f32) -> Result<(Vec<Vec3>, Vec<Vec2>, Vec<u32>), GeometryError> {
    if side <= 0.0 {
        return Err(GeometryError::NonPositiveSide { side });
    }
    let h = side / 2.0;

    // Front
    let v1 = Vec3::new(-h, -h, -h);
    let v2 = Vec3::new(-h, h, -h);
    let v3 = Vec3::new(h, h, -h);
    let v4 = Vec3::new(h, -h, -h);
    // Back
    let v5 = Vec3::new(-h, -h, h);
    let v6 = Vec3::new(-h, h, h);
    let v7 = Vec3::new(h, h, h);
    let v8 = Vec3::new(h, -h, h);

    let vertices = vec![
        // Front face
        v1, v2, v3, v4,
        // Back face
        v5, v6, v7, v8,
        // Top face
        v2, v6, v7, v3,
        // Bottom face
        v1, v5, v8, v4,
        // Left face
        v1, v2, v6, v5,
        // Right face
        v4, v3, v7, v8,
    ];

    let texcoords = vec![
        // Front face
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(1.0, 0.0),
        // Back face
        Vec2::new(1.0, 1.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 1.0),
        // Top face
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(1.0, 0.0),
        // Bottom face
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(1.0, 0.0),
        // Left face
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(0.0, 0.0),
        // Right face
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(1.0, 0.0),
    ];

    let indices = vec![
        // Front face
        0, 1, 2, 2, 3, 0,
        // Back face
        6, 5, 4, 4, 7, 6,
        // Top face
        8, 9, 10, 10, 11, 8,
        // Bottom face
        14, 13, 12, 12, 15, 14,
        // Left face
        16, 19, 18, 18, 17, 16,
        // Right face
        20, 21, 22, 22, 23, 20,
    ];

    Ok((vertices, texcoords, indices))
}

/// Vertex positions, texture coordinates, and indices for a horizontal
/// (XZ-plane) square of the given side length, centered at the origin,
/// facing +Y. Texture coordinates run 0..2 so textures tile twice.
pub fn horizontal_plane(side: f32) -> Result<(Vec<Vec3>, Vec<Vec2>, Vec<u32>), GeometryError> {
    if side <= 0.0 {
        return Err(GeometryError::NonPositiveSide { side });
    }
    let h = side / 2.0;

    let vertices = vec![
        Vec3::new(-h, 0.0, -h),
        Vec3::new(-h, 0.0, h),
        Vec3::new(h, 0.0, h),
        Vec3::new(h, 0.0, -h),
    ];

    let texcoords = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 2.0),
        Vec2::new(2.0, 2.0),
        Vec2::new(2.0, 0.0),
    ];

    let indices = vec![0, 1, 2, 2, 3, 0];

    Ok((vertices, texcoords, indices))
}

/// A box shaded with a single vertex color on every face.
pub fn plain_box(
    material: MaterialId,
    color: Color,
    center: Vec3,
    side: f32,
) -> Result<GeometryObject, GeometryError> {
    let (vertices, texcoords, indices) = aligned_box(side)?;
    let colors = vec![color; vertices.len()];
    GeometryObject::new(material, vertices, colors, texcoords, indices, center)
}

/// A box with a different color on each corner of each face.
pub fn multicolor_box(
    material: MaterialId,
    center: Vec3,
    side: f32,
) -> Result<GeometryObject, GeometryError> {
    let colors = vec![
        Color::GREEN,
        Color::YELLOW,
        Color::WHITE,
        Color::CYAN,
        //
        Color::BLACK,
        Color::BLACK,
        Color::BLACK,
        Color::BLACK,
        //
        Color::YELLOW,
        Color::RED,
        Color::PURPLE,
        Color::WHITE,
        //
        Color::BLACK,
        Color::BLACK,
        Color::BLACK,
        Color::BLACK,
        //
        Color::BLACK,
        Color::BLACK,
        Color::BLACK,
        Color::BLACK,
        //
        Color::CYAN,
        Color::WHITE,
        Color::PURPLE,
        Color::BLUE,
    ];

    let (vertices, texcoords, indices) = aligned_box(side)?;
    GeometryObject::new(material, vertices, colors, texcoords, indices, center)
}

/// A box shaded from its material's texture.
pub fn textured_box(
    material: MaterialId,
    center: Vec3,
    side: f32,
) -> Result<GeometryObject, GeometryError> {
    let (vertices, texcoords, indices) = aligned_box(side)?;
    GeometryObject::new(material, vertices, vec![], texcoords, indices, center)
}

/// A ground plane shaded with a single vertex color.
pub fn plain_plane(
    material: MaterialId,
    color: Color,
    center: Vec3,
    side: f32,
) -> Result<GeometryObject, GeometryError> {
    let (vertices, texcoords, indices) = horizontal_plane(side)?;
    let colors = vec![color; vertices.len()];
    GeometryObject::new(material, vertices, colors, texcoords, indices, center)
}

/// A ground plane shaded from its material's texture.
pub fn textured_plane(
    material: MaterialId,
    center: Vec3,
    side: f32,
) -> Result<GeometryObject, GeometryError> {
    let (vertices, texcoords, indices) = horizontal_plane(side)?;
    GeometryObject::new(material, vertices, vec![], texcoords, indices, center)
}
