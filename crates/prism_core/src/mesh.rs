//! Geometry objects with destructive in-place transforms.
//!
//! A [`GeometryObject`] owns a mutable vertex buffer plus immutable
//! topology. Transforms (translate, Euler rotation, axis-angle rotation)
//! rewrite the vertex positions directly; there is no retained model
//! matrix, so repeated transforms compose by successive mutation and the
//! original model-space geometry is not recoverable.

use prism_math::{Mat3, Quat, Vec2, Vec3};
use thiserror::Error;

use crate::color::Color;
use crate::material::MaterialId;

/// Errors raised by geometry construction and transforms.
#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("color buffer has {colors} entries but mesh has {vertices} vertices")]
    ColorCountMismatch { colors: usize, vertices: usize },

    #[error("texture coordinate buffer has {texcoords} entries but mesh has {vertices} vertices")]
    TexCoordCountMismatch { texcoords: usize, vertices: usize },

    #[error("index {index} out of range for {vertices} vertices")]
    IndexOutOfRange { index: u32, vertices: usize },

    #[error("index buffer length {indices} is not a multiple of 3")]
    PartialTriangle { indices: usize },

    #[error("rotation axis must be non-zero")]
    ZeroRotationAxis,

    #[error("side length must be positive, got {side}")]
    NonPositiveSide { side: f32 },
}

/// A triangle mesh with a shared material handle and a transform anchor.
///
/// The vertex buffer is mutable through the transform methods only; the
/// color, texture-coordinate, and index buffers are fixed at construction.
/// An empty color buffer means the object is textured rather than
/// vertex-colored.
#[derive(Clone, Debug)]
pub struct GeometryObject {
    material: MaterialId,
    positions: Vec<Vec3>,
    colors: Vec<Color>,
    texcoords: Vec<Vec2>,
    indices: Vec<u32>,
    center: Vec3,
}

impl GeometryObject {
    /// Create an object from model-space geometry anchored at `center`.
    ///
    /// Vertex positions are given relative to the object's own origin and
    /// are offset by `center` on construction. Validates the buffer-length
    /// and index-range invariants and fails fast on any violation.
    pub fn new(
        material: MaterialId,
        positions: Vec<Vec3>,
        colors: Vec<Color>,
        texcoords: Vec<Vec2>,
        indices: Vec<u32>,
        center: Vec3,
    ) -> Result<Self, GeometryError> {
        let vertices = positions.len();

        if !colors.is_empty() && colors.len() != vertices {
            return Err(GeometryError::ColorCountMismatch {
                colors: colors.len(),
                vertices,
            });
        }

        if !texcoords.is_empty() && texcoords.len() != vertices {
            return Err(GeometryError::TexCoordCountMismatch {
                texcoords: texcoords.len(),
                vertices,
            });
        }

        if indices.len() % 3 != 0 {
            return Err(GeometryError::PartialTriangle {
                indices: indices.len(),
            });
        }

        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertices) {
            return Err(GeometryError::IndexOutOfRange { index, vertices });
        }

        let positions = positions.into_iter().map(|p| p + center).collect();

        Ok(Self {
            material,
            positions,
            colors,
            texcoords,
            indices,
            center,
        })
    }

    /// Material handle shared with the registry.
    pub fn material(&self) -> MaterialId {
        self.material
    }

    /// World-space vertex positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Per-vertex colors; empty for textured objects.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Per-vertex texture coordinates; may be empty.
    pub fn texcoords(&self) -> &[Vec2] {
        &self.texcoords
    }

    /// Triangle index buffer (grouped in triples).
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Current transform anchor.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// True when the object shades from a texture instead of vertex colors.
    pub fn is_textured(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Move every vertex (and the anchor) by `delta`.
    pub fn translate(&mut self, delta: Vec3) {
        for position in &mut self.positions {
            *position += delta;
        }
        self.center += delta;
    }

    /// Rotate in place about the current center by Euler angles in degrees.
    ///
    /// Axis rotations are applied X, then Y, then Z.
    pub fn rotate_euler(&mut self, rx: f32, ry: f32, rz: f32) {
        let rotation = Mat3::from_rotation_z(rz.to_radians())
            * Mat3::from_rotation_y(ry.to_radians())
            * Mat3::from_rotation_x(rx.to_radians());

        for position in &mut self.positions {
            *position = self.center + rotation * (*position - self.center);
        }
    }

    /// Rotate in place about the current center by `angle_degrees` around
    /// `axis`.
    ///
    /// The axis is normalized internally; a zero axis is rejected.
    pub fn rotate_quat(&mut self, angle_degrees: f32, axis: Vec3) -> Result<(), GeometryError> {
        let axis = axis
            .try_normalize()
            .ok_or(GeometryError::ZeroRotationAxis)?;
        let rotation = Quat::from_axis_angle(axis, angle_degrees.to_radians());

        for position in &mut self.positions {
            *position = self.center + rotation * (*position - self.center);
        }

        Ok(())
    }
}
