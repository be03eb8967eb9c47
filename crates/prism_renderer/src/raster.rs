//! Shared scan conversion.
//!
//! Both rasterizer variants walk triangles with the same projection, edge
//! functions, and barycentric attribute interpolation, so a fragment shaded
//! forward and a fragment shaded deferred start from identical inputs.

use prism_core::{Camera, GeometryObject, MaterialId, MaterialRegistry};
use prism_math::{Vec2, Vec3};

/// Triangles whose screen-space area is below this are skipped as
/// degenerate (edge-on or zero-size after projection).
const MIN_TRIANGLE_AREA: f32 = 1e-6;

/// A candidate pixel produced by scan conversion, before the depth test.
#[derive(Debug, Clone, Copy)]
pub struct Fragment {
    pub x: u32,
    pub y: u32,
    /// View depth; smaller is nearer
    pub depth: f32,
    /// Interpolated world-space position
    pub position: Vec3,
    /// Face normal in world space
    pub normal: Vec3,
    /// Resolved base color: interpolated vertex color, texture sample,
    /// or the material fallback
    pub base_color: Vec3,
    pub material: MaterialId,
}

/// Signed parallelogram area of edge (a, b) against point (px, py).
#[inline]
fn edge(a: Vec3, b: Vec3, px: f32, py: f32) -> f32 {
    (b.x - a.x) * (py - a.y) - (b.y - a.y) * (px - a.x)
}

/// Scan-convert every triangle of `object` through `camera`, emitting one
/// [`Fragment`] per covered pixel.
///
/// Triangles behind the camera or degenerate after projection are skipped.
/// The caller applies the depth test; this function only determines
/// coverage and interpolates attributes.
pub(crate) fn rasterize_object(
    object: &GeometryObject,
    materials: &MaterialRegistry,
    camera: &Camera,
    mut emit: impl FnMut(Fragment),
) {
    let material = materials.get(object.material());
    let positions = object.positions();
    let colors = object.colors();
    let texcoords = object.texcoords();

    for [i0, i1, i2] in object.triangles() {
        let (i0, i1, i2) = (i0 as usize, i1 as usize, i2 as usize);
        let (p0, p1, p2) = (positions[i0], positions[i1], positions[i2]);

        // Cull triangles with any vertex behind the eye plane
        let (Some(s0), Some(s1), Some(s2)) =
            (camera.project(p0), camera.project(p1), camera.project(p2))
        else {
            continue;
        };

        let area = edge(s0, s1, s2.x, s2.y);
        if area.abs() < MIN_TRIANGLE_AREA {
            continue;
        }

        let Some(normal) = (p1 - p0).cross(p2 - p0).try_normalize() else {
            continue;
        };

        // Clamped screen-space bounding box
        let min_x = s0.x.min(s1.x).min(s2.x).floor().max(0.0) as u32;
        let min_y = s0.y.min(s1.y).min(s2.y).floor().max(0.0) as u32;
        let max_x = s0.x.max(s1.x).max(s2.x).ceil().min(camera.width as f32) as u32;
        let max_y = s0.y.max(s1.y).max(s2.y).ceil().min(camera.height as f32) as u32;

        for y in min_y..max_y {
            for x in min_x..max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;

                // Barycentric weights; dividing by the signed area makes
                // the inside test independent of winding orientation
                let w0 = edge(s1, s2, px, py) / area;
                let w1 = edge(s2, s0, px, py) / area;
                let w2 = edge(s0, s1, px, py) / area;

                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }

                let depth = w0 * s0.z + w1 * s1.z + w2 * s2.z;
                let position = p0 * w0 + p1 * w1 + p2 * w2;

                let base_color = if !colors.is_empty() {
                    Vec3::from(colors[i0]) * w0
                        + Vec3::from(colors[i1]) * w1
                        + Vec3::from(colors[i2]) * w2
                } else if !texcoords.is_empty() {
                    match &material.texture {
                        Some(texture) => {
                            let uv: Vec2 = texcoords[i0] * w0
                                + texcoords[i1] * w1
                                + texcoords[i2] * w2;
                            texture.sample(uv.x, uv.y)
                        }
                        // No texture bound: deterministic fallback
                        None => material.base_color,
                    }
                } else {
                    // Neither vertex colors nor texture coordinates
                    material.base_color
                };

                emit(Fragment {
                    x,
                    y,
                    depth,
                    position,
                    normal,
                    base_color,
                    material: object.material(),
                });
            }
        }
    }
}
