//! Per-fragment lighting.

use prism_core::Light;
use prism_math::Vec3;

/// Shade a fragment against every light in the scene.
///
/// Light contributions accumulate additively, modulate the base color
/// componentwise, and the result is clamped to the valid color range.
/// Both rasterizer variants call this with identical inputs, which is what
/// makes their outputs match in the absence of overdraw.
pub fn shade(base_color: Vec3, position: Vec3, normal: Vec3, lights: &[Light]) -> Vec3 {
    let mut total = Vec3::ZERO;
    for light in lights {
        total += light.contribution_at(position, normal);
    }
    (base_color * total).clamp(Vec3::ZERO, Vec3::ONE)
}
