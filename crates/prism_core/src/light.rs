//! Light sources.
//!
//! Lights are a closed set of variants so renderers can match on them
//! exhaustively. Each variant answers one question: how much light arrives
//! at a world point with a given surface normal.

use prism_math::Vec3;

use crate::color::Color;

/// A light source, immutable after construction.
#[derive(Clone, Debug)]
pub enum Light {
    /// Parallel light arriving from a fixed direction.
    Directional {
        color: Color,
        /// Direction the light travels (not toward the light)
        direction: Vec3,
    },

    /// Omnidirectional light at a position, attenuated with distance.
    Point {
        color: Color,
        position: Vec3,
        /// Quadratic attenuation coefficient; 0 disables falloff
        falloff: f32,
    },
}

impl Light {
    /// Create a directional light.
    pub fn directional(color: Color, direction: Vec3) -> Self {
        Self::Directional { color, direction }
    }

    /// Create a point light.
    pub fn point(color: Color, position: Vec3, falloff: f32) -> Self {
        Self::Point {
            color,
            position,
            falloff,
        }
    }

    /// Diffuse contribution of this light at a surface point.
    ///
    /// Returns the light color scaled by the Lambert factor (and distance
    /// attenuation for point lights). Contributions from multiple lights
    /// accumulate additively in the shader.
    pub fn contribution_at(&self, point: Vec3, normal: Vec3) -> Vec3 {
        match self {
            Light::Directional { color, direction } => {
                let Some(dir) = direction.try_normalize() else {
                    return Vec3::ZERO;
                };
                let lambert = normal.dot(-dir).max(0.0);
                Vec3::from(*color) * lambert
            }
            Light::Point {
                color,
                position,
                falloff,
            } => {
                let to_light = *position - point;
                let Some(dir) = to_light.try_normalize() else {
                    // Light sits exactly on the surface point
                    return Vec3::from(*color);
                };
                let lambert = normal.dot(dir).max(0.0);
                let attenuation = 1.0 / (1.0 + falloff * to_light.length_squared());
                Vec3::from(*color) * lambert * attenuation
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directional_head_on() {
        let light = Light::directional(Color::WHITE, Vec3::new(0.0, -1.0, 0.0));
        let c = light.contribution_at(Vec3::ZERO, Vec3::Y);
        assert!((c - Vec3::ONE).length() < 1e-5);
    }

    #[test]
    fn test_directional_backfacing_is_zero() {
        let light = Light::directional(Color::WHITE, Vec3::new(0.0, 1.0, 0.0));
        let c = light.contribution_at(Vec3::ZERO, Vec3::Y);
        assert_eq!(c, Vec3::ZERO);
    }

    #[test]
    fn test_directional_grazing_angle() {
        // 45 degrees off the normal
        let light = Light::directional(Color::WHITE, Vec3::new(1.0, -1.0, 0.0));
        let c = light.contribution_at(Vec3::ZERO, Vec3::Y);
        let expected = (2.0f32).sqrt() / 2.0;
        assert!((c.x - expected).abs() < 1e-5);
    }

    #[test]
    fn test_point_light_falloff() {
        let light = Light::point(Color::WHITE, Vec3::new(0.0, 10.0, 0.0), 0.01);
        let near = light.contribution_at(Vec3::new(0.0, 9.0, 0.0), Vec3::Y);
        let far = light.contribution_at(Vec3::ZERO, Vec3::Y);
        assert!(near.x > far.x);
    }

    #[test]
    fn test_point_light_no_falloff() {
        let light = Light::point(Color::WHITE, Vec3::new(0.0, 10.0, 0.0), 0.0);
        let c = light.contribution_at(Vec3::ZERO, Vec3::Y);
        assert!((c.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_contributions_accumulate() {
        let lights = [
            Light::directional(Color::new(0.5, 0.0, 0.0), Vec3::new(0.0, -1.0, 0.0)),
            Light::directional(Color::new(0.25, 0.0, 0.0), Vec3::new(0.0, -1.0, 0.0)),
        ];
        let total: Vec3 = lights
            .iter()
            .map(|l| l.contribution_at(Vec3::ZERO, Vec3::Y))
            .sum();
        assert!((total.x - 0.75).abs() < 1e-5);
    }
}
