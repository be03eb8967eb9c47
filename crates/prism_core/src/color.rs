//! Normalized RGB color values.

use prism_math::Vec3;

/// A normalized RGB color with components in [0, 1].
///
/// The default color is opaque white. Colors convert to and from [`Vec3`]
/// so lighting math (interpolation, attenuation) can use plain vector
/// arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const GREY: Color = Color::new(0.5, 0.5, 0.5);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    pub const CYAN: Color = Color::new(0.0, 1.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
    pub const PURPLE: Color = Color::new(1.0, 0.0, 1.0);

    /// Create a color from individual components.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a grey color with all components equal.
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }
}

impl Default for Color {
    /// Opaque white.
    fn default() -> Self {
        Color::WHITE
    }
}

impl From<Color> for Vec3 {
    fn from(color: Color) -> Vec3 {
        Vec3::new(color.r, color.g, color.b)
    }
}

impl From<Vec3> for Color {
    fn from(v: Vec3) -> Color {
        Color::new(v.x, v.y, v.z)
    }
}
