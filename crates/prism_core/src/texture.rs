//! Texture storage and sampling for materials.
//!
//! Textures store pixels in linear RGB float format. They can be loaded
//! from image files or built procedurally (solid colors, checkerboards).

use std::path::Path;

use prism_math::Vec3;
use thiserror::Error;

/// Errors that can occur during texture loading.
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("Failed to load texture: {0}")]
    LoadError(String),

    #[error("Image decoding error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type TextureResult<T> = Result<T, TextureError>;

/// A texture with pixel data in linear RGB, 0-1 range, row-major order.
#[derive(Clone, Debug)]
pub struct Texture {
    /// Texture width in pixels
    pub width: u32,

    /// Texture height in pixels
    pub height: u32,

    /// Pixel data (linear RGB, 0-1 range)
    pub pixels: Vec<Vec3>,
}

impl Texture {
    /// Create a new texture from pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<Vec3>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a solid color texture (1x1).
    pub fn solid(color: Vec3) -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: vec![color],
        }
    }

    /// Create a procedural checkerboard texture.
    ///
    /// `cell` is the side length of one check in pixels.
    pub fn checkerboard(width: u32, height: u32, cell: u32, a: Vec3, b: Vec3) -> Self {
        let cell = cell.max(1);
        let mut pixels = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                if ((x / cell) + (y / cell)) % 2 == 0 {
                    pixels.push(a);
                } else {
                    pixels.push(b);
                }
            }
        }
        Self::new(width, height, pixels)
    }

    /// Load a texture from an image file.
    ///
    /// Pixels are converted from sRGB bytes to linear floats.
    pub fn from_file(path: impl AsRef<Path>) -> TextureResult<Self> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|e| {
            TextureError::LoadError(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();

        let pixels: Vec<Vec3> = rgb
            .pixels()
            .map(|p| {
                Vec3::new(
                    srgb_to_linear(p[0]),
                    srgb_to_linear(p[1]),
                    srgb_to_linear(p[2]),
                )
            })
            .collect();

        log::debug!("Loaded texture: {} ({}x{})", path.display(), width, height);

        Ok(Self::new(width, height, pixels))
    }

    /// Sample the texture at UV coordinates (bilinear filtering).
    ///
    /// UV coordinates wrap, so values outside [0, 1] tile the texture.
    /// (0, 0) is the bottom-left corner.
    pub fn sample(&self, u: f32, v: f32) -> Vec3 {
        // Wrap UV coordinates
        let u = u.rem_euclid(1.0);
        let v = v.rem_euclid(1.0);

        // Convert to pixel coordinates
        let x = u * (self.width as f32 - 1.0);
        let y = (1.0 - v) * (self.height as f32 - 1.0); // Flip V for image coordinates

        // Bilinear interpolation
        let x0 = x.floor() as u32;
        let y0 = y.floor() as u32;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);

        let fx = x.fract();
        let fy = y.fract();

        let p00 = self.get_pixel(x0, y0);
        let p10 = self.get_pixel(x1, y0);
        let p01 = self.get_pixel(x0, y1);
        let p11 = self.get_pixel(x1, y1);

        let top = p00 * (1.0 - fx) + p10 * fx;
        let bottom = p01 * (1.0 - fx) + p11 * fx;

        top * (1.0 - fy) + bottom * fy
    }

    /// Get pixel at integer coordinates.
    fn get_pixel(&self, x: u32, y: u32) -> Vec3 {
        let idx = (y * self.width + x) as usize;
        self.pixels.get(idx).copied().unwrap_or(Vec3::ZERO)
    }
}

/// Convert sRGB byte value to linear float.
fn srgb_to_linear(value: u8) -> f32 {
    let v = value as f32 / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}
