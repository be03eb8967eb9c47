//! Framebuffer: the 2D pixel grid a renderer writes into.

use std::path::Path;

use prism_math::Vec3;

/// Convert a linear color to 8-bit RGBA.
pub fn color_to_rgba(color: Vec3) -> [u8; 4] {
    let r = (255.0 * color.x.clamp(0.0, 1.0)) as u8;
    let g = (255.0 * color.y.clamp(0.0, 1.0)) as u8;
    let b = (255.0 * color.z.clamp(0.0, 1.0)) as u8;
    [r, g, b, 255]
}

/// A color grid with a matching depth grid.
///
/// Renderers create a fresh framebuffer per render() call sized to the
/// camera's image dimensions, so re-rendering overwrites rather than
/// accumulates. Depth starts at infinity; nearest depth wins.
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Vec3>,
    pub depth: Vec<f32>,
}

impl Framebuffer {
    /// Create a framebuffer filled with the background color.
    pub fn new(width: u32, height: u32, background: Vec3) -> Self {
        let count = (width * height) as usize;
        Self {
            width,
            height,
            pixels: vec![background; count],
            depth: vec![f32::INFINITY; count],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    /// Get the color at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[self.index(x, y)]
    }

    /// Get the depth at (x, y).
    pub fn depth_at(&self, x: u32, y: u32) -> f32 {
        self.depth[self.index(x, y)]
    }

    /// Write a color and its depth at (x, y).
    pub fn put(&mut self, x: u32, y: u32, color: Vec3, depth: f32) {
        let idx = self.index(x, y);
        self.pixels[idx] = color;
        self.depth[idx] = depth;
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }

    /// Save the framebuffer as a PNG image.
    pub fn save_png(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        let img = image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba(color_to_rgba(self.get(x, y)))
        });
        img.save(path.as_ref())?;
        log::info!(
            "exported {}x{} framebuffer to {}",
            self.width,
            self.height,
            path.as_ref().display()
        );
        Ok(())
    }
}
