//! Deferred rasterizer: resolve visibility first, light once per pixel.

use prism_core::{MaterialId, World};
use prism_math::Vec3;
use rayon::prelude::*;

use crate::framebuffer::Framebuffer;
use crate::raster::rasterize_object;
use crate::renderer::RenderError;
use crate::shading::shade;

/// Per-pixel geometric and material attributes captured in the first pass.
#[derive(Debug, Clone, Copy)]
pub struct GSample {
    pub depth: f32,
    pub position: Vec3,
    pub normal: Vec3,
    pub base_color: Vec3,
    pub material: MaterialId,
}

/// Intermediate attribute buffer between the two deferred passes.
///
/// `None` marks pixels no triangle covered; they become background in the
/// shading pass.
pub struct GBuffer {
    pub width: u32,
    pub height: u32,
    pub samples: Vec<Option<GSample>>,
}

impl GBuffer {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            samples: vec![None; (width * height) as usize],
        }
    }

    fn depth_at(&self, idx: usize) -> f32 {
        self.samples[idx].map_or(f32::INFINITY, |s| s.depth)
    }

    /// Number of pixels covered by at least one triangle.
    pub fn coverage(&self) -> usize {
        self.samples.iter().filter(|s| s.is_some()).count()
    }
}

/// Two-pass rasterizer.
///
/// Pass 1 scan-converts all geometry into a [`GBuffer`], keeping only the
/// nearest sample per pixel and doing no lighting math. Pass 2 walks every
/// pixel exactly once and lights it, so shading cost scales with
/// (pixel count x light count) regardless of overdraw.
pub struct DeferredRasterizer {
    background: Vec3,
    framebuffer: Option<Framebuffer>,
    gbuffer: Option<GBuffer>,
}

impl DeferredRasterizer {
    pub fn new() -> Self {
        Self {
            background: Vec3::ZERO,
            framebuffer: None,
            gbuffer: None,
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, background: Vec3) -> Self {
        self.background = background;
        self
    }

    /// Run both passes into a fresh framebuffer.
    pub fn render(&mut self, world: &World) -> Result<(), RenderError> {
        let camera = world.camera().ok_or(RenderError::MissingCamera)?;

        // Pass 1: geometry. Nearest depth wins; no lighting.
        let mut gbuffer = GBuffer::new(camera.width, camera.height);
        for object in &world.objects {
            rasterize_object(object, &world.materials, camera, |frag| {
                let idx = (frag.y * gbuffer.width + frag.x) as usize;
                if frag.depth < gbuffer.depth_at(idx) {
                    gbuffer.samples[idx] = Some(GSample {
                        depth: frag.depth,
                        position: frag.position,
                        normal: frag.normal,
                        base_color: frag.base_color,
                        material: frag.material,
                    });
                }
            });
        }

        log::debug!(
            "deferred geometry pass: {} triangles, {} of {} pixels covered",
            world.triangle_count(),
            gbuffer.coverage(),
            gbuffer.samples.len()
        );

        // Pass 2: lighting. Each pixel is independent once the attribute
        // buffer is finalized, so shade them in parallel.
        let background = self.background;
        let pixels: Vec<Vec3> = gbuffer
            .samples
            .par_iter()
            .map(|sample| match sample {
                Some(s) => shade(s.base_color, s.position, s.normal, &world.lights),
                None => background,
            })
            .collect();

        let mut framebuffer = Framebuffer::new(camera.width, camera.height, background);
        framebuffer.pixels = pixels;
        framebuffer.depth = gbuffer
            .samples
            .iter()
            .map(|s| s.map_or(f32::INFINITY, |g| g.depth))
            .collect();

        self.framebuffer = Some(framebuffer);
        self.gbuffer = Some(gbuffer);
        Ok(())
    }

    /// The framebuffer produced by the last render, if any.
    pub fn framebuffer(&self) -> Option<&Framebuffer> {
        self.framebuffer.as_ref()
    }

    /// The attribute buffer produced by the last render's geometry pass,
    /// if any. Useful for inspecting coverage and per-pixel attributes
    /// independently of lighting.
    pub fn gbuffer(&self) -> Option<&GBuffer> {
        self.gbuffer.as_ref()
    }

    /// Export the last rendered framebuffer as a PNG.
    pub fn export_output(&self, name: &str) -> Result<(), RenderError> {
        let framebuffer = self
            .framebuffer
            .as_ref()
            .ok_or(RenderError::NothingRendered)?;
        framebuffer.save_png(name)?;
        Ok(())
    }
}

impl Default for DeferredRasterizer {
    fn default() -> Self {
        Self::new()
    }
}
