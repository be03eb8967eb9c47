//! Forward rasterizer: shade at rasterization time.

use prism_core::World;
use prism_math::Vec3;

use crate::framebuffer::Framebuffer;
use crate::raster::rasterize_object;
use crate::renderer::RenderError;
use crate::shading::shade;

/// Single-pass rasterizer with an inline depth test.
///
/// Every covered pixel is lit against all lights the moment its triangle
/// is scan-converted; a later, nearer fragment simply overwrites an
/// earlier, farther one. Shading cost therefore scales with
/// (visible fragments x light count).
pub struct ForwardRasterizer {
    background: Vec3,
    framebuffer: Option<Framebuffer>,
}

impl ForwardRasterizer {
    pub fn new() -> Self {
        Self {
            background: Vec3::ZERO,
            framebuffer: None,
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, background: Vec3) -> Self {
        self.background = background;
        self
    }

    /// Rasterize and shade the world into a fresh framebuffer.
    pub fn render(&mut self, world: &World) -> Result<(), RenderError> {
        let camera = world.camera().ok_or(RenderError::MissingCamera)?;
        let mut framebuffer = Framebuffer::new(camera.width, camera.height, self.background);

        for object in &world.objects {
            rasterize_object(object, &world.materials, camera, |frag| {
                if frag.depth < framebuffer.depth_at(frag.x, frag.y) {
                    let color = shade(frag.base_color, frag.position, frag.normal, &world.lights);
                    framebuffer.put(frag.x, frag.y, color, frag.depth);
                }
            });
        }

        log::debug!(
            "forward pass: {} objects, {} triangles",
            world.objects.len(),
            world.triangle_count()
        );

        self.framebuffer = Some(framebuffer);
        Ok(())
    }

    /// The framebuffer produced by the last render, if any.
    pub fn framebuffer(&self) -> Option<&Framebuffer> {
        self.framebuffer.as_ref()
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

impl Default for ForwardRasterizer {
    fn default() -> Self {
        Self::new()
    }
}
