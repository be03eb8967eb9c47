//! Renderer variants and errors.

use prism_core::World;
use prism_math::Vec3;
use thiserror::Error;

use crate::deferred::DeferredRasterizer;
use crate::forward::ForwardRasterizer;
use crate::framebuffer::Framebuffer;

/// Errors raised by rendering and export.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("render() called on a world with no camera attached")]
    MissingCamera,

    #[error("export_output() called before any render()")]
    NothingRendered,

    #[error("image export error: {0}")]
    Image(#[from] image::ImageError),
}

/// A renderer, polymorphic over the closed set of rasterization strategies.
///
/// Matching on the variant keeps dispatch exhaustive; adding a strategy is
/// a compile-visible change everywhere a renderer is consumed.
pub enum Renderer {
    Forward(ForwardRasterizer),
    Deferred(DeferredRasterizer),
}

impl Renderer {
    /// Create a forward renderer.
    pub fn forward() -> Self {
        Renderer::Forward(ForwardRasterizer::new())
    }

    /// Create a deferred renderer.
    pub fn deferred() -> Self {
        Renderer::Deferred(DeferredRasterizer::new())
    }

    /// Set the background color.
    pub fn with_background(self, background: Vec3) -> Self {
        match self {
            Renderer::Forward(r) => Renderer::Forward(r.with_background(background)),
            Renderer::Deferred(r) => Renderer::Deferred(r.with_background(background)),
        }
    }

    /// Render the world into this renderer's framebuffer.
    ///
    /// Idempotent: each call starts from a fresh framebuffer sized to the
    /// camera's image dimensions.
    ///
    /// There is no eye-plane clipping: a triangle with any vertex at or
    /// behind the eye plane is culled whole, so geometry that straddles the
    /// camera (a large ground plane under a perspective camera, say) drops
    /// out rather than being partially drawn. Keep the camera clear of
    /// scene geometry.
    pub fn render(&mut self, world: &World) -> Result<(), RenderError> {
        match self {
            Renderer::Forward(r) => r.render(world),
            Renderer::Deferred(r) => r.render(world),
        }
    }

    /// Export the last rendered framebuffer to a named PNG artifact.
    pub fn export_output(&self, name: &str) -> Result<(), RenderError> {
        match self {
            Renderer::Forward(r) => r.export_output(name),
            Renderer::Deferred(r) => r.export_output(name),
        }
    }

    /// The framebuffer produced by the last render, if any.
    pub fn framebuffer(&self) -> Option<&Framebuffer> {
        match self {
            Renderer::Forward(r) => r.framebuffer(),
            Renderer::Deferred(r) => r.framebuffer(),
        }
    }
}
