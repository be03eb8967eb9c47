//! Prism Renderer - CPU rasterization.
//!
//! Two structurally different rasterizers share one scene model:
//!
//! - [`ForwardRasterizer`] shades every covered pixel as triangles are
//!   scan-converted, so shading cost scales with visible fragments.
//! - [`DeferredRasterizer`] first resolves visibility into a [`GBuffer`],
//!   then lights every pixel exactly once, decoupling shading cost from
//!   scene overdraw.
//!
//! Both are driven through the [`Renderer`] variant type.

mod deferred;
mod forward;
mod framebuffer;
mod raster;
mod renderer;
mod shading;

pub use deferred::{DeferredRasterizer, GBuffer, GSample};
pub use forward::ForwardRasterizer;
pub use framebuffer::{color_to_rgba, Framebuffer};
pub use renderer::{RenderError, Renderer};
pub use shading::shade;

/// Re-export the scene model and math types for convenience
pub use prism_core::{
    shapes, Camera, Color, GeometryError, GeometryObject, Light, Material, MaterialId,
    MaterialRegistry, Projection, Texture, World,
};
pub use prism_math::{Vec2, Vec3};
