//! Prism Core - Scene model for the software rasterizer.
//!
//! This crate provides:
//!
//! - **Geometry**: [`GeometryObject`] with destructive in-place transforms
//! - **Shading inputs**: [`Material`], [`MaterialRegistry`], [`Texture`], [`Color`]
//! - **Scene**: [`World`], [`Light`], [`Camera`]
//! - **Builders**: [`shapes`] for axis-aligned boxes and ground planes
//!
//! # Example
//!
//! ```ignore
//! use prism_core::{shapes, Camera, Color, Light, MaterialRegistry, Projection, World};
//! use prism_math::Vec3;
//!
//! let mut materials = MaterialRegistry::new();
//! let plastic = materials.insert(prism_core::Material::new("flat_plastic"));
//!
//! let mut cube = shapes::plain_box(plastic, Color::RED, Vec3::ZERO, 100.0)?;
//! cube.translate(Vec3::new(150.0, 50.0, 100.0));
//! cube.rotate_quat(45.0, Vec3::Y)?;
//!
//! let mut world = World::new(vec![cube], vec![Light::directional(Color::WHITE, Vec3::new(1.0, 0.4, -1.0))], materials);
//! world.set_camera(Camera::new(Projection::Perspective, Vec3::new(0.0, 200.0, 500.0), Vec3::ZERO, 800, 600));
//! ```

pub mod camera;
pub mod color;
pub mod light;
pub mod material;
pub mod mesh;
pub mod shapes;
pub mod texture;
pub mod world;

// Re-export commonly used types
pub use camera::{Camera, Projection};
pub use color::Color;
pub use light::Light;
pub use material::{Material, MaterialId, MaterialRegistry};
pub use mesh::{GeometryError, GeometryObject};
pub use texture::Texture;
pub use world::World;
