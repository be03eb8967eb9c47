//! Textured demo scene.
//!
//! Procedurally textured ground and boxes rendered with the deferred
//! rasterizer and a perspective camera, exported as PNG.

use std::sync::Arc;

use anyhow::Result;
use prism_renderer::{
    shapes, Camera, Color, Light, Material, MaterialRegistry, Projection, Renderer, Texture, Vec3,
    World,
};

fn main() -> Result<()> {
    env_logger::init();

    let mut materials = MaterialRegistry::new();

    let brick = materials.insert(Material::new("brick").with_texture(Arc::new(
        Texture::checkerboard(
            64,
            64,
            8,
            Vec3::new(0.65, 0.25, 0.2),
            Vec3::new(0.8, 0.75, 0.7),
        ),
    )));

    let crate_tex = materials.insert(Material::new("crate").with_texture(Arc::new(
        Texture::checkerboard(
            32,
            32,
            16,
            Vec3::new(0.7, 0.5, 0.2),
            Vec3::new(0.45, 0.3, 0.1),
        ),
    )));

    // Intentionally untextured: shades with its (grey) base color fallback
    let plain = materials.insert(Material::new("plain"));

    let mut objects = Vec::new();

    objects.push(shapes::textured_plane(brick, Vec3::ZERO, 500.0)?);

    let mut flat_box = shapes::textured_box(crate_tex, Vec3::ZERO, 100.0)?;
    flat_box.translate(Vec3::new(150.0, 50.0, 100.0));
    flat_box.rotate_euler(0.0, 45.0, 0.0);
    objects.push(flat_box);

    objects.push(shapes::textured_box(
        crate_tex,
        Vec3::new(150.0, 125.0, 100.0),
        50.0,
    )?);

    let mut flying_box = shapes::textured_box(crate_tex, Vec3::new(-100.0, 120.0, 75.0), 75.0)?;
    flying_box.rotate_euler(45.0, -45.0, 45.0);
    objects.push(flying_box);

    let mut small_box1 = shapes::textured_box(crate_tex, Vec3::new(-100.0, 50.0, -90.0), 100.0)?;
    small_box1.rotate_euler(0.0, -45.0, 0.0);
    objects.push(small_box1);

    objects.push(shapes::textured_box(
        plain,
        Vec3::new(150.0, 37.5, -220.0),
        75.0,
    )?);

    let lights = vec![Light::directional(Color::WHITE, Vec3::new(1.0, 0.4, -1.0))];

    let mut world = World::new(objects, lights, materials);

    let mut renderer = Renderer::deferred().with_background(Vec3::new(0.1, 0.1, 0.12));
    world.set_camera(Camera::new(
        Projection::Perspective,
        Vec3::new(0.0, 300.0, 600.0),
        Vec3::new(0.0, 50.0, 0.0),
        800,
        600,
    ));

    renderer.render(&world)?;
    renderer.export_output("textured_scene.png")?;

    println!("Rendered textured scene to textured_scene.png");
    Ok(())
}
