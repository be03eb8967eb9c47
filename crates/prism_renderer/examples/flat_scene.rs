//! Flat-shaded demo scene.
//!
//! A grey ground plane and a handful of vertex-colored boxes, rendered
//! with the forward rasterizer and a perspective camera, exported as PNG.

use anyhow::Result;
use prism_renderer::{
    shapes, Camera, Color, Light, Material, MaterialRegistry, Projection, Renderer, Vec3, World,
};

fn main() -> Result<()> {
    env_logger::init();

    let mut materials = MaterialRegistry::new();
    let plastic = materials.insert(Material::new("flat_plastic"));

    let mut objects = Vec::new();

    let ground = shapes::plain_plane(plastic, Color::GREY, Vec3::ZERO, 500.0)?;
    objects.push(ground);

    let mut flat_box = shapes::plain_box(plastic, Color::RED, Vec3::ZERO, 100.0)?;
    flat_box.translate(Vec3::new(150.0, 50.0, 100.0));
    flat_box.rotate_quat(45.0, Vec3::Y)?;
    objects.push(flat_box);

    let flat_box2 = shapes::plain_box(plastic, Color::CYAN, Vec3::new(150.0, 125.0, 100.0), 50.0)?;
    objects.push(flat_box2);

    let mut flying_box =
        shapes::plain_box(plastic, Color::YELLOW, Vec3::new(-100.0, 120.0, 75.0), 75.0)?;
    flying_box.rotate_euler(45.0, -45.0, 45.0);
    objects.push(flying_box);

    let mut multicolor_box = shapes::multicolor_box(plastic, Vec3::new(-100.0, 50.0, -90.0), 100.0)?;
    multicolor_box.rotate_euler(0.0, -45.0, 0.0);
    objects.push(multicolor_box);

    let small_box =
        shapes::plain_box(plastic, Color::PURPLE, Vec3::new(150.0, 37.5, -220.0), 75.0)?;
    objects.push(small_box);

    let lights = vec![Light::directional(Color::WHITE, Vec3::new(1.0, 0.4, -1.0))];

    let mut world = World::new(objects, lights, materials);

    let mut renderer = Renderer::forward().with_background(Vec3::new(0.1, 0.1, 0.12));
    world.set_camera(Camera::new(
        Projection::Perspective,
        Vec3::new(0.0, 300.0, 600.0),
        Vec3::new(0.0, 50.0, 0.0),
        800,
        600,
    ));

    renderer.render(&world)?;
    renderer.export_output("flat_scene.png")?;

    println!("Rendered flat scene to flat_scene.png");
    Ok(())
}
