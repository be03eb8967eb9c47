//! End-to-end pipeline tests: scene assembly through rasterization and
//! export, exercising both renderer variants and both camera projections.

use prism_renderer::{
    shapes, Camera, Color, GeometryObject, Light, Material, MaterialId, MaterialRegistry,
    Projection, Renderer, Vec3, World,
};

const BACKGROUND: Vec3 = Vec3::new(0.05, 0.05, 0.05);

fn ortho_camera(width: u32, height: u32) -> Camera {
    Camera::new(
        Projection::Orthographic,
        Vec3::new(0.0, 0.0, 300.0),
        Vec3::ZERO,
        width,
        height,
    )
}

fn single_triangle_world() -> World {
    let triangle = GeometryObject::new(
        MaterialId::DEFAULT,
        vec![
            Vec3::new(-30.0, -20.0, 0.0),
            Vec3::new(30.0, -20.0, 0.0),
            Vec3::new(0.0, 25.0, 0.0),
        ],
        vec![Color::RED, Color::GREEN, Color::BLUE],
        vec![],
        vec![0, 1, 2],
        Vec3::ZERO,
    )
    .unwrap();

    let lights = vec![Light::directional(Color::WHITE, Vec3::new(0.2, -0.3, -1.0))];
    let mut world = World::new(vec![triangle], lights, MaterialRegistry::new());
    world.set_camera(ortho_camera(96, 96));
    world
}

fn max_pixel_difference(a: &[Vec3], b: &[Vec3]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(p, q)| (*p - *q).length())
        .fold(0.0, f32::max)
}

#[test]
fn forward_and_deferred_match_without_overdraw() {
    let world = single_triangle_world();

    let mut forward = Renderer::forward().with_background(BACKGROUND);
    let mut deferred = Renderer::deferred().with_background(BACKGROUND);
    forward.render(&world).unwrap();
    deferred.render(&world).unwrap();

    let fb_forward = forward.framebuffer().unwrap();
    let fb_deferred = deferred.framebuffer().unwrap();

    assert_eq!(fb_forward.pixels.len(), fb_deferred.pixels.len());
    assert!(max_pixel_difference(&fb_forward.pixels, &fb_deferred.pixels) < 1e-6);
}

#[test]
fn forward_and_deferred_match_with_overdraw() {
    // Two boxes occluding each other: both variants resolve nearest-depth
    // with the same strict comparison, so outputs still match
    let mut materials = MaterialRegistry::new();
    let id = materials.insert(Material::new("flat"));

    let near = shapes::plain_box(id, Color::RED, Vec3::new(0.0, 0.0, 40.0), 60.0).unwrap();
    let far = shapes::plain_box(id, Color::CYAN, Vec3::new(10.0, 10.0, -40.0), 80.0).unwrap();
    let lights = vec![Light::directional(Color::WHITE, Vec3::new(0.5, -0.5, -1.0))];

    let mut world = World::new(vec![near, far], lights, materials);
    world.set_camera(ortho_camera(128, 128));

    let mut forward = Renderer::forward().with_background(BACKGROUND);
    let mut deferred = Renderer::deferred().with_background(BACKGROUND);
    forward.render(&world).unwrap();
    deferred.render(&world).unwrap();

    assert!(
        max_pixel_difference(
            &forward.framebuffer().unwrap().pixels,
            &deferred.framebuffer().unwrap().pixels
        ) < 1e-6
    );
}

#[test]
fn empty_world_renders_background_only() {
    let mut world = World::new(vec![], vec![], MaterialRegistry::new());
    world.set_camera(ortho_camera(32, 32));

    for mut renderer in [Renderer::forward(), Renderer::deferred()] {
        renderer = renderer.with_background(BACKGROUND);
        renderer.render(&world).unwrap();

        let fb = renderer.framebuffer().unwrap();
        assert_eq!(fb.pixels.len(), 32 * 32);
        assert!(fb.pixels.iter().all(|&p| p == BACKGROUND));
    }
}

#[test]
fn box_fills_contiguous_region_over_background() {
    // Axis-aligned box, side 100, centered at the origin; head-on
    // orthographic view from +Z with a 160x160 image. The front face spans
    // screen [30, 130) in both axes.
    let mut materials = MaterialRegistry::new();
    let id = materials.insert(Material::new("flat"));
    let cube = shapes::plain_box(id, Color::RED, Vec3::ZERO, 100.0).unwrap();
    let lights = vec![Light::directional(Color::WHITE, Vec3::new(0.0, 0.0, -1.0))];

    let mut world = World::new(vec![cube], lights, materials);
    world.set_camera(ortho_camera(160, 160));

    let mut renderer = Renderer::forward().with_background(BACKGROUND);
    renderer.render(&world).unwrap();
    let fb = renderer.framebuffer().unwrap();

    for y in 0..160u32 {
        for x in 0..160u32 {
            let inside = (31..129).contains(&x) && (31..129).contains(&y);
            let border = x < 29 || x > 131 || y < 29 || y > 131;
            let pixel = fb.get(x, y);

            if inside {
                // No unfilled interior pixels, and the lit face is red
                assert_ne!(pixel, BACKGROUND, "hole at ({x}, {y})");
                assert!(pixel.x > 0.9, "unexpected color {pixel} at ({x}, {y})");
            } else if border {
                assert_eq!(pixel, BACKGROUND, "spill at ({x}, {y})");
            }
        }
    }
}

#[test]
fn ortho_coverage_is_depth_invariant_but_persp_foreshortens() {
    let lights = vec![Light::directional(Color::WHITE, Vec3::new(0.0, 0.0, -1.0))];

    let coverage = |projection: Projection, z: f32| -> usize {
        let cube =
            shapes::plain_box(MaterialId::DEFAULT, Color::GREEN, Vec3::new(0.0, 0.0, z), 40.0)
                .unwrap();
        let mut world = World::new(vec![cube], lights.clone(), MaterialRegistry::new());
        world.set_camera(Camera::new(
            projection,
            Vec3::new(0.0, 0.0, 200.0),
            Vec3::ZERO,
            128,
            128,
        ));

        let mut renderer = Renderer::forward().with_background(BACKGROUND);
        renderer.render(&world).unwrap();
        renderer
            .framebuffer()
            .unwrap()
            .pixels
            .iter()
            .filter(|&&p| p != BACKGROUND)
            .count()
    };

    // Identical screen footprint at different depths under orthographic
    let ortho_near = coverage(Projection::Orthographic, 0.0);
    let ortho_far = coverage(Projection::Orthographic, -150.0);
    assert_eq!(ortho_near, ortho_far);

    // Smaller at distance under perspective
    let persp_near = coverage(Projection::Perspective, 0.0);
    let persp_far = coverage(Projection::Perspective, -150.0);
    assert!(persp_far < persp_near);
}

#[test]
fn export_roundtrip_preserves_pixels() {
    let world = single_triangle_world();
    let mut renderer = Renderer::deferred().with_background(BACKGROUND);
    renderer.render(&world).unwrap();

    let path = std::env::temp_dir().join("prism_pipeline_roundtrip.png");
    let path_str = path.to_str().unwrap();
    renderer.export_output(path_str).unwrap();

    let loaded = image::open(&path).unwrap().to_rgba8();
    let fb = renderer.framebuffer().unwrap();

    assert_eq!(loaded.dimensions(), (fb.width, fb.height));
    assert_eq!(loaded.into_raw(), fb.to_rgba());

    std::fs::remove_file(&path).ok();
}
