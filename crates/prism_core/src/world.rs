//! World aggregation.
//!
//! A [`World`] is pure aggregation: the object list, the light list, the
//! material registry they reference, and the active camera. The camera is
//! attached after construction as an explicit final wiring step, which
//! breaks the camera/renderer/world construction cycle without any global
//! state. Rendering treats the whole world as read-only.

use crate::camera::Camera;
use crate::light::Light;
use crate::material::MaterialRegistry;
use crate::mesh::GeometryObject;

/// The scene handed to a renderer: objects, lights, materials, camera.
pub struct World {
    pub objects: Vec<GeometryObject>,
    pub lights: Vec<Light>,
    pub materials: MaterialRegistry,
    camera: Option<Camera>,
}

impl World {
    /// Assemble a world without a camera.
    pub fn new(
        objects: Vec<GeometryObject>,
        lights: Vec<Light>,
        materials: MaterialRegistry,
    ) -> Self {
        log::debug!(
            "world assembled: {} objects, {} lights, {} materials",
            objects.len(),
            lights.len(),
            materials.len()
        );
        Self {
            objects,
            lights,
            materials,
            camera: None,
        }
    }

    /// Attach (or replace) the active camera.
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = Some(camera);
    }

    /// The active camera, if one has been attached.
    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    /// Total triangle count across all objects.
    pub fn triangle_count(&self) -> usize {
        self.objects.iter().map(|o| o.triangle_count()).sum()
    }
}
