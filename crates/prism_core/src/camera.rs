//! Cameras: world space to image plane.
//!
//! A camera maps the scene onto a discrete pixel grid. Renderers drive it
//! through two variant-agnostic operations: [`Camera::project`] turns a
//! world point into a screen sample plus view depth (the rasterization
//! path), and [`Camera::view_ray`] turns a pixel into a world-space ray
//! (the inverse mapping). Which projection variant is active is invisible
//! to the caller.

use prism_math::{Ray, Vec3};

/// Projection kind, a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Parallel rays; image-plane extent is one world unit per pixel and
    /// screen footprint does not change with distance.
    Orthographic,

    /// Rays diverge from the eye through a virtual image plane placed at
    /// the eye-to-target distance; no explicit field-of-view parameter.
    Perspective,
}

/// A camera with a position, look target, and image dimensions.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub width: u32,
    pub height: u32,
    projection: Projection,

    // Orthonormal basis computed at construction: `w` points from the
    // target back toward the eye, so the view direction is -w.
    u: Vec3,
    v: Vec3,
    w: Vec3,

    /// Eye-to-target distance; the perspective image plane sits here.
    focal: f32,
}

impl Camera {
    /// Create a camera looking from `position` toward `target`.
    ///
    /// The image plane is `width` x `height` pixels. Up is +Y unless the
    /// view axis is vertical, in which case +Z is used.
    pub fn new(projection: Projection, position: Vec3, target: Vec3, width: u32, height: u32) -> Self {
        let offset = position - target;
        let focal = offset.length();
        let w = offset.try_normalize().unwrap_or(Vec3::Z);

        let up = if w.dot(Vec3::Y).abs() > 0.999 {
            Vec3::Z
        } else {
            Vec3::Y
        };
        let u = up.cross(w).normalize();
        let v = w.cross(u);

        Self {
            position,
            target,
            width,
            height,
            projection,
            u,
            v,
            w,
            focal,
        }
    }

    /// Projection kind of this camera.
    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Project a world point to (screen x, screen y, view depth).
    ///
    /// Screen coordinates are continuous pixel coordinates with the origin
    /// at the top-left corner; pixel (x, y) covers [x, x+1) x [y, y+1).
    /// Depth is the linear distance along the view axis for both
    /// projection kinds. Points at or behind the eye plane return `None`.
    pub fn project(&self, point: Vec3) -> Option<Vec3> {
        let rel = point - self.position;
        let depth = -rel.dot(self.w);
        if depth <= 0.0 {
            return None;
        }

        let x_cam = rel.dot(self.u);
        let y_cam = rel.dot(self.v);

        let (sx, sy) = match self.projection {
            Projection::Orthographic => (x_cam, y_cam),
            Projection::Perspective => {
                let scale = self.focal / depth;
                (x_cam * scale, y_cam * scale)
            }
        };

        Some(Vec3::new(
            sx + self.width as f32 / 2.0,
            self.height as f32 / 2.0 - sy,
            depth,
        ))
    }

    /// Generate the view ray through the center of pixel (x, y).
    ///
    /// Orthographic rays are parallel to the view axis; perspective rays
    /// diverge from the eye through the virtual image plane.
    pub fn view_ray(&self, x: u32, y: u32) -> Ray {
        let px = x as f32 + 0.5 - self.width as f32 / 2.0;
        let py = self.height as f32 / 2.0 - (y as f32 + 0.5);
        let plane_offset = self.u * px + self.v * py;

        match self.projection {
            Projection::Orthographic => Ray::new(self.position + plane_offset, -self.w),
            Projection::Perspective => {
                let plane_point = self.position - self.w * self.focal + plane_offset;
                Ray::new(
                    self.position,
                    (plane_point - self.position).normalize(),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ortho() -> Camera {
        Camera::new(
            Projection::Orthographic,
            Vec3::new(0.0, 0.0, 100.0),
            Vec3::ZERO,
            200,
            100,
        )
    }

    fn persp() -> Camera {
        Camera::new(
            Projection::Perspective,
            Vec3::new(0.0, 0.0, 100.0),
            Vec3::ZERO,
            200,
            100,
        )
    }

    #[test]
    fn test_target_projects_to_image_center() {
        for camera in [ortho(), persp()] {
            let s = camera.project(Vec3::ZERO).unwrap();
            assert!((s.x - 100.0).abs() < 1e-4);
            assert!((s.y - 50.0).abs() < 1e-4);
            assert!((s.z - 100.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_behind_camera_is_culled() {
        for camera in [ortho(), persp()] {
            assert!(camera.project(Vec3::new(0.0, 0.0, 200.0)).is_none());
        }
    }

    #[test]
    fn test_ortho_footprint_ignores_depth() {
        let camera = ortho();
        let near = camera.project(Vec3::new(10.0, 5.0, 50.0)).unwrap();
        let far = camera.project(Vec3::new(10.0, 5.0, -400.0)).unwrap();

        assert!((near.x - far.x).abs() < 1e-4);
        assert!((near.y - far.y).abs() < 1e-4);
        // Depth is linear distance along the view axis
        assert!((near.z - 50.0).abs() < 1e-4);
        assert!((far.z - 500.0).abs() < 1e-4);
    }

    #[test]
    fn test_persp_foreshortens_with_depth() {
        let camera = persp();
        let near = camera.project(Vec3::new(10.0, 0.0, 50.0)).unwrap();
        let far = camera.project(Vec3::new(10.0, 0.0, -400.0)).unwrap();

        let near_offset = (near.x - 100.0).abs();
        let far_offset = (far.x - 100.0).abs();
        assert!(far_offset < near_offset);
    }

    #[test]
    fn test_persp_matches_ortho_at_focal_plane() {
        // At the eye-to-target distance the perspective scale factor is 1
        let p = Vec3::new(17.0, -9.0, 0.0);
        let a = ortho().project(p).unwrap();
        let b = persp().project(p).unwrap();
        assert!((a - b).length() < 1e-3);
    }

    #[test]
    fn test_ortho_rays_are_parallel() {
        let camera = ortho();
        let a = camera.view_ray(0, 0);
        let b = camera.view_ray(199, 99);
        assert!((a.direction - b.direction).length() < 1e-5);
        assert!((a.origin - b.origin).length() > 1.0);
    }

    #[test]
    fn test_persp_rays_diverge_from_eye() {
        let camera = persp();
        let a = camera.view_ray(0, 0);
        let b = camera.view_ray(199, 99);
        assert_eq!(a.origin, camera.position);
        assert_eq!(b.origin, camera.position);
        assert!((a.direction - b.direction).length() > 1e-3);
    }

    #[test]
    fn test_project_inverts_view_ray() {
        for camera in [ortho(), persp()] {
            let ray = camera.view_ray(42, 17);
            let point = ray.at(80.0);
            let s = camera.project(point).unwrap();
            assert!((s.x - 42.5).abs() < 1e-3);
            assert!((s.y - 17.5).abs() < 1e-3);
        }
    }

    #[test]
    fn test_vertical_view_axis_has_valid_basis() {
        let camera = Camera::new(
            Projection::Orthographic,
            Vec3::new(0.0, 100.0, 0.0),
            Vec3::ZERO,
            100,
            100,
        );
        let s = camera.project(Vec3::ZERO).unwrap();
        assert!(s.x.is_finite() && s.y.is_finite());
    }
}
