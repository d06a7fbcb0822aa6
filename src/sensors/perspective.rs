// Copyright @yucwang 2026

use crate::core::sensor::Sensor;
use crate::math::constants::{Float, Matrix4f, PI, Vector2f, Vector3f, Vector4f};
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use crate::math::transform::Transform;
use crate::math::warp::square_to_uniform_disk;

pub struct PerspectiveCamera {
    resolution: (usize, usize),
    projection_to_camera: Matrix4f,
    camera_to_world: Transform,
    fov: Float,
    aspect: Float,
    near_clip: Float,
    far_clip: Float,
    aperture_radius: Float,
    focus_distance: Float,
}

impl PerspectiveCamera {
    pub fn new(camera_to_world: Transform,
               width: usize,
               height: usize,
               fov: Float,
               near_clip: Float,
               far_clip: Float,
               aperture_radius: Float,
               focus_distance: Float) -> Self {
        Self {
            resolution: (width, height),
            projection_to_camera: Self::projection_to_camera(fov, near_clip, far_clip),
            camera_to_world,
            fov,
            aspect: width as Float / height as Float,
            near_clip,
            far_clip,
            aperture_radius,
            focus_distance,
        }
    }

    // Inverse of the hand-derived perspective matrix: applying it to a
    // normalized device coordinate yields a camera-space direction
    // directly. fov is in degrees.
    fn projection_to_camera(fov: Float, near_clip: Float, far_clip: Float) -> Matrix4f {
        let recip = 1.0 / (far_clip - near_clip);
        let cot = 1.0 / (fov / 180.0 * PI).tan();

        let persp = Matrix4f::new(
            cot, 0.0, 0.0,              0.0,
            0.0, cot, 0.0,              0.0,
            0.0, 0.0, far_clip * recip, -near_clip * far_clip * recip,
            0.0, 0.0, 1.0,              0.0,
        );
        persp.try_inverse().unwrap_or_else(Matrix4f::identity)
    }
}

impl Sensor for PerspectiveCamera {
    fn create_ray(&self, pixel: &Vector2f, u: &Vector2f) -> (Ray3f, RGBSpectrum) {
        let (width, height) = self.resolution;

        // Image plane position in [-1, 1] with vertical flip and
        // aspect correction.
        let image_plane = Vector2f::new(
            pixel.x / width as Float * 2.0 - 1.0,
            -1.0 / self.aspect * (pixel.y / height as Float * 2.0 - 1.0),
        );
        let p = self.projection_to_camera
            * Vector4f::new(image_plane.x, image_plane.y, 1.0, 1.0);
        let d = Vector3f::new(p.x, p.y, p.z).normalize();

        // Thin lens: aim the ray from a point on the aperture at the
        // in-focus point along the pinhole direction. A zero aperture
        // radius collapses to the pinhole model.
        let inv_z = 1.0 / d.z;
        let focus_point = d * (self.focus_distance * inv_z);
        let disk = square_to_uniform_disk(u) * self.aperture_radius;
        let aperture_point = Vector3f::new(disk.x, disk.y, 0.0);
        let dir = (focus_point - aperture_point).normalize();

        let origin = self.camera_to_world.apply_point(aperture_point);
        let dir_world = self.camera_to_world.apply_vector(dir);

        let ray = Ray3f::new(origin, dir_world,
                             Some(self.near_clip), Some(self.far_clip));
        (ray, RGBSpectrum::new(1.0, 1.0, 1.0))
    }

    fn resolution(&self) -> (usize, usize) {
        self.resolution
    }

    fn describe(&self) -> String {
        format!("PerspectiveCamera: {}x{}, fov = {}, aperture = {}, focus = {}",
                self.resolution.0, self.resolution.1,
                self.fov, self.aperture_radius, self.focus_distance)
    }
}
