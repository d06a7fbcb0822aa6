// Copyright @yucwang 2023

use crate::core::interaction::Hit;
use crate::math::constants:: { EPSILON, Float, Vector2f, Vector3f };
use crate::math::ray::Ray3f;

#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    p0: Vector3f,
    p1: Vector3f,
    p2: Vector3f
}

impl Triangle {
    pub fn new(new_p0: Vector3f, new_p1: Vector3f, new_p2: Vector3f) -> Self {
        Triangle {
            p0: new_p0,
            p1: new_p1,
            p2: new_p2,
        }
    }

    pub fn vertices(&self) -> (Vector3f, Vector3f, Vector3f) {
        (self.p0, self.p1, self.p2)
    }

    pub fn geometric_normal(&self) -> Vector3f {
        let edge0 = self.p1 - self.p0;
        let edge1 = self.p2 - self.p0;
        edge0.cross(&edge1).normalize()
    }

    pub fn surface_area(&self) -> Float {
        0.5 * ((self.p1 - self.p0).cross(&(self.p2 - self.p0))).norm()
    }

    pub fn ray_intersection(&self, ray: &Ray3f) -> Option<Hit> {
        let geo_normal = self.geometric_normal();
        let n_dot_dir = geo_normal.dot(&ray.dir());

        if n_dot_dir > -EPSILON && n_dot_dir < EPSILON {
            return None;
        }

        let plane_d = geo_normal.dot(&self.p0);
        let t = (plane_d - geo_normal.dot(&ray.origin())) / n_dot_dir;

        if !ray.test_segment(t) {
            return None;
        }

        let intersection_p = ray.at(t);
        if !self.is_in_triangle(&intersection_p) {
            return None;
        }

        let bary = self.barycentric(&intersection_p);
        let uv = Vector2f::new(bary.y, bary.z);
        Some(Hit::new(intersection_p, geo_normal, uv, t))
    }

    pub fn ray_intersection_t(&self, ray: &Ray3f) -> bool {
        let geo_normal = self.geometric_normal();
        let n_dot_dir = geo_normal.dot(&ray.dir());

        if n_dot_dir > -EPSILON && n_dot_dir < EPSILON {
            return false;
        }

        let plane_d = geo_normal.dot(&self.p0);
        let t = (plane_d - geo_normal.dot(&ray.origin())) / n_dot_dir;

        if !ray.test_segment(t) {
            return false;
        }

        self.is_in_triangle(&ray.at(t))
    }

    pub fn point_from_barycentric(&self, bary: &Vector3f) -> Vector3f {
        self.p0 * bary.x + self.p1 * bary.y + self.p2 * bary.z
    }

    pub fn barycentric(&self, p: &Vector3f) -> Vector3f {
        let v0 = self.p1 - self.p0;
        let v1 = self.p2 - self.p0;
        let v2 = *p - self.p0;

        let d00 = v0.dot(&v0);
        let d01 = v0.dot(&v1);
        let d11 = v1.dot(&v1);
        let d20 = v2.dot(&v0);
        let d21 = v2.dot(&v1);
        let denom = d00 * d11 - d01 * d01;
        if denom.abs() < EPSILON {
            return Vector3f::new(1.0, 0.0, 0.0);
        }

        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        let u = 1.0 - v - w;
        Vector3f::new(u, v, w)
    }

    pub fn apply_transform(&mut self, scale: &Vector3f, translate: &Vector3f) {
        self.p0 = self.p0.component_mul(scale) + translate;
        self.p1 = self.p1.component_mul(scale) + translate;
        self.p2 = self.p2.component_mul(scale) + translate;
    }

    fn is_in_triangle(&self, p: &Vector3f) -> bool {
        let edge0 = self.p1 - self.p0;
        let edge1 = self.p2 - self.p0;
        let geo_normal = edge0.cross(&edge1);

        let n0 = (self.p1 - self.p0).cross(&(p - self.p0));
        let n1 = (self.p2 - self.p1).cross(&(p - self.p1));
        let n2 = (self.p0 - self.p2).cross(&(p - self.p2));

        (n0.dot(&geo_normal) >= 0.0) && (n1.dot(&geo_normal) >= 0.0) && (n2.dot(&geo_normal) >= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_area() {
        let triangle = Triangle::new(Vector3f::new(0.0, 0.0, 0.0),
                                     Vector3f::new(1.0, 0.0, 0.0),
                                     Vector3f::new(0.0, 1.0, 0.0));
        assert!((triangle.surface_area() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_is_in_triangle() {
        let triangle = Triangle::new(Vector3f::new(1.0, 1.0, 0.0),
                                     Vector3f::new(2.0, 2.0, 0.0),
                                     Vector3f::new(2.0, 1.0, 0.0));

        let p0 = Vector3f::new(1.5, 1.1, 0.0);
        let p1 = Vector3f::new(1.5, 2.0, 0.0);

        assert!(triangle.is_in_triangle(&p0));
        assert!(!triangle.is_in_triangle(&p1));
    }

    #[test]
    fn test_ray_intersection() {
        let triangle = Triangle::new(Vector3f::new(1.0, 1.0, 0.0),
                                     Vector3f::new(2.0, 2.0, 0.0),
                                     Vector3f::new(2.0, 1.0, 0.0));

        let ray1 = Ray3f::new(Vector3f::new(1.5, 1.1, 3.0),
            Vector3f::new(0.0, 0.0, -1.0),
            None,
            None);
        let ray2 = Ray3f::new(Vector3f::new(1.5, 1.1, 3.0),
            Vector3f::new(0.0, 0.0, 1.0),
            None,
            None);

        let hit = triangle.ray_intersection(&ray1).expect("expected a hit");
        assert!((hit.t() - 3.0).abs() < 1e-5);
        assert!((hit.p() - Vector3f::new(1.5, 1.1, 0.0)).norm() < 1e-5);

        assert!(triangle.ray_intersection(&ray2).is_none());
        assert!(triangle.ray_intersection_t(&ray1));
        assert!(!triangle.ray_intersection_t(&ray2));
    }

    #[test]
    fn test_barycentric_roundtrip() {
        let triangle = Triangle::new(Vector3f::new(0.0, 0.0, 0.0),
                                     Vector3f::new(2.0, 0.0, 0.0),
                                     Vector3f::new(0.0, 2.0, 0.0));
        let bary = Vector3f::new(0.2, 0.5, 0.3);
        let p = triangle.point_from_barycentric(&bary);
        let recovered = triangle.barycentric(&p);
        assert!((recovered - bary).norm() < 1e-5);
    }
}
