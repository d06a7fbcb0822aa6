// Copyright @yucwang 2023

use crate::math::constants::{Float, Vector3f};

pub struct Frame {
    x: Vector3f,
    y: Vector3f,
    z: Vector3f
}

impl Default for Frame {
    fn default() -> Self {
        Frame {
            x: Vector3f::new(1.0, 0.0, 0.0),
            y: Vector3f::new(0.0, 1.0, 0.0),
            z: Vector3f::new(0.0, 0.0, 1.0)
        }
    }
}

impl Frame {
    // Branch-light construction from a unit normal, stable for
    // n.z near -1. See http://jcgt.org/published/0006/01/01/
    pub fn from_normal(n: &Vector3f) -> Frame {
        let sign = (1.0 as Float).copysign(n.z);
        let a = -1.0 / (sign + n.z);
        let b = n.x * n.y * a;
        Frame {
            x: Vector3f::new(1.0 + sign * n.x * n.x * a, sign * b, -sign * n.x),
            y: Vector3f::new(b, sign + n.y * n.y * a, -n.y),
            z: *n,
        }
    }

    pub fn to_local(&self, v: &Vector3f) -> Vector3f {
        Vector3f::new(v.dot(&self.x), v.dot(&self.y), v.dot(&self.z))
    }

    pub fn from_local(&self, v: &Vector3f) -> Vector3f {
        v.x * self.x + v.y * self.y + v.z * self.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::LcgRng;
    use crate::math::warp::square_to_uniform_sphere;

    fn assert_orthonormal(frame: &Frame) {
        assert!(frame.x.dot(&frame.y).abs() < 1e-5);
        assert!(frame.y.dot(&frame.z).abs() < 1e-5);
        assert!(frame.x.dot(&frame.z).abs() < 1e-5);
        assert!((frame.x.norm() - 1.0).abs() < 1e-5);
        assert!((frame.y.norm() - 1.0).abs() < 1e-5);
        assert!((frame.z.norm() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_frame_canonical_normal() {
        let frame = Frame::from_normal(&Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(frame.x, Vector3f::new(1.0, 0.0, 0.0));
        assert_eq!(frame.y, Vector3f::new(0.0, 1.0, 0.0));
        assert_eq!(frame.z, Vector3f::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_frame_random_normals() {
        let mut rng = LcgRng::new(7);
        for _ in 0..1000 {
            let n = square_to_uniform_sphere(&rng.next_2d());
            let frame = Frame::from_normal(&n);
            assert_orthonormal(&frame);
        }
    }

    #[test]
    fn test_frame_near_degenerate_normal() {
        let n = Vector3f::new(1e-7, -1e-7, -1.0).normalize();
        let frame = Frame::from_normal(&n);
        assert_orthonormal(&frame);
    }

    #[test]
    fn test_frame_roundtrip() {
        let n = Vector3f::new(0.3, -0.5, 0.2).normalize();
        let frame = Frame::from_normal(&n);
        let v = Vector3f::new(0.1, 0.7, -0.3);
        let roundtrip = frame.from_local(&frame.to_local(&v));
        assert!((roundtrip - v).norm() < 1e-5);
    }
}
