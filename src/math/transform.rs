// Copyright 2020 @TwoCookingMice

use super::constants::{ Matrix4f, Vector3f };

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    matrix: Matrix4f,
}

impl Default for Transform {
    fn default() -> Self {
        Self { matrix: Matrix4f::identity() }
    }
}

impl Transform {
    pub fn new(matrix: Matrix4f) -> Self {
        Self { matrix }
    }

    // Camera-to-world transform: columns are the camera axes and the
    // eye position.
    pub fn look_at(eye: Vector3f, center: Vector3f, up: Vector3f) -> Self {
        let z = (center - eye).normalize();
        let x = z.cross(&up).normalize();
        let y = x.cross(&z).normalize();

        let matrix = Matrix4f::new(
            x[0], y[0], z[0], eye[0],
            x[1], y[1], z[1], eye[1],
            x[2], y[2], z[2], eye[2],
            0.0,  0.0,  0.0,  1.0,
        );
        Self { matrix }
    }

    pub fn matrix(&self) -> &Matrix4f {
        &self.matrix
    }

    pub fn apply_point(&self, p: Vector3f) -> Vector3f {
        let x = p[0] * self.matrix[(0, 0)] + p[1] * self.matrix[(0, 1)] +
            p[2] * self.matrix[(0, 2)] + self.matrix[(0, 3)];
        let y = p[0] * self.matrix[(1, 0)] + p[1] * self.matrix[(1, 1)] +
            p[2] * self.matrix[(1, 2)] + self.matrix[(1, 3)];
        let z = p[0] * self.matrix[(2, 0)] + p[1] * self.matrix[(2, 1)] +
            p[2] * self.matrix[(2, 2)] + self.matrix[(2, 3)];
        let w = p[0] * self.matrix[(3, 0)] + p[1] * self.matrix[(3, 1)] +
            p[2] * self.matrix[(3, 2)] + self.matrix[(3, 3)];

        Vector3f::new(x / w, y / w, z / w)
    }

    pub fn apply_vector(&self, v: Vector3f) -> Vector3f {
        let x = v[0] * self.matrix[(0, 0)] + v[1] * self.matrix[(0, 1)] + v[2] * self.matrix[(0, 2)];
        let y = v[0] * self.matrix[(1, 0)] + v[1] * self.matrix[(1, 1)] + v[2] * self.matrix[(1, 2)];
        let z = v[0] * self.matrix[(2, 0)] + v[1] * self.matrix[(2, 1)] + v[2] * self.matrix[(2, 2)];

        Vector3f::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_look_at_maps_camera_origin_to_eye() {
        let eye = Vector3f::new(1.0, 2.0, 3.0);
        let transform = Transform::look_at(eye,
                                           Vector3f::new(1.0, 2.0, 0.0),
                                           Vector3f::new(0.0, 1.0, 0.0));
        let mapped = transform.apply_point(Vector3f::zeros());
        assert!((mapped - eye).norm() < 1e-6);
    }

    #[test]
    fn test_look_at_forward_axis() {
        let transform = Transform::look_at(Vector3f::new(0.0, 1.0, 4.0),
                                           Vector3f::new(0.0, 1.0, 0.0),
                                           Vector3f::new(0.0, 1.0, 0.0));
        // Camera-space +z maps to the viewing direction.
        let forward = transform.apply_vector(Vector3f::new(0.0, 0.0, 1.0));
        assert!((forward - Vector3f::new(0.0, 0.0, -1.0)).norm() < 1e-6);

        let right = transform.apply_vector(Vector3f::new(1.0, 0.0, 0.0));
        assert!((right - Vector3f::new(1.0, 0.0, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn test_identity_transform() {
        let transform = Transform::default();
        let p = Vector3f::new(0.5, -1.0, 2.0);
        assert_eq!(transform.apply_point(p), p);
        assert_eq!(transform.apply_vector(p), p);
    }
}
