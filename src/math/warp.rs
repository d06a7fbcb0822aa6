// Copyright @yucwang 2023

use super::constants::{ INV_PI, PI, Float, Vector2f, Vector3f };

pub fn square_to_uniform_disk(u: &Vector2f) -> Vector2f {
    let r: Float = u.x.sqrt();
    let theta: Float = 2. * PI * u.y;

    Vector2f::new(r * theta.cos(), r * theta.sin())
}

pub fn square_to_cosine_hemisphere(u: &Vector2f) -> Vector3f {
    let p = square_to_uniform_disk(u);
    let z = (1. - p.x * p.x - p.y * p.y).max(0.).sqrt();

    Vector3f::new(p.x, p.y, z)
}

pub fn square_to_cosine_hemisphere_pdf(v: &Vector3f) -> Float {
    if v.z < 0. {
        return 0.;
    }

    v.z * INV_PI
}

// Inversion sampling of the GGX normal distribution.
pub fn square_to_ggx(u: &Vector2f, alpha: Float) -> Vector3f {
    let a2 = alpha * alpha;
    let cos_theta = ((1. - u.x) / (u.x * (a2 - 1.) + 1.)).max(0.).sqrt();
    let sin_theta = (1. - cos_theta * cos_theta).max(0.).sqrt();
    let phi = 2. * PI * u.y;

    Vector3f::new(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta)
}

// Density over outgoing directions when the half-vector is drawn from
// D and the incident direction is mirrored about it: the distribution
// value times cos(theta_h), divided by the reflection Jacobian
// 4 (wi . wh).
pub fn ggx_pdf(wh: &Vector3f, wi: &Vector3f, alpha: Float) -> Float {
    let cos_h = wh.z;
    let i_dot_h = wi.dot(wh);
    if cos_h <= 0. || i_dot_h <= 0. {
        return 0.;
    }

    let a2 = alpha * alpha;
    let tmp = cos_h * cos_h * (a2 - 1.) + 1.;
    let d = a2 / (PI * tmp * tmp);
    cos_h * d / (4. * i_dot_h)
}

pub fn square_to_triangle(u: &Vector2f) -> Vector3f {
    let su1 = u.x.sqrt();
    let b0 = 1. - su1;
    let b1 = u.y * su1;

    Vector3f::new(b0, b1, 1. - b0 - b1)
}

pub fn square_to_uniform_cylinder(u: &Vector2f) -> Vector3f {
    let z = 2. * u.x - 1.;
    let theta = 2. * PI * u.y;

    Vector3f::new(theta.cos(), theta.sin(), z)
}

pub fn square_to_uniform_sphere(u: &Vector2f) -> Vector3f {
    let cylinder = square_to_uniform_cylinder(u);
    let r = (1. - cylinder.z * cylinder.z).max(0.).sqrt();

    Vector3f::new(r * cylinder.x, r * cylinder.y, cylinder.z)
}

pub fn square_to_uniform_sphere_pdf() -> Float {
    0.25 * INV_PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::LcgRng;

    #[test]
    fn test_uniform_disk_center() {
        let p = square_to_uniform_disk(&Vector2f::new(0.0, 0.0));
        assert_eq!(p, Vector2f::new(0.0, 0.0));
    }

    #[test]
    fn test_uniform_disk_inside_unit_disk() {
        let mut rng = LcgRng::new(11);
        for _ in 0..1000 {
            let p = square_to_uniform_disk(&rng.next_2d());
            assert!(p.norm() <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn test_cosine_hemisphere_pdf_values() {
        let pdf = square_to_cosine_hemisphere_pdf(&Vector3f::new(0.0, 0.0, 1.0));
        assert!((pdf - INV_PI).abs() < 1e-6);

        let below = square_to_cosine_hemisphere_pdf(&Vector3f::new(0.0, 0.0, -0.5));
        assert_eq!(below, 0.0);
    }

    #[test]
    fn test_cosine_hemisphere_pdf_integrates_to_one() {
        // Estimate the integral of the pdf over the sphere with uniform
        // direction samples; the lower hemisphere contributes zero.
        let mut rng = LcgRng::new(23);
        let n = 200_000;
        let mut sum = 0.0 as Float;
        for _ in 0..n {
            let w = square_to_uniform_sphere(&rng.next_2d());
            sum += square_to_cosine_hemisphere_pdf(&w) / square_to_uniform_sphere_pdf();
        }
        let estimate = sum / (n as Float);
        assert!((estimate - 1.0).abs() < 0.02, "estimate = {}", estimate);
    }

    #[test]
    fn test_cosine_hemisphere_samples_match_pdf_support() {
        let mut rng = LcgRng::new(5);
        for _ in 0..1000 {
            let w = square_to_cosine_hemisphere(&rng.next_2d());
            assert!(w.z >= 0.0);
            assert!((w.norm() - 1.0).abs() < 1e-4);
            assert!(square_to_cosine_hemisphere_pdf(&w) >= 0.0);
        }
    }

    #[test]
    fn test_ggx_pdf_integrates_to_one() {
        // For wi = +z the mapping from half-vectors to reflected
        // directions covers the sphere; the pdf over outgoing
        // directions must integrate to one.
        let wi = Vector3f::new(0.0, 0.0, 1.0);
        let alpha = 0.6;
        let mut rng = LcgRng::new(37);
        let n = 400_000;
        let mut sum = 0.0 as Float;
        for _ in 0..n {
            let wo = square_to_uniform_sphere(&rng.next_2d());
            let half = wo + wi;
            if half.norm() < 1e-6 {
                continue;
            }
            let wh = half.normalize();
            sum += ggx_pdf(&wh, &wi, alpha) / square_to_uniform_sphere_pdf();
        }
        let estimate = sum / (n as Float);
        assert!((estimate - 1.0).abs() < 0.03, "estimate = {}", estimate);
    }

    #[test]
    fn test_ggx_sample_is_unit_upper_hemisphere() {
        let mut rng = LcgRng::new(41);
        for _ in 0..1000 {
            let wh = square_to_ggx(&rng.next_2d(), 0.3);
            assert!(wh.z >= 0.0);
            assert!((wh.norm() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_ggx_pdf_rejects_backfacing() {
        let wi = Vector3f::new(0.0, 0.0, 1.0);
        let below = Vector3f::new(0.0, 0.0, -1.0);
        assert_eq!(ggx_pdf(&below, &wi, 0.3), 0.0);

        let wh = Vector3f::new(0.0, 0.0, 1.0);
        let grazing_wi = Vector3f::new(0.0, 0.0, -1.0);
        assert_eq!(ggx_pdf(&wh, &grazing_wi, 0.3), 0.0);
    }

    #[test]
    fn test_triangle_barycentrics() {
        let mut rng = LcgRng::new(13);
        let mut mean = Vector3f::zeros();
        let n = 100_000;
        for _ in 0..n {
            let b = square_to_triangle(&rng.next_2d());
            assert!(b.x >= 0.0 && b.y >= 0.0 && b.z >= -1e-6);
            assert!((b.x + b.y + b.z - 1.0).abs() < 1e-5);
            mean += b;
        }
        mean /= n as Float;
        // Uniform area sampling puts the mean at the centroid.
        assert!((mean.x - 1.0 / 3.0).abs() < 0.01);
        assert!((mean.y - 1.0 / 3.0).abs() < 0.01);
        assert!((mean.z - 1.0 / 3.0).abs() < 0.01);
    }

    #[test]
    fn test_uniform_cylinder_on_surface() {
        let mut rng = LcgRng::new(17);
        for _ in 0..1000 {
            let p = square_to_uniform_cylinder(&rng.next_2d());
            let radial = (p.x * p.x + p.y * p.y).sqrt();
            assert!((radial - 1.0).abs() < 1e-5);
            assert!(p.z >= -1.0 && p.z <= 1.0);
        }
    }

    #[test]
    fn test_uniform_sphere_unit_norm_and_pdf() {
        let mut rng = LcgRng::new(19);
        let mut mean = Vector3f::zeros();
        let n = 100_000;
        for _ in 0..n {
            let w = square_to_uniform_sphere(&rng.next_2d());
            assert!((w.norm() - 1.0).abs() < 1e-4);
            mean += w;
        }
        mean /= n as Float;
        assert!(mean.norm() < 0.02);

        let expected = 1.0 / (4.0 * PI);
        assert!((square_to_uniform_sphere_pdf() - expected).abs() < 1e-6);
    }
}
