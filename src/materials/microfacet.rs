// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::core::interaction::SurfaceInteraction;
use crate::core::material::Material;
use crate::math::constants::{ Float, Vector2f, Vector3f };
use crate::math::spectrum::RGBSpectrum;
use crate::math::warp::{ ggx_pdf, square_to_ggx };

fn ggx_g1(cos_theta: Float, alpha: Float) -> Float {
    if cos_theta <= 0.0 {
        return 0.0;
    }
    let a = alpha.max(1e-4);
    let cos2 = cos_theta * cos_theta;
    let sin2 = (1.0 - cos2).max(0.0);
    if sin2 <= 0.0 {
        return 1.0;
    }
    let tan2 = sin2 / cos2.max(1e-6);
    let root = (1.0 + a * a * tan2).sqrt();
    2.0 / (1.0 + root)
}

fn fresnel_schlick(f0: RGBSpectrum, cos_theta: Float) -> RGBSpectrum {
    let cos_theta = cos_theta.max(0.0).min(1.0);
    let one_minus = (1.0 - cos_theta).powi(5);
    f0 + (RGBSpectrum::new(1.0, 1.0, 1.0) - f0) * one_minus
}

fn reflect(wi: &Vector3f, m: &Vector3f) -> Vector3f {
    2.0 * wi.dot(m) * m - wi
}

pub struct RoughConductor {
    f0: RGBSpectrum,
    alpha: Float,
}

impl RoughConductor {
    pub fn new(f0: RGBSpectrum, alpha: Float) -> Self {
        Self { f0, alpha: alpha.max(1e-4) }
    }
}

impl ComputationNode for RoughConductor {
    fn to_string(&self) -> String {
        format!("RoughConductor: alpha = {}", self.alpha)
    }
}

impl Material for RoughConductor {
    fn sample(&self, u: &Vector2f, si: &mut SurfaceInteraction) -> RGBSpectrum {
        let wi = si.wi;
        if wi.z <= 0.0 {
            si.wo = Vector3f::zeros();
            return RGBSpectrum::default();
        }

        let wh = square_to_ggx(u, self.alpha);
        let i_dot_h = wi.dot(&wh);
        if i_dot_h <= 0.0 || wh.z <= 1e-6 {
            si.wo = Vector3f::zeros();
            return RGBSpectrum::default();
        }

        let wo = reflect(&wi, &wh);
        si.wo = wo;
        if wo.z <= 0.0 {
            return RGBSpectrum::default();
        }

        let pdf = ggx_pdf(&wh, &wi, self.alpha);
        if pdf <= 0.0 {
            return RGBSpectrum::default();
        }

        // f * cos / pdf with the distribution term cancelled:
        // F * G * (wi . wh) / (cos_i * cos_h).
        let g = ggx_g1(wi.z, self.alpha) * ggx_g1(wo.z, self.alpha);
        let weight = g * i_dot_h / (wi.z * wh.z);
        fresnel_schlick(self.f0, i_dot_h) * weight
    }
}
