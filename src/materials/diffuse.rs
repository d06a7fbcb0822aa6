// Copyright @yucwang 2023

use crate::core::computation_node::ComputationNode;
use crate::core::interaction::SurfaceInteraction;
use crate::core::material::Material;
use crate::math::constants::{ Vector2f, Vector3f };
use crate::math::spectrum::RGBSpectrum;
use crate::math::warp::{ square_to_cosine_hemisphere, square_to_cosine_hemisphere_pdf };

pub struct DiffuseMaterial {
    albedo: RGBSpectrum,
    emission: RGBSpectrum,
}

impl DiffuseMaterial {
    pub fn new(albedo: RGBSpectrum) -> Self {
        Self { albedo, emission: RGBSpectrum::default() }
    }

    pub fn with_emission(mut self, emission: RGBSpectrum) -> Self {
        self.emission = emission;
        self
    }

    pub fn emissive(emission: RGBSpectrum) -> Self {
        Self { albedo: RGBSpectrum::default(), emission }
    }
}

impl ComputationNode for DiffuseMaterial {
    fn to_string(&self) -> String {
        format!("DiffuseMaterial: albedo = ({}, {}, {})",
                self.albedo[0], self.albedo[1], self.albedo[2])
    }
}

impl Material for DiffuseMaterial {
    fn sample(&self, u: &Vector2f, si: &mut SurfaceInteraction) -> RGBSpectrum {
        if si.wi.z <= 0.0 {
            si.wo = Vector3f::zeros();
            return RGBSpectrum::default();
        }

        si.wo = square_to_cosine_hemisphere(u);
        let pdf = square_to_cosine_hemisphere_pdf(&si.wo);
        if pdf <= 0.0 {
            return RGBSpectrum::default();
        }

        // (albedo / pi) * cos / (cos / pi) collapses to the albedo.
        self.albedo
    }

    fn emission(&self) -> RGBSpectrum {
        self.emission
    }
}
