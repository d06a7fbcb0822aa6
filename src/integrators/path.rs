// Copyright @yucwang 2026

use crate::core::integrator::Integrator;
use crate::core::interaction::SurfaceInteraction;
use crate::core::material::Material;
use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::math::constants::{EPSILON, Float};
use crate::math::frame::Frame;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

const ROULETTE_CLAMP: Float = 0.75;

// Decide termination for the current throughput. Returns the survival
// probability to divide by, or None when the path is absorbed. A zero
// survival terminates before any division can happen.
fn russian_roulette(throughput: &RGBSpectrum, s: Float) -> Option<Float> {
    let survival = throughput.luminance().min(ROULETTE_CLAMP);
    if survival <= 0.0 {
        return None;
    }
    if s < 1.0 - survival {
        return None;
    }
    Some(survival)
}

pub struct PathIntegrator {
    max_depth: u32,
    samples_per_pixel: u32,
}

impl PathIntegrator {
    pub fn new(max_depth: u32, samples_per_pixel: u32) -> Self {
        Self { max_depth, samples_per_pixel }
    }
}

impl Integrator for PathIntegrator {
    fn evaluate(&self, ray: &Ray3f, scene: &Scene, rng: &mut LcgRng) -> RGBSpectrum {
        let mut result = RGBSpectrum::default();
        let mut throughput = RGBSpectrum::new(1.0, 1.0, 1.0);
        let mut current = *ray;

        // Russian roulette is the statistical terminator; the depth
        // cap only bounds the worst case.
        for _bounce in 0..self.max_depth {
            let hit = match scene.intersect(&current) {
                Some(h) => h,
                None => break,
            };
            let material = match scene.material(hit.material_id()) {
                Some(m) => m,
                None => break,
            };

            let emission = material.emission();
            if !emission.is_black() {
                result += throughput * emission;
            }

            let survival = match russian_roulette(&throughput, rng.next_f32()) {
                Some(s) => s,
                None => break,
            };
            throughput /= survival;

            let frame = Frame::from_normal(&hit.normal());
            let mut si = SurfaceInteraction::new(
                hit.uv(),
                hit.p(),
                frame.to_local(&-current.dir()),
            );
            let weight = material.sample(&rng.next_2d(), &mut si);
            if weight.is_black() || !weight.is_finite() {
                break;
            }
            let out = frame.from_local(&si.wo);

            throughput *= weight;
            current = Ray3f::new(hit.p(), out, Some(EPSILON), None);
        }

        result
    }

    fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }
}
