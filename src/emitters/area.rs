// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::core::emitter::Emitter;
use crate::core::interaction::{EmitterInteraction, MeshSample};
use crate::core::shape::Shape;
use crate::math::constants::{EPSILON, Vector3f};
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use std::sync::Arc;

pub struct MeshEmitter {
    shape: Arc<dyn Shape>,
    radiance: RGBSpectrum,
}

impl MeshEmitter {
    pub fn from_shape(shape: Arc<dyn Shape>, radiance: RGBSpectrum) -> Self {
        Self { shape, radiance }
    }

    pub fn radiance(&self) -> RGBSpectrum {
        self.radiance
    }
}

impl ComputationNode for MeshEmitter {
    fn to_string(&self) -> String {
        format!("MeshEmitter: radiance = ({}, {}, {})",
                self.radiance[0], self.radiance[1], self.radiance[2])
    }
}

impl Emitter for MeshEmitter {
    fn sample(&self, u: &Vector3f, ei: &mut EmitterInteraction) -> RGBSpectrum {
        let mut info = MeshSample::default();
        self.shape.sample(u, &mut info);

        let to_light = info.p - ei.origin;
        let dist = to_light.norm();
        if info.pdf <= 0.0 || dist <= EPSILON {
            ei.pdf = 0.0;
            return RGBSpectrum::default();
        }

        let direction = to_light / dist;
        let cos_light = info.n.dot(&direction).abs();
        // A grazing sample makes the area-to-solid-angle Jacobian blow
        // up; reject it instead of dividing.
        if cos_light <= 1e-6 {
            ei.pdf = 0.0;
            return RGBSpectrum::default();
        }

        ei.position = info.p;
        ei.direction = direction;
        ei.normal = info.n;
        ei.shadow_ray = Ray3f::new(ei.origin, direction,
                                   Some(EPSILON), Some(dist - EPSILON));

        let area_to_solid_angle = dist * dist / cos_light;
        ei.pdf = info.pdf * area_to_solid_angle;
        self.radiance / ei.pdf
    }

    fn eval(&self, ei: &mut EmitterInteraction) -> RGBSpectrum {
        let area_pdf = self.shape.pdf();
        let to_light = ei.position - ei.origin;
        let dist2 = to_light.norm_squared();
        let cos_light = ei.normal.dot(&-ei.direction).abs();
        if area_pdf <= 0.0 || cos_light <= 1e-6 {
            ei.pdf = 0.0;
            return self.radiance;
        }

        ei.pdf = area_pdf * dist2 / cos_light;
        self.radiance
    }
}
