// Copyright @yucwang 2023

use crate::math::constants::{ Float, Vector2f, Vector3f };
use crate::math::ray::Ray3f;

// Nearest-hit record produced by the scene; read-only downstream.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    p: Vector3f,
    normal: Vector3f,
    uv: Vector2f,
    t: Float,
    material_id: usize,
}

impl Hit {
    pub fn new(p: Vector3f, normal: Vector3f, uv: Vector2f, t: Float) -> Self {
        Self { p, normal, uv, t, material_id: 0 }
    }

    pub fn p(&self) -> Vector3f {
        self.p
    }

    pub fn normal(&self) -> Vector3f {
        self.normal
    }

    pub fn uv(&self) -> Vector2f {
        self.uv
    }

    pub fn t(&self) -> Float {
        self.t
    }

    pub fn material_id(&self) -> usize {
        self.material_id
    }

    pub fn with_material_id(&self, material_id: usize) -> Self {
        Self { material_id, ..*self }
    }
}

// Single-bounce shading state in the local frame; the material sampler
// writes wo.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceInteraction {
    pub uv: Vector2f,
    pub p: Vector3f,
    pub wi: Vector3f,
    pub wo: Vector3f,
}

impl SurfaceInteraction {
    pub fn new(uv: Vector2f, p: Vector3f, wi: Vector3f) -> Self {
        Self { uv, p, wi, wo: Vector3f::zeros() }
    }
}

// Light-sampling record. Populated by Emitter::sample, or pre-populated
// from an existing hit and refined by Emitter::eval.
#[derive(Debug, Clone, Copy)]
pub struct EmitterInteraction {
    pub origin: Vector3f,
    pub position: Vector3f,
    pub direction: Vector3f,
    pub normal: Vector3f,
    pub pdf: Float,
    pub shadow_ray: Ray3f,
}

impl EmitterInteraction {
    pub fn from_origin(origin: Vector3f) -> Self {
        Self {
            origin,
            position: Vector3f::zeros(),
            direction: Vector3f::zeros(),
            normal: Vector3f::zeros(),
            pdf: 0.0,
            shadow_ray: Ray3f::default(),
        }
    }

    pub fn from_hit(origin: Vector3f, hit: &Hit) -> Self {
        let to_light = hit.p() - origin;
        let direction = if to_light.norm() > 0.0 {
            to_light.normalize()
        } else {
            Vector3f::zeros()
        };
        Self {
            origin,
            position: hit.p(),
            direction,
            normal: hit.normal(),
            pdf: 0.0,
            shadow_ray: Ray3f::default(),
        }
    }
}

// Area-sampling output of a mesh: a surface point, its normal and the
// per-area density.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeshSample {
    pub p: Vector3f,
    pub n: Vector3f,
    pub pdf: Float,
}
