// Copyright @yucwang 2023

use crate::core::computation_node::ComputationNode;
use crate::core::interaction::{ Hit, MeshSample };
use crate::math::constants::{ Float, Vector3f };
use crate::math::ray::Ray3f;

pub trait Shape: ComputationNode + Send + Sync {
    fn ray_intersection(&self, ray: &Ray3f) -> Option<Hit>;
    fn ray_intersection_t(&self, ray: &Ray3f) -> bool;
    // u.x selects the primitive, (u.y, u.z) warp over its surface.
    fn sample(&self, u: &Vector3f, out: &mut MeshSample);
    fn pdf(&self) -> Float;
    fn surface_area(&self) -> Float;
}
