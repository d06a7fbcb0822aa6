// Copyright @yucwang 2023

use super::triangle::Triangle;

use crate::core::computation_node::ComputationNode;
use crate::core::interaction::{Hit, MeshSample};
use crate::core::shape::Shape;
use crate::io::obj_utils;
use crate::io::obj_utils::ObjLoadError;
use crate::math::constants::{ Float, Vector2f, Vector3f };
use crate::math::ray::Ray3f;
use crate::math::warp::square_to_triangle;

use std::vec::Vec;

pub struct TriangleMesh {
    triangles: Vec<Triangle>,
    tri_areas: Vec<Float>,
    total_area: Float,
}

impl TriangleMesh {
    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        let mut tri_areas = Vec::with_capacity(triangles.len());
        let mut total_area = 0.0;
        for tri in &triangles {
            let area = tri.surface_area();
            tri_areas.push(area);
            total_area += area;
        }

        Self { triangles, tri_areas, total_area }
    }

    pub fn from_obj(path: &str) -> Result<Self, ObjLoadError> {
        let obj_set = obj_utils::load_obj_from_file(path)?;
        Ok(Self::from_obj_set(&obj_set))
    }

    pub fn from_obj_str(input: &str) -> Result<Self, ObjLoadError> {
        let obj_set = obj_utils::load_obj_from_str(input)?;
        Ok(Self::from_obj_set(&obj_set))
    }

    fn from_obj_set(obj_set: &wavefront_obj::obj::ObjSet) -> Self {
        let mut triangles = Vec::new();
        for object in &obj_set.objects {
            for geom in &object.geometry {
                for shape in &geom.shapes {
                    if let wavefront_obj::obj::Primitive::Triangle(a, b, c) = shape.primitive {
                        let p0 = object.vertices[a.0];
                        let p1 = object.vertices[b.0];
                        let p2 = object.vertices[c.0];
                        triangles.push(Triangle::new(
                            Vector3f::new(p0.x as Float, p0.y as Float, p0.z as Float),
                            Vector3f::new(p1.x as Float, p1.y as Float, p1.z as Float),
                            Vector3f::new(p2.x as Float, p2.y as Float, p2.z as Float),
                        ));
                    }
                }
            }
        }

        Self::from_triangles(triangles)
    }

    pub fn apply_transform(&mut self, scale: &Vector3f, translate: &Vector3f) {
        for tri in &mut self.triangles {
            tri.apply_transform(scale, translate);
        }

        self.tri_areas.clear();
        self.total_area = 0.0;
        for tri in &self.triangles {
            let area = tri.surface_area();
            self.tri_areas.push(area);
            self.total_area += area;
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

impl ComputationNode for TriangleMesh {
    fn to_string(&self) -> String {
        format!("TriangleMesh: {} triangles, area = {}",
                self.triangles.len(), self.total_area)
    }
}

impl Shape for TriangleMesh {
    fn ray_intersection(&self, ray: &Ray3f) -> Option<Hit> {
        let mut closest_hit: Option<Hit> = None;
        let mut closest_t = std::f32::MAX;

        for tri in &self.triangles {
            if let Some(hit) = tri.ray_intersection(ray) {
                if hit.t() < closest_t {
                    closest_t = hit.t();
                    closest_hit = Some(hit);
                }
            }
        }

        closest_hit
    }

    fn ray_intersection_t(&self, ray: &Ray3f) -> bool {
        for tri in &self.triangles {
            if tri.ray_intersection_t(ray) {
                return true;
            }
        }
        false
    }

    fn sample(&self, u: &Vector3f, out: &mut MeshSample) {
        if self.triangles.is_empty() || self.total_area <= 0.0 {
            out.p = Vector3f::zeros();
            out.n = Vector3f::new(0.0, 0.0, 1.0);
            out.pdf = 0.0;
            return;
        }

        // Pick a triangle proportionally to area, then warp the
        // remaining two dimensions over its surface.
        let target = u.x * self.total_area;
        let mut accum = 0.0;
        let mut idx = self.triangles.len() - 1;
        for (i, area) in self.tri_areas.iter().enumerate() {
            accum += *area;
            if target <= accum {
                idx = i;
                break;
            }
        }

        let tri = &self.triangles[idx];
        let bary = square_to_triangle(&Vector2f::new(u.y, u.z));
        out.p = tri.point_from_barycentric(&bary);
        out.n = tri.geometric_normal();
        out.pdf = 1.0 / self.total_area;
    }

    fn pdf(&self) -> Float {
        if self.total_area > 0.0 {
            1.0 / self.total_area
        } else {
            0.0
        }
    }

    fn surface_area(&self) -> Float {
        self.total_area
    }
}
