// Copyright @yucwang 2026

use crate::core::emitter::Emitter;
use crate::core::interaction::Hit;
use crate::core::material::Material;
use crate::core::sensor::Sensor;
use crate::core::shape::Shape;
use crate::emitters::area::MeshEmitter;
use crate::math::ray::Ray3f;
use std::sync::Arc;

pub struct SceneObject {
    pub shape: Arc<dyn Shape>,
    pub material: Arc<dyn Material>,
    pub name: Option<String>,
}

impl SceneObject {
    pub fn new(shape: Arc<dyn Shape>, material: Arc<dyn Material>) -> Self {
        Self { shape, material, name: None }
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }
}

pub struct Scene {
    objects: Vec<SceneObject>,
    emitters: Vec<Box<dyn Emitter>>,
    sensors: Vec<Box<dyn Sensor>>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            emitters: Vec::new(),
            sensors: Vec::new(),
        }
    }

    pub fn with_objects(objects: Vec<SceneObject>) -> Self {
        let emitters = Self::emitters_from_objects(&objects);
        Self {
            objects,
            emitters,
            sensors: Vec::new(),
        }
    }

    pub fn add_object(&mut self, object: SceneObject) {
        let emission = object.material.emission();
        if !emission.is_black() {
            self.emitters.push(Box::new(MeshEmitter::from_shape(
                object.shape.clone(),
                emission,
            )));
        }
        self.objects.push(object);
    }

    pub fn objects(&self) -> &Vec<SceneObject> {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn emitters(&self) -> &Vec<Box<dyn Emitter>> {
        &self.emitters
    }

    pub fn add_sensor(&mut self, sensor: Box<dyn Sensor>) {
        self.sensors.push(sensor);
    }

    pub fn camera(&self, camera_id: usize) -> Option<&dyn Sensor> {
        self.sensors.get(camera_id).map(|s| s.as_ref())
    }

    // Every hit resolves to the material of the object it came from;
    // the hit's material id is the object index.
    pub fn material(&self, material_id: usize) -> Option<&dyn Material> {
        self.objects.get(material_id).map(|o| o.material.as_ref())
    }

    pub fn intersect(&self, ray: &Ray3f) -> Option<Hit> {
        let mut closest: Option<Hit> = None;
        for (idx, object) in self.objects.iter().enumerate() {
            if let Some(hit) = object.shape.ray_intersection(ray) {
                let nearer = match &closest {
                    Some(best) => hit.t() < best.t(),
                    None => true,
                };
                if nearer {
                    closest = Some(hit.with_material_id(idx));
                }
            }
        }
        closest
    }

    pub fn occluded(&self, ray: &Ray3f) -> bool {
        for object in &self.objects {
            if object.shape.ray_intersection_t(ray) {
                return true;
            }
        }
        false
    }

    fn emitters_from_objects(objects: &[SceneObject]) -> Vec<Box<dyn Emitter>> {
        let mut emitters: Vec<Box<dyn Emitter>> = Vec::new();
        for object in objects {
            let emission = object.material.emission();
            if !emission.is_black() {
                emitters.push(Box::new(MeshEmitter::from_shape(
                    object.shape.clone(),
                    emission,
                )));
            }
        }
        emitters
    }
}
