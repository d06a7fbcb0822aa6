// Copyright 2020 TwoCookingMice

use glint::core::computation_node::ComputationNode;
use glint::core::scene::{Scene, SceneObject};
use glint::core::sensor::Sensor;
use glint::integrators::path::PathIntegrator;
use glint::io::{exr_utils, png_utils};
use glint::materials::diffuse::DiffuseMaterial;
use glint::materials::microfacet::RoughConductor;
use glint::math::constants::{Float, Vector3f};
use glint::math::spectrum::RGBSpectrum;
use glint::math::transform::Transform;
use glint::renderers::simple::{Renderer, SimpleRenderer};
use glint::sensors::perspective::PerspectiveCamera;
use glint::shapes::triangle::Triangle;
use glint::shapes::triangle_mesh::TriangleMesh;

use std::env;
use std::sync::Arc;
use std::time::Instant;

fn quad(origin: Vector3f, e0: Vector3f, e1: Vector3f) -> Vec<Triangle> {
    vec![
        Triangle::new(origin, origin + e0, origin + e0 + e1),
        Triangle::new(origin, origin + e0 + e1, origin + e1),
    ]
}

fn quad_mesh(origin: Vector3f, e0: Vector3f, e1: Vector3f) -> Arc<TriangleMesh> {
    Arc::new(TriangleMesh::from_triangles(quad(origin, e0, e1)))
}

// Axis-aligned box with outward normals.
fn box_mesh(min: Vector3f, max: Vector3f) -> Arc<TriangleMesh> {
    let dx = Vector3f::new(max.x - min.x, 0.0, 0.0);
    let dy = Vector3f::new(0.0, max.y - min.y, 0.0);
    let dz = Vector3f::new(0.0, 0.0, max.z - min.z);

    let mut triangles = Vec::with_capacity(12);
    triangles.extend(quad(min, dx, dz));                                    // bottom
    triangles.extend(quad(Vector3f::new(min.x, max.y, min.z), dz, dx));     // top
    triangles.extend(quad(Vector3f::new(min.x, min.y, max.z), dx, dy));     // front
    triangles.extend(quad(min, dy, dx));                                    // back
    triangles.extend(quad(min, dz, dy));                                    // left
    triangles.extend(quad(Vector3f::new(max.x, min.y, min.z), dy, dz));     // right
    Arc::new(TriangleMesh::from_triangles(triangles))
}

// Enclosed test room with one area light, a rough metal box and a
// diffuse box, open toward the camera.
fn build_scene(width: usize,
               height: usize,
               aperture: Float,
               focus: Float,
               obj_path: Option<&str>) -> Scene {
    let mut scene = Scene::new();

    let white = RGBSpectrum::new(0.75, 0.75, 0.75);
    let red = RGBSpectrum::new(0.63, 0.065, 0.05);
    let green = RGBSpectrum::new(0.14, 0.45, 0.091);

    // Room interior: x in [-1, 1], y in [0, 2], z in [-1, 1]; wall
    // normals face the interior.
    scene.add_object(SceneObject::new(
        quad_mesh(Vector3f::new(-1.0, 0.0, -1.0),
                  Vector3f::new(0.0, 0.0, 2.0),
                  Vector3f::new(2.0, 0.0, 0.0)),
        Arc::new(DiffuseMaterial::new(white)),
    ).with_name(String::from("floor")));
    scene.add_object(SceneObject::new(
        quad_mesh(Vector3f::new(-1.0, 2.0, -1.0),
                  Vector3f::new(2.0, 0.0, 0.0),
                  Vector3f::new(0.0, 0.0, 2.0)),
        Arc::new(DiffuseMaterial::new(white)),
    ).with_name(String::from("ceiling")));
    scene.add_object(SceneObject::new(
        quad_mesh(Vector3f::new(-1.0, 0.0, -1.0),
                  Vector3f::new(2.0, 0.0, 0.0),
                  Vector3f::new(0.0, 2.0, 0.0)),
        Arc::new(DiffuseMaterial::new(white)),
    ).with_name(String::from("back")));
    scene.add_object(SceneObject::new(
        quad_mesh(Vector3f::new(-1.0, 0.0, -1.0),
                  Vector3f::new(0.0, 2.0, 0.0),
                  Vector3f::new(0.0, 0.0, 2.0)),
        Arc::new(DiffuseMaterial::new(red)),
    ).with_name(String::from("left")));
    scene.add_object(SceneObject::new(
        quad_mesh(Vector3f::new(1.0, 0.0, -1.0),
                  Vector3f::new(0.0, 0.0, 2.0),
                  Vector3f::new(0.0, 2.0, 0.0)),
        Arc::new(DiffuseMaterial::new(green)),
    ).with_name(String::from("right")));

    scene.add_object(SceneObject::new(
        quad_mesh(Vector3f::new(-0.4, 1.98, -0.4),
                  Vector3f::new(0.8, 0.0, 0.0),
                  Vector3f::new(0.0, 0.0, 0.8)),
        Arc::new(DiffuseMaterial::emissive(RGBSpectrum::new(17.0, 12.0, 4.0))),
    ).with_name(String::from("light")));

    scene.add_object(SceneObject::new(
        box_mesh(Vector3f::new(-0.65, 0.0, -0.6),
                 Vector3f::new(-0.05, 1.2, 0.0)),
        Arc::new(RoughConductor::new(RGBSpectrum::new(0.9, 0.85, 0.7), 0.2)),
    ).with_name(String::from("tall box")));
    scene.add_object(SceneObject::new(
        box_mesh(Vector3f::new(0.1, 0.0, 0.0),
                 Vector3f::new(0.7, 0.6, 0.6)),
        Arc::new(DiffuseMaterial::new(white)),
    ).with_name(String::from("short box")));

    if let Some(path) = obj_path {
        let mut mesh = TriangleMesh::from_obj(path)
            .expect("failed to load obj mesh");
        mesh.apply_transform(&Vector3f::new(0.5, 0.5, 0.5),
                             &Vector3f::new(0.0, 0.6, 0.3));
        scene.add_object(SceneObject::new(
            Arc::new(mesh),
            Arc::new(DiffuseMaterial::new(white)),
        ).with_name(String::from(path)));
    }

    let camera_to_world = Transform::look_at(Vector3f::new(0.0, 1.0, 4.0),
                                             Vector3f::new(0.0, 1.0, 0.0),
                                             Vector3f::new(0.0, 1.0, 0.0));
    scene.add_sensor(Box::new(PerspectiveCamera::new(
        camera_to_world, width, height, 20.0, 1e-4, 1e5, aperture, focus,
    )));

    scene
}

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <output.(exr|png)> [--spp N] [--max-depth N] [--seed N] \
                   [--camera N] [--width N] [--height N] [--aperture F] [--focus F] [--obj path]",
                  args[0]);
        std::process::exit(1);
    }

    let output_path = &args[1];
    let mut spp: u32 = 32;
    let mut max_depth: u32 = 64;
    let mut seed: u64 = 0;
    let mut camera_id: usize = 0;
    let mut width: usize = 512;
    let mut height: usize = 512;
    let mut aperture: Float = 0.0;
    let mut focus: Float = 4.0;
    let mut obj_path: Option<String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--spp" => {
                i += 1;
                spp = args.get(i).and_then(|v| v.parse::<u32>().ok()).unwrap_or(spp);
            }
            "--max-depth" => {
                i += 1;
                max_depth = args.get(i).and_then(|v| v.parse::<u32>().ok()).unwrap_or(max_depth);
            }
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|v| v.parse::<u64>().ok()).unwrap_or(seed);
            }
            "--camera" => {
                i += 1;
                camera_id = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(camera_id);
            }
            "--width" => {
                i += 1;
                width = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(width);
            }
            "--height" => {
                i += 1;
                height = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(height);
            }
            "--aperture" => {
                i += 1;
                aperture = args.get(i).and_then(|v| v.parse::<Float>().ok()).unwrap_or(aperture);
            }
            "--focus" => {
                i += 1;
                focus = args.get(i).and_then(|v| v.parse::<Float>().ok()).unwrap_or(focus);
            }
            "--obj" => {
                i += 1;
                obj_path = args.get(i).cloned();
            }
            _ => {}
        }
        i += 1;
    }

    let scene = build_scene(width, height, aperture, focus, obj_path.as_deref());
    log::info!("Scene built: {} objects, {} emitters.", scene.len(), scene.emitters().len());
    for object in scene.objects() {
        log::debug!("  {}: {}",
                    object.name.as_deref().unwrap_or("unnamed"),
                    object.material.to_string());
    }
    if let Some(camera) = scene.camera(camera_id) {
        log::info!("{}", camera.describe());
    }

    let integrator = Box::new(PathIntegrator::new(max_depth, spp));
    let renderer = SimpleRenderer::new(integrator, camera_id, seed);

    let start = Instant::now();
    let image = renderer.render(&scene);
    log::info!("Rendered {}x{} with {} spp in {:.2}s.",
               image.width(), image.height(), spp, start.elapsed().as_secs_f32());

    if output_path.ends_with(".png") {
        png_utils::write_png_to_file(&image.raw_copy(), image.width(), image.height(), output_path);
    } else {
        exr_utils::write_exr_to_file(&image.raw_copy(), image.width(), image.height(), output_path);
    }
}
