// Copyright @yucwang 2021

use crate::core::integrator::Integrator;
use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::math::bitmap::Bitmap;
use crate::math::constants::Float;
use crate::math::spectrum::RGBSpectrum;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

pub use super::renderer::Renderer;

// Decorrelates the path-sampling stream from the ray-generation
// stream of the same pixel.
const PATH_STREAM: u64 = 0x5bd1e9955bd1e995;

pub struct SimpleRenderer {
    integrator: Box<dyn Integrator>,
    camera_id: usize,
    seed: u64,
}

impl SimpleRenderer {
    pub fn new(integrator: Box<dyn Integrator>, camera_id: usize, seed: u64) -> Self {
        Self {
            integrator,
            camera_id,
            seed,
        }
    }
}

impl Renderer for SimpleRenderer {
    fn render(&self, scene: &Scene) -> Bitmap {
        let sensor = match scene.camera(self.camera_id) {
            Some(sensor) => sensor,
            None => return Bitmap::new(0, 0),
        };

        let (width, height) = sensor.resolution();
        let pixel_count = width * height;
        if pixel_count == 0 {
            return Bitmap::new(0, 0);
        }
        let spp = match self.integrator.samples_per_pixel() {
            0 => 1,
            v => v,
        };
        let inv_spp = 1.0 / (spp as Float);

        let block_size = 4096usize;
        let total_blocks = (pixel_count + block_size - 1) / block_size;
        let integrator_ref: &dyn Integrator = self.integrator.as_ref();

        let progress = ProgressBar::new((spp as u64) * (total_blocks as u64));
        progress.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} blocks")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let thread_count = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        let mut accum = vec![RGBSpectrum::default(); pixel_count];

        for iteration in 0..spp {
            let iter_seed = self.seed
                .wrapping_add((iteration as u64).wrapping_mul(0x9E3779B97F4A7C15));
            let (rays, weights) = sensor.create_ray_batch(iter_seed);

            let next_block = AtomicUsize::new(0);
            let (tx, rx) = mpsc::channel::<(usize, Vec<RGBSpectrum>)>();

            thread::scope(|scope| {
                for _ in 0..thread_count {
                    let tx = tx.clone();
                    let next_block = &next_block;
                    let rays = &rays;
                    let weights = &weights;
                    scope.spawn(move || {
                        loop {
                            let block_index = next_block.fetch_add(1, Ordering::Relaxed);
                            if block_index >= total_blocks {
                                break;
                            }

                            let start = block_index * block_size;
                            let end = (start + block_size).min(pixel_count);
                            let mut block = Vec::with_capacity(end - start);
                            for idx in start..end {
                                let x = idx % width;
                                let y = idx / width;
                                let mut rng = LcgRng::from_pixel(iter_seed ^ PATH_STREAM, x, y);
                                let radiance = integrator_ref.evaluate(&rays[idx], scene, &mut rng);
                                block.push(weights[idx] * radiance);
                            }
                            if tx.send((start, block)).is_err() {
                                break;
                            }
                        }
                    });
                }

                drop(tx);
                for _ in 0..total_blocks {
                    if let Ok((start, block)) = rx.recv() {
                        for (offset, value) in block.into_iter().enumerate() {
                            accum[start + offset] += value;
                        }
                        progress.inc(1);
                    }
                }
            });
        }
        progress.finish_and_clear();

        let mut bitmap = Bitmap::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let value = accum[x + width * y] * inv_spp;
                bitmap[(x, y)] = value.to_rgb();
            }
        }
        bitmap
    }
}
