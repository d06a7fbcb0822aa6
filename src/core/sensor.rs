// Copyright @yucwang 2026

use crate::core::rng::LcgRng;
use crate::math::constants::{Float, Vector2f};
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

use std::thread;

pub trait Sensor: Send + Sync {
    // Map a (jittered) pixel position and a lens sample to a world
    // ray and its initial throughput weight.
    fn create_ray(&self, pixel: &Vector2f, u: &Vector2f) -> (Ray3f, RGBSpectrum);

    fn resolution(&self) -> (usize, usize);

    fn describe(&self) -> String {
        String::from("Sensor")
    }

    // One jittered ray per pixel. Pixels are independent: each draws
    // from its own deterministic stream, so band order cannot change
    // the result.
    fn create_ray_batch(&self, seed: u64) -> (Vec<Ray3f>, Vec<RGBSpectrum>) {
        let (width, height) = self.resolution();
        let pixel_count = width * height;
        let mut rays = vec![Ray3f::default(); pixel_count];
        let mut weights = vec![RGBSpectrum::default(); pixel_count];
        if pixel_count == 0 {
            return (rays, weights);
        }

        let thread_count = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        let rows_per_band = (height + thread_count - 1) / thread_count;
        let band_len = rows_per_band * width;

        thread::scope(|scope| {
            for (band_index, (ray_band, weight_band)) in rays
                .chunks_mut(band_len)
                .zip(weights.chunks_mut(band_len))
                .enumerate()
            {
                let this = &*self;
                scope.spawn(move || {
                    let y0 = band_index * rows_per_band;
                    for (offset, (ray_slot, weight_slot)) in
                        ray_band.iter_mut().zip(weight_band.iter_mut()).enumerate()
                    {
                        let x = offset % width;
                        let y = y0 + offset / width;
                        let mut rng = LcgRng::from_pixel(seed, x, y);
                        let pixel = Vector2f::new(x as Float, y as Float) + rng.next_2d();
                        let lens = rng.next_2d();
                        let (ray, weight) = this.create_ray(&pixel, &lens);
                        *ray_slot = ray;
                        *weight_slot = weight;
                    }
                });
            }
        });

        (rays, weights)
    }
}
