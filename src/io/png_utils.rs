// Copyright @yucwang 2026

use crate::math::constants::Float;

use image::{ImageBuffer, Rgb};

fn to_srgb_byte(v: Float) -> u8 {
    let v = v.max(0.0).powf(1.0 / 2.2).min(1.0);
    (v * 255.0 + 0.5) as u8
}

// Write gamma-corrected PNG image to file
pub fn write_png_to_file(image: &[(Float, Float, Float)],
                         width: usize,
                         height: usize,
                         file_path: &str) {
    log::info!("Starting writing png image: {}.", file_path);

    let mut buffer: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::new(width as u32, height as u32);
    for (x, y, pixel) in buffer.enumerate_pixels_mut() {
        let (r, g, b) = image[y as usize * width + x as usize];
        *pixel = Rgb([to_srgb_byte(r), to_srgb_byte(g), to_srgb_byte(b)]);
    }

    match buffer.save(file_path) {
        Ok(()) => log::info!("PNG written to: {}.", file_path),
        Err(e) => log::error!("PNG written error: {}.", e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::to_srgb_byte;

    #[test]
    fn test_srgb_mapping() {
        assert_eq!(to_srgb_byte(0.0), 0);
        assert_eq!(to_srgb_byte(1.0), 255);
        // Values above white clamp instead of wrapping.
        assert_eq!(to_srgb_byte(10.0), 255);
        // Negative values clamp to black.
        assert_eq!(to_srgb_byte(-1.0), 0);
    }
}
