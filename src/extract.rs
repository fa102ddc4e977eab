use std::collections::HashMap;

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::error::Error;
use crate::sampler::BorderMask;

/// Returns the most frequently occurring color among the sampled pixels.
///
/// The buffer is scanned once in row-major order. For each sampled pixel the
/// color's count is compared against the running maximum *before* it is
/// incremented, so among colors that finish at the same count the first one
/// (in scan order) to cross each threshold stays the leader. Callers depend
/// on this exact single-pass behavior; do not replace it with a max over
/// final totals.
///
/// A zero-area image yields white (`#ffffff`), and so does a single-pixel
/// image: a color seen once has a pre-increment count of 0, which never
/// strictly exceeds the initial max. Alpha is ignored.
pub fn dominant_color(buffer: &PixelBuffer, border: f64) -> Rgb {
    scan(buffer.pixels(), buffer.width(), buffer.height(), border)
}

/// Convenience entry point over a raw RGBA8 slice: validates the length
/// against the declared dimensions, then samples the slice in place without
/// copying it.
pub fn extract_dominant_color(
    pixels: &[u8],
    width: u32,
    height: u32,
    border: f64,
) -> Result<Rgb, Error> {
    let expected = (width as usize) * (height as usize) * 4;
    if pixels.len() != expected {
        return Err(Error::InvalidBuffer {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(scan(pixels, width, height, border))
}

fn scan(pixels: &[u8], width: u32, height: u32, border: f64) -> Rgb {
    let mask = BorderMask::new(width, height, border);

    let mut counts: HashMap<Rgb, u32> = HashMap::new();
    let mut max = 0u32;
    let mut leader = Rgb::WHITE;

    for (index, pixel) in pixels.chunks_exact(4).enumerate() {
        let x = index as u32 % width;
        let y = index as u32 / width;
        if !mask.includes(x, y) {
            continue;
        }
        let color = Rgb([pixel[0], pixel[1], pixel[2]]);
        let count = counts.entry(color).or_insert(0);
        if *count > max {
            max = *count;
            leader = color;
        }
        *count += 1;
    }
    leader
}
