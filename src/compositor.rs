use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use image::RgbaImage;
use image::imageops::{self, FilterType};
use tracing::debug;

/// Reusable description of one blur treatment. Instances with the same
/// radius share a single definition, mirrored by the `id` they render under.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDefinition {
    pub id: String,
    /// Gaussian blur standard deviation.
    pub radius: f32,
    /// 0 = grayscale, 1 = original colors.
    pub saturation: f32,
}

/// Process-wide registry of filter definitions, keyed by radius.
///
/// `get_or_create` is idempotent: repeated calls for the same radius hand
/// back the same shared definition, so many images on one surface reuse one
/// filter instead of stamping out duplicates.
#[derive(Debug, Default)]
pub struct FilterRegistry {
    filters: Mutex<BTreeMap<u32, Arc<FilterDefinition>>>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_create(&self, radius: f32, saturation: f32) -> Arc<FilterDefinition> {
        let mut filters = self.filters.lock().expect("filter registry mutex poisoned");
        filters
            .entry(radius.to_bits())
            .or_insert_with(|| {
                debug!(radius, saturation, "registering blur filter");
                Arc::new(FilterDefinition {
                    id: format!("backdrop-blur-{radius}"),
                    radius,
                    saturation,
                })
            })
            .clone()
    }

    pub fn len(&self) -> usize {
        self.filters.lock().expect("filter registry mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Produces the full-bleed blurred copy described by `def`: the source is
/// stretched to exactly the target size (aspect ratio intentionally not
/// preserved), blurred, then desaturated toward luma.
pub fn compose(
    image: &RgbaImage,
    target_w: u32,
    target_h: u32,
    def: &FilterDefinition,
) -> RgbaImage {
    let stretched = imageops::resize(image, target_w.max(1), target_h.max(1), FilterType::Triangle);
    let mut out = if def.radius > 0.0 {
        imageops::blur(&stretched, def.radius)
    } else {
        stretched
    };
    apply_saturation(&mut out, def.saturation);
    out
}

// Per-pixel mix toward luma, using the same channel weights as an SVG
// saturate color matrix.
fn apply_saturation(image: &mut RgbaImage, factor: f32) {
    let factor = factor.clamp(0.0, 1.0);
    if (factor - 1.0).abs() <= f32::EPSILON {
        return;
    }
    for pixel in image.pixels_mut() {
        let rgb = [pixel[0] as f32, pixel[1] as f32, pixel[2] as f32];
        let luma = 0.213 * rgb[0] + 0.715 * rgb[1] + 0.072 * rgb[2];
        for (channel, value) in rgb.iter().enumerate() {
            pixel[channel] = (luma + (value - luma) * factor).round().clamp(0.0, 255.0) as u8;
        }
    }
}
