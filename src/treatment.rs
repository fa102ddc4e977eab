use std::sync::Arc;

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::compositor::{FilterDefinition, FilterRegistry};
use crate::config::BackdropMode;
use crate::extract;

/// What the presentation layer should render behind an image: a solid fill
/// or the shared blur filter to apply to a stretched copy.
#[derive(Debug, Clone)]
pub enum Treatment {
    Solid(Rgb),
    Blurred(Arc<FilterDefinition>),
}

/// Derives the background treatment for one decoded image.
///
/// Dominant mode scans the buffer; blur mode never touches the pixels and
/// only resolves the shared filter definition for its radius.
pub fn select_treatment(
    buffer: &PixelBuffer,
    mode: &BackdropMode,
    registry: &FilterRegistry,
) -> Treatment {
    match mode {
        BackdropMode::Dominant { border } => {
            Treatment::Solid(extract::dominant_color(buffer, border.unwrap_or(0.0)))
        }
        BackdropMode::Blur { radius, saturation } => {
            Treatment::Blurred(registry.get_or_create(*radius, *saturation))
        }
    }
}
