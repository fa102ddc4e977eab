pub mod buffer;
pub mod color;
pub mod compositor;
pub mod config;
pub mod error;
pub mod extract;
pub mod sampler;
pub mod treatment;
pub mod tasks {
    pub mod loader;
}

pub use buffer::PixelBuffer;
pub use color::Rgb;
pub use compositor::{FilterDefinition, FilterRegistry, compose};
pub use config::BackdropMode;
pub use error::Error;
pub use extract::{dominant_color, extract_dominant_color};
pub use treatment::{Treatment, select_treatment};
