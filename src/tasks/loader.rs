use std::path::Path;

use anyhow::{Context, Result, bail};
use tokio::select;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::buffer::PixelBuffer;

// Decodes an image to RGBA8. Format is sniffed from content rather than
// trusted from the extension.
fn decode_rgba8(path: &Path) -> Result<image::RgbaImage> {
    let img = image::ImageReader::open(path)
        .with_context(|| format!("opening {}", path.display()))?
        .with_guessed_format()
        .context("sniffing image format")?
        .decode()
        .with_context(|| format!("decoding {}", path.display()))?;
    Ok(img.to_rgba8())
}

/// Resolves a path to its pixel buffer, decoding off the async runtime.
///
/// Cancellation wins over an in-flight decode; the blocking task is left to
/// run to completion and its result is dropped. The extraction core is only
/// ever handed the fully materialized buffer this returns.
pub async fn load(path: impl AsRef<Path>, cancel: CancellationToken) -> Result<PixelBuffer> {
    let path = path.as_ref().to_path_buf();
    let shown = path.display().to_string();
    let task = tokio::task::spawn_blocking(move || decode_rgba8(&path));
    select! {
        biased;
        _ = cancel.cancelled() => bail!("load of {shown} cancelled"),
        joined = task => {
            let image = joined.context("decode task panicked")??;
            debug!(path = %shown, width = image.width(), height = image.height(), "decoded");
            Ok(PixelBuffer::from_image(image))
        }
    }
}
