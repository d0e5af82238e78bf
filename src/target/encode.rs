use std::io::Cursor;

use anyhow::Context as _;
use base64::Engine as _;

use crate::foundation::error::WandResult;

/// Serialized sub-image ready to be inlined as a `data:` URI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    /// Media type, e.g. `image/png`.
    pub mime: String,
    /// Encoded file bytes.
    pub bytes: Vec<u8>,
}

/// Turns a composite sub-image into bytes.
pub trait ImageEncoder {
    /// Encode `image` into a file format the rasterizer can read back.
    fn encode(&self, image: &image::DynamicImage) -> WandResult<EncodedImage>;
}

/// Default encoder: lossless PNG via the `image` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct PngEncoder;

impl ImageEncoder for PngEncoder {
    fn encode(&self, image: &image::DynamicImage) -> WandResult<EncodedImage> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .context("encode composite image as png")?;
        Ok(EncodedImage {
            mime: "image/png".to_owned(),
            bytes,
        })
    }
}

/// Standard padded base64, split into lines of at most `width` characters.
pub fn base64_lines(bytes: &[u8], width: usize) -> Vec<String> {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    let width = width.max(1);
    // Base64 output is ASCII, so byte offsets are char boundaries.
    (0..encoded.len())
        .step_by(width)
        .map(|start| encoded[start..(start + width).min(encoded.len())].to_owned())
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/target/encode.rs"]
mod tests;
