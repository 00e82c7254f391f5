//! QR rendering for jam links, served inline as PNG data URLs.

use base64::{engine::general_purpose, Engine as _};
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use std::io::Cursor;
use thiserror::Error;

/// Longest link we try to encode; binary-mode capacity tops out near 2.9 KB
/// at the lowest error correction.
pub const MAX_QR_INPUT: usize = 2048;

/// Minimum edge of the rendered image, in pixels.
const MIN_DIMENSION: u32 = 192;

#[derive(Debug, Error)]
pub enum QrCodeError {
    #[error("nothing to encode")]
    Empty,

    #[error("input of {0} bytes exceeds the {MAX_QR_INPUT} byte limit")]
    TooLong(usize),

    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("PNG encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Renders `text` as a black-on-white PNG with a quiet zone.
pub fn render_png(text: &str) -> Result<Vec<u8>, QrCodeError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(QrCodeError::Empty);
    }
    if text.len() > MAX_QR_INPUT {
        return Err(QrCodeError::TooLong(text.len()));
    }

    let code = QrCode::new(text.as_bytes())?;
    let pixels = code
        .render::<Luma<u8>>()
        .dark_color(Luma([0u8]))
        .light_color(Luma([255u8]))
        .quiet_zone(true)
        .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
        .build();

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(pixels).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

/// `data:image/png;base64,...` for embedding in an `<img src>`.
pub fn data_url(text: &str) -> Result<String, QrCodeError> {
    let png = render_png(text)?;
    Ok(format!(
        "data:image/png;base64,{}",
        general_purpose::STANDARD.encode(png)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn renders_png_of_minimum_size() {
        let png = render_png("https://open.spotify.com/socialsession/abc").unwrap();
        assert_eq!(png[..8], PNG_MAGIC);

        let decoded = image::load_from_memory(&png).unwrap();
        assert!(decoded.width() >= MIN_DIMENSION);
        assert_eq!(decoded.width(), decoded.height());
    }

    #[test]
    fn uses_dark_modules_on_light_background() {
        let png = render_png("https://example.com/jam").unwrap();
        let gray = image::load_from_memory(&png).unwrap().to_luma8();
        // Quiet zone corner is light; some module is dark.
        assert_eq!(gray.get_pixel(0, 0).0, [255]);
        assert!(gray.pixels().any(|p| p.0 == [0]));
    }

    #[test]
    fn data_url_has_png_prefix() {
        let url = data_url("https://example.com/jam").unwrap();
        assert!(url.starts_with("data:image/png;base64,iVBORw0KGgo"));
    }

    #[test]
    fn rejects_empty_and_oversized_input() {
        assert!(matches!(render_png("   "), Err(QrCodeError::Empty)));
        let huge = format!("https://example.com/{}", "a".repeat(MAX_QR_INPUT));
        assert!(matches!(render_png(&huge), Err(QrCodeError::TooLong(_))));
    }
}
