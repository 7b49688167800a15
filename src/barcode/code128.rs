use barcoders::generators::image::Image;
use barcoders::sym::code128::Code128;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::{BarcodeEncoder, PNG_DATA_URI_PREFIX};
use crate::core::NaglowekError;

/// Character set B selector understood by `barcoders`.
const CHARSET_B: char = 'Ɓ';

/// Code 128 (character set B) barcode rendered as an inline PNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code128Png {
    height: u32,
    width: u32,
}

impl Default for Code128Png {
    fn default() -> Self {
        Self {
            height: 60,
            width: 180,
        }
    }
}

impl Code128Png {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bar height in pixels (default: 60).
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Width of the image block on the page, in points (default: 180).
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Raw PNG bytes for `payload`.
    pub fn png(&self, payload: &str) -> Result<Vec<u8>, NaglowekError> {
        if let Some(c) = payload.chars().find(|c| !(' '..='~').contains(c)) {
            return Err(NaglowekError::Barcode(format!(
                "character {c:?} cannot be encoded in Code 128 set B"
            )));
        }
        let symbol = Code128::new(format!("{CHARSET_B}{payload}"))
            .map_err(|e| NaglowekError::Barcode(format!("{e:?}")))?;
        Image::png(self.height)
            .generate(&symbol.encode()[..])
            .map_err(|e| NaglowekError::Barcode(format!("PNG generation failed: {e:?}")))
    }
}

impl BarcodeEncoder for Code128Png {
    fn encode(&self, payload: &str) -> Result<String, NaglowekError> {
        let png = self.png(payload)?;
        Ok(format!("{PNG_DATA_URI_PREFIX}{}", STANDARD.encode(png)))
    }

    fn width(&self) -> Option<u32> {
        Some(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn renders_png() {
        let png = Code128Png::new().png("ABC123").unwrap();
        assert!(png.starts_with(PNG_SIGNATURE));
    }

    #[test]
    fn data_uri_prefix() {
        let uri = Code128Png::new().encode("5265877635-20250826-0100001AF629-AF").unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
        assert!(uri.len() > PNG_DATA_URI_PREFIX.len());
    }

    /// Width and height from the PNG IHDR chunk.
    fn dimensions(png: &[u8]) -> (u32, u32) {
        let be = |b: &[u8]| u32::from_be_bytes([b[0], b[1], b[2], b[3]]);
        (be(&png[16..20]), be(&png[20..24]))
    }

    #[test]
    fn height_sets_image_height() {
        let short = Code128Png::new().with_height(40).png("ABC123").unwrap();
        let tall = Code128Png::new().with_height(100).png("ABC123").unwrap();
        let (short_w, short_h) = dimensions(&short);
        let (tall_w, tall_h) = dimensions(&tall);
        assert_eq!(short_h, 40);
        assert_eq!(tall_h, 100);
        assert_eq!(short_w, tall_w);
        assert_ne!(short, tall);
    }

    #[test]
    fn rejects_non_ascii() {
        let err = Code128Png::new().encode("zażółć").unwrap_err();
        assert!(matches!(err, NaglowekError::Barcode(_)));
    }

    #[test]
    fn configured_width() {
        assert_eq!(Code128Png::new().width(), Some(180));
        assert_eq!(Code128Png::new().with_width(240).width(), Some(240));
    }
}
