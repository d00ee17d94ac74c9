use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

/// Separator between the MIME type and the body of a captured photo
const BASE64_MARKER: &str = ";base64,";

/// Standard alphabet, padding optional, trailing bits tolerated.
/// Matches what browsers accept from `atob`.
const FORGIVING_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Raster formats a report can embed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Gif => "gif",
            ImageFormat::Bmp => "bmp",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Bmp => "image/bmp",
        }
    }

    /// Every format, in the order content types are declared in a package
    pub fn all() -> [ImageFormat; 4] {
        [
            ImageFormat::Png,
            ImageFormat::Jpeg,
            ImageFormat::Gif,
            ImageFormat::Bmp,
        ]
    }

    /// Detects the format from the file signature
    pub fn sniff(bytes: &[u8]) -> Option<ImageFormat> {
        if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            Some(ImageFormat::Png)
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(ImageFormat::Jpeg)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(ImageFormat::Gif)
        } else if bytes.starts_with(b"BM") {
            Some(ImageFormat::Bmp)
        } else {
            None
        }
    }
}

/// A photo body ready to embed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

/// ImagePayloadDecoder service for `<mime>;base64,<data>` photo payloads
pub struct ImagePayloadDecoder;

impl ImagePayloadDecoder {
    /// Decodes a captured photo payload
    ///
    /// Returns `None` instead of an error when the payload has no base64 marker, the
    /// body is not valid base64, decodes to nothing, or is not a recognised raster
    /// image. The caller skips that photo and carries on with the report.
    ///
    /// Only PNG, JPEG, GIF and BMP signatures are embeddable. A payload that is valid
    /// base64 but carries any other format (WebP, HEIC, SVG, plain bytes) is dropped
    /// even when its declared MIME type claims an image.
    pub fn decode(payload: &str) -> Option<DecodedImage> {
        let (_mime, body) = payload.trim().split_once(BASE64_MARKER)?;

        let compact: String = body.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        let bytes = FORGIVING_STANDARD.decode(compact.as_bytes()).ok()?;
        if bytes.is_empty() {
            return None;
        }

        let format = ImageFormat::sniff(&bytes)?;
        Some(DecodedImage { format, bytes })
    }
}
