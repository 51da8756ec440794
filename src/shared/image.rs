//! Image Format Sniffing
//!
//! Detects an uploaded image's format from its leading bytes. The request's
//! declared content type is never trusted.

const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_SIGNATURE: [u8; 3] = [0xFF, 0xD8, 0xFF];

/// Supported upload formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
    Gif,
}

impl ImageFormat {
    /// File extension used for the stored object
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Webp => "webp",
            ImageFormat::Gif => "gif",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Webp => "image/webp",
            ImageFormat::Gif => "image/gif",
        }
    }
}

/// Detect the image format from magic bytes, `None` for anything unrecognised.
pub fn detect_image(bytes: &[u8]) -> Option<ImageFormat> {
    if bytes.starts_with(&PNG_SIGNATURE) {
        return Some(ImageFormat::Png);
    }
    if bytes.starts_with(&JPEG_SIGNATURE) {
        return Some(ImageFormat::Jpeg);
    }
    if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return Some(ImageFormat::Webp);
    }
    if bytes.starts_with(b"GIF") {
        return Some(ImageFormat::Gif);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_png() {
        let mut data = PNG_SIGNATURE.to_vec();
        data.extend_from_slice(b"IHDR");
        assert_eq!(detect_image(&data), Some(ImageFormat::Png));
    }

    #[test]
    fn detects_jpeg() {
        assert_eq!(
            detect_image(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00]),
            Some(ImageFormat::Jpeg)
        );
    }

    #[test]
    fn detects_webp() {
        let data = b"RIFF\x24\x00\x00\x00WEBPVP8 ";
        assert_eq!(detect_image(data), Some(ImageFormat::Webp));
    }

    #[test]
    fn riff_without_webp_tag_is_rejected() {
        let data = b"RIFF\x24\x00\x00\x00WAVEfmt ";
        assert_eq!(detect_image(data), None);
    }

    #[test]
    fn detects_gif() {
        assert_eq!(detect_image(b"GIF89a\x01\x00"), Some(ImageFormat::Gif));
    }

    #[test]
    fn rejects_short_and_unknown_input() {
        assert_eq!(detect_image(&[]), None);
        assert_eq!(detect_image(&[0x89, 0x50]), None);
        assert_eq!(detect_image(b"%PDF-1.7"), None);
    }

    #[test]
    fn extensions() {
        assert_eq!(ImageFormat::Jpeg.extension(), "jpg");
        assert_eq!(ImageFormat::Webp.mime_type(), "image/webp");
    }
}
