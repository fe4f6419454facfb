//! The selected-image value object.
//!
//! An upload is validated by sniffing its magic bytes, not by trusting
//! the filename. A file that is not a recognized raster image is
//! rejected at selection time and produces no further action.

use image::ImageFormat;

/// Image formats the client accepts for upload.
///
/// Matches the formats advertised by the file picker. The service
/// decodes server-side, so this is a usability gate, not a security
/// boundary.
const ACCEPTED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Bmp,
    ImageFormat::WebP,
];

/// Errors produced when validating a selected file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectImageError {
    /// The file contained no bytes.
    #[error("selected file is empty")]
    EmptyFile,

    /// The bytes do not start with a recognized image signature.
    #[error("file is not a recognized image format")]
    NotAnImage,

    /// The image format was recognized but is not accepted for upload.
    #[error("unsupported image format: {0:?}")]
    UnsupportedFormat(ImageFormat),
}

/// A user-chosen image held in memory for the duration of the page
/// session. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    bytes: Vec<u8>,
    filename: String,
    format: ImageFormat,
}

impl SelectedImage {
    /// Validate raw file bytes and wrap them as a selected image.
    ///
    /// # Errors
    ///
    /// Returns [`SelectImageError::EmptyFile`] for a zero-byte file,
    /// [`SelectImageError::NotAnImage`] when the magic bytes match no
    /// known image format, and [`SelectImageError::UnsupportedFormat`]
    /// for formats outside PNG/JPEG/BMP/WebP.
    pub fn from_bytes(
        bytes: Vec<u8>,
        filename: impl Into<String>,
    ) -> Result<Self, SelectImageError> {
        if bytes.is_empty() {
            return Err(SelectImageError::EmptyFile);
        }
        let format =
            image::guess_format(&bytes).map_err(|_| SelectImageError::NotAnImage)?;
        if !ACCEPTED_FORMATS.contains(&format) {
            return Err(SelectImageError::UnsupportedFormat(format));
        }
        Ok(Self {
            bytes,
            filename: filename.into(),
            format,
        })
    }

    /// The raw file bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The original filename, as reported by the picker.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The sniffed image format.
    #[must_use]
    pub const fn format(&self) -> ImageFormat {
        self.format
    }

    /// MIME type for the sniffed format, e.g. `"image/png"`.
    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        self.format.to_mime_type()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// PNG file signature.
    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    /// JPEG SOI marker.
    const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0];

    #[test]
    fn accepts_png_bytes() {
        let img = SelectedImage::from_bytes(PNG_MAGIC.to_vec(), "dish.png").unwrap();
        assert_eq!(img.format(), ImageFormat::Png);
        assert_eq!(img.mime_type(), "image/png");
        assert_eq!(img.filename(), "dish.png");
    }

    #[test]
    fn accepts_jpeg_regardless_of_filename() {
        // Sniffing trusts bytes, not names.
        let img = SelectedImage::from_bytes(JPEG_MAGIC.to_vec(), "photo.dat").unwrap();
        assert_eq!(img.format(), ImageFormat::Jpeg);
        assert_eq!(img.mime_type(), "image/jpeg");
    }

    #[test]
    fn rejects_empty_file() {
        let result = SelectedImage::from_bytes(Vec::new(), "empty.png");
        assert!(matches!(result, Err(SelectImageError::EmptyFile)));
    }

    #[test]
    fn rejects_non_image_bytes() {
        let result = SelectedImage::from_bytes(b"not an image at all".to_vec(), "note.txt");
        assert!(matches!(result, Err(SelectImageError::NotAnImage)));
    }

    #[test]
    fn rejects_recognized_but_unaccepted_format() {
        // GIF sniffs fine but is not in the accepted set.
        let result = SelectedImage::from_bytes(b"GIF89a trailing".to_vec(), "anim.gif");
        assert!(matches!(
            result,
            Err(SelectImageError::UnsupportedFormat(ImageFormat::Gif))
        ));
    }
}
