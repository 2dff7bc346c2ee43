//! Bitmap decoding and storage.
//!
//! Decoding is delegated to the `image` crate; this module only adds the
//! typed error split (missing file / unreadable file / undecodable bytes)
//! that shape construction reports to callers.

use std::fmt;
use std::path::{Path, PathBuf};

/// Error constructing a [`Bitmap`] from a file.
#[derive(Debug)]
pub enum BitmapError {
    /// The path does not exist.
    NotFound(PathBuf),
    /// The file exists but could not be read.
    Access(PathBuf, std::io::Error),
    /// The bytes are not a decodable image.
    Format(PathBuf, image::ImageError),
}

impl fmt::Display for BitmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitmapError::NotFound(p) => write!(f, "image file {} not found", p.display()),
            BitmapError::Access(p, e) => write!(f, "image file {}: {e}", p.display()),
            BitmapError::Format(p, e) => write!(f, "image file {}: {e}", p.display()),
        }
    }
}

impl std::error::Error for BitmapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BitmapError::NotFound(_) => None,
            BitmapError::Access(_, e) => Some(e),
            BitmapError::Format(_, e) => Some(e),
        }
    }
}

/// Decoded RGBA bitmap.
#[derive(Debug, Clone)]
pub struct Bitmap {
    pixels: image::RgbaImage,
}

impl Bitmap {
    /// Decodes an image file, distinguishing missing, unreadable, and
    /// undecodable inputs.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BitmapError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(BitmapError::NotFound(path.to_path_buf()));
        }
        let bytes =
            std::fs::read(path).map_err(|e| BitmapError::Access(path.to_path_buf(), e))?;
        let decoded = image::load_from_memory(&bytes)
            .map_err(|e| BitmapError::Format(path.to_path_buf(), e))?;
        Ok(Self { pixels: decoded.to_rgba8() })
    }

    /// Wraps raw straight-alpha RGBA bytes; `None` if the byte count does
    /// not match `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, bytes: Vec<u8>) -> Option<Self> {
        Some(Self { pixels: image::RgbaImage::from_raw(width, height, bytes)? })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.pixels.width() as i32
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.pixels.height() as i32
    }

    /// Straight-alpha RGBA bytes, row-major.
    #[inline]
    pub fn rgba_bytes(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// A resampled copy at `width`×`height`.
    pub fn scaled(&self, width: i32, height: i32) -> Bitmap {
        let w = width.max(1) as u32;
        let h = height.max(1) as u32;
        Bitmap {
            pixels: image::imageops::resize(
                &self.pixels,
                w,
                h,
                image::imageops::FilterType::Triangle,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_found() {
        let err = Bitmap::open("/nonexistent/definitely-missing.png").unwrap_err();
        assert!(matches!(err, BitmapError::NotFound(_)));
    }

    #[test]
    fn from_rgba_validates_length() {
        assert!(Bitmap::from_rgba(2, 2, vec![0; 16]).is_some());
        assert!(Bitmap::from_rgba(2, 2, vec![0; 15]).is_none());
    }

    #[test]
    fn scaled_changes_dimensions() {
        let bmp = Bitmap::from_rgba(4, 4, vec![255; 64]).unwrap();
        let half = bmp.scaled(2, 2);
        assert_eq!((half.width(), half.height()), (2, 2));
    }
}
