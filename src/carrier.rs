//! # Carrier Image I/O
//!
//! The codec works on an in-memory RGBA pixel buffer; this module is the
//! boundary that loads it from disk and persists it back. Output is always
//! PNG: embedding survives only lossless formats, and a lossy re-encode
//! (JPEG et al.) would silently destroy the hidden payload.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::info;

use crate::error::StegoError;

/// Load a carrier image and normalize it to an RGBA buffer.
///
/// Any input format the `image` crate can decode is accepted; the alpha
/// channel is synthesized as opaque where the source has none.
pub fn load(path: &Path) -> Result<RgbaImage, StegoError> {
    let img = image::open(path)?;
    Ok(img.to_rgba8())
}

/// Persist the (possibly mutated) pixel buffer as PNG.
pub fn save(img: &RgbaImage, path: &Path) -> Result<(), StegoError> {
    img.save_with_format(path, image::ImageFormat::Png)?;
    info!("saved image to {}", path.display());
    Ok(())
}

/// Derive the default output path for an embedded image: the input's file
/// stem plus a suffix, always with a `.png` extension, in the same
/// directory. `photo.jpg` with suffix `_encrypted` becomes
/// `photo_encrypted.png`.
pub fn derive_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{stem}{suffix}.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_replaces_extension() {
        assert_eq!(
            derive_output_path(Path::new("photos/cat.jpg"), "_encrypted"),
            PathBuf::from("photos/cat_encrypted.png")
        );
    }

    #[test]
    fn test_output_path_without_extension() {
        assert_eq!(
            derive_output_path(Path::new("carrier"), "_encrypted"),
            PathBuf::from("carrier_encrypted.png")
        );
    }

    #[test]
    fn test_custom_suffix() {
        assert_eq!(
            derive_output_path(Path::new("a/b/c.png"), "-stego"),
            PathBuf::from("a/b/c-stego.png")
        );
    }
}
