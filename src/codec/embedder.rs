//! # LSB Pixel Embedding
//!
//! Writes a bitstream into the least significant bits of an image's RGB
//! channels and reads it back.
//!
//! Traversal order is fixed and identical for both directions: pixels in
//! row-major order (`y` outer, `x` inner), channels R, G, B within each
//! pixel. The alpha channel is never touched, so images with transparency
//! survive a round trip unchanged apart from the LSBs that carry payload.

use image::RgbaImage;

use super::framing::TerminatorScanner;

/// Result of an extraction scan over an image.
#[derive(Debug)]
pub struct ScanResult {
    /// Accumulated payload bits, terminator already stripped when found.
    pub bits: Vec<u8>,
    /// Whether the 32-zero-bit end marker was actually seen. When `false`
    /// the bits are a best-effort read of the whole grid and the decoded
    /// message is low-confidence.
    pub terminator_found: bool,
}

/// Write `bits` into the image's channel LSBs, in place.
///
/// Stops as soon as every bit is written; remaining channels and pixels are
/// left untouched. The caller is responsible for checking capacity first —
/// if `bits` is longer than the grid, the excess is silently dropped here.
pub fn embed(img: &mut RgbaImage, bits: &[u8]) {
    let (width, height) = img.dimensions();
    let mut cursor = 0;

    'outer: for y in 0..height {
        for x in 0..width {
            if cursor >= bits.len() {
                break 'outer;
            }

            let pixel = img.get_pixel_mut(x, y);
            for channel in 0..3 {
                if cursor >= bits.len() {
                    break 'outer;
                }
                pixel[channel] = (pixel[channel] & 0xFE) | bits[cursor];
                cursor += 1;
            }
        }
    }
}

/// Scan the image's channel LSBs until the terminator is found or the grid
/// is exhausted.
///
/// The terminator check runs after every single bit, so a marker starting
/// mid-pixel or mid-byte is still caught at its exact position. Exhausting
/// the grid without finding the marker is not an error: the accumulated
/// bits are returned as-is with `terminator_found == false`.
pub fn extract(img: &RgbaImage) -> ScanResult {
    let (width, height) = img.dimensions();
    let mut scanner = TerminatorScanner::new();

    for y in 0..height {
        for x in 0..width {
            let pixel = img.get_pixel(x, y);
            for channel in 0..3 {
                if scanner.push(pixel[channel] & 1) {
                    return ScanResult {
                        bits: scanner.into_bits(),
                        terminator_found: true,
                    };
                }
            }
        }
    }

    ScanResult {
        bits: scanner.into_bits(),
        terminator_found: false,
    }
}
