//! # Embed / Extract Orchestration
//!
//! Wires the codec components into the two end-to-end operations:
//!
//! ```text
//! embed:   message → xor_mask → bytes_to_bits → append_terminator
//!            → capacity check → embedder::embed
//! extract: embedder::extract → bits_to_bytes → xor_mask → lenient decode
//! ```
//!
//! Both operations are stateless and synchronous; the caller owns the pixel
//! buffer for the duration of the call.

use image::RgbaImage;
use log::{debug, info};

use crate::codec::{bits, capacity, cipher, embedder, framing};
use crate::error::StegoError;

/// Outcome of [`extract_message`].
///
/// Extraction never fails outright once the image is in memory: a missing
/// terminator or undecodable bytes degrade the result instead of aborting
/// it. `terminator_found == false` means the scan read the entire grid
/// without seeing the end marker (wrong key, or an image that never had a
/// message embedded) and the message should be treated as low-confidence.
#[derive(Debug)]
pub struct Extracted {
    pub message: String,
    pub terminator_found: bool,
}

/// Mask, frame and embed a message into the image, in place.
///
/// # Errors
/// - [`StegoError::InvalidKey`] if the key is empty (nothing is computed).
/// - [`StegoError::CapacityExceeded`] if the payload plus the 32-bit
///   terminator does not fit; the image is left byte-for-byte unchanged.
pub fn embed_message(img: &mut RgbaImage, message: &str, key: &str) -> Result<(), StegoError> {
    let masked = cipher::xor_mask(message.as_bytes(), key.as_bytes())?;
    let mut payload = bits::bytes_to_bits(&masked);
    framing::append_terminator(&mut payload);

    let (width, height) = img.dimensions();
    let available = capacity::capacity_bits(width, height);
    capacity::check(available, payload.len())?;

    debug!(
        "embedding {} payload bits into {}x{} image ({} bits available)",
        payload.len(),
        width,
        height,
        available
    );
    embedder::embed(img, &payload);
    info!("embedded {} byte message", message.len());
    Ok(())
}

/// Scan the image and recover the hidden message, best-effort.
///
/// # Errors
/// Returns [`StegoError::InvalidKey`] if the key is empty. All other
/// degradations (terminator never found, invalid UTF-8 after unmasking) are
/// absorbed into the returned [`Extracted`].
pub fn extract_message(img: &RgbaImage, key: &str) -> Result<Extracted, StegoError> {
    if key.is_empty() {
        return Err(StegoError::InvalidKey);
    }

    let scan = embedder::extract(img);
    debug!(
        "scan accumulated {} bits, terminator found: {}",
        scan.bits.len(),
        scan.terminator_found
    );

    let masked = bits::bits_to_bytes(&scan.bits);
    let plain = cipher::xor_mask(&masked, key.as_bytes())?;

    Ok(Extracted {
        message: decode_lenient(&plain),
        terminator_found: scan.terminator_found,
    })
}

/// Decode UTF-8 dropping invalid sequences entirely, rather than replacing
/// them with U+FFFD. Extraction with a wrong key produces arbitrary bytes
/// and should still yield a printable (if garbled) string.
fn decode_lenient(mut bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                out.push_str(valid);
                break;
            }
            Err(err) => {
                let (valid, rest) = bytes.split_at(err.valid_up_to());
                if let Ok(prefix) = std::str::from_utf8(valid) {
                    out.push_str(prefix);
                }
                // Skip the offending bytes; an unknown error length means
                // the input ended mid-sequence.
                let skip = err.error_len().unwrap_or(rest.len());
                bytes = &rest[skip.min(rest.len())..];
            }
        }
    }
    out
}
