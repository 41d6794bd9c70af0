//! # Error Taxonomy
//!
//! Typed errors for the steganography codec. Callers match on the variant
//! rather than inspecting strings.
//!
//! Two failure modes are deliberately *not* errors: lenient UTF-8 decoding
//! (invalid byte sequences are dropped during extraction) and a missing
//! terminator (extraction falls back to whatever bits were accumulated).
//! Both are reported through [`crate::pipeline::Extracted`] instead.

use thiserror::Error;

/// Errors that can occur while embedding or extracting a message.
#[derive(Error, Debug)]
pub enum StegoError {
    /// The XOR key was empty. The cipher needs at least one byte to cycle.
    #[error("encryption key must not be empty")]
    InvalidKey,

    /// The payload (including the 32-bit terminator) does not fit in the
    /// image. Reported before any pixel is touched.
    #[error("message too long for this image: need {needed} bits but only {capacity} available")]
    CapacityExceeded { needed: usize, capacity: usize },

    /// The image collaborator could not decode or encode the carrier image.
    #[error("image access error: {0}")]
    ImageAccess(#[from] image::ImageError),

    /// Filesystem error while reading or writing the carrier image.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
