//! # Capacity Validation
//!
//! An image stores one payload bit per RGB channel, so a `width x height`
//! image holds at most `width * height * 3` bits. Oversized payloads are
//! rejected up front so embedding is all-or-nothing: a rejected message
//! never leaves a partially written grid behind.

use crate::error::StegoError;

/// Number of payload bits a `width x height` RGB image can carry.
pub fn capacity_bits(width: u32, height: u32) -> usize {
    width as usize * height as usize * 3
}

/// Reject a payload that does not fit. Must be called before any pixel is
/// mutated.
pub fn check(capacity: usize, payload_bits: usize) -> Result<(), StegoError> {
    if payload_bits > capacity {
        return Err(StegoError::CapacityExceeded {
            needed: payload_bits,
            capacity,
        });
    }
    Ok(())
}
