//! # Bit Packing
//!
//! Converts between byte sequences and flat bit sequences (one `u8` per bit,
//! values 0 or 1), most-significant-bit first. The bit representation is what
//! gets written into pixel LSBs.

/// Expand each byte into 8 bits, MSB first.
///
/// The output length is always exactly `8 * bytes.len()`.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for byte in bytes {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    bits
}

/// Group bits back into bytes, 8 at a time, in order.
///
/// A trailing group of fewer than 8 bits is discarded rather than
/// zero-padded: trailing bits are extraction-scan artifacts (LSBs read past
/// the real payload), never part of the message itself.
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |byte, &bit| (byte << 1) | bit))
        .collect()
}
