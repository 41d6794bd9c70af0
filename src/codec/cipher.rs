//! # Repeating-Key XOR Stream Cipher
//!
//! Obfuscates the payload before embedding by XOR-ing it with a short key
//! applied cyclically. XOR is self-inverse, so masking and unmasking are the
//! same operation.
//!
//! This is an obfuscation layer, not a security guarantee: an attacker who
//! suspects LSB steganography can brute-force or frequency-analyse the key.

use crate::error::StegoError;

/// Apply a repeating-key XOR mask: `out[i] = bytes[i] ^ key[i % key.len()]`.
///
/// Calling it again with the same key recovers the original bytes.
///
/// # Errors
/// Returns [`StegoError::InvalidKey`] if the key is empty.
pub fn xor_mask(bytes: &[u8], key: &[u8]) -> Result<Vec<u8>, StegoError> {
    if key.is_empty() {
        return Err(StegoError::InvalidKey);
    }

    Ok(bytes
        .iter()
        .zip(key.iter().cycle())
        .map(|(byte, key_byte)| byte ^ key_byte)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_is_involution() {
        let data = b"The quick brown fox \xF0\x9F\xA6\x80";
        let key = b"secret";
        let masked = xor_mask(data, key).unwrap();
        assert_ne!(masked, data.to_vec());
        assert_eq!(xor_mask(&masked, key).unwrap(), data.to_vec());
    }

    #[test]
    fn test_key_repeats_cyclically() {
        let masked = xor_mask(&[0x00, 0x00, 0x00, 0x00], b"ab").unwrap();
        assert_eq!(masked, vec![b'a', b'b', b'a', b'b']);
    }

    #[test]
    fn test_empty_key_is_rejected() {
        assert!(matches!(
            xor_mask(b"data", b""),
            Err(StegoError::InvalidKey)
        ));
    }

    #[test]
    fn test_empty_input_is_fine() {
        assert_eq!(xor_mask(&[], b"k").unwrap(), Vec::<u8>::new());
    }
}
