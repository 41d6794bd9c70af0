//! # Steganography Codec
//!
//! The core pipeline components: bit packing, XOR masking, terminator
//! framing, capacity validation and LSB embedding. Everything here is pure
//! and synchronous; image file I/O lives in [`crate::carrier`].

pub mod bits;
pub mod capacity;
pub mod cipher;
pub mod embedder;
pub mod framing;

pub use bits::{bits_to_bytes, bytes_to_bits};
pub use capacity::capacity_bits;
pub use cipher::xor_mask;
pub use embedder::ScanResult;
pub use framing::TERMINATOR_BITS;
