//! # stegotext
//!
//! Hide text messages in the least-significant bits of an image's RGB
//! channels, obfuscated with a repeating-key XOR stream, and recover them.
//!
//! The pipeline: the message is XOR-masked with the key, packed into a
//! bitstream (MSB first), framed with a 32-zero-bit terminator, checked
//! against the image's `width * height * 3` bit capacity, and written one
//! bit per channel LSB. Extraction scans the LSBs back until the terminator
//! and reverses each step.
//!
//! XOR masking is obfuscation, not encryption; use a lossless output format
//! (the crate always writes PNG) or the payload will not survive.

pub mod carrier;
pub mod codec;
pub mod config;
pub mod error;
pub mod pipeline;

pub use error::StegoError;
pub use pipeline::{embed_message, extract_message, Extracted};
