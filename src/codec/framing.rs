//! # Payload Framing
//!
//! The embedded bitstream is self-delimiting: a run of 32 zero bits appended
//! after the payload marks end-of-message during the extraction scan.
//!
//! Detection is incremental and bit-granular. The scanner is fed one channel
//! LSB at a time and reports the terminator as soon as the last 32
//! accumulated bits are all zero and stripping them leaves a whole number
//! of payload bytes. A known limitation, kept on purpose: if the masked
//! payload itself contains a byte-aligned run of 32 zero bits, the scan
//! stops there and the tail of the message is lost.

/// Length of the end-of-payload marker, in bits.
pub const TERMINATOR_BITS: usize = 32;

/// Append the 32-zero-bit end marker to a payload bitstream.
pub fn append_terminator(bits: &mut Vec<u8>) {
    bits.extend(std::iter::repeat(0).take(TERMINATOR_BITS));
}

/// Incremental terminator detector for the extraction scan.
///
/// Feed it every extracted bit via [`push`](Self::push); it accumulates them
/// and watches the trailing zero run. When the run covers the last 32 bits
/// at a byte-aligned payload position the terminator has been seen: the
/// marker bits are stripped from the accumulator and `push` returns `true`.
#[derive(Debug, Default)]
pub struct TerminatorScanner {
    bits: Vec<u8>,
    trailing_zeros: usize,
}

impl TerminatorScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one bit. Returns `true` when the terminator was just
    /// completed; the caller should stop scanning at that point.
    ///
    /// The marker is only accepted at positions that leave a whole number
    /// of payload bytes before it. The payload is always packed from whole
    /// bytes, so a masked byte ending in zero bits would otherwise bleed
    /// into the marker and cost the message its last byte.
    pub fn push(&mut self, bit: u8) -> bool {
        self.bits.push(bit);
        if bit == 0 {
            self.trailing_zeros += 1;
        } else {
            self.trailing_zeros = 0;
        }

        if self.trailing_zeros >= TERMINATOR_BITS
            && (self.bits.len() - TERMINATOR_BITS) % 8 == 0
        {
            self.bits.truncate(self.bits.len() - TERMINATOR_BITS);
            return true;
        }
        false
    }

    /// Consume the scanner, yielding the accumulated payload bits (with the
    /// terminator already stripped if it was found).
    pub fn into_bits(self) -> Vec<u8> {
        self.bits
    }
}
