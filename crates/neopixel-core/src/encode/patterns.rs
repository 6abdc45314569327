//! Symbol patterns and encoding errors.

use thiserror::Error;

use super::transfer::encoded_len;

/// Reasons a pixel cannot be encoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The pattern for a logical 0 bit has no bytes
    #[error("Zero-bit symbol pattern is empty")]
    EmptyZeroPattern,

    /// The pattern for a logical 1 bit has no bytes
    #[error("One-bit symbol pattern is empty")]
    EmptyOnePattern,

    /// The two patterns would produce blocks of different widths
    #[error("Symbol pattern lengths differ: zero is {zero} bytes, one is {one} bytes")]
    PatternLengthMismatch { zero: usize, one: usize },

    /// 24 copies of the pattern would not fit in memory
    #[error("Symbol pattern too long: {len} bytes per bit overflows the pixel length")]
    PatternTooLong { len: usize },

    /// Caller-provided output buffer cannot hold a whole pixel
    #[error("Output buffer too small: expected at least {expected} bytes, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },
}

/// A validated pair of symbol patterns.
///
/// The zero and one patterns are the byte images of the waveform that the
/// LED reads as a logical 0 or 1 bit when clocked out over SPI. Both are
/// guaranteed non-empty and of equal length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolPatterns<'a> {
    zero: &'a [u8],
    one: &'a [u8],
    encoded_len: usize,
}

impl<'a> SymbolPatterns<'a> {
    /// Validate and pair two patterns.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::EmptyZeroPattern`] or
    /// [`EncodeError::EmptyOnePattern`] if either side is empty,
    /// [`EncodeError::PatternLengthMismatch`] if the lengths differ, and
    /// [`EncodeError::PatternTooLong`] if one encoded pixel would overflow
    /// `usize`.
    pub fn new(zero: &'a [u8], one: &'a [u8]) -> Result<Self, EncodeError> {
        match check_lengths(zero.len(), one.len()) {
            Ok(encoded_len) => Ok(Self {
                zero,
                one,
                encoded_len,
            }),
            Err(e) => {
                tracing::debug!(
                    zero_len = zero.len(),
                    one_len = one.len(),
                    "Rejecting symbol patterns: {}",
                    e
                );
                Err(e)
            }
        }
    }

    /// Pattern emitted for a clear bit.
    pub fn zero(&self) -> &'a [u8] {
        self.zero
    }

    /// Pattern emitted for a set bit.
    pub fn one(&self) -> &'a [u8] {
        self.one
    }

    /// Bytes per encoded bit.
    pub fn symbol_len(&self) -> usize {
        self.zero.len()
    }

    /// Bytes per encoded pixel.
    pub fn encoded_len(&self) -> usize {
        self.encoded_len
    }

    /// Pattern for a bit value.
    #[inline]
    pub fn for_bit(&self, set: bool) -> &'a [u8] {
        if set {
            self.one
        } else {
            self.zero
        }
    }
}

/// Check pattern lengths and return the encoded pixel length.
fn check_lengths(zero_len: usize, one_len: usize) -> Result<usize, EncodeError> {
    if zero_len == 0 {
        return Err(EncodeError::EmptyZeroPattern);
    }
    if one_len == 0 {
        return Err(EncodeError::EmptyOnePattern);
    }
    if zero_len != one_len {
        return Err(EncodeError::PatternLengthMismatch {
            zero: zero_len,
            one: one_len,
        });
    }
    encoded_len(zero_len).ok_or(EncodeError::PatternTooLong { len: zero_len })
}
