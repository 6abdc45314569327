//! Pixel to SPI transfer-byte expansion.
//!
//! WS2812-family LEDs read each bit as a pulse width on a single data
//! line. An SPI peripheral clocked at a multiple of the LED bit rate can
//! reproduce those pulses if every logical bit is replaced by a fixed
//! byte pattern. This module performs that replacement for one pixel.
//!
//! # Wire Order
//!
//! - Channels are sent green, red, blue
//! - Bits within a channel are sent most significant first
//!
//! Both are fixed by the LED family. Getting either wrong corrupts every
//! pixel further down a daisy chain.

use crate::pixel::Pixel;

use super::patterns::{EncodeError, SymbolPatterns};

/// Bits in one color channel.
pub const BITS_PER_CHANNEL: usize = 8;

/// Channels carried per pixel on the wire.
pub const CHANNELS_PER_PIXEL: usize = 3;

/// Logical bits sent per pixel.
pub const BITS_PER_PIXEL: usize = BITS_PER_CHANNEL * CHANNELS_PER_PIXEL;

/// Number of transfer bytes one pixel expands to.
///
/// Returns `None` if the length does not fit in a `usize`.
#[inline]
pub const fn encoded_len(symbol_len: usize) -> Option<usize> {
    BITS_PER_PIXEL.checked_mul(symbol_len)
}

/// Encode a pixel into SPI transfer bytes.
///
/// Each of the 24 bits (GRB order, MSB first) is replaced by `one_pattern`
/// if set and `zero_pattern` otherwise. The result is
/// `24 * zero_pattern.len()` bytes long.
///
/// # Returns
///
/// An empty buffer if either pattern is empty, their lengths differ, or
/// the encoded length would overflow. Callers must read an empty result as "encoding not possible". Use
/// [`try_encode_transfer_bytes`] to learn why.
///
/// # Example
///
/// ```
/// use neopixel_core::{encode_transfer_bytes, Pixel};
///
/// let bytes = encode_transfer_bytes(&Pixel::from_rgb(0, 0xFF, 0x01), &[0x80], &[0xC0]);
/// assert_eq!(&bytes[..8], &[0xC0; 8]);
/// assert_eq!(bytes[23], 0xC0);
/// ```
pub fn encode_transfer_bytes(pixel: &Pixel, zero_pattern: &[u8], one_pattern: &[u8]) -> Vec<u8> {
    try_encode_transfer_bytes(pixel, zero_pattern, one_pattern).unwrap_or_default()
}

/// Encode a pixel into SPI transfer bytes, reporting invalid patterns.
///
/// # Errors
///
/// See [`SymbolPatterns::new`].
pub fn try_encode_transfer_bytes(
    pixel: &Pixel,
    zero_pattern: &[u8],
    one_pattern: &[u8],
) -> Result<Vec<u8>, EncodeError> {
    let patterns = SymbolPatterns::new(zero_pattern, one_pattern)?;
    Ok(patterns.encode(pixel))
}

/// Encode a pixel into a caller-provided buffer without allocating.
///
/// Writes exactly [`SymbolPatterns::encoded_len`] bytes to the front of
/// `out` and returns that count. Bytes past it are left untouched.
///
/// # Errors
///
/// Returns [`EncodeError::BufferTooSmall`] if `out` is shorter than one
/// encoded pixel. Nothing is written in that case.
pub fn encode_transfer_bytes_into(
    pixel: &Pixel,
    patterns: &SymbolPatterns<'_>,
    out: &mut [u8],
) -> Result<usize, EncodeError> {
    let len = patterns.encoded_len();
    if out.len() < len {
        tracing::debug!(
            expected = len,
            actual = out.len(),
            "Output buffer too small for one pixel"
        );
        return Err(EncodeError::BufferTooSmall {
            expected: len,
            actual: out.len(),
        });
    }

    write_symbols(pixel, patterns, &mut out[..len]);
    Ok(len)
}

impl SymbolPatterns<'_> {
    /// Encode a pixel with these patterns.
    ///
    /// Infallible since the patterns were validated on construction.
    pub fn encode(&self, pixel: &Pixel) -> Vec<u8> {
        let mut out = vec![0u8; self.encoded_len()];
        write_symbols(pixel, self, &mut out);
        out
    }
}

/// Pixel bits in wire order: green, red, blue, each MSB first.
fn wire_bits(pixel: &Pixel) -> impl Iterator<Item = bool> {
    pixel.grb().into_iter().flat_map(|channel| {
        (0..BITS_PER_CHANNEL)
            .rev()
            .map(move |bit| (channel >> bit) & 1 == 1)
    })
}

/// Copy one symbol per bit into `out`, which must be exactly one encoded
/// pixel long.
fn write_symbols(pixel: &Pixel, patterns: &SymbolPatterns<'_>, out: &mut [u8]) {
    debug_assert_eq!(out.len(), patterns.encoded_len());

    for (block, set) in out
        .chunks_exact_mut(patterns.symbol_len())
        .zip(wire_bits(pixel))
    {
        block.copy_from_slice(patterns.for_bit(set));
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
