//! SPI transfer-byte encoding for WS2812-family LEDs.
//!
//! This module provides functionality for:
//! - Validating a pair of symbol patterns (the byte images of a 0 and a 1 bit)
//! - Expanding a pixel into the transfer bytes for an SPI peripheral
//!
//! # Architecture
//!
//! Encoding is a pure function of the pixel and the two patterns. Nothing is
//! retained between calls and the output buffer belongs to the caller, who
//! hands it to whatever drives the SPI bus.
//!
//! Two conventions are offered for invalid patterns:
//! - [`encode_transfer_bytes`] returns an empty buffer
//! - [`try_encode_transfer_bytes`] returns an [`EncodeError`]
//!
//! # Examples
//!
//! ```ignore
//! use neopixel_core::{Pixel, SymbolPatterns};
//!
//! let patterns = SymbolPatterns::new(&[0x80], &[0xC0]).unwrap();
//! let bytes = patterns.encode(&Pixel::from_rgb(255, 128, 0));
//! spi.write(&bytes)?;
//! ```

mod patterns;
mod transfer;

pub use patterns::{EncodeError, SymbolPatterns};
pub use transfer::{
    encode_transfer_bytes, encode_transfer_bytes_into, encoded_len, try_encode_transfer_bytes,
    BITS_PER_CHANNEL, BITS_PER_PIXEL, CHANNELS_PER_PIXEL,
};
