//! NeoPixel Core - SPI encoding for addressable LEDs
//!
//! This crate provides the pixel value type and the transfer-byte encoder
//! used to drive WS2812-family LEDs through a plain SPI peripheral.
//! Talking to hardware, clock setup and strip management are left to the
//! caller.

pub mod color;
pub mod encode;
pub mod pixel;

pub use color::{compose, decompose, truncate_channel};
pub use encode::{
    encode_transfer_bytes, encode_transfer_bytes_into, encoded_len, try_encode_transfer_bytes,
    EncodeError, SymbolPatterns,
};
pub use pixel::Pixel;
