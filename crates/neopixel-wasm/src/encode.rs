//! Transfer-byte encoding WASM bindings.
//!
//! Free functions for hosts that keep colors as packed numbers rather than
//! `JsPixel` objects.

use neopixel_core::Pixel;
use wasm_bindgen::prelude::*;

use crate::pixel::{encode_optional, JsPixel};

/// Encode a packed 0xAARRGGBB color into SPI transfer bytes.
///
/// Returns an empty `Uint8Array` if a pattern is missing, empty or the two
/// lengths differ.
///
/// # Example (TypeScript)
/// ```typescript
/// const zero = new Uint8Array([0x80]);
/// const one = new Uint8Array([0xc0]);
/// const frame = colors.flatMap((c) => Array.from(encode_packed(c, zero, one)));
/// ```
#[wasm_bindgen]
pub fn encode_packed(packed: u32, zero: Option<Vec<u8>>, one: Option<Vec<u8>>) -> Vec<u8> {
    encode_optional(&Pixel::from_packed(packed), zero.as_deref(), one.as_deref())
}

/// Encode a pixel into SPI transfer bytes.
///
/// Same as `JsPixel.to_transfer_bytes`, offered as a free function.
#[wasm_bindgen]
pub fn encode_pixel(pixel: &JsPixel, zero: Option<Vec<u8>>, one: Option<Vec<u8>>) -> Vec<u8> {
    encode_optional(pixel.inner(), zero.as_deref(), one.as_deref())
}

/// Number of transfer bytes one pixel expands to for a given pattern length.
///
/// Returns `undefined` if the length overflows.
#[wasm_bindgen]
pub fn encoded_len(symbol_len: usize) -> Option<usize> {
    neopixel_core::encoded_len(symbol_len)
}
