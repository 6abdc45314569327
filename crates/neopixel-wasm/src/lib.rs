//! NeoPixel WASM - WebAssembly bindings for the NeoPixel SPI encoder
//!
//! This crate exposes neopixel-core to JavaScript/TypeScript hosts that
//! forward transfer bytes to an SPI adapter (for example over WebUSB).
//!
//! # Module Structure
//!
//! - `pixel` - `JsPixel` wrapper with channel, packed and encoding access
//! - `encode` - Free encoding functions for packed colors
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsPixel } from '@neopixel/wasm';
//!
//! await init();
//!
//! const pixel = JsPixel.from_packed(0xff8800);
//! const bytes = pixel.to_transfer_bytes(new Uint8Array([0x80]), new Uint8Array([0xc0]));
//! await device.transferOut(1, bytes);
//! ```

use wasm_bindgen::prelude::*;

mod encode;
mod pixel;

pub use encode::{encode_packed, encode_pixel, encoded_len};
pub use pixel::JsPixel;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
