//! Pixel WASM bindings.
//!
//! This module provides a JavaScript-friendly wrapper around the core
//! [`Pixel`] type, including packed-color access and transfer-byte encoding.

use neopixel_core::{try_encode_transfer_bytes, Pixel};
use wasm_bindgen::prelude::*;

/// A single LED color for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsPixel {
    inner: Pixel,
}

#[wasm_bindgen]
impl JsPixel {
    /// Create a pixel from exact channel values (0-255)
    #[wasm_bindgen(constructor)]
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            inner: Pixel::from_rgb(red, green, blue),
        }
    }

    /// Create a black pixel
    pub fn black() -> Self {
        Self::default()
    }

    /// Create a pixel from JS numbers, keeping the low 8 bits of each
    pub fn from_wide(red: i32, green: i32, blue: i32) -> Self {
        Self {
            inner: Pixel::from_wide(red, green, blue),
        }
    }

    /// Create a pixel from a packed 0xAARRGGBB value (alpha ignored)
    pub fn from_packed(packed: u32) -> Self {
        Self {
            inner: Pixel::from_packed(packed),
        }
    }

    /// Get red channel
    #[wasm_bindgen(getter)]
    pub fn red(&self) -> u8 {
        self.inner.red()
    }

    /// Set red channel
    #[wasm_bindgen(setter)]
    pub fn set_red(&mut self, value: u8) {
        self.inner.set_red(value);
    }

    /// Get green channel
    #[wasm_bindgen(getter)]
    pub fn green(&self) -> u8 {
        self.inner.green()
    }

    /// Set green channel
    #[wasm_bindgen(setter)]
    pub fn set_green(&mut self, value: u8) {
        self.inner.set_green(value);
    }

    /// Get blue channel
    #[wasm_bindgen(getter)]
    pub fn blue(&self) -> u8 {
        self.inner.blue()
    }

    /// Set blue channel
    #[wasm_bindgen(setter)]
    pub fn set_blue(&mut self, value: u8) {
        self.inner.set_blue(value);
    }

    /// Get the packed 0x00RRGGBB color
    #[wasm_bindgen(getter)]
    pub fn packed(&self) -> u32 {
        self.inner.to_packed()
    }

    /// Replace all channels from a packed color (alpha ignored)
    #[wasm_bindgen(setter)]
    pub fn set_packed(&mut self, value: u32) {
        self.inner.set_packed(value);
    }

    /// Encode this pixel into SPI transfer bytes.
    ///
    /// Missing (`undefined`/`null`), empty or mismatched patterns return an
    /// empty `Uint8Array`. An empty result means the pixel could not be
    /// encoded, not that there is nothing to send.
    ///
    /// # Example (TypeScript)
    /// ```typescript
    /// const pixel = new JsPixel(0, 255, 1);
    /// const bytes = pixel.to_transfer_bytes(new Uint8Array([0x80]), new Uint8Array([0xc0]));
    /// if (bytes.length === 0) throw new Error('bad symbol patterns');
    /// ```
    pub fn to_transfer_bytes(&self, zero: Option<Vec<u8>>, one: Option<Vec<u8>>) -> Vec<u8> {
        encode_optional(&self.inner, zero.as_deref(), one.as_deref())
    }

    /// Encode this pixel, throwing if the patterns are unusable.
    pub fn try_to_transfer_bytes(&self, zero: &[u8], one: &[u8]) -> Result<Vec<u8>, JsValue> {
        try_encode_transfer_bytes(&self.inner, zero, one)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Serialize to a plain `{ red, green, blue }` object
    pub fn to_object(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deserialize from a plain `{ red, green, blue }` object
    pub fn from_object(value: JsValue) -> Result<JsPixel, JsValue> {
        let inner: Pixel =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }
}

impl JsPixel {
    /// Get the wrapped core pixel.
    pub(crate) fn inner(&self) -> &Pixel {
        &self.inner
    }
}

impl From<Pixel> for JsPixel {
    fn from(inner: Pixel) -> Self {
        Self { inner }
    }
}

/// Encode with patterns that may be absent on the JS side.
///
/// An absent pattern is treated like an empty one.
pub(crate) fn encode_optional(pixel: &Pixel, zero: Option<&[u8]>, one: Option<&[u8]>) -> Vec<u8> {
    match (zero, one) {
        (Some(zero), Some(one)) => pixel.to_transfer_bytes(zero, one),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_pixel_channels() {
        let mut pixel = JsPixel::new(1, 2, 3);
        assert_eq!((pixel.red(), pixel.green(), pixel.blue()), (1, 2, 3));

        pixel.set_green(200);
        assert_eq!((pixel.red(), pixel.green(), pixel.blue()), (1, 200, 3));
    }

    #[test]
    fn test_js_pixel_black() {
        assert_eq!(JsPixel::black().packed(), 0);
    }

    #[test]
    fn test_js_pixel_from_wide() {
        let pixel = JsPixel::from_wide(256, -1, 0x1FF);
        assert_eq!((pixel.red(), pixel.green(), pixel.blue()), (0, 255, 255));
    }

    #[test]
    fn test_js_pixel_packed() {
        let mut pixel = JsPixel::from_packed(0xFF12_3456);
        assert_eq!(pixel.packed(), 0x0012_3456);

        pixel.set_packed(0x00AB_CDEF);
        assert_eq!((pixel.red(), pixel.green(), pixel.blue()), (0xAB, 0xCD, 0xEF));
    }

    #[test]
    fn test_to_transfer_bytes() {
        let pixel = JsPixel::new(0x00, 0xFF, 0x01);
        let bytes = pixel.to_transfer_bytes(Some(vec![0x80]), Some(vec![0xC0]));

        assert_eq!(bytes.len(), 24);
        assert_eq!(&bytes[0..8], &[0xC0; 8]);
        assert_eq!(&bytes[8..23], &[0x80; 15]);
        assert_eq!(bytes[23], 0xC0);
    }

    #[test]
    fn test_to_transfer_bytes_absent_patterns() {
        let pixel = JsPixel::new(1, 2, 3);
        assert!(pixel.to_transfer_bytes(None, Some(vec![0xC0])).is_empty());
        assert!(pixel.to_transfer_bytes(Some(vec![0x80]), None).is_empty());
        assert!(pixel.to_transfer_bytes(None, None).is_empty());
    }

    #[test]
    fn test_to_transfer_bytes_degenerate_patterns() {
        let pixel = JsPixel::new(1, 2, 3);
        assert!(pixel.to_transfer_bytes(Some(vec![]), Some(vec![0xC0])).is_empty());
        assert!(pixel
            .to_transfer_bytes(Some(vec![0x80]), Some(vec![0xC0, 0x00]))
            .is_empty());
    }

    #[test]
    fn test_inner_and_from() {
        let core = Pixel::from_rgb(7, 8, 9);
        let pixel = JsPixel::from(core);
        assert_eq!(pixel.inner(), &core);
    }
}
