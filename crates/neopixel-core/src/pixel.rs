//! The [`Pixel`] value type.
//!
//! A pixel holds the color state of one addressable LED as three
//! independent 8-bit channels. Channels are named in RGB order in memory;
//! the GRB wire order only matters when encoding (see [`crate::encode`]).

use serde::{Deserialize, Serialize};

use crate::color::{compose, decompose, truncate_channel};
use crate::encode::encode_transfer_bytes;

/// Color state of a single LED.
///
/// Every combination of channel values is valid and no channel is ever
/// adjusted when another one changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pixel {
    red: u8,
    green: u8,
    blue: u8,
}

impl Pixel {
    /// All channels off.
    pub const BLACK: Pixel = Pixel::from_rgb(0, 0, 0);

    /// Create a black pixel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pixel with exactly the given channel values.
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a pixel from wider integers, keeping the low 8 bits of each.
    ///
    /// `from_wide(256, -1, 0x1FF)` yields `(0, 255, 255)`. Only values in
    /// 0-255 have a meaning beyond that truncation.
    pub const fn from_wide(red: i32, green: i32, blue: i32) -> Self {
        Self::from_rgb(
            truncate_channel(red),
            truncate_channel(green),
            truncate_channel(blue),
        )
    }

    /// Create a pixel from a packed `0xAARRGGBB` value. Alpha is ignored.
    pub const fn from_packed(packed: u32) -> Self {
        let (red, green, blue) = decompose(packed);
        Self::from_rgb(red, green, blue)
    }

    /// Packed `0x00RRGGBB` view of the current channels.
    pub const fn to_packed(&self) -> u32 {
        compose(self.red, self.green, self.blue)
    }

    /// Replace all three channels from a packed value. Alpha is ignored.
    pub fn set_packed(&mut self, packed: u32) {
        *self = Self::from_packed(packed);
    }

    /// Red channel.
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green channel.
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue channel.
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Set the red channel, leaving green and blue as they are.
    pub fn set_red(&mut self, red: u8) {
        self.red = red;
    }

    /// Set the green channel, leaving red and blue as they are.
    pub fn set_green(&mut self, green: u8) {
        self.green = green;
    }

    /// Set the blue channel, leaving red and green as they are.
    pub fn set_blue(&mut self, blue: u8) {
        self.blue = blue;
    }

    /// Channel bytes in wire order: green, red, blue.
    #[inline]
    pub const fn grb(&self) -> [u8; 3] {
        [self.green, self.red, self.blue]
    }

    /// Expand this pixel into SPI transfer bytes.
    ///
    /// Returns an empty buffer when the patterns are empty or differ in
    /// length. See [`encode_transfer_bytes`].
    pub fn to_transfer_bytes(&self, zero_pattern: &[u8], one_pattern: &[u8]) -> Vec<u8> {
        encode_transfer_bytes(self, zero_pattern, one_pattern)
    }
}

impl From<u32> for Pixel {
    fn from(packed: u32) -> Self {
        Self::from_packed(packed)
    }
}

impl From<Pixel> for u32 {
    fn from(pixel: Pixel) -> Self {
        pixel.to_packed()
    }
}

impl From<(u8, u8, u8)> for Pixel {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::from_rgb(red, green, blue)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every 24-bit value survives a packed round trip.
        #[test]
        fn prop_packed_round_trip_24_bit(v in 0u32..=0x00FF_FFFF) {
            prop_assert_eq!(Pixel::from_packed(v).to_packed(), v);
        }

        /// Property: any u32 round trips to its low 24 bits.
        #[test]
        fn prop_packed_round_trip_drops_alpha(v in any::<u32>()) {
            prop_assert_eq!(Pixel::from_packed(v).to_packed(), v & 0x00FF_FFFF);
        }

        /// Property: from_rgb stores exactly what it was given.
        #[test]
        fn prop_from_rgb_exact(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let pixel = Pixel::from_rgb(r, g, b);
            prop_assert_eq!((pixel.red(), pixel.green(), pixel.blue()), (r, g, b));
        }

        /// Property: mutating one channel never changes the others.
        #[test]
        fn prop_channel_independence(
            r in any::<u8>(),
            g in any::<u8>(),
            b in any::<u8>(),
            v in any::<u8>(),
            which in 0u8..3,
        ) {
            let mut pixel = Pixel::from_rgb(r, g, b);
            match which {
                0 => {
                    pixel.set_red(v);
                    prop_assert_eq!((pixel.red(), pixel.green(), pixel.blue()), (v, g, b));
                }
                1 => {
                    pixel.set_green(v);
                    prop_assert_eq!((pixel.red(), pixel.green(), pixel.blue()), (r, v, b));
                }
                _ => {
                    pixel.set_blue(v);
                    prop_assert_eq!((pixel.red(), pixel.green(), pixel.blue()), (r, g, v));
                }
            }
        }

        /// Property: from_wide agrees with from_rgb on in-range input.
        #[test]
        fn prop_from_wide_in_range(r in 0i32..=255, g in 0i32..=255, b in 0i32..=255) {
            prop_assert_eq!(
                Pixel::from_wide(r, g, b),
                Pixel::from_rgb(r as u8, g as u8, b as u8)
            );
        }
    }
}
