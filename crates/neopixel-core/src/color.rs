//! Packed color conversion helpers.
//!
//! A packed color stores the three channels byte-aligned in a `u32` as
//! `0xAARRGGBB`. The alpha byte is never produced and always ignored on
//! the way in.

/// Mask selecting a single 8-bit channel after shifting.
pub const CHANNEL_MASK: u32 = 0xFF;

/// Mask selecting the 24 color bits of a packed value.
pub const RGB_MASK: u32 = 0x00FF_FFFF;

/// Bit offset of the red channel in a packed value.
pub const RED_SHIFT: u32 = 16;

/// Bit offset of the green channel in a packed value.
pub const GREEN_SHIFT: u32 = 8;

/// Bit offset of the blue channel in a packed value.
pub const BLUE_SHIFT: u32 = 0;

/// Compose three channels into a packed `0x00RRGGBB` value.
///
/// The high byte of the result is always zero.
#[inline]
pub const fn compose(red: u8, green: u8, blue: u8) -> u32 {
    ((red as u32) << RED_SHIFT) | ((green as u32) << GREEN_SHIFT) | ((blue as u32) << BLUE_SHIFT)
}

/// Decompose a packed value into `(red, green, blue)`.
///
/// Each channel is shifted down before masking. Bits 24-31 (alpha) are
/// discarded, so `compose(decompose(v)) == v & RGB_MASK` for every `v`.
#[inline]
pub const fn decompose(packed: u32) -> (u8, u8, u8) {
    (
        ((packed >> RED_SHIFT) & CHANNEL_MASK) as u8,
        ((packed >> GREEN_SHIFT) & CHANNEL_MASK) as u8,
        ((packed >> BLUE_SHIFT) & CHANNEL_MASK) as u8,
    )
}

/// Narrow a wide integer to a channel byte, keeping the low 8 bits.
///
/// Values outside 0-255 wrap: `256` becomes `0`, `-1` becomes `255`.
/// Callers that need clamping should clamp before calling this.
#[inline]
pub const fn truncate_channel(value: i32) -> u8 {
    (value as u32 & CHANNEL_MASK) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_places_channels() {
        assert_eq!(compose(0xFF, 0, 0), 0x00FF_0000);
        assert_eq!(compose(0, 0xFF, 0), 0x0000_FF00);
        assert_eq!(compose(0, 0, 0xFF), 0x0000_00FF);
        assert_eq!(compose(0x12, 0x34, 0x56), 0x0012_3456);
    }

    #[test]
    fn test_decompose_shifts_before_masking() {
        // Green and red must come out as their own byte values, not zero
        assert_eq!(decompose(0x0012_3456), (0x12, 0x34, 0x56));
        assert_eq!(decompose(0x0000_FF00), (0, 0xFF, 0));
        assert_eq!(decompose(0x00FF_0000), (0xFF, 0, 0));
    }

    #[test]
    fn test_decompose_ignores_alpha() {
        assert_eq!(decompose(0xFF12_3456), (0x12, 0x34, 0x56));
        assert_eq!(decompose(0xFF00_0000), (0, 0, 0));
    }

    #[test]
    fn test_truncate_channel() {
        assert_eq!(truncate_channel(0), 0);
        assert_eq!(truncate_channel(255), 255);
        assert_eq!(truncate_channel(256), 0);
        assert_eq!(truncate_channel(0x1234), 0x34);
        assert_eq!(truncate_channel(-1), 255);
        assert_eq!(truncate_channel(-256), 0);
    }
}
