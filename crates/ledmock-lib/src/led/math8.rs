//! 8-bit fixed-point helpers for the firmware-style patterns.
//!
//! A `u8` scale of 255 means "almost 1.0". These match the integer results
//! of the lamp firmware bit for bit, so previews show the same levels the
//! hardware would.

/// Scale `value` by `scale / 256`, where a scale of 255 keeps 255 unchanged.
#[inline]
pub fn scale8(value: u8, scale: u8) -> u8 {
    ((u16::from(value) * (1 + u16::from(scale))) >> 8) as u8
}

/// Like [`scale8`], but a nonzero value never scales down to zero
/// unless `scale` is zero.
#[inline]
pub fn scale8_video(value: u8, scale: u8) -> u8 {
    if value == 0 {
        return 0;
    }
    let bump = u8::from(scale != 0);
    ((u16::from(value) * u16::from(scale)) >> 8) as u8 + bump
}

/// Triangle wave: 0 → 254 over the first half of the input range, then back.
#[inline]
pub fn triwave8(input: u8) -> u8 {
    let folded = if input & 0x80 != 0 { 255 - input } else { input };
    folded << 1
}

/// Cubic ease-in/ease-out: `3x² - 2x³` in 8-bit fixed point.
#[inline]
pub fn ease8_in_out_cubic(input: u8) -> u8 {
    let ii = scale8(input, input);
    let iii = scale8(ii, input);
    let r1 = 3 * u16::from(ii) - 2 * u16::from(iii);
    // r1 can reach exactly 256
    if r1 & 0x100 != 0 { 255 } else { r1 as u8 }
}

/// Triangle wave with eased corners: near 0 at both ends of the input range,
/// 255 at the middle.
#[inline]
pub fn cubicwave8(input: u8) -> u8 {
    ease8_in_out_cubic(triwave8(input))
}
