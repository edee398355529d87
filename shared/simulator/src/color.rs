/// Fill color of every part, as 0xRRGGBB.
pub const FISH_RGB: u32 = 0xf45c47;
pub const BODY_ALPHA: u8 = 160;
pub const OTHER_ALPHA: u8 = 110;

/// Packs 0xRRGGBB and an alpha byte into 0xRRGGBBAA.
pub fn with_alpha(rgb: u32, alpha: u8) -> u32 {
    (rgb & 0xffffff) << 8 | alpha as u32
}
