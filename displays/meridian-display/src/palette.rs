//! Hand color conversion
//!
//! `HandColor` packs two bits per channel; panels get each channel scaled
//! up to their own depth.

use embedded_graphics::pixelcolor::{BinaryColor, Rgb565, Rgb888};
use meridian_core::face::HandColor;

/// Panel color that can be built from a hand color
pub trait FromHandColor {
    /// Convert an opaque hand color (alpha is ignored)
    fn from_hand_color(color: HandColor) -> Self;
}

/// Scale a 2-bit channel to 8 bits
const fn expand(channel: u8) -> u8 {
    channel * 0x55
}

impl FromHandColor for Rgb888 {
    fn from_hand_color(color: HandColor) -> Self {
        Rgb888::new(expand(color.red()), expand(color.green()), expand(color.blue()))
    }
}

impl FromHandColor for Rgb565 {
    fn from_hand_color(color: HandColor) -> Self {
        Rgb565::from(Rgb888::from_hand_color(color))
    }
}

impl FromHandColor for BinaryColor {
    fn from_hand_color(color: HandColor) -> Self {
        if color.red() | color.green() | color.blue() == 0 {
            BinaryColor::Off
        } else {
            BinaryColor::On
        }
    }
}
