//! Per-hand drawing constants

use super::model::{HandColor, HandModel};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default hour hand length
pub const LENGTH_HAND_HOUR: u16 = 40;

/// Default minute hand length
pub const LENGTH_HAND_MINUTE: u16 = 60;

/// Default hour hand width
pub const WIDTH_HAND_HOUR: u16 = 5;

/// Default minute hand width
pub const WIDTH_HAND_MINUTE: u16 = 3;

/// Color, length and width of one hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HandStyle {
    pub color: HandColor,
    pub length: u16,
    pub width: u16,
}

impl HandStyle {
    /// Default hour hand: red, 40 long, 5 wide
    pub const HOUR: Self = Self {
        color: HandColor::RED,
        length: LENGTH_HAND_HOUR,
        width: WIDTH_HAND_HOUR,
    };

    /// Default minute hand: white, 60 long, 3 wide
    pub const MINUTE: Self = Self {
        color: HandColor::WHITE,
        length: LENGTH_HAND_MINUTE,
        width: WIDTH_HAND_MINUTE,
    };

    /// Build a hand with this style at the given angle
    pub const fn at_angle(&self, angle: i32) -> HandModel {
        HandModel {
            angle,
            color: self.color,
            length: self.length,
            width: self.width,
        }
    }
}

/// Styles of both hands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceStyle {
    pub hour_hand: HandStyle,
    pub minute_hand: HandStyle,
}

impl FaceStyle {
    pub const DEFAULT: Self = Self {
        hour_hand: HandStyle::HOUR,
        minute_hand: HandStyle::MINUTE,
    };
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}
