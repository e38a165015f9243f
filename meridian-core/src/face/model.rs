//! Hand and face value types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Angle value of one full turn (360°)
///
/// Angles are fixed-point integers: 0 points at 12 o'clock and values grow
/// clockwise. Any `i32` is a valid angle, taken modulo one full turn.
pub const TRIG_MAX_ANGLE: i32 = 0x10000;

/// Angle value of half a turn (180°)
pub const HALF_TURN: i32 = TRIG_MAX_ANGLE / 2;

/// Normalized animation position
///
/// Ranges over `ANIMATION_NORMALIZED_MIN..=ANIMATION_NORMALIZED_MAX`.
pub type AnimationProgress = i32;

/// Progress at the first frame of an animation
pub const ANIMATION_NORMALIZED_MIN: AnimationProgress = 0;

/// Progress at the last frame of an animation
pub const ANIMATION_NORMALIZED_MAX: AnimationProgress = 65535;

/// Opaque 8-bit display color
///
/// Packed as `0bAARRGGBB`, two bits per channel. The core never looks
/// inside; the drawing layer converts it to whatever its panel wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HandColor(pub u8);

impl HandColor {
    /// Fully transparent
    pub const CLEAR: Self = Self(0x00);
    /// Opaque black
    pub const BLACK: Self = Self(0xC0);
    /// Opaque red
    pub const RED: Self = Self(0xF0);
    /// Opaque white
    pub const WHITE: Self = Self(0xFF);

    /// Build a color from 2-bit channel values (higher bits are dropped)
    pub const fn from_channels(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self(((alpha & 0x3) << 6) | ((red & 0x3) << 4) | ((green & 0x3) << 2) | (blue & 0x3))
    }

    /// Alpha channel (0-3)
    pub const fn alpha(self) -> u8 {
        (self.0 >> 6) & 0x3
    }

    /// Red channel (0-3)
    pub const fn red(self) -> u8 {
        (self.0 >> 4) & 0x3
    }

    /// Green channel (0-3)
    pub const fn green(self) -> u8 {
        (self.0 >> 2) & 0x3
    }

    /// Blue channel (0-3)
    pub const fn blue(self) -> u8 {
        self.0 & 0x3
    }

    /// Check if the color would draw anything
    pub const fn is_visible(self) -> bool {
        self.alpha() != 0
    }
}

/// Drawable state of one clock hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HandModel {
    /// Angle, full turn = `TRIG_MAX_ANGLE`
    pub angle: i32,
    /// Stroke color
    pub color: HandColor,
    /// Distance from the face center to the tip
    pub length: u16,
    /// Stroke width
    pub width: u16,
}

impl HandModel {
    /// A collapsed hand: angle 0, length 0, nothing drawn
    pub const fn collapsed() -> Self {
        Self {
            angle: 0,
            color: HandColor::CLEAR,
            length: 0,
            width: 0,
        }
    }

    /// Angle reduced into `0..TRIG_MAX_ANGLE`
    pub const fn normalized_angle(&self) -> i32 {
        self.angle.rem_euclid(TRIG_MAX_ANGLE)
    }

    /// Check if drawing this hand would produce any pixels
    pub const fn is_visible(&self) -> bool {
        self.length > 0 && self.width > 0 && self.color.is_visible()
    }
}

/// Drawable state of the whole face
///
/// Every update builds a new value; nothing mutates a face after it has
/// been emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceModel {
    pub hour_hand: HandModel,
    pub minute_hand: HandModel,
}

impl FaceModel {
    /// The degenerate face shown before any time is known
    pub const fn blank() -> Self {
        Self {
            hour_hand: HandModel::collapsed(),
            minute_hand: HandModel::collapsed(),
        }
    }

    /// Hands in drawing order (hour first, minute on top)
    pub fn hands(&self) -> [&HandModel; 2] {
        [&self.hour_hand, &self.minute_hand]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_face_has_zero_length_hands() {
        let face = FaceModel::blank();
        assert_eq!(face.hour_hand.length, 0);
        assert_eq!(face.minute_hand.length, 0);
        assert_eq!(face.hour_hand.angle, 0);
        assert!(!face.hour_hand.is_visible());
        assert_eq!(face, FaceModel::default());
    }

    #[test]
    fn test_normalized_angle() {
        let mut hand = HandModel::collapsed();
        hand.angle = -HALF_TURN;
        assert_eq!(hand.normalized_angle(), HALF_TURN);

        hand.angle = TRIG_MAX_ANGLE + 10;
        assert_eq!(hand.normalized_angle(), 10);

        hand.angle = TRIG_MAX_ANGLE;
        assert_eq!(hand.normalized_angle(), 0);
    }

    #[test]
    fn test_color_channels() {
        assert_eq!(HandColor::RED.alpha(), 3);
        assert_eq!(HandColor::RED.red(), 3);
        assert_eq!(HandColor::RED.green(), 0);
        assert_eq!(HandColor::RED.blue(), 0);
        assert_eq!(HandColor::from_channels(3, 3, 3, 3), HandColor::WHITE);
        assert_eq!(HandColor::from_channels(3, 0, 0, 0), HandColor::BLACK);
        assert!(!HandColor::CLEAR.is_visible());
    }

    #[test]
    fn test_hands_order() {
        let mut face = FaceModel::blank();
        face.hour_hand.length = 40;
        face.minute_hand.length = 60;
        let [first, second] = face.hands();
        assert_eq!(first.length, 40);
        assert_eq!(second.length, 60);
    }
}
