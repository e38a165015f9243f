//! Configuration type definitions

use crate::face::{FaceStyle, HandStyle};
use crate::traits::{AnimationCurve, AnimationSpec};
use crate::traits::animation::DEFAULT_INTRO_DURATION_MS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Longest accepted intro animation
pub const MAX_INTRO_DURATION_MS: u32 = 10_000;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Intro duration is zero
    ZeroDuration,
    /// Intro duration exceeds `MAX_INTRO_DURATION_MS`
    DurationTooLong,
    /// A hand has zero length and would never be visible
    ZeroLengthHand,
    /// A hand has zero width and would never be visible
    ZeroWidthHand,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroDuration => f.write_str("intro duration must be non-zero"),
            ConfigError::DurationTooLong => {
                write!(f, "intro duration must not exceed {} ms", MAX_INTRO_DURATION_MS)
            }
            ConfigError::ZeroLengthHand => f.write_str("hand length must be non-zero"),
            ConfigError::ZeroWidthHand => f.write_str("hand width must be non-zero"),
        }
    }
}

/// Intro animation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IntroConfig {
    /// Duration in milliseconds
    pub duration_ms: u32,
    /// Easing curve
    pub curve: AnimationCurve,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_INTRO_DURATION_MS,
            curve: AnimationCurve::EaseOut,
        }
    }
}

impl IntroConfig {
    /// Animation spec handed to the driver
    pub fn spec(&self) -> AnimationSpec {
        AnimationSpec {
            duration_ms: self.duration_ms,
            curve: self.curve,
        }
    }
}

/// Face configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FaceConfig {
    /// Hour hand style
    pub hour_hand: HandStyle,
    /// Minute hand style
    pub minute_hand: HandStyle,
    /// Intro animation
    pub intro: IntroConfig,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            hour_hand: HandStyle::HOUR,
            minute_hand: HandStyle::MINUTE,
            intro: IntroConfig::default(),
        }
    }
}

impl FaceConfig {
    /// Hand styles as a face style
    pub fn style(&self) -> FaceStyle {
        FaceStyle {
            hour_hand: self.hour_hand,
            minute_hand: self.minute_hand,
        }
    }

    /// Check the configuration for values the face cannot use
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.intro.duration_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if self.intro.duration_ms > MAX_INTRO_DURATION_MS {
            return Err(ConfigError::DurationTooLong);
        }
        for hand in [&self.hour_hand, &self.minute_hand] {
            if hand.length == 0 {
                return Err(ConfigError::ZeroLengthHand);
            }
            if hand.width == 0 {
                return Err(ConfigError::ZeroWidthHand);
            }
        }
        Ok(())
    }
}
