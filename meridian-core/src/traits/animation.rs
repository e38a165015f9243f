//! Animation driver and tick service traits
//!
//! The face logic never runs a timer itself. It asks a driver to play an
//! animation and a tick service to deliver time updates; both call back into
//! the animator on their own schedule.

use super::time::TimeUnits;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default intro animation length in milliseconds
pub const DEFAULT_INTRO_DURATION_MS: u32 = 1000;

/// Easing curve applied by the driver before reporting progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AnimationCurve {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

/// What the driver should play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationSpec {
    /// Total duration in milliseconds
    pub duration_ms: u32,
    /// Easing curve
    pub curve: AnimationCurve,
}

impl AnimationSpec {
    /// The intro sweep: one second, ease-out
    pub const INTRO: Self = Self {
        duration_ms: DEFAULT_INTRO_DURATION_MS,
        curve: AnimationCurve::EaseOut,
    };
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::INTRO
    }
}

/// Scheduler that plays an animation
///
/// After `schedule`, the driver calls `FaceAnimator::on_animation_frame`
/// with eased progress for each frame and `on_animation_complete` once at
/// the end.
pub trait AnimationDriver {
    /// Start playing an animation
    fn schedule(&mut self, spec: AnimationSpec);
}

impl<D: AnimationDriver + ?Sized> AnimationDriver for &mut D {
    fn schedule(&mut self, spec: AnimationSpec) {
        (**self).schedule(spec)
    }
}

/// Service delivering periodic time updates
///
/// After `subscribe`, the service calls `FaceAnimator::on_time_tick`
/// whenever any of the requested units change.
pub trait TickService {
    /// Request updates for the given units
    fn subscribe(&mut self, units: TimeUnits);
}

impl<T: TickService + ?Sized> TickService for &mut T {
    fn subscribe(&mut self, units: TimeUnits) {
        (**self).subscribe(units)
    }
}
