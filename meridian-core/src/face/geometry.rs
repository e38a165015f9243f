//! Hand geometry for a time of day, and interpolation between faces
//!
//! All arithmetic is integer: angles use `TRIG_MAX_ANGLE` per turn and
//! progress uses `ANIMATION_NORMALIZED_MAX` as its scale.

use super::model::{
    AnimationProgress, FaceModel, HandModel, ANIMATION_NORMALIZED_MAX, HALF_TURN, TRIG_MAX_ANGLE,
};
use super::style::FaceStyle;
use crate::traits::WallTime;

/// Minute hand angle for a time of day
pub fn minute_angle(time: &WallTime) -> i32 {
    time.minute as i32 * TRIG_MAX_ANGLE / 60
}

/// Hour hand angle for a time of day
///
/// Minute progress is folded in, so the hour hand moves continuously
/// instead of jumping a twelfth of a turn on the hour.
pub fn hour_angle(time: &WallTime) -> i32 {
    ((time.hour % 12) as i32 * TRIG_MAX_ANGLE + minute_angle(time)) / 12
}

/// Face for a time of day using the given hand styles
pub fn compute_face(time: &WallTime, style: &FaceStyle) -> FaceModel {
    FaceModel {
        hour_hand: style.hour_hand.at_angle(hour_angle(time)),
        minute_hand: style.minute_hand.at_angle(minute_angle(time)),
    }
}

/// Face for a time of day using the default hand styles
pub fn compute_default_face(time: &WallTime) -> FaceModel {
    compute_face(time, &FaceStyle::DEFAULT)
}

/// Linear interpolation between two integers
///
/// `progress` of 0 yields `from`, `ANIMATION_NORMALIZED_MAX` yields `to`.
/// The product is formed in 64 bits; division truncates toward zero.
pub fn interpolate_linear(from: i64, to: i64, progress: AnimationProgress) -> i64 {
    from + (progress as i64 * (to - from)) / ANIMATION_NORMALIZED_MAX as i64
}

/// Interpolate angle and length of a hand
///
/// Color and width always come from `from`: they snap, only position and
/// length animate.
pub fn interpolate_hand(from: &HandModel, to: &HandModel, progress: AnimationProgress) -> HandModel {
    let angle = interpolate_linear(from.angle as i64, to.angle as i64, progress);
    let length = interpolate_linear(from.length as i64, to.length as i64, progress);

    HandModel {
        angle: angle as i32,
        color: from.color,
        length: length.clamp(0, u16::MAX as i64) as u16,
        width: from.width,
    }
}

/// Interpolate both hands of a face independently
pub fn interpolate_face(from: &FaceModel, to: &FaceModel, progress: AnimationProgress) -> FaceModel {
    FaceModel {
        hour_hand: interpolate_hand(&from.hour_hand, &to.hour_hand, progress),
        minute_hand: interpolate_hand(&from.minute_hand, &to.minute_hand, progress),
    }
}

/// Starting pose of the intro sweep for a target face
///
/// Both hands are collapsed to zero length and deflected by half a turn,
/// the hour hand backwards and the minute hand forwards, so they sweep in
/// from opposite directions.
pub fn intro_start_pose(target: &FaceModel) -> FaceModel {
    let mut start = *target;
    start.hour_hand.length = 0;
    start.hour_hand.angle = target.hour_hand.angle - HALF_TURN;
    start.minute_hand.length = 0;
    start.minute_hand.angle = target.minute_hand.angle + HALF_TURN;
    start
}
