//! Easing curves for the animation driver
//!
//! Integer curves over the normalized progress range: quadratic ease-in,
//! ease-out and ease-in-out.

use meridian_core::face::{AnimationProgress, ANIMATION_NORMALIZED_MAX};
use meridian_core::traits::AnimationCurve;

/// Linear progress for elapsed time, clamped to the end of the animation
pub fn linear_progress(elapsed_ms: u64, duration_ms: u32) -> AnimationProgress {
    if duration_ms == 0 {
        return ANIMATION_NORMALIZED_MAX;
    }
    let elapsed = elapsed_ms.min(duration_ms as u64);
    (elapsed * ANIMATION_NORMALIZED_MAX as u64 / duration_ms as u64) as AnimationProgress
}

/// Apply an easing curve to linear progress
pub fn ease(curve: AnimationCurve, progress: AnimationProgress) -> AnimationProgress {
    let max = ANIMATION_NORMALIZED_MAX as i64;
    let t = progress.clamp(0, ANIMATION_NORMALIZED_MAX) as i64;

    let eased = match curve {
        AnimationCurve::Linear => t,
        AnimationCurve::EaseIn => t * t / max,
        AnimationCurve::EaseOut => max - (max - t) * (max - t) / max,
        AnimationCurve::EaseInOut => {
            if 2 * t < max {
                2 * t * t / max
            } else {
                max - 2 * (max - t) * (max - t) / max
            }
        }
    };

    eased as AnimationProgress
}
