//! Animation driver task
//!
//! Plays animations requested through `ANIMATION_START`: reports eased
//! progress every frame interval, then a completion event.

use embassy_time::{Duration, Instant, Ticker};
use log::{debug, info};

use meridian_core::face::AnimationProgress;
use meridian_core::traits::AnimationSpec;

use crate::channels::{AnimationEvent, ANIMATION_EVENTS, ANIMATION_START};
use crate::easing::{ease, linear_progress};

/// Animation task - one animation at a time, frames at `frame_interval_ms`
#[embassy_executor::task]
pub async fn animation_task(frame_interval_ms: u32) {
    info!("Animation task started");

    loop {
        let spec = ANIMATION_START.wait().await;
        info!(
            "Playing animation: {} ms, {:?}",
            spec.duration_ms, spec.curve
        );

        let mut ticker = Ticker::every(Duration::from_millis(frame_interval_ms as u64));
        let start = Instant::now();
        let mut frames = 0u32;

        loop {
            let elapsed_ms = start.elapsed().as_millis();
            let (progress, last) = frame_progress(&spec, elapsed_ms);
            ANIMATION_EVENTS.send(AnimationEvent::Frame(progress)).await;
            frames += 1;
            debug!("Frame {} at {} ms, progress {}", frames, elapsed_ms, progress);

            if last {
                break;
            }
            ticker.next().await;
        }

        ANIMATION_EVENTS.send(AnimationEvent::Complete).await;
        info!("Animation finished after {} frames", frames);
    }
}

/// Eased progress for a frame at `elapsed_ms`, and whether it is the last one
///
/// The last frame always lands on the end of the curve, however late the
/// frame timer fires.
pub fn frame_progress(spec: &AnimationSpec, elapsed_ms: u64) -> (AnimationProgress, bool) {
    let progress = ease(spec.curve, linear_progress(elapsed_ms, spec.duration_ms));
    (progress, elapsed_ms >= spec.duration_ms as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_core::face::ANIMATION_NORMALIZED_MAX;
    use meridian_core::traits::AnimationCurve;

    /// Progress values the task would report with frames every `interval_ms`
    fn frame_sequence(spec: &AnimationSpec, interval_ms: u64) -> Vec<AnimationProgress> {
        let mut frames = Vec::new();
        let mut elapsed_ms = 0;
        loop {
            let (progress, last) = frame_progress(spec, elapsed_ms);
            frames.push(progress);
            if last {
                return frames;
            }
            elapsed_ms += interval_ms;
        }
    }

    #[test]
    fn test_intro_ends_on_max_progress() {
        let frames = frame_sequence(&AnimationSpec::INTRO, 33);

        assert_eq!(frames.first(), Some(&0));
        assert_eq!(frames.last(), Some(&ANIMATION_NORMALIZED_MAX));
        // 0, 33, ..., 990, then 1023 past the end
        assert_eq!(frames.len(), 32);
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_only_the_final_frame_is_last() {
        let spec = AnimationSpec {
            duration_ms: 100,
            curve: AnimationCurve::Linear,
        };

        assert_eq!(frame_progress(&spec, 0), (0, false));
        assert!(!frame_progress(&spec, 99).1);
        assert_eq!(frame_progress(&spec, 100), (ANIMATION_NORMALIZED_MAX, true));
        assert_eq!(frame_progress(&spec, 250), (ANIMATION_NORMALIZED_MAX, true));
    }

    #[test]
    fn test_every_curve_finishes_at_max() {
        for curve in [
            AnimationCurve::Linear,
            AnimationCurve::EaseIn,
            AnimationCurve::EaseOut,
            AnimationCurve::EaseInOut,
        ] {
            let spec = AnimationSpec {
                duration_ms: 250,
                curve,
            };
            let frames = frame_sequence(&spec, 40);
            assert_eq!(frames.last(), Some(&ANIMATION_NORMALIZED_MAX));
            assert!(frames[..frames.len() - 1]
                .iter()
                .all(|&p| p < ANIMATION_NORMALIZED_MAX));
        }
    }
}
