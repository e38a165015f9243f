//! Face task
//!
//! Sole owner of the `FaceAnimator`. Turns focus, animation and tick events
//! into animator callbacks, one at a time, and hands the collaborator
//! handles below to the animator so its requests go back out through the
//! channels.

use embassy_futures::select::{select3, Either3};
use log::{debug, info, warn};

use meridian_core::config::FaceConfig;
use meridian_core::face::FaceModel;
use meridian_core::traits::{AnimationDriver, AnimationSpec, FaceSink, TickService, TimeUnits};
use meridian_core::FaceAnimator;

use crate::channels::{
    AnimationEvent, ANIMATION_EVENTS, ANIMATION_START, FACE_UPDATE, FOCUS, TICK_EVENTS,
    TICK_SUBSCRIBE,
};
use crate::clock::SystemClock;

/// Sink forwarding faces to the display task
#[derive(Debug, Default)]
pub struct SignalSink;

impl FaceSink for SignalSink {
    fn face_changed(&mut self, face: FaceModel) {
        FACE_UPDATE.signal(face);
    }
}

/// Driver handle forwarding animation requests to the animation task
#[derive(Debug, Default)]
pub struct SignalDriver;

impl AnimationDriver for SignalDriver {
    fn schedule(&mut self, spec: AnimationSpec) {
        ANIMATION_START.signal(spec);
    }
}

/// Tick service handle forwarding subscriptions to the tick task
#[derive(Debug, Default)]
pub struct SignalTicks;

impl TickService for SignalTicks {
    fn subscribe(&mut self, units: TimeUnits) {
        TICK_SUBSCRIBE.signal(units);
    }
}

/// Face task - drives the animator from host events
#[embassy_executor::task]
pub async fn face_task(clock: SystemClock, config: FaceConfig) {
    info!("Face task started");

    let mut animator = FaceAnimator::with_config(clock, SignalSink, &config);
    let mut driver = SignalDriver;
    let mut ticks = SignalTicks;

    animator.init();

    loop {
        match select3(FOCUS.wait(), ANIMATION_EVENTS.receive(), TICK_EVENTS.receive()).await {
            Either3::First(focused) => {
                if animator.on_focus_changed(focused, &mut driver) {
                    let spec = animator.intro_spec();
                    info!("Intro started: {} ms, {:?}", spec.duration_ms, spec.curve);
                } else if focused && animator.state().intro_started() {
                    warn!("Focus gained in {:?}, intro not restarted", animator.state());
                } else {
                    debug!("Focus {} ignored in {:?}", focused, animator.state());
                }
            }
            Either3::Second(AnimationEvent::Frame(progress)) => {
                animator.on_animation_frame(progress);
            }
            Either3::Second(AnimationEvent::Complete) => {
                animator.on_animation_complete(&mut ticks);
                info!(
                    "Intro complete after {} frames, now {:?}",
                    animator.frames_applied(),
                    animator.state()
                );
            }
            Either3::Third(tick) => {
                debug!("Tick {} ({:#04x})", tick.time.format().as_str(), tick.units.bits());
                animator.on_time_tick(tick.time, tick.units);
            }
        }
    }
}
