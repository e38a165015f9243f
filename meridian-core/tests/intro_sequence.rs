//! End-to-end face lifecycle: blank, intro sweep, steady ticking

use std::cell::Cell;
use std::rc::Rc;

use meridian_core::config::{FaceConfig, IntroConfig};
use meridian_core::face::{
    compute_default_face, FaceModel, ANIMATION_NORMALIZED_MAX, HALF_TURN, TRIG_MAX_ANGLE,
};
use meridian_core::state::FaceState;
use meridian_core::traits::{
    AnimationCurve, AnimationDriver, AnimationSpec, FaceSink, TickService, TimeSource, TimeUnits,
    WallTime,
};
use meridian_core::FaceAnimator;

/// Clock shared between the test and the animator
#[derive(Clone)]
struct MockClock(Rc<Cell<WallTime>>);

impl MockClock {
    fn at(hour: u8, minute: u8, second: u8) -> Self {
        Self(Rc::new(Cell::new(WallTime::new(hour, minute, second))))
    }

    fn set(&self, hour: u8, minute: u8, second: u8) {
        self.0.set(WallTime::new(hour, minute, second));
    }
}

impl TimeSource for MockClock {
    fn now(&self) -> WallTime {
        self.0.get()
    }
}

#[derive(Default)]
struct RecordingSink {
    faces: Vec<FaceModel>,
}

impl RecordingSink {
    fn last(&self) -> &FaceModel {
        self.faces.last().expect("no face emitted")
    }
}

impl FaceSink for RecordingSink {
    fn face_changed(&mut self, face: FaceModel) {
        self.faces.push(face);
    }
}

#[derive(Default)]
struct RecordingDriver {
    scheduled: Vec<AnimationSpec>,
}

impl AnimationDriver for RecordingDriver {
    fn schedule(&mut self, spec: AnimationSpec) {
        self.scheduled.push(spec);
    }
}

#[derive(Default)]
struct RecordingTicks {
    subscriptions: Vec<TimeUnits>,
}

impl TickService for RecordingTicks {
    fn subscribe(&mut self, units: TimeUnits) {
        self.subscriptions.push(units);
    }
}

/// Play frames the way an ease-out driver would report them
fn play_intro<C: TimeSource>(animator: &mut FaceAnimator<C, RecordingSink>, steps: i32) {
    for i in 0..=steps {
        animator.on_animation_frame(ANIMATION_NORMALIZED_MAX * i / steps);
    }
}

#[test]
fn test_full_lifecycle_at_three_oclock() {
    let clock = MockClock::at(3, 0, 0);
    let mut animator = FaceAnimator::new(clock.clone(), RecordingSink::default());
    let mut driver = RecordingDriver::default();
    let mut ticks = RecordingTicks::default();

    animator.init();
    let blank = animator.sink().last();
    assert_eq!(blank.hour_hand.length, 0);
    assert_eq!(blank.minute_hand.length, 0);

    assert!(animator.on_focus_changed(true, &mut driver));
    assert_eq!(
        driver.scheduled,
        vec![AnimationSpec {
            duration_ms: 1000,
            curve: AnimationCurve::EaseOut
        }]
    );

    play_intro(&mut animator, 30);
    animator.on_animation_complete(&mut ticks);

    assert_eq!(animator.state(), FaceState::Steady);
    assert_eq!(ticks.subscriptions, vec![TimeUnits::SECOND]);
    let face = animator.sink().last();
    assert_eq!(face.hour_hand.angle, 3 * TRIG_MAX_ANGLE / 12);
    assert_eq!(face.minute_hand.angle, 0);

    animator.on_time_tick(WallTime::new(3, 1, 0), TimeUnits::MINUTE);
    let face = animator.sink().last();
    assert_eq!(face.minute_hand.angle, TRIG_MAX_ANGLE / 60);
    assert_eq!(
        face.hour_hand.angle,
        (3 * TRIG_MAX_ANGLE + TRIG_MAX_ANGLE / 60) / 12
    );
}

#[test]
fn test_every_update_is_emitted() {
    let clock = MockClock::at(10, 10, 0);
    let mut animator = FaceAnimator::new(clock, RecordingSink::default());

    animator.init();
    animator.on_focus_changed(true, &mut RecordingDriver::default());
    play_intro(&mut animator, 10);
    animator.on_animation_complete(&mut RecordingTicks::default());
    animator.on_time_tick(WallTime::new(10, 10, 1), TimeUnits::SECOND);
    animator.on_time_tick(WallTime::new(10, 10, 2), TimeUnits::SECOND);

    // init + 11 frames + completion + 2 ticks
    assert_eq!(animator.sink().faces.len(), 1 + 11 + 1 + 2);
}

#[test]
fn test_intro_sweeps_in_from_opposite_sides() {
    let clock = MockClock::at(3, 0, 0);
    let mut animator = FaceAnimator::new(clock, RecordingSink::default());
    animator.on_focus_changed(true, &mut RecordingDriver::default());
    play_intro(&mut animator, 4);

    let faces = &animator.sink().faces;
    let target = compute_default_face(&WallTime::new(3, 0, 0));

    // Hour hand comes from behind, minute hand from ahead
    assert_eq!(faces[0].hour_hand.angle, target.hour_hand.angle - HALF_TURN);
    assert_eq!(faces[0].minute_hand.angle, target.minute_hand.angle + HALF_TURN);
    for pair in faces.windows(2) {
        assert!(pair[1].hour_hand.angle >= pair[0].hour_hand.angle);
        assert!(pair[1].minute_hand.angle <= pair[0].minute_hand.angle);
        assert!(pair[1].hour_hand.length >= pair[0].hour_hand.length);
    }
    assert_eq!(*faces.last().unwrap(), target);
}

#[test]
fn test_intro_retargets_when_time_advances() {
    let clock = MockClock::at(3, 0, 59);
    let mut animator = FaceAnimator::new(clock.clone(), RecordingSink::default());
    animator.on_focus_changed(true, &mut RecordingDriver::default());

    animator.on_animation_frame(ANIMATION_NORMALIZED_MAX / 3);
    clock.set(3, 1, 0);
    animator.on_animation_frame(ANIMATION_NORMALIZED_MAX);

    assert_eq!(
        *animator.sink().last(),
        compute_default_face(&WallTime::new(3, 1, 0))
    );

    // Completion samples the clock again
    clock.set(3, 2, 0);
    animator.on_animation_complete(&mut RecordingTicks::default());
    assert_eq!(
        *animator.sink().last(),
        compute_default_face(&WallTime::new(3, 2, 0))
    );
}

#[test]
fn test_focus_after_steady_does_not_restart() {
    let clock = MockClock::at(8, 20, 0);
    let mut animator = FaceAnimator::new(clock, RecordingSink::default());
    let mut driver = RecordingDriver::default();

    animator.on_focus_changed(true, &mut driver);
    play_intro(&mut animator, 5);
    animator.on_animation_complete(&mut RecordingTicks::default());
    let emitted = animator.sink().faces.len();

    assert!(!animator.on_focus_changed(false, &mut driver));
    assert!(!animator.on_focus_changed(true, &mut driver));
    assert_eq!(driver.scheduled.len(), 1);
    assert_eq!(animator.state(), FaceState::Steady);

    // Stray frames from a misbehaving driver change nothing
    animator.on_animation_frame(0);
    assert_eq!(animator.sink().faces.len(), emitted);
}

#[test]
fn test_configured_intro_and_styles() {
    let config = FaceConfig {
        intro: IntroConfig {
            duration_ms: 400,
            curve: AnimationCurve::Linear,
        },
        ..FaceConfig::default()
    };
    let mut hour = config.hour_hand;
    hour.length = 25;
    let config = FaceConfig {
        hour_hand: hour,
        ..config
    };

    let clock = MockClock::at(6, 0, 0);
    let mut animator = FaceAnimator::with_config(clock, RecordingSink::default(), &config);
    let mut driver = RecordingDriver::default();
    animator.on_focus_changed(true, &mut driver);
    assert_eq!(driver.scheduled[0].duration_ms, 400);
    assert_eq!(driver.scheduled[0].curve, AnimationCurve::Linear);

    animator.on_animation_complete(&mut RecordingTicks::default());
    let face = animator.sink().last();
    assert_eq!(face.hour_hand.length, 25);
    assert_eq!(face.hour_hand.angle, HALF_TURN);
}

#[test]
fn test_borrowed_sink_and_clock() {
    let clock = MockClock::at(12, 0, 0);
    let mut sink = RecordingSink::default();
    {
        let mut animator = FaceAnimator::new(&clock, &mut sink);
        animator.init();
        animator.on_focus_changed(true, &mut RecordingDriver::default());
        animator.on_animation_complete(&mut RecordingTicks::default());
    }
    assert_eq!(sink.faces.len(), 2);
    assert_eq!(
        sink.faces[1],
        compute_default_face(&WallTime::new(0, 0, 0))
    );
}
