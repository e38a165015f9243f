//! Face animator implementation
//!
//! The animator is driven entirely by callbacks. It never blocks, never
//! spawns anything and never fails: callbacks that arrive in a state that
//! does not expect them are ignored.

use crate::config::FaceConfig;
use crate::face::{
    compute_face, interpolate_face, intro_start_pose, AnimationProgress, FaceModel, FaceStyle,
    ANIMATION_NORMALIZED_MAX, ANIMATION_NORMALIZED_MIN,
};
use crate::state::{FaceEvent, FaceState};
use crate::traits::{
    AnimationDriver, AnimationSpec, FaceSink, TickService, TimeSource, TimeUnits, WallTime,
};

/// Drives the watch face from blank, through the intro sweep, to ticking
///
/// The sink is fixed at construction. The animation driver and tick service
/// are passed to the callbacks that need them, so a test can play frames
/// by calling `on_animation_frame` directly.
#[derive(Debug)]
pub struct FaceAnimator<C, S> {
    /// Live clock, sampled on every intro frame
    clock: C,
    /// Receiver of every computed face
    sink: S,
    /// Hand styles
    style: FaceStyle,
    /// Intro animation handed to the driver
    intro: AnimationSpec,
    /// Current state
    state: FaceState,
    /// Intro frames applied so far
    frames: u32,
}

impl<C: TimeSource, S: FaceSink> FaceAnimator<C, S> {
    /// Create an animator with the default hand styles and intro
    pub fn new(clock: C, sink: S) -> Self {
        Self::with_config(clock, sink, &FaceConfig::default())
    }

    /// Create an animator from a face configuration
    pub fn with_config(clock: C, sink: S, config: &FaceConfig) -> Self {
        Self {
            clock,
            sink,
            style: config.style(),
            intro: config.intro.spec(),
            state: FaceState::Uninitialized,
            frames: 0,
        }
    }

    /// Current state
    pub fn state(&self) -> FaceState {
        self.state
    }

    /// Hand styles in use
    pub fn style(&self) -> &FaceStyle {
        &self.style
    }

    /// Intro animation spec
    pub fn intro_spec(&self) -> AnimationSpec {
        self.intro
    }

    /// Number of intro frames applied
    pub fn frames_applied(&self) -> u32 {
        self.frames
    }

    /// The sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Emit the blank face
    ///
    /// Both hands are collapsed to the center until the intro starts.
    pub fn init(&mut self) {
        self.emit(FaceModel::blank());
    }

    /// Handle an application focus change
    ///
    /// The first gained focus starts the intro on `driver` and returns
    /// `true`. Focus loss and every later call are ignored.
    pub fn on_focus_changed<D: AnimationDriver>(&mut self, focused: bool, driver: &mut D) -> bool {
        let event = if focused {
            FaceEvent::FocusGained
        } else {
            FaceEvent::FocusLost
        };

        let next = self.state.transition(event);
        if next == self.state {
            return false;
        }

        self.state = next;
        self.frames = 0;
        driver.schedule(self.intro);
        true
    }

    /// Apply one intro frame
    ///
    /// The target is recomputed from the live clock on every frame, so the
    /// sweep lands on the right time even if a minute rolls over mid-intro.
    pub fn on_animation_frame(&mut self, progress: AnimationProgress) {
        if !self.state.accepts_frames() {
            return;
        }

        let progress = progress.clamp(ANIMATION_NORMALIZED_MIN, ANIMATION_NORMALIZED_MAX);
        let target = compute_face(&self.clock.now(), &self.style);
        let start = intro_start_pose(&target);

        self.frames = self.frames.saturating_add(1);
        self.emit(interpolate_face(&start, &target, progress));
    }

    /// Finish the intro
    ///
    /// Emits the exact current face (not the last interpolated frame) and
    /// subscribes to per-second ticks.
    pub fn on_animation_complete<T: TickService>(&mut self, ticks: &mut T) {
        if !self.state.accepts_frames() {
            return;
        }

        self.state = self.state.transition(FaceEvent::IntroFinished);
        let now = self.clock.now();
        self.on_time_tick(now, TimeUnits::ALL);
        ticks.subscribe(TimeUnits::SECOND);
    }

    /// Apply a tick from the tick service
    ///
    /// The face is always fully recomputed; `units_changed` is not consulted.
    pub fn on_time_tick(&mut self, time: WallTime, _units_changed: TimeUnits) {
        if !self.state.accepts_ticks() {
            return;
        }

        self.emit(compute_face(&time, &self.style));
    }

    fn emit(&mut self, face: FaceModel) {
        self.sink.face_changed(face);
    }
}
