//! Inter-task communication channels
//!
//! Defines the static signals and channels the simulator tasks talk
//! through. Only the face task touches the animator; everything else
//! reaches it through here.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use meridian_core::face::{AnimationProgress, FaceModel};
use meridian_core::traits::{AnimationSpec, TimeUnits, WallTime};

/// Channel capacity for animation events
const ANIMATION_CHANNEL_SIZE: usize = 8;

/// Channel capacity for tick events
const TICK_CHANNEL_SIZE: usize = 4;

/// Event from the animation driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEvent {
    /// Eased progress for one frame
    Frame(AnimationProgress),
    /// Animation reached its end
    Complete,
}

/// Event from the tick service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickEvent {
    /// Time of the tick
    pub time: WallTime,
    /// Units that changed since the previous tick
    pub units: TimeUnits,
}

/// Application focus changes (true = gained)
pub static FOCUS: Signal<CriticalSectionRawMutex, bool> = Signal::new();

/// Animation to play (set by the face task's driver handle)
pub static ANIMATION_START: Signal<CriticalSectionRawMutex, AnimationSpec> = Signal::new();

/// Frames and completion from the animation driver
pub static ANIMATION_EVENTS: Channel<CriticalSectionRawMutex, AnimationEvent, ANIMATION_CHANNEL_SIZE> =
    Channel::new();

/// Tick subscription request (set by the face task's tick handle)
pub static TICK_SUBSCRIBE: Signal<CriticalSectionRawMutex, TimeUnits> = Signal::new();

/// Ticks from the tick service
pub static TICK_EVENTS: Channel<CriticalSectionRawMutex, TickEvent, TICK_CHANNEL_SIZE> =
    Channel::new();

/// Latest face for the display task
pub static FACE_UPDATE: Signal<CriticalSectionRawMutex, FaceModel> = Signal::new();
