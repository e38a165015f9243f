//! Collaborator traits
//!
//! These traits define the interface between the face logic and whatever
//! host provides time, animation frames, ticks and a place to send faces.

pub mod animation;
pub mod sink;
pub mod time;

pub use animation::{AnimationCurve, AnimationDriver, AnimationSpec, TickService};
pub use sink::FaceSink;
pub use time::{ParseTimeError, TimeSource, TimeUnits, WallTime};
