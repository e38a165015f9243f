//! Face animator
//!
//! Owns the face state machine and turns host callbacks (focus, animation
//! frames, ticks) into face models pushed to a sink.

pub mod face;

pub use face::FaceAnimator;
