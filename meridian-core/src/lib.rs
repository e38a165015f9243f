//! Board-agnostic core logic for the Meridian watch face
//!
//! This crate contains everything about the face that does not depend on a
//! display, a clock chip or an animation timer:
//!
//! - Hand and face models with fixed-point angles
//! - Hand geometry for a time of day, and linear interpolation between faces
//! - The face state machine (uninitialized, intro sweep, steady ticking)
//! - The face animator that drives the intro and emits faces to a sink
//! - Collaborator traits (time source, sink, animation driver, tick service)
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod animator;
pub mod config;
pub mod face;
pub mod state;
pub mod traits;

pub use animator::FaceAnimator;
pub use face::{FaceModel, HandColor, HandModel};
