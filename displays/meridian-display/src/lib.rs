//! Drawing layer for the Meridian watch face
//!
//! This crate provides:
//! - `FaceView`, a face sink that keeps the drawing layer's own copy of the
//!   last face and tracks whether it needs a redraw
//! - `hand_endpoint`, polar conversion from a hand model to a pixel point
//! - `FaceRenderer`, which draws a face onto any `embedded-graphics`
//!   `DrawTarget`
//! - `FromHandColor`, conversion from the opaque hand color to panel colors
//!
//! # Architecture
//!
//! The face animator pushes snapshots into a `FaceView`; the display task
//! checks the view, draws it with a `FaceRenderer` and marks it clean. The
//! animator never reads anything back from the drawing side.

#![no_std]
#![deny(unsafe_code)]

pub mod palette;
pub mod polar;
pub mod render;
pub mod view;

// Re-export key types
pub use palette::FromHandColor;
pub use polar::hand_endpoint;
pub use render::FaceRenderer;
pub use view::FaceView;
