//! Watch face models and hand geometry
//!
//! Models are plain values: every recomputation builds a new `FaceModel`
//! and hands it to whoever is listening.

pub mod geometry;
pub mod model;
pub mod style;

pub use geometry::{
    compute_default_face, compute_face, hour_angle, interpolate_face, interpolate_hand,
    interpolate_linear, intro_start_pose, minute_angle,
};
pub use model::{
    AnimationProgress, FaceModel, HandColor, HandModel, ANIMATION_NORMALIZED_MAX,
    ANIMATION_NORMALIZED_MIN, HALF_TURN, TRIG_MAX_ANGLE,
};
pub use style::{FaceStyle, HandStyle};
