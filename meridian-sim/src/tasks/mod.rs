//! Simulator tasks
//!
//! Each task runs independently and communicates via channels/signals.
//! `main` spawns them all on a single executor thread.

pub mod animation;
pub mod display;
pub mod face;
pub mod focus;
pub mod tick;

pub use animation::animation_task;
pub use display::display_task;
pub use face::face_task;
pub use focus::focus_task;
pub use tick::tick_task;
