//! Face state machine
//!
//! The face moves through three states and never goes back: blank until
//! the application gains focus, sweeping in during the intro, then ticking.

pub mod events;
pub mod machine;

pub use events::FaceEvent;
pub use machine::FaceState;
