//! Face state machine definition
//!
//! Which callbacks the animator honours is a function of the current state.

use super::events::FaceEvent;

/// Face states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceState {
    /// Blank face, waiting for the application to gain focus
    #[default]
    Uninitialized,
    /// Intro sweep playing
    Introducing,
    /// Face follows the tick service
    Steady,
}

impl FaceState {
    /// Check if animation frames should be applied
    pub fn accepts_frames(&self) -> bool {
        matches!(self, FaceState::Introducing)
    }

    /// Check if time ticks should be applied
    pub fn accepts_ticks(&self) -> bool {
        matches!(self, FaceState::Steady)
    }

    /// Check if the intro has already been started
    pub fn intro_started(&self) -> bool {
        !matches!(self, FaceState::Uninitialized)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: FaceEvent) -> Self {
        use FaceEvent::*;
        use FaceState::*;

        match (self, event) {
            (Uninitialized, FocusGained) => Introducing,
            (Introducing, IntroFinished) => Steady,

            // Repeated focus, focus loss and stray completions keep the state
            _ => self,
        }
    }
}
