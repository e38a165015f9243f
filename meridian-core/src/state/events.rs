//! Events that trigger face state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceEvent {
    // Lifecycle events
    /// Application became active
    FocusGained,
    /// Application lost focus (an overlay or notification took over)
    FocusLost,

    // Animation events
    /// Intro animation played to the end
    IntroFinished,
}
