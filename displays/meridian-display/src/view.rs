//! Face view
//!
//! The drawing layer's own copy of the last face it was sent.

use meridian_core::face::FaceModel;
use meridian_core::traits::FaceSink;

/// Last received face plus a redraw flag
///
/// Implements `FaceSink`, so it can be handed straight to the animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceView {
    /// Face to draw
    face: FaceModel,
    /// Whether the face changed since the last draw
    dirty: bool,
    /// Number of faces received
    updates: u32,
}

impl Default for FaceView {
    fn default() -> Self {
        Self::new()
    }
}

impl FaceView {
    /// Create a view showing the blank face
    pub const fn new() -> Self {
        Self {
            face: FaceModel::blank(),
            dirty: true,
            updates: 0,
        }
    }

    /// Replace the face
    pub fn update(&mut self, face: FaceModel) {
        if face != self.face {
            self.dirty = true;
        }
        self.face = face;
        self.updates = self.updates.wrapping_add(1);
    }

    /// Current face
    pub fn face(&self) -> &FaceModel {
        &self.face
    }

    /// Number of faces received
    pub fn updates(&self) -> u32 {
        self.updates
    }

    /// Check if the view needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the view as drawn
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Get the face if it needs drawing, and mark it clean
    pub fn take_dirty(&mut self) -> Option<FaceModel> {
        if self.dirty {
            self.dirty = false;
            Some(self.face)
        } else {
            None
        }
    }
}

impl FaceSink for FaceView {
    fn face_changed(&mut self, face: FaceModel) {
        self.update(face);
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FaceView {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "FaceView[hour={}, minute={}, dirty={}]",
            self.face.hour_hand.angle,
            self.face.minute_hand.angle,
            self.dirty
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_core::face::compute_default_face;
    use meridian_core::traits::WallTime;

    #[test]
    fn test_new_view_is_dirty_blank() {
        let view = FaceView::new();
        assert!(view.is_dirty());
        assert_eq!(*view.face(), FaceModel::blank());
        assert_eq!(view.updates(), 0);
    }

    #[test]
    fn test_take_dirty() {
        let mut view = FaceView::new();
        assert_eq!(view.take_dirty(), Some(FaceModel::blank()));
        assert_eq!(view.take_dirty(), None);

        let face = compute_default_face(&WallTime::new(3, 0, 0));
        view.face_changed(face);
        assert_eq!(view.take_dirty(), Some(face));
        assert!(!view.is_dirty());
    }

    #[test]
    fn test_same_face_does_not_dirty() {
        let mut view = FaceView::new();
        let face = compute_default_face(&WallTime::new(3, 0, 0));
        view.update(face);
        view.mark_clean();

        // A tick within the same minute produces an identical face
        view.update(face);
        assert!(!view.is_dirty());
        assert_eq!(view.updates(), 2);
    }
}
