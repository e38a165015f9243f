//! Face change sink trait

use crate::face::FaceModel;

/// Receiver of every face the animator computes
///
/// Called synchronously on each recomputation. Implementations keep their
/// own copy if they need one and request a redraw; they must not block.
pub trait FaceSink {
    /// A new face is available
    fn face_changed(&mut self, face: FaceModel);
}

impl<S: FaceSink + ?Sized> FaceSink for &mut S {
    fn face_changed(&mut self, face: FaceModel) {
        (**self).face_changed(face)
    }
}
