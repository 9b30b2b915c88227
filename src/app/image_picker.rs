use crate::driver::ImageRef;

/// External image selection boundary. The call blocks until the user picks
/// an image or cancels; a cancelled pick yields `None` and the caller must
/// leave its prior reference untouched.
pub trait ImagePicker {
    fn pick_image(&mut self) -> Option<ImageRef>;
}
