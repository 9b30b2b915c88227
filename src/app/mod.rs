//! Application layer: screen navigation, the state facade, and the boundary
//! traits the presentation layer plugs into.

pub mod clock;
pub mod image_picker;
pub mod notify;
pub mod screen;
pub mod state;

pub use clock::{Clock, SystemClock};
pub use image_picker::ImagePicker;
pub use notify::{Notification, NotificationKind, NotificationSink, TracingSink};
pub use screen::{Navigator, Screen};
pub use state::AppState;
