//! Driver profile: identity fields plus the PIX QR code image reference.

pub mod profile;

pub use profile::{DriverProfile, ImageRef, ProfileDraft};
