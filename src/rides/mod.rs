//! Ride domain models, the in-memory registry, and the review query engine.

pub mod draft;
pub mod query;
pub mod registry;
pub mod ride;

pub use draft::{DraftMode, RideDraft};
pub use query::{visible_rides, QuerySelection, SortOrder, TimeWindow};
pub use registry::{CommitOutcome, RideRegistry};
pub use ride::{PaymentMethod, RideRecord};
