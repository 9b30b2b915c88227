use crate::rides::ride::{PaymentMethod, RideRecord};

/// Distinguishes a draft that will create a new record from one that edits an
/// existing record. The edit target id is captured when the draft is loaded,
/// so committing always replaces by identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftMode {
    #[default]
    Create,
    Edit {
        id: u64,
    },
}

/// Transient working copy of the ride fields for an in-progress create or
/// edit. Field setters store values verbatim; validation happens only when
/// the draft is submitted to the registry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RideDraft {
    pub pickup_location: String,
    pub dropoff_location: String,
    pub payment_method: PaymentMethod,
    pub passenger_name: String,
    pub fare_amount: String,
    pub mode: DraftMode,
}

impl RideDraft {
    /// Loads an existing record's fields for edit-then-resubmit.
    pub fn from_record(record: &RideRecord) -> Self {
        Self {
            pickup_location: record.pickup_location.clone(),
            dropoff_location: record.dropoff_location.clone(),
            payment_method: record.payment_method,
            passenger_name: record.passenger_name.clone(),
            fare_amount: record.fare_amount.clone(),
            mode: DraftMode::Edit { id: record.id },
        }
    }

    /// Resets every field to its default and returns to `Create` mode.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, DraftMode::Edit { .. })
    }

    /// Missing-field check shared by register and edit-commit. The payment
    /// method is an enum and can never be absent, so only the four text
    /// fields can fail.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.pickup_location.is_empty() {
            Some("pickup location")
        } else if self.dropoff_location.is_empty() {
            Some("drop-off location")
        } else if self.passenger_name.is_empty() {
            Some("passenger name")
        } else if self.fare_amount.is_empty() {
            Some("fare amount")
        } else {
            None
        }
    }
}
