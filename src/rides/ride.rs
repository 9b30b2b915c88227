use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged taxi trip with fare and passenger details.
///
/// Records are immutable once committed; edits go through the registry, which
/// swaps in a replacement with the same `id` and `logged_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideRecord {
    pub id: u64,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub payment_method: PaymentMethod,
    pub passenger_name: String,
    /// Kept verbatim as the driver typed it; the core never parses fares.
    pub fare_amount: String,
    pub logged_at: DateTime<Utc>,
}

/// How the passenger paid for the ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    Cash,
    Pix,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Cash, PaymentMethod::Pix];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Pix => "PIX",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
