//! Authoritative in-memory collection of committed ride records.

use chrono::{DateTime, Utc};

use crate::rides::draft::{DraftMode, RideDraft};
use crate::rides::ride::RideRecord;

/// Owns the committed ride records and assigns their identifiers.
///
/// Ids come from a monotonic counter rather than the collection length, so a
/// delete can never cause a later registration to collide with a surviving
/// id.
#[derive(Debug, Clone, Default)]
pub struct RideRegistry {
    records: Vec<RideRecord>,
    next_id: u64,
}

/// Outcome of a registry mutation, reported to the notification boundary by
/// the application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Registered { id: u64 },
    Edited { id: u64 },
    MissingField(&'static str),
    /// The edit target was deleted between `load_for_edit` and the commit.
    EditTargetGone { id: u64 },
}

impl RideRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[RideRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ride(&self, id: u64) -> Option<&RideRecord> {
        self.records.iter().find(|ride| ride.id == id)
    }

    /// Commits a draft: appends a new record in `Create` mode, replaces the
    /// captured target in `Edit` mode. On success the draft is cleared back
    /// to `Create` defaults. On failure nothing changes, draft included.
    pub fn commit(&mut self, draft: &mut RideDraft, now: DateTime<Utc>) -> CommitOutcome {
        if let Some(field) = draft.missing_field() {
            tracing::debug!(field, "ride draft rejected");
            return CommitOutcome::MissingField(field);
        }

        let outcome = match draft.mode {
            DraftMode::Create => {
                self.next_id += 1;
                let id = self.next_id;
                self.records.push(RideRecord {
                    id,
                    pickup_location: draft.pickup_location.clone(),
                    dropoff_location: draft.dropoff_location.clone(),
                    payment_method: draft.payment_method,
                    passenger_name: draft.passenger_name.clone(),
                    fare_amount: draft.fare_amount.clone(),
                    logged_at: now,
                });
                tracing::info!(id, "ride registered");
                CommitOutcome::Registered { id }
            }
            DraftMode::Edit { id } => match self.records.iter_mut().find(|r| r.id == id) {
                Some(record) => {
                    record.pickup_location = draft.pickup_location.clone();
                    record.dropoff_location = draft.dropoff_location.clone();
                    record.payment_method = draft.payment_method;
                    record.passenger_name = draft.passenger_name.clone();
                    record.fare_amount = draft.fare_amount.clone();
                    tracing::info!(id, "ride edited");
                    CommitOutcome::Edited { id }
                }
                None => {
                    tracing::warn!(id, "edit target no longer in registry");
                    return CommitOutcome::EditTargetGone { id };
                }
            },
        };
        draft.clear();
        outcome
    }

    /// Removes the record with the given id. A missing id is a successful
    /// no-op, preserved from the original contract.
    pub fn delete(&mut self, id: u64) {
        let before = self.records.len();
        self.records.retain(|ride| ride.id != id);
        if self.records.len() == before {
            tracing::debug!(id, "delete matched no ride");
        } else {
            tracing::info!(id, "ride deleted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rides::ride::PaymentMethod;

    fn valid_draft(passenger: &str) -> RideDraft {
        RideDraft {
            pickup_location: "Station".into(),
            dropoff_location: "Airport".into(),
            payment_method: PaymentMethod::Cash,
            passenger_name: passenger.into(),
            fare_amount: "45.00".into(),
            mode: DraftMode::Create,
        }
    }

    #[test]
    fn register_appends_record_with_verbatim_fields() {
        let mut registry = RideRegistry::new();
        let mut draft = valid_draft("Ana");
        let outcome = registry.commit(&mut draft, Utc::now());
        assert_eq!(outcome, CommitOutcome::Registered { id: 1 });
        assert_eq!(registry.len(), 1);
        let ride = &registry.records()[0];
        assert_eq!(ride.pickup_location, "Station");
        assert_eq!(ride.dropoff_location, "Airport");
        assert_eq!(ride.passenger_name, "Ana");
        assert_eq!(ride.fare_amount, "45.00");
        assert_eq!(ride.payment_method, PaymentMethod::Cash);
    }

    #[test]
    fn register_clears_draft_to_defaults() {
        let mut registry = RideRegistry::new();
        let mut draft = valid_draft("Ana");
        draft.payment_method = PaymentMethod::Pix;
        registry.commit(&mut draft, Utc::now());
        assert_eq!(draft, RideDraft::default());
    }

    #[test]
    fn sequential_registrations_assign_ids_in_order() {
        let mut registry = RideRegistry::new();
        for name in ["Ana", "Bia", "Caio"] {
            registry.commit(&mut valid_draft(name), Utc::now());
        }
        let ids: Vec<u64> = registry.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn missing_field_rejects_and_leaves_registry_unchanged() {
        let mut registry = RideRegistry::new();
        let mut draft = valid_draft("");
        let outcome = registry.commit(&mut draft, Utc::now());
        assert_eq!(outcome, CommitOutcome::MissingField("passenger name"));
        assert!(registry.is_empty());
        // Failed commits must not clear the draft either.
        assert_eq!(draft.pickup_location, "Station");
    }

    #[test]
    fn delete_missing_id_is_a_noop() {
        let mut registry = RideRegistry::new();
        registry.commit(&mut valid_draft("Ana"), Utc::now());
        let snapshot = registry.records().to_vec();
        registry.delete(99);
        assert_eq!(registry.records(), snapshot.as_slice());
    }

    #[test]
    fn ids_never_repeat_after_deletion() {
        let mut registry = RideRegistry::new();
        for name in ["Ana", "Bia", "Caio"] {
            registry.commit(&mut valid_draft(name), Utc::now());
        }
        registry.delete(2);
        let outcome = registry.commit(&mut valid_draft("Duda"), Utc::now());
        // Length-based assignment would hand out the still-live id 3 here.
        assert_eq!(outcome, CommitOutcome::Registered { id: 4 });
        let ids: Vec<u64> = registry.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn edit_replaces_exactly_the_captured_record() {
        let mut registry = RideRegistry::new();
        for name in ["Ana", "Bia", "Caio"] {
            registry.commit(&mut valid_draft(name), Utc::now());
        }
        // Edit the first record, not the most recent one.
        let mut draft = RideDraft::from_record(registry.ride(1).unwrap());
        draft.passenger_name = "Ana Paula".into();
        let outcome = registry.commit(&mut draft, Utc::now());
        assert_eq!(outcome, CommitOutcome::Edited { id: 1 });
        assert_eq!(registry.ride(1).unwrap().passenger_name, "Ana Paula");
        assert_eq!(registry.ride(2).unwrap().passenger_name, "Bia");
        assert_eq!(registry.ride(3).unwrap().passenger_name, "Caio");
    }

    #[test]
    fn edit_keeps_id_and_timestamp() {
        let mut registry = RideRegistry::new();
        let registered_at = Utc::now();
        registry.commit(&mut valid_draft("Ana"), registered_at);
        let mut draft = RideDraft::from_record(registry.ride(1).unwrap());
        draft.fare_amount = "60.00".into();
        registry.commit(&mut draft, registered_at + chrono::Duration::hours(2));
        let ride = registry.ride(1).unwrap();
        assert_eq!(ride.id, 1);
        assert_eq!(ride.logged_at, registered_at);
        assert_eq!(ride.fare_amount, "60.00");
    }

    #[test]
    fn edit_of_deleted_record_aborts() {
        let mut registry = RideRegistry::new();
        registry.commit(&mut valid_draft("Ana"), Utc::now());
        let mut draft = RideDraft::from_record(registry.ride(1).unwrap());
        registry.delete(1);
        let outcome = registry.commit(&mut draft, Utc::now());
        assert_eq!(outcome, CommitOutcome::EditTargetGone { id: 1 });
        assert!(registry.is_empty());
    }
}
