//! Application state facade: every user action enters through here.

use crate::app::clock::{Clock, SystemClock};
use crate::app::image_picker::ImagePicker;
use crate::app::notify::{Notification, NotificationSink, TracingSink};
use crate::app::screen::{Navigator, Screen};
use crate::driver::{DriverProfile, ProfileDraft};
use crate::rides::registry::CommitOutcome;
use crate::rides::{
    visible_rides, PaymentMethod, QuerySelection, RideDraft, RideRecord, RideRegistry, SortOrder,
    TimeWindow,
};

const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required";

/// Owns the whole mutable state of the running application and the boundary
/// collaborators. Exactly one user action mutates it at a time; there is no
/// parallelism anywhere in the diary.
///
/// The presentation layer reads state through the accessors and performs all
/// mutation through the action methods, which apply the screen gating rules.
pub struct AppState {
    navigator: Navigator,
    registry: RideRegistry,
    draft: RideDraft,
    profile: DriverProfile,
    profile_draft: ProfileDraft,
    selection: QuerySelection,
    sink: Box<dyn NotificationSink>,
    clock: Box<dyn Clock>,
}

impl AppState {
    pub fn new(sink: Box<dyn NotificationSink>, clock: Box<dyn Clock>) -> Self {
        Self {
            navigator: Navigator::new(),
            registry: RideRegistry::new(),
            draft: RideDraft::default(),
            profile: DriverProfile::default(),
            profile_draft: ProfileDraft::default(),
            selection: QuerySelection::default(),
            sink,
            clock,
        }
    }

    /// Production wiring: notifications go to tracing, time to the system
    /// clock. The CLI swaps in its own sink.
    pub fn with_defaults() -> Self {
        Self::new(Box::new(TracingSink), Box::new(SystemClock))
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn registry(&self) -> &RideRegistry {
        &self.registry
    }

    pub fn draft(&self) -> &RideDraft {
        &self.draft
    }

    pub fn profile(&self) -> &DriverProfile {
        &self.profile
    }

    pub fn profile_draft(&self) -> &ProfileDraft {
        &self.profile_draft
    }

    pub fn selection(&self) -> &QuerySelection {
        &self.selection
    }

    // --- navigation ------------------------------------------------------

    pub fn open_screen(&mut self, screen: Screen) -> bool {
        self.navigator.go_to(screen)
    }

    pub fn go_home(&mut self) {
        self.navigator.go_home();
    }

    pub fn open_filter_panel(&mut self) -> bool {
        self.navigator.open_filter_panel()
    }

    pub fn close_filter_panel(&mut self) {
        self.navigator.close_filter_panel();
    }

    pub fn open_qr_viewer(&mut self) -> bool {
        self.navigator.open_qr_viewer()
    }

    pub fn close_qr_viewer(&mut self) {
        self.navigator.close_qr_viewer();
    }

    // --- ride draft ------------------------------------------------------

    pub fn set_pickup_location(&mut self, value: impl Into<String>) {
        self.draft.pickup_location = value.into();
    }

    pub fn set_dropoff_location(&mut self, value: impl Into<String>) {
        self.draft.dropoff_location = value.into();
    }

    pub fn set_payment_method(&mut self, value: PaymentMethod) {
        self.draft.payment_method = value;
    }

    pub fn set_passenger_name(&mut self, value: impl Into<String>) {
        self.draft.passenger_name = value.into();
    }

    pub fn set_fare_amount(&mut self, value: impl Into<String>) {
        self.draft.fare_amount = value.into();
    }

    /// Commits the draft (create or edit, depending on its mode) and returns
    /// whether the commit succeeded. Only reachable from the register screen;
    /// a successful commit returns to home.
    pub fn submit_ride(&mut self) -> bool {
        if self.navigator.screen() != Screen::RegisterRide {
            tracing::warn!(screen = ?self.navigator.screen(), "ride submit ignored off-screen");
            return false;
        }
        let now = self.clock.now();
        match self.registry.commit(&mut self.draft, now) {
            CommitOutcome::Registered { .. } => {
                self.sink
                    .notify(Notification::success("Success", "Ride registered successfully!"));
                self.navigator.go_home();
                true
            }
            CommitOutcome::Edited { .. } => {
                self.sink
                    .notify(Notification::success("Success", "Ride edited successfully!"));
                self.navigator.go_home();
                true
            }
            CommitOutcome::MissingField(_) => {
                self.sink
                    .notify(Notification::error("Error", REQUIRED_FIELDS_MESSAGE));
                false
            }
            CommitOutcome::EditTargetGone { id } => {
                self.sink.notify(Notification::error(
                    "Error",
                    format!("Ride {id} no longer exists"),
                ));
                false
            }
        }
    }

    // --- ride records ----------------------------------------------------

    /// Deletes by id from the records screen. A missing id still reports
    /// success, preserved from the original contract.
    pub fn delete_ride(&mut self, id: u64) -> bool {
        if self.navigator.screen() != Screen::RideRecords {
            tracing::warn!(screen = ?self.navigator.screen(), "ride delete ignored off-screen");
            return false;
        }
        self.registry.delete(id);
        self.sink
            .notify(Notification::success("Success", "Ride deleted successfully!"));
        true
    }

    /// Loads a record into the draft for edit-then-resubmit. The record stays
    /// in the registry; the draft remembers the target id.
    pub fn edit_ride(&mut self, id: u64) -> bool {
        if self.navigator.screen() != Screen::RideRecords {
            tracing::warn!(screen = ?self.navigator.screen(), "ride edit ignored off-screen");
            return false;
        }
        match self.registry.ride(id) {
            Some(record) => {
                self.draft = RideDraft::from_record(record);
                true
            }
            None => {
                tracing::debug!(id, "edit requested for unknown ride");
                false
            }
        }
    }

    /// Derived, read-only view for the records screen. The presentation
    /// layer must never mutate records directly.
    pub fn visible_rides(&self) -> Vec<&RideRecord> {
        visible_rides(self.registry.records(), &self.selection, self.clock.now())
    }

    // --- filter selection ------------------------------------------------

    pub fn set_payment_filter(&mut self, filter: Option<PaymentMethod>) {
        self.selection.payment_filter = filter;
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.selection.sort_order = order;
    }

    pub fn set_time_window(&mut self, window: TimeWindow) {
        self.selection.time_window = window;
    }

    // --- driver profile --------------------------------------------------

    /// Opens the editor overlay, seeding the profile draft from the saved
    /// profile.
    pub fn open_driver_editor(&mut self) -> bool {
        if !self.navigator.open_driver_editor() {
            return false;
        }
        self.profile_draft = ProfileDraft::from_profile(&self.profile);
        true
    }

    pub fn set_driver_name(&mut self, value: impl Into<String>) {
        self.profile_draft.full_name = value.into();
    }

    pub fn set_driver_taxpayer_id(&mut self, value: impl Into<String>) {
        self.profile_draft.taxpayer_id = value.into();
    }

    pub fn set_driver_birth_date(&mut self, value: impl Into<String>) {
        self.profile_draft.birth_date = value.into();
    }

    pub fn set_driver_pix_key(&mut self, value: impl Into<String>) {
        self.profile_draft.pix_key = value.into();
    }

    /// Asks the external picker for a QR code image. Cancelling leaves the
    /// draft's current reference untouched.
    pub fn pick_qr_code(&mut self, picker: &mut dyn ImagePicker) -> bool {
        if !self.navigator.driver_editor_open() {
            return false;
        }
        if let Some(image) = picker.pick_image() {
            self.profile_draft.qr_code = Some(image);
        }
        true
    }

    /// Validates and commits the profile draft, closing the editor. On a
    /// missing field the editor stays open and the profile is unchanged.
    pub fn save_driver_info(&mut self) -> bool {
        if !self.navigator.driver_editor_open() {
            tracing::warn!("profile save ignored with editor closed");
            return false;
        }
        if self.profile_draft.missing_field().is_some() {
            self.sink
                .notify(Notification::error("Error", REQUIRED_FIELDS_MESSAGE));
            return false;
        }
        self.profile_draft.apply_to(&mut self.profile);
        self.navigator.close_driver_editor();
        self.sink
            .notify(Notification::success("Success", "Information saved successfully!"));
        true
    }

    pub fn cancel_driver_editor(&mut self) {
        self.navigator.close_driver_editor();
        self.profile_draft = ProfileDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::notify::NotificationKind;
    use crate::driver::ImageRef;
    use chrono::{DateTime, Utc};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingSink {
        log: Rc<RefCell<Vec<Notification>>>,
    }

    impl NotificationSink for RecordingSink {
        fn notify(&mut self, notification: Notification) {
            self.log.borrow_mut().push(notification);
        }
    }

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    struct ScriptedPicker(Option<ImageRef>);

    impl ImagePicker for ScriptedPicker {
        fn pick_image(&mut self) -> Option<ImageRef> {
            self.0.take()
        }
    }

    fn test_state() -> (AppState, Rc<RefCell<Vec<Notification>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = RecordingSink { log: log.clone() };
        let clock = FixedClock("2026-08-30T12:00:00Z".parse().unwrap());
        (AppState::new(Box::new(sink), Box::new(clock)), log)
    }

    fn fill_draft(state: &mut AppState, passenger: &str) {
        state.set_pickup_location("Station");
        state.set_dropoff_location("Airport");
        state.set_passenger_name(passenger);
        state.set_fare_amount("45.00");
    }

    #[test]
    fn registering_a_ride_returns_home_and_notifies() {
        let (mut state, log) = test_state();
        state.open_screen(Screen::RegisterRide);
        fill_draft(&mut state, "Ana");
        assert!(state.submit_ride());
        assert_eq!(state.navigator().screen(), Screen::Home);
        assert_eq!(state.registry().len(), 1);
        let log = log.borrow();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].kind, NotificationKind::Success);
    }

    #[test]
    fn submit_off_the_register_screen_is_ignored() {
        let (mut state, log) = test_state();
        fill_draft(&mut state, "Ana");
        assert!(!state.submit_ride());
        assert!(state.registry().is_empty());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn empty_passenger_raises_error_and_changes_nothing() {
        let (mut state, log) = test_state();
        state.open_screen(Screen::RegisterRide);
        fill_draft(&mut state, "");
        assert!(!state.submit_ride());
        assert!(state.registry().is_empty());
        // Still on the register screen with the draft intact.
        assert_eq!(state.navigator().screen(), Screen::RegisterRide);
        assert_eq!(state.draft().pickup_location, "Station");
        let log = log.borrow();
        assert_eq!(log[0].kind, NotificationKind::Error);
        assert_eq!(log[0].message, "All fields are required");
    }

    #[test]
    fn edit_then_resubmit_updates_the_loaded_record() {
        let (mut state, _log) = test_state();
        for passenger in ["Ana", "Bia"] {
            state.open_screen(Screen::RegisterRide);
            fill_draft(&mut state, passenger);
            state.submit_ride();
        }
        state.open_screen(Screen::RideRecords);
        assert!(state.edit_ride(1));
        state.go_home();
        // Entering the register screen must not reset the loaded draft.
        state.open_screen(Screen::RegisterRide);
        assert_eq!(state.draft().passenger_name, "Ana");
        state.set_fare_amount("99.00");
        assert!(state.submit_ride());
        assert_eq!(state.registry().ride(1).unwrap().fare_amount, "99.00");
        assert_eq!(state.registry().ride(2).unwrap().passenger_name, "Bia");
    }

    #[test]
    fn delete_notifies_success_even_for_unknown_id() {
        let (mut state, log) = test_state();
        state.open_screen(Screen::RideRecords);
        assert!(state.delete_ride(42));
        assert_eq!(log.borrow()[0].kind, NotificationKind::Success);
    }

    #[test]
    fn filter_selection_shapes_the_visible_view() {
        let (mut state, _log) = test_state();
        for (passenger, method) in [
            ("Ana", PaymentMethod::Cash),
            ("Bia", PaymentMethod::Pix),
            ("Caio", PaymentMethod::Cash),
        ] {
            state.open_screen(Screen::RegisterRide);
            fill_draft(&mut state, passenger);
            state.set_payment_method(method);
            state.submit_ride();
        }
        state.set_payment_filter(Some(PaymentMethod::Pix));
        let view = state.visible_rides();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].passenger_name, "Bia");

        state.set_payment_filter(None);
        state.set_sort_order(SortOrder::OldestFirst);
        let ids: Vec<u64> = state.visible_rides().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn profile_save_requires_open_editor_and_full_fields() {
        let (mut state, log) = test_state();
        assert!(!state.save_driver_info());
        state.open_screen(Screen::Driver);
        assert!(state.open_driver_editor());
        state.set_driver_name("");
        assert!(!state.save_driver_info());
        assert_eq!(state.profile().full_name, "João Silva");
        assert!(state.navigator().driver_editor_open());
        assert_eq!(log.borrow()[0].kind, NotificationKind::Error);

        state.set_driver_name("Maria Souza");
        assert!(state.save_driver_info());
        assert_eq!(state.profile().full_name, "Maria Souza");
        assert!(!state.navigator().driver_editor_open());
    }

    #[test]
    fn cancelled_image_pick_keeps_prior_reference() {
        let (mut state, _log) = test_state();
        state.open_screen(Screen::Driver);
        state.open_driver_editor();
        let mut picker = ScriptedPicker(Some(ImageRef::new("file:///qr.png")));
        state.pick_qr_code(&mut picker);
        state.save_driver_info();

        state.open_driver_editor();
        let mut cancelled = ScriptedPicker(None);
        state.pick_qr_code(&mut cancelled);
        state.save_driver_info();
        assert_eq!(state.profile().qr_code, Some(ImageRef::new("file:///qr.png")));
    }

    #[test]
    fn cancel_discards_profile_edits() {
        let (mut state, _log) = test_state();
        state.open_screen(Screen::Driver);
        state.open_driver_editor();
        state.set_driver_pix_key("other@example.com");
        state.cancel_driver_editor();
        assert_eq!(state.profile().pix_key, "joao.silva@example.com");
    }
}
